use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A wide transaction record as returned by the backend.
///
/// Only the columns the engine itself reasons about are typed: the hash is
/// the join key for event attachment, the block height anchors pagination,
/// and the sender/recipient columns carry the address predicates. Every
/// other backend column is preserved as returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub tx_hash: String,
    #[serde(default)]
    pub block_height: Option<u64>,
    #[serde(default)]
    pub sender_address: Option<String>,
    #[serde(default)]
    pub token_transfer_recipient_address: Option<String>,
    #[serde(flatten)]
    pub columns: Map<String, Value>,
}
