use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The three ledger event families surfaced in a feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Fungible token transfer events
    #[serde(rename = "FT")]
    Fungible,
    /// Non-fungible token events
    #[serde(rename = "NFT")]
    NonFungible,
    /// Native STX token events
    #[serde(rename = "STX")]
    Native,
}

/// A ledger-level log entry associated with a transaction by hash.
///
/// Events are fetched, never owned; the relation to their transaction is a
/// foreign lookup. `asset_identifier` is null for native-token events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_type: EventKind,
    pub block_height: u64,
    pub asset_identifier: Option<String>,
    pub tx_hash: String,
    pub asset_event_type: Option<String>,
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub value: Option<Value>,
}
