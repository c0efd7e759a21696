use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata for a token contract referenced by feed events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenProperties {
    pub contract_id: String,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}
