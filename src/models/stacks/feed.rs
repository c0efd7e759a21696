use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{Event, Transaction};

/// One feed row: a transaction together with its associated events.
///
/// The backend's left-join aggregate produces a null singleton for
/// transactions without events; decoding normalizes that to an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    #[serde(flatten)]
    pub transaction: Transaction,
    #[serde(default, deserialize_with = "events_from_aggregate")]
    pub events: Vec<Event>,
}

/// One bounded, time-ordered slice of aggregated activity.
///
/// Serializes as a bare JSON array, matching the response body the API layer
/// forwards to callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedPage {
    pub entries: Vec<FeedEntry>,
}

impl FeedPage {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decodes a `json_agg` event column: null, a null singleton, and elements
/// that are not event records all collapse to nothing.
fn events_from_aggregate<'de, D>(deserializer: D) -> Result<Vec<Event>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let items = match value {
        Some(Value::Array(items)) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .filter(|item| !item.is_null())
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
