//! Feed record model.
//!
//! The shape the feed service returns for "latest dweet under a topic".
//! Untrusted input: every field is optional at the serde layer and the
//! success policy is enforced explicitly, not by deserialization failure.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Latest record under a topic, as returned by the feed service.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedRecord {
    /// Record id. The service uses a positive number to signal success;
    /// anything else (absent, null, zero, string) means no usable record.
    #[serde(default)]
    pub id: Value,

    /// Topic the record was actually published under.
    #[serde(default)]
    pub topic: Option<String>,

    /// Publish time, epoch milliseconds.
    #[serde(default)]
    pub timestamp: Option<i64>,

    /// Arbitrary key/value payload of the dweet.
    #[serde(default)]
    pub content: Option<Map<String, Value>>,
}

impl FeedRecord {
    /// Whether the record carries the service's success indicator:
    /// a positive numeric id and a content object.
    pub fn is_success(&self) -> bool {
        let id_positive = match &self.id {
            Value::Number(n) => {
                n.as_i64().map(|v| v > 0).unwrap_or(false)
                    || n.as_f64().map(|v| v > 0.0).unwrap_or(false)
            }
            _ => false,
        };

        id_positive && self.content.is_some()
    }

    /// Look up a content value by key.
    pub fn content_value(&self, key: &str) -> Option<&Value> {
        self.content.as_ref().and_then(|content| content.get(key))
    }
}

/// Canonical display text for a content value.
///
/// Strings render without quotes; numbers, booleans and null in their JSON
/// text form; arrays and objects as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
