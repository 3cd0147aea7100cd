//! View-model construction.
//!
//! Folds the resolved parameters and the fetch outcome into one of five
//! terminal states. Pure and stateless; presentation belongs to the
//! renderer.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use crate::client::FetchError;
use crate::params::WidgetParams;
use crate::record::{display_value, FeedRecord};

/// Result of one widget run, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewModel {
    /// The requested key was found under the requested topic.
    Success {
        topic: String,
        key: String,
        value: String,
        timestamp: DateTime<Utc>,
    },

    /// The record exists but carries no such content key.
    KeyMissing { key: String },

    /// The service answered with a record for a different topic.
    TopicMismatch { topic: String },

    /// The service answered but reported no usable record.
    FetchFailed,

    /// The request itself failed (transport or malformed body).
    NetworkError { message: String },
}

/// Build the view model for one run.
///
/// Topic equality is checked here because the service is known to fall back
/// to the most recent record across all topics when the requested one has
/// expired.
pub fn build_view(params: &WidgetParams, fetched: Result<FeedRecord, FetchError>) -> ViewModel {
    let record = match fetched {
        Ok(record) => record,
        Err(FetchError::Failed) => return ViewModel::FetchFailed,
        Err(FetchError::Network(message)) | Err(FetchError::Parse(message)) => {
            return ViewModel::NetworkError { message }
        }
    };

    if record.topic.as_deref() != Some(params.topic.as_str()) {
        return ViewModel::TopicMismatch {
            topic: params.topic.clone(),
        };
    }

    // Feed timestamps are epoch milliseconds; a record without a
    // representable publish time counts as no record at all.
    let timestamp = match record
        .timestamp
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    {
        Some(ts) => ts,
        None => return ViewModel::FetchFailed,
    };

    match record.content_value(&params.key) {
        Some(value) => ViewModel::Success {
            topic: params.topic.clone(),
            key: params.key.clone(),
            value: display_value(value),
            timestamp,
        },
        None => ViewModel::KeyMissing {
            key: params.key.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(topic: &str, key: &str) -> WidgetParams {
        WidgetParams {
            topic: topic.to_string(),
            key: key.to_string(),
        }
    }

    fn record(raw: serde_json::Value) -> FeedRecord {
        serde_json::from_value(raw).expect("record should deserialize")
    }

    fn good_record() -> FeedRecord {
        record(json!({
            "id": 5,
            "topic": "t",
            "timestamp": 1_700_000_000_000i64,
            "content": {"status": "OK", "count": 17}
        }))
    }

    #[test]
    fn matching_topic_and_key_yields_success() {
        let view = build_view(&params("t", "status"), Ok(good_record()));
        assert_eq!(
            view,
            ViewModel::Success {
                topic: "t".to_string(),
                key: "status".to_string(),
                value: "OK".to_string(),
                timestamp: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            }
        );
    }

    #[test]
    fn numeric_payloads_are_stringified() {
        let view = build_view(&params("t", "count"), Ok(good_record()));
        match view {
            ViewModel::Success { value, .. } => assert_eq!(value, "17"),
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn absent_key_yields_key_missing() {
        let view = build_view(&params("t", "missing"), Ok(good_record()));
        assert_eq!(
            view,
            ViewModel::KeyMissing {
                key: "missing".to_string()
            }
        );
    }

    #[test]
    fn other_topic_yields_topic_mismatch() {
        let mut rec = good_record();
        rec.topic = Some("other".to_string());
        let view = build_view(&params("t", "status"), Ok(rec));
        assert_eq!(
            view,
            ViewModel::TopicMismatch {
                topic: "t".to_string()
            }
        );
    }

    #[test]
    fn mismatch_is_checked_before_key_lookup() {
        let mut rec = good_record();
        rec.topic = Some("other".to_string());
        let view = build_view(&params("t", "missing"), Ok(rec));
        assert!(matches!(view, ViewModel::TopicMismatch { .. }));
    }

    #[test]
    fn failed_fetch_yields_fetch_failed() {
        let view = build_view(&params("t", "status"), Err(FetchError::Failed));
        assert_eq!(view, ViewModel::FetchFailed);
    }

    #[test]
    fn missing_timestamp_yields_fetch_failed() {
        let mut rec = good_record();
        rec.timestamp = None;
        let view = build_view(&params("t", "status"), Ok(rec));
        assert_eq!(view, ViewModel::FetchFailed);
    }

    #[test]
    fn network_error_preserves_the_message() {
        let view = build_view(
            &params("t", "status"),
            Err(FetchError::Network("connection refused".to_string())),
        );
        assert_eq!(
            view,
            ViewModel::NetworkError {
                message: "connection refused".to_string()
            }
        );
    }

    #[test]
    fn parse_error_surfaces_as_network_error() {
        let view = build_view(
            &params("t", "status"),
            Err(FetchError::Parse("expected value".to_string())),
        );
        assert!(matches!(view, ViewModel::NetworkError { .. }));
    }

    #[test]
    fn build_view_is_idempotent() {
        let first = build_view(&params("t", "status"), Ok(good_record()));
        let second = build_view(&params("t", "status"), Ok(good_record()));
        assert_eq!(first, second);
    }

    #[test]
    fn serialized_views_carry_a_kind_tag() {
        let success = serde_json::to_value(build_view(&params("t", "status"), Ok(good_record())))
            .expect("serializable");
        assert_eq!(success["kind"], "success");
        assert_eq!(success["value"], "OK");

        let failed = serde_json::to_value(ViewModel::FetchFailed).expect("serializable");
        assert_eq!(failed["kind"], "fetch_failed");

        let missing = serde_json::to_value(ViewModel::KeyMissing {
            key: "k".to_string(),
        })
        .expect("serializable");
        assert_eq!(missing["kind"], "key_missing");

        let mismatch = serde_json::to_value(ViewModel::TopicMismatch {
            topic: "t".to_string(),
        })
        .expect("serializable");
        assert_eq!(mismatch["kind"], "topic_mismatch");

        let network = serde_json::to_value(ViewModel::NetworkError {
            message: "m".to_string(),
        })
        .expect("serializable");
        assert_eq!(network["kind"], "network_error");
    }
}
