//! Feed client - fetches the latest record for a topic.
//!
//! One GET against the public feed endpoint, no retries, no caching. The
//! topic travels as a percent-encoded path segment so reserved characters
//! cannot break the request.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;
use tracing::{debug, warn};

use crate::record::FeedRecord;

/// Public endpoint serving "latest dweet under a topic".
pub const DEFAULT_BASE_URL: &str = "http://dweet.me:3333/get/latest/yoink/from/";

/// Transport timeout for the single GET.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Feed client errors
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Feed reported no record for the topic")]
    Failed,
}

/// HTTP client for the feed service.
pub struct FeedClient {
    http: reqwest::Client,
    base_url: Url,
}

impl FeedClient {
    /// Create a client against the public endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a specific endpoint.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid feed base URL: {}", base_url))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("dweetctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, base_url })
    }

    /// Fetch the latest record for a topic.
    ///
    /// `Network` covers transport failures, `Parse` bodies that do not
    /// decode as a record, `Failed` well-formed bodies without the success
    /// indicator (positive numeric id plus content object).
    pub async fn fetch_latest(&self, topic: &str) -> Result<FeedRecord, FetchError> {
        let url = self.topic_url(topic)?;
        debug!("Fetching latest dweet: {}", url);

        let resp = self.http.get(url).send().await.map_err(|e| {
            warn!("Feed request failed: {}", e);
            FetchError::Network(e.to_string())
        })?;

        let record: FeedRecord = resp.json().await.map_err(|e| {
            warn!("Feed response did not parse: {}", e);
            FetchError::Parse(e.to_string())
        })?;

        if !record.is_success() {
            debug!("Feed answered without a usable record");
            return Err(FetchError::Failed);
        }

        Ok(record)
    }

    /// URL for the latest record under a topic.
    fn topic_url(&self, topic: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Network("feed base URL cannot carry a topic".to_string()))?
            .pop_if_empty()
            .push(topic);
        Ok(url)
    }
}
