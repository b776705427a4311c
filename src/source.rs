//! Row sources: the trait seam plus the HTTP implementation talking to
//! the `/data` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, Url};
use tracing::debug;

use crate::HeatmapError;
use crate::config::HeatmapConfig;
use crate::options::DataKey;
use crate::types::EmbeddingRow;

/// Everything a path segment keeps unescaped.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Where row data comes from. The renderer only sees this seam, so
/// tests can swap the HTTP client for [`crate::stub::StubRowSource`].
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch_rows(&self, key: &DataKey) -> Result<Vec<EmbeddingRow>, HeatmapError>;
}

/// Relative thumbnail reference shown in the tooltip:
/// `/image/<dataset>/<filename>`, segments percent-encoded. Serving the
/// image (and hiding it on a 404) is the hosting page's job.
pub fn image_ref(dataset: &str, filename: &str) -> String {
    format!(
        "/image/{}/{}",
        utf8_percent_encode(dataset, SEGMENT),
        utf8_percent_encode(filename, SEGMENT)
    )
}

/// Fetches rows over HTTP with pooled connections and explicit
/// timeouts.
pub struct HttpRowSource {
    client: Client,
    base: Url,
}

impl HttpRowSource {
    pub fn new(config: &HeatmapConfig) -> Result<Self, HeatmapError> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| HeatmapError::Url(format!("{}: {e}", config.base_url)))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_max_idle_per_host(4)
            .build()?;
        Ok(Self { client, base })
    }

    /// `/data` URL for one cache key. The sorted/normalized flags are
    /// present iff set.
    pub fn data_url(&self, key: &DataKey) -> Result<Url, HeatmapError> {
        let mut url = self
            .base
            .join("data")
            .map_err(|e| HeatmapError::Url(e.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("dataset", &key.dataset);
            if key.sorted {
                pairs.append_pair("sorted", "1");
            }
            if key.normalized {
                pairs.append_pair("normalized", "1");
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl RowSource for HttpRowSource {
    async fn fetch_rows(&self, key: &DataKey) -> Result<Vec<EmbeddingRow>, HeatmapError> {
        let url = self.data_url(key)?;
        debug!(%url, "fetching rows");
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let rows: Vec<EmbeddingRow> = serde_json::from_str(&body)?;
        debug!(rows = rows.len(), dataset = %key.dataset, "rows received");
        Ok(rows)
    }
}
