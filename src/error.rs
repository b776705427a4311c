use std::io;
use thiserror::Error;

/// Errors surfaced by the heatmap pipeline.
#[derive(Debug, Error)]
pub enum HeatmapError {
    /// Transport-level failure talking to the data endpoint.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The endpoint answered with something that is not a row array.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The row set has no rows (or rows with zero-length embeddings),
    /// so there is no grid to derive.
    #[error("dataset is empty")]
    EmptyDataset,
    /// Embedding lengths differ across rows.
    #[error("row {row} has {actual} embedding values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// Configuration is inconsistent (bad base URL, zero timeout, ...).
    #[error("invalid heatmap config: {0}")]
    InvalidConfig(String),
    /// The YAML config file could not be parsed.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
    /// A request URL could not be built.
    #[error("invalid url: {0}")]
    Url(String),
    /// Filesystem failures (config file, frame output).
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
