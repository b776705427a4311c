//! YAML configuration for the heatmap client.
//!
//! All fields have serde defaults, so an empty document (or no file at
//! all) yields a working local setup:
//!
//! ```yaml
//! base_url: "http://localhost:8000"
//! dataset: "cats"
//! sorted: false
//! normalized: false
//! hide_delay_ms: 100
//! tooltip_offset_x: 10
//! tooltip_offset_y: 10
//! request_timeout_secs: 30
//! connect_timeout_secs: 10
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::HeatmapError;
use crate::options::{DEFAULT_DATASET, DisplayOptions};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapConfig {
    /// Base URL of the data endpoint host.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Dataset to render.
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// Request per-row sorted embeddings.
    #[serde(default)]
    pub sorted: bool,

    /// Request per-column min/max normalized embeddings.
    #[serde(default)]
    pub normalized: bool,

    /// Delay before a scheduled tooltip hide takes effect.
    #[serde(default = "default_hide_delay_ms")]
    pub hide_delay_ms: u64,

    /// Tooltip box offset from the pointer, in page pixels.
    #[serde(default = "default_tooltip_offset")]
    pub tooltip_offset_x: i32,
    #[serde(default = "default_tooltip_offset")]
    pub tooltip_offset_y: i32,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl HeatmapConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, HeatmapError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, HeatmapError> {
        let config: HeatmapConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HeatmapError> {
        if reqwest::Url::parse(&self.base_url).is_err() {
            return Err(HeatmapError::InvalidConfig(format!(
                "base_url must be an absolute url, got {:?}",
                self.base_url
            )));
        }
        if self.dataset.is_empty() {
            return Err(HeatmapError::InvalidConfig(
                "dataset must not be empty".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(HeatmapError::InvalidConfig(
                "request_timeout_secs must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The toggle state this configuration starts from.
    pub fn options(&self) -> DisplayOptions {
        DisplayOptions {
            sorted: self.sorted,
            normalized: self.normalized,
        }
    }
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            dataset: default_dataset(),
            sorted: false,
            normalized: false,
            hide_delay_ms: default_hide_delay_ms(),
            tooltip_offset_x: default_tooltip_offset(),
            tooltip_offset_y: default_tooltip_offset(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_dataset() -> String {
    DEFAULT_DATASET.to_string()
}
fn default_hide_delay_ms() -> u64 {
    100
}
fn default_tooltip_offset() -> i32 {
    10
}
fn default_request_timeout_secs() -> u64 {
    30
}
fn default_connect_timeout_secs() -> u64 {
    10
}
