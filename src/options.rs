//! Display options, cache keys, and page-state parsing.

use percent_encoding::percent_decode_str;

/// Dataset used when the page query names none.
pub const DEFAULT_DATASET: &str = "cats";

/// The two UI toggles controlling which dataset variant is requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub sorted: bool,
    pub normalized: bool,
}

/// Composite key identifying one fetched dataset variant. Equal keys
/// are served from the session cache without another request.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct DataKey {
    pub dataset: String,
    pub sorted: bool,
    pub normalized: bool,
}

impl DataKey {
    pub fn new(dataset: impl Into<String>, options: DisplayOptions) -> Self {
        Self {
            dataset: dataset.into(),
            sorted: options.sorted,
            normalized: options.normalized,
        }
    }
}

/// Pulls the `dataset` parameter out of a page query string such as
/// `?dataset=dogs&x=1`, percent-decoded. Missing or empty values fall
/// back to [`DEFAULT_DATASET`].
pub fn dataset_from_query(query: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    for item in query.split('&') {
        let mut parts = item.splitn(2, '=');
        if parts.next() != Some("dataset") {
            continue;
        }
        if let Some(value) = parts.next() {
            let decoded = percent_decode_str(value).decode_utf8_lossy();
            if !decoded.is_empty() {
                return decoded.into_owned();
            }
        }
    }
    DEFAULT_DATASET.to_string()
}

/// Capitalized dataset name for the on-page label. The raw name stays
/// case-sensitive everywhere else.
pub fn display_label(dataset: &str) -> String {
    let mut chars = dataset.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
