//! Deterministic in-memory row source for tests and demos.
//!
//! Mirrors the data endpoint's variant behavior: the `sorted` flag
//! sorts each embedding ascending, the `normalized` flag rescales each
//! column to its own [0, 1] min/max range.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::HeatmapError;
use crate::options::DataKey;
use crate::source::RowSource;
use crate::types::EmbeddingRow;

pub struct StubRowSource {
    rows: Vec<EmbeddingRow>,
    fetches: AtomicUsize,
}

impl StubRowSource {
    pub fn new(rows: Vec<EmbeddingRow>) -> Self {
        Self {
            rows,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of fetches served so far, across all keys.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RowSource for StubRowSource {
    async fn fetch_rows(&self, key: &DataKey) -> Result<Vec<EmbeddingRow>, HeatmapError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.clone();
        if key.normalized {
            normalize_columns(&mut rows);
        }
        if key.sorted {
            for row in &mut rows {
                row.embedding.sort_by(f64::total_cmp);
            }
        }
        Ok(rows)
    }
}

/// Per-column min/max rescale; constant columns become all zeros.
fn normalize_columns(rows: &mut [EmbeddingRow]) {
    let columns = rows.first().map(|r| r.embedding.len()).unwrap_or(0);
    for c in 0..columns {
        let values: Vec<f64> = rows
            .iter()
            .filter_map(|row| row.embedding.get(c).copied())
            .collect();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        for row in rows.iter_mut() {
            if let Some(value) = row.embedding.get_mut(c) {
                *value = if max > min { (*value - min) / (max - min) } else { 0.0 };
            }
        }
    }
}
