//! Embedding heatmap rendering.
//!
//! Fetches precomputed rows (image filename + embedding vector) from a
//! data endpoint, caches each (dataset, sorted, normalized) variant for
//! the session, paints the rows as a diverging red-blue pixel grid, and
//! drives a tooltip state machine from pointer events.
//!
//! The [`renderer::HeatmapRenderer`] owns all session state behind a
//! [`source::RowSource`] seam, so tests (and offline use) can swap the
//! HTTP client for the deterministic [`stub::StubRowSource`].

pub mod cache;
pub mod color;
pub mod config;
pub mod error;
pub mod options;
pub mod render;
pub mod renderer;
pub mod source;
pub mod stub;
pub mod tooltip;
pub mod types;

pub use cache::RowCache;
pub use color::DivergingScale;
pub use config::HeatmapConfig;
pub use error::HeatmapError;
pub use options::{DEFAULT_DATASET, DataKey, DisplayOptions, dataset_from_query, display_label};
pub use render::{cell_at, paint};
pub use renderer::{HeatmapRenderer, PointerEvent, RenderOutcome};
pub use source::{HttpRowSource, RowSource, image_ref};
pub use stub::StubRowSource;
pub use tooltip::{Tooltip, TooltipContent, TooltipState};
pub use types::{EmbeddingRow, GridDims, validate_rows};
