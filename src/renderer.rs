//! Heatmap orchestration: cache-or-fetch, request sequencing, toggle
//! handling, and pointer dispatch.

use std::sync::Arc;
use std::time::{Duration, Instant};

use image::RgbaImage;
use tracing::debug;

use crate::HeatmapError;
use crate::cache::RowCache;
use crate::color::DivergingScale;
use crate::config::HeatmapConfig;
use crate::options::{DataKey, DisplayOptions};
use crate::render::{cell_at, paint};
use crate::source::{RowSource, image_ref};
use crate::tooltip::{Tooltip, TooltipContent, TooltipState};
use crate::types::{EmbeddingRow, GridDims};

/// What a load produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Frame repainted; `from_cache` tells whether a fetch was avoided.
    Rendered { from_cache: bool },
    /// Response lost the token race: cached, not painted.
    Stale,
}

/// A pointer sample over the displayed grid.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    /// Position relative to the displayed grid, in display pixels.
    pub offset_x: f64,
    pub offset_y: f64,
    /// Page coordinates, used to place the tooltip box.
    pub page_x: i32,
    pub page_y: i32,
}

/// Owns the session cache, the current frame, the request token, and
/// the tooltip. One instance per hosting surface; [`Self::reset`]
/// returns it to construction-fresh state.
pub struct HeatmapRenderer<S> {
    source: S,
    dataset: String,
    options: DisplayOptions,
    scale: DivergingScale,
    cache: RowCache,
    epoch: u64,
    rows: Option<Arc<Vec<EmbeddingRow>>>,
    grid: Option<GridDims>,
    frame: Option<RgbaImage>,
    tooltip: Tooltip,
}

impl<S: RowSource> HeatmapRenderer<S> {
    pub fn new(source: S, config: &HeatmapConfig) -> Self {
        Self {
            source,
            dataset: config.dataset.clone(),
            options: config.options(),
            scale: DivergingScale::default(),
            cache: RowCache::new(),
            epoch: 0,
            rows: None,
            grid: None,
            frame: None,
            tooltip: Tooltip::new(
                Duration::from_millis(config.hide_delay_ms),
                (config.tooltip_offset_x, config.tooltip_offset_y),
            ),
        }
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    pub fn options(&self) -> DisplayOptions {
        self.options
    }

    /// The committed frame, if anything has rendered yet.
    pub fn frame(&self) -> Option<&RgbaImage> {
        self.frame.as_ref()
    }

    pub fn grid(&self) -> Option<GridDims> {
        self.grid
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Distinct (dataset, options) variants held in the session cache.
    pub fn cached_variants(&self) -> usize {
        self.cache.len()
    }

    fn key(&self) -> DataKey {
        DataKey::new(self.dataset.clone(), self.options)
    }

    /// Renders the current (dataset, options) selection: synchronously
    /// from cache when possible, otherwise via one fetch.
    pub async fn load_and_render(&mut self) -> Result<RenderOutcome, HeatmapError> {
        let key = self.key();
        if let Some(rows) = self.cache.get(&key) {
            debug!(?key, "cache hit");
            self.commit(rows)?;
            return Ok(RenderOutcome::Rendered { from_cache: true });
        }
        let token = self.begin_load();
        let rows = self.source.fetch_rows(&key).await?;
        self.apply_load(token, key, rows)
    }

    /// Claims a request token. Only the response carrying the latest
    /// token gets painted; see [`Self::apply_load`].
    pub fn begin_load(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }

    /// Stores a fetched row set and paints it, unless a newer load
    /// started after `token` was claimed. Stale rows still land in the
    /// cache under their key; only the paint is skipped.
    pub fn apply_load(
        &mut self,
        token: u64,
        key: DataKey,
        rows: Vec<EmbeddingRow>,
    ) -> Result<RenderOutcome, HeatmapError> {
        let rows = Arc::new(rows);
        self.cache.insert(key.clone(), rows.clone());
        if token != self.epoch {
            debug!(?key, token, latest = self.epoch, "stale response cached without painting");
            return Ok(RenderOutcome::Stale);
        }
        self.commit(rows)?;
        Ok(RenderOutcome::Rendered { from_cache: false })
    }

    fn commit(&mut self, rows: Arc<Vec<EmbeddingRow>>) -> Result<(), HeatmapError> {
        let frame = paint(&rows, &self.scale)?;
        self.grid = Some(GridDims {
            rows: frame.height() as usize,
            columns: frame.width() as usize,
        });
        self.frame = Some(frame);
        self.rows = Some(rows);
        Ok(())
    }

    /// Checkbox handler for the sort toggle.
    pub async fn set_sorted(&mut self, sorted: bool) -> Result<RenderOutcome, HeatmapError> {
        self.options.sorted = sorted;
        self.load_and_render().await
    }

    /// Checkbox handler for the normalize toggle.
    pub async fn set_normalized(&mut self, normalized: bool) -> Result<RenderOutcome, HeatmapError> {
        self.options.normalized = normalized;
        self.load_and_render().await
    }

    /// Switches dataset, keeping the session cache.
    pub async fn set_dataset(
        &mut self,
        dataset: impl Into<String> + Send,
    ) -> Result<RenderOutcome, HeatmapError> {
        self.dataset = dataset.into();
        self.load_and_render().await
    }

    /// Pointer moved over the displayed grid. In-bounds cells show the
    /// tooltip; out-of-bounds samples schedule the delayed hide.
    pub fn pointer_moved(
        &mut self,
        event: PointerEvent,
        display_width: f64,
        display_height: f64,
        now: Instant,
    ) -> TooltipState {
        let (Some(grid), Some(rows)) = (self.grid, self.rows.as_ref()) else {
            return self.tooltip.state();
        };
        match cell_at(
            event.offset_x,
            event.offset_y,
            display_width,
            display_height,
            grid,
        ) {
            Some((column, row)) => {
                let record = &rows[row];
                let content = TooltipContent::new(
                    row,
                    column,
                    record.embedding[column],
                    record.filename.clone(),
                    image_ref(&self.dataset, &record.filename),
                );
                self.tooltip.show(content, event.page_x, event.page_y);
            }
            None => self.tooltip.schedule_hide(now),
        }
        self.tooltip.state()
    }

    /// Pointer left the grid entirely.
    pub fn pointer_left(&mut self, now: Instant) {
        self.tooltip.schedule_hide(now);
    }

    /// Applies a due tooltip hide and reports the resulting state.
    pub fn tick(&mut self, now: Instant) -> TooltipState {
        self.tooltip.poll(now);
        self.tooltip.state()
    }

    /// Drops the cache, frame, and tooltip state.
    pub fn reset(&mut self) {
        self.cache.clear();
        self.rows = None;
        self.grid = None;
        self.frame = None;
        self.epoch = 0;
        self.tooltip.reset();
    }
}
