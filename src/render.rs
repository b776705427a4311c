//! Pixel-grid painting and pointer-to-cell mapping.

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::HeatmapError;
use crate::color::DivergingScale;
use crate::types::{EmbeddingRow, GridDims, validate_rows};

/// Paints the full row set into an RGBA frame: one pixel per embedding
/// value at (column, row), committed as a single buffer. Rejects empty
/// or ragged row sets.
pub fn paint(rows: &[EmbeddingRow], scale: &DivergingScale) -> Result<RgbaImage, HeatmapError> {
    let dims = validate_rows(rows)?;
    let mut frame = RgbaImage::new(dims.columns as u32, dims.rows as u32);
    for (r, row) in rows.iter().enumerate() {
        for (c, &value) in row.embedding.iter().enumerate() {
            frame.put_pixel(c as u32, r as u32, Rgba(scale.rgba(value)));
        }
    }
    debug!(rows = dims.rows, columns = dims.columns, "painted frame");
    Ok(frame)
}

/// Maps a pointer position over the displayed grid back to integer cell
/// coordinates, accounting for grid-to-display scaling:
/// `cell_x = floor(pointer_x * columns / display_width)`, same for y.
/// Returns `None` outside `[0, columns) x [0, rows)`.
pub fn cell_at(
    pointer_x: f64,
    pointer_y: f64,
    display_width: f64,
    display_height: f64,
    grid: GridDims,
) -> Option<(usize, usize)> {
    if display_width <= 0.0 || display_height <= 0.0 {
        return None;
    }
    let x = (pointer_x * grid.columns as f64 / display_width).floor();
    let y = (pointer_y * grid.rows as f64 / display_height).floor();
    if x < 0.0 || y < 0.0 || x >= grid.columns as f64 || y >= grid.rows as f64 {
        return None;
    }
    Some((x as usize, y as usize))
}
