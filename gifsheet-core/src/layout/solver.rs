use crate::foundation::error::{GifsheetError, GifsheetResult};
use crate::frame::model::Frame;

/// How frames are arranged on the composite canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetMode {
    /// One row, `frame_count` columns.
    Horizontal,
    /// One column, `frame_count` rows.
    Vertical,
    /// `columns` wide (auto `ceil(sqrt(n))` when unset), rows as needed.
    Grid,
}

/// Layout configuration for one engine invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LayoutConfig {
    /// Arrangement mode.
    pub mode: SheetMode,
    /// Uniform gap between adjacent cells in pixels, both axes. Inserted only
    /// between cells, never as an outer border.
    #[serde(default)]
    pub padding: u32,
    /// Column count, used only when `mode` is [`SheetMode::Grid`]; ignored
    /// otherwise. `None` selects `ceil(sqrt(frame_count))`. The caller-facing
    /// layer clamps explicit values to >= 1.
    #[serde(default)]
    pub columns: Option<u32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: SheetMode::Horizontal,
            padding: 0,
            columns: None,
        }
    }
}

/// Resolved sheet geometry: uniform cell size, grid shape, and total canvas
/// extent. Pure data; owns no pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SheetGeometry {
    /// Cell width: the maximum intrinsic frame width.
    pub cell_width: u32,
    /// Cell height: the maximum intrinsic frame height.
    pub cell_height: u32,
    /// Number of grid columns (>= 1).
    pub cols: u32,
    /// Number of grid rows (>= 1).
    pub rows: u32,
    /// Inter-cell gap carried over from the configuration.
    pub padding: u32,
    /// Total canvas width: `cols * cell_width + (cols - 1) * padding`.
    pub width: u32,
    /// Total canvas height: `rows * cell_height + (rows - 1) * padding`.
    pub height: u32,
}

impl SheetGeometry {
    /// Top-left pixel of the cell for the frame at sequence position `index`.
    pub fn cell_origin(&self, index: usize) -> (u32, u32) {
        let col = index as u64 % u64::from(self.cols);
        let row = index as u64 / u64::from(self.cols);
        let x = col * (u64::from(self.cell_width) + u64::from(self.padding));
        let y = row * (u64::from(self.cell_height) + u64::from(self.padding));
        // In-bounds by construction: any occupied cell origin is < width/height.
        (x as u32, y as u32)
    }
}

/// Compute the sheet geometry for a non-empty frame sequence.
///
/// Cells are sized to the largest patch so downstream animation players get
/// fixed-size, regularly spaced cells; smaller patches waste some cell space.
/// This is a uniform-grid policy, not bin-packing.
pub fn resolve_geometry(frames: &[Frame], config: &LayoutConfig) -> GifsheetResult<SheetGeometry> {
    if frames.is_empty() {
        return Err(GifsheetError::empty_input(
            "a spritesheet of zero frames has no canvas size",
        ));
    }

    let n = frames.len() as u32;
    let cell_width = frames.iter().map(|f| f.width).max().unwrap_or(1);
    let cell_height = frames.iter().map(|f| f.height).max().unwrap_or(1);

    let (cols, rows) = match config.mode {
        SheetMode::Horizontal => (n, 1),
        SheetMode::Vertical => (1, n),
        SheetMode::Grid => {
            let cols = config.columns.unwrap_or_else(|| auto_columns(n)).max(1);
            (cols, n.div_ceil(cols))
        }
    };

    let width = axis_extent(cols, cell_width, config.padding)?;
    let height = axis_extent(rows, cell_height, config.padding)?;

    tracing::debug!(cols, rows, cell_width, cell_height, width, height, "resolved sheet geometry");

    Ok(SheetGeometry {
        cell_width,
        cell_height,
        cols,
        rows,
        padding: config.padding,
        width,
        height,
    })
}

fn auto_columns(n: u32) -> u32 {
    (f64::from(n)).sqrt().ceil() as u32
}

fn axis_extent(cells: u32, cell_extent: u32, padding: u32) -> GifsheetResult<u32> {
    let total = u64::from(cells) * u64::from(cell_extent)
        + u64::from(cells.saturating_sub(1)) * u64::from(padding);
    u32::try_from(total)
        .map_err(|_| GifsheetError::render_surface("sheet canvas dimensions overflow u32"))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
