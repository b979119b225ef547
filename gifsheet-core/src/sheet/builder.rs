use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::GifsheetResult;
use crate::frame::model::Frame;
use crate::layout::solver::{LayoutConfig, resolve_geometry};
use crate::sheet::atlas::Atlas;
use crate::sheet::composite::composite_frames;
use crate::sheet::encode::{SheetHandle, encode_png};

/// The rectangle (position + intrinsic size) at which a frame was drawn, plus
/// its display duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    /// Cell origin x (top-left pixel of this frame's cell).
    pub x: u32,
    /// Cell origin y.
    pub y: u32,
    /// The frame's own intrinsic width, not the cell width.
    pub w: u32,
    /// The frame's own intrinsic height.
    pub h: u32,
    /// Display duration carried over from the frame, in milliseconds.
    pub duration_ms: u32,
}

/// A finished spritesheet: encoded raster plus the frame atlas data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteSheet {
    /// Composite canvas width in pixels.
    pub width: u32,
    /// Composite canvas height in pixels.
    pub height: u32,
    /// Lossless RGBA PNG bytes of the composite canvas.
    pub png: Vec<u8>,
    /// One placement per input frame, corresponding by sequence position.
    pub placements: Vec<Placement>,
}

impl SpriteSheet {
    /// Build the atlas for this sheet, naming its companion raster file.
    pub fn atlas(&self, image_name: &str) -> Atlas {
        Atlas::new(image_name, self)
    }

    /// Write the encoded raster to `path`.
    pub fn write_png(&self, path: &Path) -> GifsheetResult<()> {
        std::fs::write(path, &self.png)
            .with_context(|| format!("write sheet '{}'", path.display()))?;
        Ok(())
    }

    /// Persist the raster to a temp file and return a handle that deletes it
    /// on drop. Mint a fresh handle per invocation and let superseded ones
    /// drop, so repeated regeneration cannot accumulate rasters.
    pub fn write_temp(&self) -> GifsheetResult<SheetHandle> {
        SheetHandle::create(&self.png)
    }
}

/// Lay out and composite a frame sequence into a spritesheet.
///
/// Pure function of its inputs: no state is carried between invocations, and
/// identical inputs produce identical geometry, placements, and pixel
/// content. Fails with [`EmptyInput`](crate::GifsheetError::EmptyInput) when
/// `frames` is empty; `config` is assumed already normalized to its stated
/// invariants by the caller-facing layer.
#[tracing::instrument(skip(frames), fields(frame_count = frames.len()))]
pub fn build_sheet(frames: &[Frame], config: &LayoutConfig) -> GifsheetResult<SpriteSheet> {
    let geometry = resolve_geometry(frames, config)?;
    let canvas = composite_frames(frames, &geometry)?;

    let placements = frames
        .iter()
        .enumerate()
        .map(|(pos, frame)| {
            let (x, y) = geometry.cell_origin(pos);
            Placement {
                x,
                y,
                w: frame.width,
                h: frame.height,
                duration_ms: frame.duration_ms,
            }
        })
        .collect();

    let png = encode_png(&canvas)?;
    Ok(SpriteSheet {
        width: geometry.width,
        height: geometry.height,
        png,
        placements,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/sheet/builder.rs"]
mod tests;
