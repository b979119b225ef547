use serde::{Deserialize, Serialize};

use crate::foundation::error::{GifsheetError, GifsheetResult};
use crate::sheet::builder::SpriteSheet;

/// The frame atlas consumed by external exporters: where each frame sits in
/// the composite raster and how long it displays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atlas {
    /// Sheet-level metadata.
    pub meta: AtlasMeta,
    /// One entry per input frame, in input order.
    pub frames: Vec<AtlasFrame>,
}

/// Sheet-level atlas metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasMeta {
    /// File name of the companion raster, e.g. `sheet.png`.
    pub image: String,
    /// Pixel format tag; always `RGBA8888`.
    pub format: String,
    /// Composite canvas dimensions.
    pub size: AtlasSize,
    /// Scale tag; always `"1"`.
    pub scale: String,
}

/// Canvas dimensions inside [`AtlasMeta`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasSize {
    /// Canvas width in pixels.
    pub w: u32,
    /// Canvas height in pixels.
    pub h: u32,
}

/// One frame's placement rectangle and timing.
///
/// `w`/`h` are the frame's intrinsic size, not the cell size, so a consumer
/// can crop exactly the drawn pixels without the transparent cell remainder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasFrame {
    /// Cell origin x.
    pub x: u32,
    /// Cell origin y.
    pub y: u32,
    /// Intrinsic frame width.
    pub w: u32,
    /// Intrinsic frame height.
    pub h: u32,
    /// Display duration in milliseconds.
    pub duration: u32,
}

impl Atlas {
    /// Build the atlas for a finished sheet, naming its companion raster.
    pub fn new(image_name: impl Into<String>, sheet: &SpriteSheet) -> Self {
        Self {
            meta: AtlasMeta {
                image: image_name.into(),
                format: "RGBA8888".to_string(),
                size: AtlasSize {
                    w: sheet.width,
                    h: sheet.height,
                },
                scale: "1".to_string(),
            },
            frames: sheet
                .placements
                .iter()
                .map(|p| AtlasFrame {
                    x: p.x,
                    y: p.y,
                    w: p.w,
                    h: p.h,
                    duration: p.duration_ms,
                })
                .collect(),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> GifsheetResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GifsheetError::serde(format!("atlas json serialize failed: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sheet/atlas.rs"]
mod tests;
