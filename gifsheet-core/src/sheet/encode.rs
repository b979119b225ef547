use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::foundation::error::{GifsheetError, GifsheetResult};

/// Encode the composite canvas as lossless, alpha-preserving RGBA PNG bytes.
///
/// Anything lossy here would silently corrupt the transparent cell remainders
/// the layout relies on, so PNG/RGBA8 is the only encoding offered.
pub fn encode_png(canvas: &RgbaImage) -> GifsheetResult<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoder = PngEncoder::new(&mut bytes);
    encoder
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| GifsheetError::render_surface(format!("png encode failed: {e}")))?;
    Ok(bytes)
}

static HANDLE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Dereferenceable handle to an encoded sheet persisted as a temp file.
///
/// The file is removed when the handle drops, so superseded results release
/// their raster on every exit path. Call [`SheetHandle::persist`] to keep the
/// file and give up the handle.
#[derive(Debug)]
pub struct SheetHandle {
    path: PathBuf,
    keep: bool,
}

impl SheetHandle {
    pub(crate) fn create(png: &[u8]) -> GifsheetResult<Self> {
        let seq = HANDLE_SEQ.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "gifsheet_sheet_{}_{seq}.png",
            std::process::id()
        ));
        std::fs::write(&path, png).map_err(|e| {
            GifsheetError::render_surface(format!(
                "write sheet temp file '{}': {e}",
                path.display()
            ))
        })?;
        Ok(Self { path, keep: false })
    }

    /// Path of the persisted raster while this handle is alive.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keep the file on disk and return its path, consuming the handle.
    pub fn persist(mut self) -> PathBuf {
        self.keep = true;
        self.path.clone()
    }
}

impl Drop for SheetHandle {
    fn drop(&mut self) {
        if !self.keep {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sheet/encode.rs"]
mod tests;
