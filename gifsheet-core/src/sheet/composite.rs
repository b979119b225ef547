use image::RgbaImage;

use crate::foundation::error::{GifsheetError, GifsheetResult};
use crate::frame::model::Frame;
use crate::layout::solver::SheetGeometry;

/// Render every frame into one shared RGBA canvas at its computed cell
/// origin.
///
/// The canvas starts fully transparent; each patch is pinned to its cell's
/// top-left corner, unscaled and uncentered, so a frame smaller than the cell
/// leaves the remainder transparent. Cells are disjoint by grid arithmetic,
/// which makes render order invisible in the result.
pub fn composite_frames(frames: &[Frame], geometry: &SheetGeometry) -> GifsheetResult<RgbaImage> {
    let mut canvas = RgbaImage::new(geometry.width, geometry.height);
    for (pos, frame) in frames.iter().enumerate() {
        let (x, y) = geometry.cell_origin(pos);
        blit_patch(&mut canvas, frame, x, y)?;
    }
    Ok(canvas)
}

/// Copy a frame's patch into the canvas with its top-left pixel at `(x, y)`.
fn blit_patch(canvas: &mut RgbaImage, frame: &Frame, x: u32, y: u32) -> GifsheetResult<()> {
    let (canvas_w, canvas_h) = canvas.dimensions();
    if u64::from(x) + u64::from(frame.width) > u64::from(canvas_w)
        || u64::from(y) + u64::from(frame.height) > u64::from(canvas_h)
    {
        return Err(GifsheetError::render_surface(format!(
            "frame {} patch ({}x{} at {x},{y}) exceeds canvas {canvas_w}x{canvas_h}",
            frame.index, frame.width, frame.height
        )));
    }

    let src_stride = frame.width as usize * 4;
    let dst_stride = canvas_w as usize * 4;
    let dst: &mut [u8] = &mut **canvas;
    for (row, src_row) in frame.rgba8.chunks_exact(src_stride).enumerate() {
        let start = (y as usize + row) * dst_stride + x as usize * 4;
        dst[start..start + src_stride].copy_from_slice(src_row);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/sheet/composite.rs"]
mod tests;
