//! Frame Model Adapter: normalizes externally-decoded animation frames into
//! the canonical [`Frame`] representation the layout engine consumes.
//!
//! No decoding logic and no pixel transformation happens here; this is a
//! type-normalization boundary so the engine never depends on a decoder's
//! native representation.

use std::sync::Arc;

use crate::foundation::error::{GifsheetError, GifsheetResult};
use crate::frame::model::Frame;

/// Decoder-facing input shape: one decoded step of a source animation.
#[derive(Clone, Debug)]
pub struct DecodedFrame {
    /// RGBA8888 pixel patch, row-major, tightly packed.
    pub rgba8: Vec<u8>,
    /// Patch width in pixels.
    pub width: u32,
    /// Patch height in pixels.
    pub height: u32,
    /// Patch position within the animation's logical canvas.
    pub offset_left: u32,
    /// See [`DecodedFrame::offset_left`].
    pub offset_top: u32,
    /// Display duration in milliseconds.
    pub duration_ms: u32,
}

/// Normalize decoded steps into canonical frames, indices assigned by
/// position (0, 1, 2, ...) in decode order.
///
/// An empty input yields an empty sequence, which is a legitimate value at
/// this layer; the layout engine is the one that rejects it.
pub fn adapt(decoded: Vec<DecodedFrame>) -> GifsheetResult<Vec<Frame>> {
    let mut frames = Vec::with_capacity(decoded.len());
    for (idx, step) in decoded.into_iter().enumerate() {
        frames.push(Frame::new(
            idx as u32,
            Arc::new(step.rgba8),
            step.width,
            step.height,
            step.offset_left,
            step.offset_top,
            step.duration_ms,
        )?);
    }
    Ok(frames)
}

/// Normalize the `image` crate's animation-frame stream into canonical
/// frames.
///
/// This is the only place the core touches the decoder collaborator's native
/// types. Per-frame decoder failures surface as [`GifsheetError::Decode`],
/// unchanged in meaning; no partial sequence is returned.
pub fn adapt_animation(frames: image::Frames<'_>) -> GifsheetResult<Vec<Frame>> {
    let mut out = Vec::new();
    for (idx, item) in frames.enumerate() {
        let decoded =
            item.map_err(|e| GifsheetError::decode(format!("animation frame {idx}: {e}")))?;
        let duration_ms = delay_to_ms(decoded.delay());
        let (offset_left, offset_top) = (decoded.left(), decoded.top());
        let buffer = decoded.into_buffer();
        let (width, height) = buffer.dimensions();
        out.push(Frame::new(
            idx as u32,
            Arc::new(buffer.into_raw()),
            width,
            height,
            offset_left,
            offset_top,
            duration_ms,
        )?);
    }
    Ok(out)
}

/// Round an [`image::Delay`] to whole milliseconds.
fn delay_to_ms(delay: image::Delay) -> u32 {
    let (num, den) = delay.numer_denom_ms();
    if den == 0 {
        return num;
    }
    ((u64::from(num) + u64::from(den) / 2) / u64::from(den)) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/frame/adapt.rs"]
mod tests;
