use std::sync::Arc;

use crate::foundation::error::{GifsheetError, GifsheetResult};

/// One decoded still image from a source animation.
///
/// Frames are immutable once adapted: the layout engine only ever reads their
/// pixels. The sequence order is the source animation's temporal order and is
/// preserved through layout; callers may drop frames (see [`remove_frame`])
/// but never reorder them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Stable ordinal assigned at adaptation time (origin 0, decode order).
    pub index: u32,
    /// RGBA8888, row-major, tightly packed (`width * height * 4` bytes).
    pub rgba8: Arc<Vec<u8>>,
    /// Intrinsic patch width in pixels (> 0).
    pub width: u32,
    /// Intrinsic patch height in pixels (> 0).
    pub height: u32,
    /// Patch position within the original animation canvas. Informational
    /// only; compositing pins patches to cell corners instead.
    pub offset_left: u32,
    /// See [`Frame::offset_left`].
    pub offset_top: u32,
    /// Display time of this frame in its source animation, in milliseconds.
    pub duration_ms: u32,
}

impl Frame {
    /// Construct a validated frame.
    ///
    /// Fails with a validation error when either dimension is zero or the
    /// pixel buffer length does not match `width * height * 4`.
    pub fn new(
        index: u32,
        rgba8: Arc<Vec<u8>>,
        width: u32,
        height: u32,
        offset_left: u32,
        offset_top: u32,
        duration_ms: u32,
    ) -> GifsheetResult<Self> {
        if width == 0 || height == 0 {
            return Err(GifsheetError::validation(format!(
                "frame {index} dimensions must be > 0 (got {width}x{height})"
            )));
        }
        let expected = (width as usize) * (height as usize) * 4;
        if rgba8.len() != expected {
            return Err(GifsheetError::validation(format!(
                "frame {index} pixel buffer is {} bytes, expected {expected} for {width}x{height} rgba8",
                rgba8.len()
            )));
        }
        Ok(Self {
            index,
            rgba8,
            width,
            height,
            offset_left,
            offset_top,
            duration_ms,
        })
    }
}

/// Remove the frame at `ordinal` (current sequence position) and return it.
///
/// Indices stored on the remaining frames are NOT reassigned; the engine
/// operates purely on sequence position, so a regenerated sheet simply closes
/// the gap. Returns `None` when `ordinal` is out of range.
pub fn remove_frame(frames: &mut Vec<Frame>, ordinal: usize) -> Option<Frame> {
    if ordinal >= frames.len() {
        return None;
    }
    Some(frames.remove(ordinal))
}

#[cfg(test)]
#[path = "../../tests/unit/frame/model.rs"]
mod tests;
