//! Gifsheet turns an animated image into a single spritesheet raster plus a
//! JSON frame atlas.
//!
//! The input is a sequence of already-decoded frames (pixel patch, intrinsic
//! size, canvas offset, display duration); GIF bitstream decoding itself is an
//! external collaborator and only touched at the adapter boundary.
//!
//! # Pipeline overview
//!
//! 1. **Adapt**: decoder output -> ordered canonical [`Frame`] sequence
//! 2. **Solve**: `&[Frame] + LayoutConfig -> SheetGeometry` (cell size, grid
//!    shape, canvas size — pure geometry)
//! 3. **Composite**: frames -> one transparent-initialized RGBA canvas, each
//!    patch pinned at its cell's top-left corner
//! 4. **Encode**: canvas -> lossless RGBA PNG bytes, plus the per-frame
//!    [`Placement`] atlas
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: [`build_sheet`] is a pure function of its inputs;
//!   repeated identical calls yield identical geometry and pixel content.
//! - **No IO in the engine**: file output and temp-file handles are explicit,
//!   caller-driven operations on the result.
//! - **No partial results**: every failure is a typed [`GifsheetError`]; either
//!   a complete, internally consistent [`SpriteSheet`] is produced or nothing.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod frame;
mod layout;
mod regen;
mod sheet;

pub use foundation::error::{GifsheetError, GifsheetResult};
pub use frame::adapt::{DecodedFrame, adapt, adapt_animation};
pub use frame::model::{Frame, remove_frame};
pub use layout::solver::{LayoutConfig, SheetGeometry, SheetMode, resolve_geometry};
pub use regen::Coalescer;
pub use sheet::atlas::{Atlas, AtlasFrame, AtlasMeta, AtlasSize};
pub use sheet::builder::{Placement, SpriteSheet, build_sheet};
pub use sheet::composite::composite_frames;
pub use sheet::encode::{SheetHandle, encode_png};
