//! Latte-art paint engine.
//!
//! [`PaintSurface`] owns an RGBA8888 buffer and stamps opaque disks and
//! variable-width strokes into it. [`StrokeController`] turns pointer samples
//! into those calls, growing the brush the longer a pour lasts. The window
//! host in `main.rs` only copies [`PaintSurface::get_pixels`] to the screen.

pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod stroke;
pub mod surface;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use stroke::{FoamConfig, PointerTracker, StrokeController};
pub use surface::PaintSurface;
pub use types::{Color, FrameBuffer, PointerPhase, PointerSample};
