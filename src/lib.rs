//! Whiteboard eraser: stamps erase blocks into a board texture from per-tick
//! contact samples, filling the gaps between fast-moving samples.

pub mod config;
pub mod draw;
pub mod error;
pub mod painter;
pub mod raycast;
pub mod surface;
pub mod types;

pub use config::{ConfigError, EraserConfig};
pub use error::Error;
pub use painter::StrokePainter;
pub use raycast::{BoardPlane, Tip};
pub use surface::{Surface, Whiteboard};
pub use types::{BlockOrigin, ContactSample, FrameBuffer, StrokePhase, StrokeState};
