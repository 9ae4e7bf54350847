//! Geometry types for window placement
//!
//! All values are CSS pixels in the offset coordinate space of the
//! window's positioned parent.

mod vec2;
mod rect;
mod size;
mod style;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
