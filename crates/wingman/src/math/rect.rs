//! Axis-aligned rectangle type

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Zero rectangle at origin
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create from position and size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Get position (top-left corner)
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get size
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Translate rectangle by offset
    #[inline]
    pub fn translate(&self, offset: Vec2) -> Rect {
        Rect::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Top-left position that centers `size` inside this rectangle,
    /// rounded to whole pixels
    pub fn center_of(&self, size: Size) -> Vec2 {
        let free = self.size().as_vec2() - size.as_vec2();
        (self.position() + free / 2.0).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_position_size() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.position(), Vec2::new(10.0, 20.0));
        assert_eq!(r.size(), Size::new(100.0, 50.0));
        assert!((r.bottom() - 70.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_translate() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0).translate(Vec2::new(5.0, -5.0));
        assert_eq!(r, Rect::new(15.0, 15.0, 100.0, 50.0));
    }

    #[test]
    fn test_rect_center_of() {
        let container = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let pos = container.center_of(Size::new(700.0, 500.0));
        assert_eq!(pos, Vec2::new(150.0, 150.0));

        let offset = Rect::new(20.0, 40.0, 101.0, 101.0);
        let pos = offset.center_of(Size::new(50.0, 50.0));
        assert_eq!(pos, Vec2::new(46.0, 66.0));
    }
}
