//! 2D size type for dimensions

use serde::{Deserialize, Serialize};
use super::Vec2;

/// 2D size for width and height
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert to Vec2
    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Check if size is zero or negative
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Component-wise maximum, used to enforce a minimum size
    #[inline]
    pub fn at_least(self, min: Size) -> Self {
        Self::new(self.width.max(min.width), self.height.max(min.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_as_vec2() {
        let s = Size::new(100.0, 200.0);
        let v = s.as_vec2();
        assert!((v.x - 100.0).abs() < 0.001);
        assert!((v.y - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_size_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(-1.0, 10.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn test_size_at_least() {
        let s = Size::new(100.0, 500.0).at_least(Size::new(250.0, 250.0));
        assert!((s.width - 250.0).abs() < 0.001);
        assert!((s.height - 500.0).abs() < 0.001);
    }
}
