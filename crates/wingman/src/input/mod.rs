//! Pointer gestures
//!
//! Provides the gesture session state machine for drag/resize and the
//! resize arithmetic.

mod handle;
mod router;
mod session;
mod tracker;

pub use handle::ResizeHandle;
pub use router::InputRouter;
pub use session::{GestureKind, GestureSession};
pub use tracker::PointerTracker;

use crate::math::{Size, Vec2};

/// Size after a resize gesture has moved the pointer by `delta`
///
/// The candidate for each affected axis is `start + delta` (absolute from
/// the gesture start, so rounding does not accumulate). A candidate that is
/// NaN, infinite, zero or negative is rejected and the axis keeps its
/// `current` value; an accepted candidate is raised to `min`.
pub fn calculate_resize(
    handle: ResizeHandle,
    start_size: Size,
    current: Size,
    delta: Vec2,
    min: Size,
) -> Size {
    let width = if handle.affects_width() {
        resize_axis(start_size.width + delta.x, current.width, min.width)
    } else {
        current.width
    };
    let height = if handle.affects_height() {
        resize_axis(start_size.height + delta.y, current.height, min.height)
    } else {
        current.height
    };
    Size::new(width, height)
}

fn resize_axis(candidate: f32, previous: f32, min: f32) -> f32 {
    if !candidate.is_finite() || candidate <= 0.0 {
        previous
    } else {
        candidate.max(min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: Size = Size::new(400.0, 300.0);
    const MIN: Size = Size::new(100.0, 100.0);

    #[test]
    fn test_resize_south_east() {
        let size = calculate_resize(ResizeHandle::SouthEast, START, START, Vec2::new(50.0, -20.0), MIN);
        assert!((size.width - 450.0).abs() < 0.001);
        assert!((size.height - 280.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_east_keeps_height() {
        let current = Size::new(420.0, 310.0);
        let size = calculate_resize(ResizeHandle::East, START, current, Vec2::new(-50.0, 90.0), MIN);
        assert!((size.width - 350.0).abs() < 0.001);
        assert!((size.height - 310.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_south_keeps_width() {
        let size = calculate_resize(ResizeHandle::South, START, START, Vec2::new(70.0, 50.0), MIN);
        assert!((size.width - 400.0).abs() < 0.001);
        assert!((size.height - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_rejects_non_positive() {
        let current = Size::new(380.0, 290.0);
        let size = calculate_resize(ResizeHandle::SouthEast, START, current, Vec2::new(-400.0, -500.0), MIN);
        assert_eq!(size, current);
    }

    #[test]
    fn test_resize_rejects_nan() {
        let current = Size::new(380.0, 290.0);
        let size = calculate_resize(ResizeHandle::SouthEast, START, current, Vec2::new(f32::NAN, 10.0), MIN);
        assert!((size.width - 380.0).abs() < 0.001);
        assert!((size.height - 310.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let size = calculate_resize(ResizeHandle::SouthEast, START, START, Vec2::new(-350.0, -250.0), MIN);
        assert_eq!(size, MIN);
    }
}
