//! Gesture session state

use serde::{Deserialize, Serialize};
use crate::math::{Size, Vec2};
use super::ResizeHandle;

/// Kind of an active gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    Drag,
    Resize,
}

/// State held between pointer-down and pointer-up
#[derive(Clone, Debug, PartialEq)]
pub enum GestureSession {
    /// Moving the window; deltas are taken from the previous move
    Drag {
        /// Last pointer position seen
        last: Vec2,
    },
    /// Resizing the window; deltas are taken from the gesture start
    Resize {
        /// Which handle was grabbed
        handle: ResizeHandle,
        /// Pointer position at pointer-down
        start_pointer: Vec2,
        /// Window size at pointer-down
        start_size: Size,
    },
}

impl GestureSession {
    pub fn kind(&self) -> GestureKind {
        match self {
            Self::Drag { .. } => GestureKind::Drag,
            Self::Resize { .. } => GestureKind::Resize,
        }
    }

    #[inline]
    pub fn is_drag(&self) -> bool {
        matches!(self, Self::Drag { .. })
    }

    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, Self::Resize { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_session() {
        let session = GestureSession::Drag {
            last: Vec2::new(100.0, 100.0),
        };
        assert!(session.is_drag());
        assert!(!session.is_resize());
        assert_eq!(session.kind(), GestureKind::Drag);
    }

    #[test]
    fn test_resize_session() {
        let session = GestureSession::Resize {
            handle: ResizeHandle::SouthEast,
            start_pointer: Vec2::new(900.0, 700.0),
            start_size: Size::new(800.0, 600.0),
        };
        assert!(session.is_resize());
        assert_eq!(session.kind(), GestureKind::Resize);
    }
}
