//! Resize handles

use serde::{Deserialize, Serialize};

/// Edge or corner a resize gesture was started from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    /// Right edge, width only
    East,
    /// Bottom edge, height only
    South,
    /// Bottom-right corner, both axes
    SouthEast,
}

impl ResizeHandle {
    /// All handles, in the order they are built
    pub const ALL: [ResizeHandle; 3] = [Self::East, Self::South, Self::SouthEast];

    #[inline]
    pub fn affects_width(&self) -> bool {
        matches!(self, Self::East | Self::SouthEast)
    }

    #[inline]
    pub fn affects_height(&self) -> bool {
        matches!(self, Self::South | Self::SouthEast)
    }

    /// Class token of the handle element
    pub fn class_token(&self) -> &'static str {
        match self {
            Self::East => "wingman-resizer-ew",
            Self::South => "wingman-resizer-ns",
            Self::SouthEast => "wingman-resizer-se",
        }
    }

    /// CSS cursor for the handle
    pub fn cursor(&self) -> &'static str {
        match self {
            Self::East => "ew-resize",
            Self::South => "ns-resize",
            Self::SouthEast => "nwse-resize",
        }
    }
}
