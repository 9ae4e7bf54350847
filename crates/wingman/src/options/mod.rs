//! Window options
//!
//! Options arrive loosely typed (a JS object or any JSON value) and are
//! resolved field by field. A missing or invalid field falls back to its
//! default and yields a [`ValidationWarning`]; resolution itself never fails.

mod resolve;
mod shadow;

pub use resolve::{Resolved, ValidationIssue, ValidationWarning};
pub use shadow::ShadowMode;

use crate::math::Size;

/// Default window size
pub const DEFAULT_SIZE: Size = Size::new(700.0, 500.0);

/// Default minimum window size
pub const DEFAULT_MIN_SIZE: Size = Size::new(250.0, 250.0);

/// Default window title
pub const DEFAULT_TITLE: &str = "New window";

/// Which control buttons the header shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonOptions {
    pub min: bool,
    pub max: bool,
    pub exit: bool,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            min: true,
            max: true,
            exit: true,
        }
    }
}

impl ButtonOptions {
    /// Whether any control button is enabled
    #[inline]
    pub fn any(&self) -> bool {
        self.min || self.max || self.exit
    }
}

/// Fully resolved options for one window
#[derive(Clone, Debug, PartialEq)]
pub struct WindowOptions {
    /// Initial size
    pub size: Size,
    /// Minimum size in normal mode
    pub min_size: Size,
    /// Whether the title bar starts a drag
    pub draggable: bool,
    /// Whether resize handles are built
    pub resizable: bool,
    /// Whether the window starts centered in its container
    pub centered: bool,
    /// Dark or light theme token
    pub dark_mode: bool,
    /// When the drop shadow is shown
    pub shadow: ShadowMode,
    /// Header title text
    pub title: String,
    /// Control buttons
    pub buttons: ButtonOptions,
    /// Verbose per-window diagnostics
    pub debug: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            min_size: DEFAULT_MIN_SIZE,
            draggable: true,
            resizable: true,
            centered: true,
            dark_mode: true,
            shadow: ShadowMode::default(),
            title: DEFAULT_TITLE.to_string(),
            buttons: ButtonOptions::default(),
            debug: false,
        }
    }
}

impl WindowOptions {
    /// Resolve options from a loosely typed value
    pub fn resolve(raw: &serde_json::Value) -> Resolved {
        resolve::resolve(raw)
    }
}
