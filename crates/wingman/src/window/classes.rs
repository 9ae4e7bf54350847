//! Class tokens applied to the window element and its chrome
//!
//! The stylesheet in `web/wingman.css` is written against these names.

/// Root marker, always present
pub const ROOT: &str = "wingman";
/// Dark theme
pub const DARK: &str = "wingman-dark";
/// Light theme
pub const LIGHT: &str = "wingman-light";
/// Shadow shown at all times
pub const SHADOW_ALWAYS: &str = "wingman-shadow-always";
/// Shadow shown on hover
pub const SHADOW_HOVER: &str = "wingman-shadow-hover";
/// Shadow shown while active
pub const SHADOW_ACTIVE: &str = "wingman-shadow-active";
/// Window has resize handles
pub const RESIZABLE: &str = "wingman-resizable";
/// A drag gesture is active
pub const DRAGGING: &str = "wingman-dragging";
/// A resize gesture is active
pub const RESIZING: &str = "wingman-resizing";
/// Window is minimized
pub const MINIMIZED: &str = "wingman-minimized";
/// Window is maximized
pub const MAXIMIZED: &str = "wingman-maximized";

/// Ancestor marker bounding centering and maximize
pub const CONTAINER: &str = "wingman-container";

pub const HEADER_TITLE: &str = "wingman-header-title";
pub const DRAGGABLE: &str = "wingman-draggable";
pub const CONTENT_WRAPPER: &str = "wingman-content-wrapper";
pub const CONTENT: &str = "wingman-content";
pub const RESIZER: &str = "wingman-resizer";
pub const CONTROLS: &str = "wingman-controls";
pub const CONTROL: &str = "wingman-control";
pub const CONTROL_ICON: &str = "wingman-control-icon";
