//! Rendering adapter between the state machine and the host document

use crate::math::{Rect, Size, Vec2};

/// Where a window is drawn
///
/// The browser implementation is `DomSurface` (feature `wasm`);
/// [`HeadlessSurface`](crate::headless::HeadlessSurface) records calls
/// in memory.
pub trait Surface {
    /// Current offset of the window element within its positioned parent
    fn offset(&self) -> Vec2;

    /// Bounds of the nearest container ancestor, if there is one
    fn container_bounds(&self) -> Option<Rect>;

    /// Bounds of the visible viewport, used when there is no container
    fn viewport(&self) -> Rect;

    /// Write position and size
    fn apply_rect(&mut self, rect: Rect);

    /// Write the minimum size style
    fn apply_min_size(&mut self, size: Size);

    fn add_class(&mut self, token: &str);

    fn remove_class(&mut self, token: &str);

    /// Show or hide the content area
    fn set_content_visible(&mut self, visible: bool);

    /// Release chrome listeners; remove the element if `remove_element`
    fn detach(&mut self, remove_element: bool);
}
