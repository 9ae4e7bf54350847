//! Pure window state and mode transitions

use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use crate::options::WindowOptions;
use super::{WindowId, WindowMode};

/// Geometry and mode of one window, free of any rendering concern
#[derive(Clone, Debug)]
pub struct WindowState {
    id: WindowId,
    geometry: Rect,
    saved_geometry: Option<Rect>,
    mode: WindowMode,
    options: WindowOptions,
    closed: bool,
}

impl WindowState {
    /// Create a window in normal mode at `position`
    ///
    /// The initial size is the configured size raised to the minimum size.
    pub fn new(id: WindowId, options: WindowOptions, position: Vec2) -> Self {
        let size = options.size.at_least(options.min_size);
        Self {
            id,
            geometry: Rect::from_pos_size(position, size),
            saved_geometry: None,
            mode: WindowMode::Normal,
            options,
            closed: false,
        }
    }

    #[inline]
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Current on-screen rectangle
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Geometry to return to on restore; set whenever mode is not normal
    #[inline]
    pub fn saved_geometry(&self) -> Option<Rect> {
        self.saved_geometry
    }

    #[inline]
    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    #[inline]
    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Minimum size for the current mode
    pub fn min_size(&self) -> Size {
        match self.mode {
            WindowMode::Minimized => minimized_size(),
            _ => self.options.min_size,
        }
    }

    /// Dock the window as a compact bar at the bottom-left of `dock`
    ///
    /// Returns `false` if already minimized. Leaving normal mode snapshots
    /// the geometry; coming from maximized keeps the existing snapshot.
    pub fn minimize(&mut self, dock: Rect) -> bool {
        if self.closed || self.mode == WindowMode::Minimized {
            return false;
        }
        self.save_if_normal();
        let size = minimized_size();
        self.geometry = Rect::new(
            dock.x + FRAME_STYLE.minimized_inset,
            dock.bottom() - size.height,
            size.width,
            size.height,
        );
        self.mode = WindowMode::Minimized;
        true
    }

    /// Fill `bounds`
    ///
    /// Returns `false` if already maximized, leaving the snapshot untouched.
    pub fn maximize(&mut self, bounds: Rect) -> bool {
        if self.closed || self.mode == WindowMode::Maximized {
            return false;
        }
        self.save_if_normal();
        self.geometry = bounds;
        self.mode = WindowMode::Maximized;
        true
    }

    /// Return to normal mode and the saved geometry
    ///
    /// Returns `false` if already normal.
    pub fn restore(&mut self) -> bool {
        if self.closed || self.mode == WindowMode::Normal {
            return false;
        }
        if let Some(saved) = self.saved_geometry.take() {
            self.geometry = saved;
        }
        self.mode = WindowMode::Normal;
        true
    }

    /// Move by `delta`; only meaningful in normal mode
    pub fn translate(&mut self, delta: Vec2) {
        if self.closed || self.mode != WindowMode::Normal {
            return;
        }
        self.geometry = self.geometry.translate(delta);
    }

    /// Set the size, raised to the minimum size
    pub fn set_size(&mut self, size: Size) {
        if self.closed || self.mode != WindowMode::Normal {
            return;
        }
        let size = size.at_least(self.options.min_size);
        self.geometry.width = size.width;
        self.geometry.height = size.height;
    }

    /// Mark closed; returns `false` if already closed
    pub(crate) fn close(&mut self) -> bool {
        !std::mem::replace(&mut self.closed, true)
    }

    fn save_if_normal(&mut self) {
        if self.mode == WindowMode::Normal {
            self.saved_geometry = Some(self.geometry);
        }
    }
}

fn minimized_size() -> Size {
    Size::new(FRAME_STYLE.minimized_width, FRAME_STYLE.header_height)
}
