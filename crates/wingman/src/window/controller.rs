//! Window controller: state machine plus rendering
//!
//! Every transition updates [`WindowState`] first and then mirrors the
//! result onto the [`Surface`], so the surface never holds state the
//! controller does not know about.

use tracing::{debug, error, info, warn};

use crate::input::{calculate_resize, GestureSession, InputRouter, PointerTracker, ResizeHandle};
use crate::math::{Rect, Vec2};
use crate::options::WindowOptions;
use super::{classes, Surface, WindowId, WindowMode, WindowSnapshot, WindowState};

/// Owns one window's state and mediates pointer-driven geometry changes
pub struct WindowController<S: Surface, T: PointerTracker> {
    state: WindowState,
    surface: S,
    input: InputRouter<T>,
}

impl<S: Surface, T: PointerTracker> WindowController<S, T> {
    /// Create a controller with a fresh id
    pub fn new(options: WindowOptions, surface: S, tracker: T) -> Self {
        Self::with_id(WindowId::new(), options, surface, tracker)
    }

    /// Create a controller with a caller-chosen id
    ///
    /// Places the window (centered in its container when `centered` is set),
    /// applies the theme/shadow/resizable classes and renders the geometry.
    pub fn with_id(id: WindowId, options: WindowOptions, surface: S, tracker: T) -> Self {
        let size = options.size.at_least(options.min_size);
        let position = if options.centered {
            match surface.container_bounds() {
                Some(bounds) => bounds.center_of(size),
                None => {
                    warn!(window = %id, "no container element; leaving window at its current offset");
                    surface.offset()
                }
            }
        } else {
            surface.offset()
        };

        let mut controller = Self {
            state: WindowState::new(id, options, position),
            surface,
            input: InputRouter::new(tracker),
        };
        controller.apply_static_classes();
        controller.render();

        info!(window = %id, title = %controller.state.options().title, "initialized window");
        controller
    }

    #[inline]
    pub fn id(&self) -> WindowId {
        self.state.id()
    }

    #[inline]
    pub fn state(&self) -> &WindowState {
        &self.state
    }

    #[inline]
    pub fn mode(&self) -> WindowMode {
        self.state.mode()
    }

    #[inline]
    pub fn geometry(&self) -> Rect {
        self.state.geometry()
    }

    #[inline]
    pub fn options(&self) -> &WindowOptions {
        self.state.options()
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable surface access for adapters wiring themselves up after construction
    #[inline]
    #[cfg_attr(not(feature = "wasm"), allow(dead_code))]
    pub(crate) fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Active gesture session, if any
    #[inline]
    pub fn gesture(&self) -> Option<&GestureSession> {
        self.input.session()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            id: self.id(),
            title: self.options().title.clone(),
            mode: self.mode(),
            geometry: self.geometry(),
            saved_geometry: self.state.saved_geometry(),
            gesture: self.gesture().map(GestureSession::kind),
            closed: self.is_closed(),
        }
    }

    // =========================================================================
    // Mode transitions
    // =========================================================================

    /// Dock as a compact bar and hide the content
    ///
    /// No-op (returns `false`) when already minimized.
    pub fn minimize(&mut self) -> bool {
        let dock = self.bounds();
        self.transition("minimize", |state| state.minimize(dock))
    }

    /// Fill the container (or the viewport without one)
    ///
    /// No-op (returns `false`) when already maximized.
    pub fn maximize(&mut self) -> bool {
        let bounds = self.bounds();
        self.transition("maximize", |state| state.maximize(bounds))
    }

    /// Return to normal mode and the geometry saved before leaving it
    pub fn restore(&mut self) -> bool {
        self.transition("restore", WindowState::restore)
    }

    /// Minimize button: restore when minimized, minimize otherwise
    pub fn toggle_minimize(&mut self) -> bool {
        match self.mode() {
            WindowMode::Minimized => self.restore(),
            _ => self.minimize(),
        }
    }

    /// Maximize button: restore when maximized, maximize otherwise
    pub fn toggle_maximize(&mut self) -> bool {
        match self.mode() {
            WindowMode::Maximized => self.restore(),
            _ => self.maximize(),
        }
    }

    fn transition(&mut self, name: &'static str, apply: impl FnOnce(&mut WindowState) -> bool) -> bool {
        if self.is_closed() {
            return false;
        }
        let from = self.mode();
        if !apply(&mut self.state) {
            if self.options().debug {
                debug!(window = %self.id(), mode = from.as_str(), "{} ignored", name);
            }
            return false;
        }
        self.end_gesture();
        self.render();
        if self.options().debug {
            debug!(window = %self.id(), from = from.as_str(), to = self.mode().as_str(), "{}", name);
        }
        true
    }

    fn bounds(&self) -> Rect {
        self.surface
            .container_bounds()
            .unwrap_or_else(|| self.surface.viewport())
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Pointer pressed on the title bar
    ///
    /// Starts a drag if the window is draggable. A minimized or maximized
    /// window is restored first. Any active gesture is replaced.
    pub fn begin_drag(&mut self, pointer: Vec2) -> bool {
        if self.is_closed() || !self.options().draggable || !pointer.is_finite() {
            return false;
        }
        if self.mode() != WindowMode::Normal {
            self.restore();
        }
        self.end_gesture();
        let id = self.id();
        if let Err(err) = self.input.start_drag(id, pointer) {
            error!(window = %id, error = %err, "failed to track pointer for drag");
            return false;
        }
        self.surface.add_class(classes::DRAGGING);
        if self.options().debug {
            debug!(window = %self.id(), x = pointer.x, y = pointer.y, "drag started");
        }
        true
    }

    /// Pointer pressed on a resize handle
    ///
    /// Starts a resize if the window is resizable and in normal mode.
    pub fn begin_resize(&mut self, handle: ResizeHandle, pointer: Vec2) -> bool {
        if self.is_closed()
            || !self.options().resizable
            || self.mode() != WindowMode::Normal
            || !pointer.is_finite()
        {
            return false;
        }
        self.end_gesture();
        let id = self.id();
        let start_size = self.geometry().size();
        if let Err(err) = self.input.start_resize(id, handle, pointer, start_size) {
            error!(window = %id, error = %err, "failed to track pointer for resize");
            return false;
        }
        self.surface.add_class(classes::RESIZING);
        if self.options().debug {
            debug!(window = %self.id(), ?handle, "resize started");
        }
        true
    }

    /// Pointer moved during a gesture
    ///
    /// Returns `true` if the geometry changed.
    pub fn pointer_move(&mut self, pointer: Vec2) -> bool {
        if self.is_closed() {
            return false;
        }
        let current = self.geometry().size();
        let min = self.options().min_size;

        match self.input.session_mut() {
            Some(GestureSession::Drag { last }) => {
                let delta = pointer - *last;
                if !delta.is_finite() {
                    return false;
                }
                *last = pointer;
                self.state.translate(delta);
            }
            Some(GestureSession::Resize {
                handle,
                start_pointer,
                start_size,
            }) => {
                let size = calculate_resize(*handle, *start_size, current, pointer - *start_pointer, min);
                if size == current {
                    return false;
                }
                self.state.set_size(size);
            }
            None => return false,
        }
        let rect = self.geometry();
        self.surface.apply_rect(rect);
        true
    }

    /// Pointer released; ends the active gesture
    pub fn pointer_up(&mut self) -> bool {
        let ended = self.end_gesture();
        if ended && self.options().debug {
            debug!(window = %self.id(), geometry = ?self.geometry(), "gesture ended");
        }
        ended
    }

    fn end_gesture(&mut self) -> bool {
        match self.input.end() {
            Some(_) => {
                self.surface.remove_class(classes::DRAGGING);
                self.surface.remove_class(classes::RESIZING);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Close the window
    ///
    /// Releases the gesture subscription and chrome listeners and, if
    /// `remove_element`, removes the element. Irreversible; later calls
    /// to any operation are no-ops.
    pub fn close(&mut self, remove_element: bool) -> bool {
        if !self.state.close() {
            return false;
        }
        self.end_gesture();
        self.surface.detach(remove_element);
        info!(window = %self.id(), remove_element, "closed window");
        true
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn apply_static_classes(&mut self) {
        let options = self.state.options();
        let theme = if options.dark_mode {
            classes::DARK
        } else {
            classes::LIGHT
        };
        let shadow = options.shadow.class_token();
        let resizable = options.resizable;

        self.surface.add_class(classes::ROOT);
        self.surface.add_class(theme);
        if let Some(token) = shadow {
            self.surface.add_class(token);
        }
        if resizable {
            self.surface.add_class(classes::RESIZABLE);
        }
    }

    fn render(&mut self) {
        let mode = self.mode();
        self.surface.apply_rect(self.state.geometry());
        self.surface.apply_min_size(self.state.min_size());
        self.surface.set_content_visible(mode != WindowMode::Minimized);
        for other in [WindowMode::Minimized, WindowMode::Maximized] {
            if let Some(token) = other.class_token() {
                if other == mode {
                    self.surface.add_class(token);
                } else {
                    self.surface.remove_class(token);
                }
            }
        }
    }
}
