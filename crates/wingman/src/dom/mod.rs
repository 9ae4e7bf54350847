//! Browser adapter
//!
//! - `binding`: target resolution and the `Surface` implementation
//! - `chrome`: header, controls, content wrapper and resize handles
//! - `listener`: scoped event listener registrations
//! - `tracker`: document-level pointer tracking for gestures

mod binding;
mod chrome;
mod listener;
mod tracker;

pub use binding::{resolve_target, DomSurface};
pub use chrome::{Chrome, ChromeListeners};
pub use listener::Listener;
pub use tracker::{DomPointerTracker, PointerSubscription};

use std::cell::RefCell;
use std::rc::Weak;

use wasm_bindgen::JsValue;
use web_sys::MouseEvent;

use crate::error::WingmanError;
use crate::math::Vec2;
use crate::window::WindowController;

/// Controller type used in the browser
pub type DomController = WindowController<DomSurface, DomPointerTracker>;

/// Wrap a thrown JS value as a DOM error
pub(crate) fn js_error(context: &str, err: JsValue) -> WingmanError {
    WingmanError::Dom(format!("{}: {:?}", context, err))
}

/// Pointer position of a mouse event in client coordinates
#[inline]
pub(crate) fn pointer(event: &MouseEvent) -> Vec2 {
    Vec2::new(event.client_x() as f32, event.client_y() as f32)
}

/// Run `f` against the controller if it is still alive and not busy
///
/// Callbacks only hold weak references, so an event that arrives after the
/// window was dropped does nothing.
pub(crate) fn with_controller(controller: &Weak<RefCell<DomController>>, f: impl FnOnce(&mut DomController)) {
    let Some(controller) = controller.upgrade() else {
        return;
    };
    let Ok(mut controller) = controller.try_borrow_mut() else {
        tracing::debug!("window busy; event dropped");
        return;
    };
    f(&mut controller);
}
