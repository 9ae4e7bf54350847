//! Document-level pointer tracking

use std::cell::RefCell;
use std::rc::Weak;

use web_sys::Document;

use crate::error::WingmanResult;
use crate::input::{GestureKind, PointerTracker};
use crate::window::WindowId;
use super::{pointer, with_controller, DomController, Listener};

/// Subscribes the owning controller to `mousemove`/`mouseup` on the document
pub struct DomPointerTracker {
    controller: Weak<RefCell<DomController>>,
    document: Document,
}

impl DomPointerTracker {
    pub fn new(controller: Weak<RefCell<DomController>>, document: Document) -> Self {
        Self {
            controller,
            document,
        }
    }
}

/// Live move/up registration; both listeners are removed on drop
pub struct PointerSubscription {
    _on_move: Listener,
    _on_up: Listener,
}

impl PointerTracker for DomPointerTracker {
    type Subscription = PointerSubscription;

    fn subscribe(&mut self, window: WindowId, kind: GestureKind) -> WingmanResult<PointerSubscription> {
        let on_move = {
            let controller = self.controller.clone();
            Listener::new(&self.document, "mousemove", move |event| {
                event.prevent_default();
                with_controller(&controller, |c| {
                    c.pointer_move(pointer(&event));
                });
            })?
        };
        let on_up = {
            let controller = self.controller.clone();
            Listener::new(&self.document, "mouseup", move |_event| {
                with_controller(&controller, |c| {
                    c.pointer_up();
                });
            })?
        };
        tracing::trace!(window = %window, ?kind, "tracking pointer");
        Ok(PointerSubscription {
            _on_move: on_move,
            _on_up: on_up,
        })
    }
}
