//! Scoped event listener registration

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, MouseEvent};

use crate::error::WingmanResult;
use super::js_error;

/// An event listener that is removed when dropped
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(MouseEvent)>,
}

impl Listener {
    /// Register `handler` for `event` on `target`
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> WingmanResult<Self>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| js_error(event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            tracing::warn!(event = self.event, error = ?err, "failed to remove listener");
        }
    }
}
