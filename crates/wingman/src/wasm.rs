//! JavaScript bindings
//!
//! Exposes the `Wingman` class. State queries return plain values or JSON
//! strings, parsed on the JS side.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, error, info, warn};
use wasm_bindgen::prelude::*;

use crate::dom::{resolve_target, ChromeListeners, DomController, DomPointerTracker, DomSurface};
use crate::error::{WingmanError, WingmanResult};
use crate::logging;
use crate::options::WindowOptions;
use crate::window::{WindowController, WindowId, WindowMode};

#[wasm_bindgen(start)]
pub fn start() {
    logging::init();
}

/// Library version
#[wasm_bindgen]
pub fn version() -> String {
    crate::VERSION.to_string()
}

/// A window bound to a page element
///
/// Constructed with `new Wingman(target, options)`, which never throws: a
/// target that cannot be bound is logged and the instance stays inert.
/// `Wingman.bind(target, options)` throws instead.
#[wasm_bindgen]
pub struct Wingman {
    id: WindowId,
    inner: Option<Rc<RefCell<DomController>>>,
}

#[wasm_bindgen]
impl Wingman {
    #[wasm_bindgen(constructor)]
    pub fn new(target: JsValue, options: JsValue) -> Wingman {
        let id = WindowId::new();
        let inner = match bind_window(id, &target, &options) {
            Ok(controller) => Some(controller),
            Err(err) => {
                error!(window = %id, error = %err, "window not bound");
                None
            }
        };
        Wingman { id, inner }
    }

    /// Bind a window, throwing if the target cannot be resolved
    pub fn bind(target: JsValue, options: JsValue) -> Result<Wingman, JsError> {
        let id = WindowId::new();
        let controller = bind_window(id, &target, &options).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Wingman {
            id,
            inner: Some(controller),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.id.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> Option<String> {
        self.inner.as_ref().map(|c| c.borrow().options().title.clone())
    }

    /// Whether the instance controls an element
    #[wasm_bindgen(getter, js_name = isBound)]
    pub fn is_bound(&self) -> bool {
        self.inner.is_some()
    }

    /// `"normal"`, `"minimized"` or `"maximized"`
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        let mode = match &self.inner {
            Some(c) => c.borrow().mode(),
            None => WindowMode::Normal,
        };
        mode.as_str().to_string()
    }

    #[wasm_bindgen(getter, js_name = isClosed)]
    pub fn is_closed(&self) -> bool {
        self.inner.as_ref().map_or(false, |c| c.borrow().is_closed())
    }

    pub fn minimize(&self) -> bool {
        self.with(|c| c.minimize())
    }

    pub fn maximize(&self) -> bool {
        self.with(|c| c.maximize())
    }

    pub fn restore(&self) -> bool {
        self.with(|c| c.restore())
    }

    /// Close the window; removes the element unless `removeElement` is `false`
    pub fn close(&self, remove_element: Option<bool>) -> bool {
        self.with(|c| c.close(remove_element.unwrap_or(true)))
    }

    /// Current state as JSON
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Option<String> {
        let controller = self.inner.as_ref()?;
        match controller.borrow().snapshot().to_json() {
            Ok(json) => Some(json),
            Err(err) => {
                error!(window = %self.id, error = %err, "failed to serialize state");
                None
            }
        }
    }
}

impl Wingman {
    fn with(&self, f: impl FnOnce(&mut DomController) -> bool) -> bool {
        match &self.inner {
            Some(controller) => match controller.try_borrow_mut() {
                Ok(mut controller) => f(&mut controller),
                Err(_) => false,
            },
            None => false,
        }
    }
}

/// Read the JS options object into JSON
///
/// `undefined`/`null` and unserializable objects read as no options.
/// `JSON.stringify` turns `NaN` and `Infinity` into `null`, which would read
/// as a missing field; those values are carried as strings instead so they
/// resolve as invalid.
fn options_value(options: &JsValue) -> serde_json::Value {
    if options.is_undefined() || options.is_null() {
        return serde_json::Value::Null;
    }
    let text = match js_sys::JSON::stringify(options) {
        Ok(text) => String::from(text),
        Err(err) => {
            warn!(error = ?err, "options are not serializable; using defaults");
            return serde_json::Value::Null;
        }
    };
    let mut value = serde_json::from_str(&text).unwrap_or_else(|err| {
        warn!(error = %err, "options are not valid JSON; using defaults");
        serde_json::Value::Null
    });
    keep_non_finite(options, &mut value);
    value
}

fn keep_non_finite(source: &JsValue, value: &mut serde_json::Value) {
    let (Some(object), Some(fields)) = (source.dyn_ref::<js_sys::Object>(), value.as_object_mut()) else {
        return;
    };
    for key in js_sys::Object::keys(object).iter() {
        let Some(name) = key.as_string() else {
            continue;
        };
        let Ok(raw) = js_sys::Reflect::get(source, &key) else {
            continue;
        };
        match raw.as_f64() {
            Some(n) if !n.is_finite() => {
                fields.insert(name, serde_json::Value::String(n.to_string()));
            }
            Some(_) => {}
            None => {
                if let Some(nested) = fields.get_mut(&name) {
                    keep_non_finite(&raw, nested);
                }
            }
        }
    }
}

fn bind_window(id: WindowId, target: &JsValue, options: &JsValue) -> WingmanResult<Rc<RefCell<DomController>>> {
    logging::init();

    let resolved = WindowOptions::resolve(&options_value(options));
    let options = resolved.options;
    let verbose = options.debug;
    if verbose {
        info!(window = %id, version = crate::VERSION, "debug mode is on");
        debug!(window = %id, warnings = resolved.warnings.len(), "resolved options");
    }

    let root = resolve_target(target)?;
    let document = root
        .owner_document()
        .ok_or_else(|| WingmanError::Dom("element has no owner document".to_string()))?;
    let surface = DomSurface::build(&document, root, &options)?;
    if verbose {
        debug!(window = %id, "built chrome");
    }

    let controller = Rc::new_cyclic(|weak| {
        let tracker = DomPointerTracker::new(weak.clone(), document);
        RefCell::new(WindowController::with_id(id, options, surface, tracker))
    });
    let listeners = ChromeListeners::attach(&controller)?;
    controller.borrow_mut().surface_mut().set_listeners(listeners);
    if verbose {
        debug!(window = %id, "registered chrome listeners");
    }
    Ok(controller)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::options::ValidationIssue;
    use wasm_bindgen_test::*;

    fn object(entries: &[(&str, JsValue)]) -> JsValue {
        let object = js_sys::Object::new();
        for (key, value) in entries {
            js_sys::Reflect::set(&object, &JsValue::from_str(key), value).unwrap();
        }
        object.into()
    }

    #[wasm_bindgen_test]
    fn test_non_finite_numbers_resolve_as_invalid() {
        let buttons = object(&[("min", JsValue::from_f64(f64::NAN))]);
        let options = object(&[
            ("width", JsValue::from_f64(400.0)),
            ("height", JsValue::from_f64(f64::NAN)),
            ("minWidth", JsValue::from_f64(f64::INFINITY)),
            ("buttons", buttons),
        ]);

        let resolved = WindowOptions::resolve(&options_value(&options));
        assert_eq!(resolved.options.size.width, 400.0);
        assert_eq!(resolved.options.size.height, 500.0);
        assert_eq!(resolved.warning_for("height").unwrap().issue, ValidationIssue::Invalid);
        assert_eq!(resolved.warning_for("minWidth").unwrap().issue, ValidationIssue::Invalid);
        assert_eq!(resolved.warning_for("buttons.min").unwrap().issue, ValidationIssue::Invalid);
    }

    #[wasm_bindgen_test]
    fn test_absent_options_read_as_null() {
        assert!(options_value(&JsValue::UNDEFINED).is_null());
        assert!(options_value(&JsValue::NULL).is_null());
        let resolved = WindowOptions::resolve(&options_value(&object(&[])));
        assert!(resolved.invalid().next().is_none());
    }
}
