//! DOM binding: resolves the target element and renders window state onto it

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Node};

use crate::error::{WingmanError, WingmanResult};
use crate::math::{Rect, Size, Vec2};
use crate::options::WindowOptions;
use crate::window::{classes, Surface};
use super::{js_error, Chrome, ChromeListeners};

/// Resolve a window target: a CSS selector or an HTML element
pub fn resolve_target(target: &JsValue) -> WingmanResult<HtmlElement> {
    if let Some(selector) = target.as_string() {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| WingmanError::Dom("no document available".to_string()))?;
        return document
            .query_selector(&selector)
            .map_err(|_| WingmanError::InvalidTarget(format!("malformed selector '{}'", selector)))?
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or(WingmanError::Resolution { selector });
    }
    target
        .clone()
        .dyn_into::<HtmlElement>()
        .map_err(|value| WingmanError::InvalidTarget(format!("{:?}", value)))
}

/// `Surface` backed by a live element
pub struct DomSurface {
    root: HtmlElement,
    container: Option<HtmlElement>,
    chrome: Chrome,
    listeners: Option<ChromeListeners>,
}

impl DomSurface {
    /// Build the chrome inside `root` and bind to it
    ///
    /// The container is the closest `.wingman-container` ancestor, if any.
    pub fn build(document: &Document, root: HtmlElement, options: &WindowOptions) -> WingmanResult<Self> {
        let container = root
            .closest(&format!(".{}", classes::CONTAINER))
            .map_err(|e| js_error("closest", e))?
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        let chrome = Chrome::build(document, options)?;
        chrome.mount(&root)?;
        Ok(Self {
            root,
            container,
            chrome,
            listeners: None,
        })
    }

    pub fn root(&self) -> &HtmlElement {
        &self.root
    }

    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    /// Keep chrome listeners alive until the window is detached
    pub fn set_listeners(&mut self, listeners: ChromeListeners) {
        self.listeners = Some(listeners);
    }

    fn set_style(element: &HtmlElement, property: &str, value: &str) {
        if let Err(err) = element.style().set_property(property, value) {
            tracing::warn!(property, error = ?err, "failed to set style");
        }
    }

    fn set_px(&self, property: &str, value: f32) {
        Self::set_style(&self.root, property, &format!("{}px", value));
    }
}

impl Surface for DomSurface {
    fn offset(&self) -> Vec2 {
        Vec2::new(self.root.offset_left() as f32, self.root.offset_top() as f32)
    }

    fn container_bounds(&self) -> Option<Rect> {
        let container = self.container.as_ref()?;
        let node: &Node = container;
        // Coordinates are relative to the offset parent; when that is the
        // container itself its own offsets do not apply.
        let is_parent = self
            .root
            .offset_parent()
            .map(|parent| parent.is_same_node(Some(node)))
            .unwrap_or(false);
        let origin = if is_parent {
            Vec2::ZERO
        } else {
            Vec2::new(container.offset_left() as f32, container.offset_top() as f32)
        };
        Some(Rect::from_pos_size(
            origin,
            Size::new(container.client_width() as f32, container.client_height() as f32),
        ))
    }

    fn viewport(&self) -> Rect {
        let dimension = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
        };
        match web_sys::window() {
            Some(window) => Rect::new(0.0, 0.0, dimension(window.inner_width()), dimension(window.inner_height())),
            None => Rect::ZERO,
        }
    }

    fn apply_rect(&mut self, rect: Rect) {
        self.set_px("left", rect.x);
        self.set_px("top", rect.y);
        self.set_px("width", rect.width);
        self.set_px("height", rect.height);
    }

    fn apply_min_size(&mut self, size: Size) {
        self.set_px("min-width", size.width);
        self.set_px("min-height", size.height);
    }

    fn add_class(&mut self, token: &str) {
        if let Err(err) = self.root.class_list().add_1(token) {
            tracing::warn!(token, error = ?err, "failed to add class");
        }
    }

    fn remove_class(&mut self, token: &str) {
        if let Err(err) = self.root.class_list().remove_1(token) {
            tracing::warn!(token, error = ?err, "failed to remove class");
        }
    }

    fn set_content_visible(&mut self, visible: bool) {
        let display = if visible { "initial" } else { "none" };
        Self::set_style(&self.chrome.content_wrapper, "display", display);
    }

    fn detach(&mut self, remove_element: bool) {
        self.listeners = None;
        if remove_element {
            self.root.remove();
        }
    }
}
