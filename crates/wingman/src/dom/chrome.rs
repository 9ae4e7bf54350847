//! Window chrome: title bar, control buttons, content wrapper, resize handles

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::error::WingmanResult;
use crate::input::ResizeHandle;
use crate::options::WindowOptions;
use crate::window::classes;
use super::{js_error, pointer, with_controller, DomController, Listener};

/// Title-bar buttons, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Control {
    Minimize,
    Maximize,
    Exit,
}

impl Control {
    fn name(&self) -> &'static str {
        match self {
            Control::Minimize => "minimize",
            Control::Maximize => "maximize",
            Control::Exit => "exit",
        }
    }
}

/// Elements generated around the page content
#[derive(Clone, Debug)]
pub struct Chrome {
    pub header: HtmlElement,
    pub title: HtmlElement,
    pub content_wrapper: HtmlElement,
    content: HtmlElement,
    controls: Vec<(Control, HtmlElement)>,
    resizers: Vec<(ResizeHandle, HtmlElement)>,
}

fn element(document: &Document, tag: &str, tokens: &[&str]) -> WingmanResult<HtmlElement> {
    let element = document
        .create_element(tag)
        .map_err(|e| js_error("createElement", e))?
        .dyn_into::<HtmlElement>()
        .map_err(|e| js_error("createElement", e.into()))?;
    for token in tokens {
        element
            .class_list()
            .add_1(token)
            .map_err(|e| js_error("classList.add", e))?;
    }
    Ok(element)
}

fn append(parent: &HtmlElement, child: &HtmlElement) -> WingmanResult<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| js_error("appendChild", e))
}

fn move_children(from: &HtmlElement, to: &HtmlElement) -> WingmanResult<()> {
    while let Some(child) = from.first_child() {
        to.append_child(&child)
            .map_err(|e| js_error("appendChild", e))?;
    }
    Ok(())
}

impl Chrome {
    /// Create the chrome elements, detached from the page
    pub fn build(document: &Document, options: &WindowOptions) -> WingmanResult<Self> {
        let content = element(document, "div", &[classes::CONTENT])?;
        let content_wrapper = element(document, "div", &[classes::CONTENT_WRAPPER])?;
        append(&content_wrapper, &content)?;

        let header = element(document, "header", &[])?;
        let title = if options.draggable {
            element(document, "span", &[classes::HEADER_TITLE, classes::DRAGGABLE])?
        } else {
            element(document, "span", &[classes::HEADER_TITLE])?
        };
        title.set_inner_text(&options.title);
        append(&header, &title)?;

        let mut controls = Vec::new();
        if options.buttons.any() {
            let bar = element(document, "div", &[classes::CONTROLS])?;
            let enabled = [
                (Control::Minimize, options.buttons.min),
                (Control::Maximize, options.buttons.max),
                (Control::Exit, options.buttons.exit),
            ];
            for (control, on) in enabled {
                if !on {
                    continue;
                }
                let button_token = format!("{}-{}", classes::CONTROL, control.name());
                let icon_token = format!("{}-{}", classes::CONTROL_ICON, control.name());
                let button = element(document, "div", &[classes::CONTROL, button_token.as_str()])?;
                let icon = element(document, "div", &[classes::CONTROL_ICON, icon_token.as_str()])?;
                append(&button, &icon)?;
                append(&bar, &button)?;
                controls.push((control, button));
            }
            append(&header, &bar)?;
        }

        let mut resizers = Vec::new();
        if options.resizable {
            for handle in ResizeHandle::ALL {
                let resizer = element(document, "div", &[classes::RESIZER, handle.class_token()])?;
                resizer
                    .style()
                    .set_property("cursor", handle.cursor())
                    .map_err(|e| js_error("style", e))?;
                resizers.push((handle, resizer));
            }
        }

        Ok(Self {
            header,
            title,
            content_wrapper,
            content,
            controls,
            resizers,
        })
    }

    /// Insert the chrome into `root`
    ///
    /// The element's existing children move into the content area, so any
    /// listeners already attached to them keep working. On failure the
    /// chrome is taken out again and the children go back to `root`.
    pub fn mount(&self, root: &HtmlElement) -> WingmanResult<()> {
        let result = move_children(root, &self.content)
            .and_then(|_| append(root, &self.header))
            .and_then(|_| append(root, &self.content_wrapper))
            .and_then(|_| {
                self.resizers
                    .iter()
                    .try_for_each(|(_, resizer)| append(root, resizer))
            });
        if result.is_err() {
            self.header.remove();
            self.content_wrapper.remove();
            for (_, resizer) in &self.resizers {
                resizer.remove();
            }
            if let Err(err) = move_children(&self.content, root) {
                tracing::error!(error = %err, "failed to return content to its element");
            }
        }
        result
    }

    /// Area holding the element's original children
    pub fn content(&self) -> &HtmlElement {
        &self.content
    }
}

/// Listeners on the chrome elements, removed together on drop
pub struct ChromeListeners {
    _listeners: Vec<Listener>,
}

impl ChromeListeners {
    /// Wire the chrome of `controller`'s surface to its operations
    pub fn attach(controller: &Rc<RefCell<DomController>>) -> WingmanResult<Self> {
        let chrome = controller.borrow().surface().chrome().clone();
        let mut listeners = Vec::with_capacity(1 + chrome.controls.len() + chrome.resizers.len());

        let weak = Rc::downgrade(controller);
        listeners.push(Listener::new(&chrome.title, "mousedown", move |event| {
            if event.button() != 0 {
                return;
            }
            event.prevent_default();
            with_controller(&weak, |c| {
                c.begin_drag(pointer(&event));
            });
        })?);

        for (handle, resizer) in &chrome.resizers {
            let handle = *handle;
            let weak = Rc::downgrade(controller);
            listeners.push(Listener::new(resizer, "mousedown", move |event| {
                if event.button() != 0 {
                    return;
                }
                event.prevent_default();
                event.stop_propagation();
                with_controller(&weak, |c| {
                    c.begin_resize(handle, pointer(&event));
                });
            })?);
        }

        for (control, button) in &chrome.controls {
            let control = *control;
            let weak = Rc::downgrade(controller);
            listeners.push(Listener::new(button, "click", move |event| {
                event.stop_propagation();
                with_controller(&weak, |c| match control {
                    Control::Minimize => {
                        c.toggle_minimize();
                    }
                    Control::Maximize => {
                        c.toggle_maximize();
                    }
                    Control::Exit => {
                        c.close(true);
                    }
                });
            })?);
        }

        Ok(Self {
            _listeners: listeners,
        })
    }
}
