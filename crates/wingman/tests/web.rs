//! Browser tests for the DOM adapter
//!
//! Run with `wasm-pack test --headless --chrome crates/wingman -- --features wasm`.

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, MouseEvent, MouseEventInit};
use wingman::dom::Chrome;
use wingman::{WindowOptions, Wingman};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Mount `<div class="wingman-container"><div id=..>content</div></div>`
fn mount(id: &str) -> HtmlElement {
    let document = document();
    let container: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    container.set_class_name("wingman-container");
    container.style().set_property("position", "relative").unwrap();
    container.style().set_property("width", "1000px").unwrap();
    container.style().set_property("height", "800px").unwrap();

    let target: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    target.set_id(id);
    target.set_inner_html("<p>content</p>");
    container.append_child(&target).unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    target
}

fn options(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap()
}

fn mouse(kind: &str, x: i32, y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(x);
    init.set_client_y(y);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

#[wasm_bindgen_test]
fn binds_and_builds_chrome() {
    let target = mount("bind-chrome");
    let window = Wingman::new(JsValue::from_str("#bind-chrome"), options(r#"{"title":"Notes"}"#));

    assert!(window.is_bound());
    assert_eq!(window.title().as_deref(), Some("Notes"));
    assert!(target.class_list().contains("wingman"));
    assert!(target.query_selector(".wingman-header-title").unwrap().is_some());
    assert!(target.query_selector(".wingman-content p").unwrap().is_some());
    assert_eq!(target.query_selector_all(".wingman-resizer").unwrap().length(), 3);
    assert_eq!(target.style().get_property_value("width").unwrap(), "700px");
    window.close(Some(true));
}

#[wasm_bindgen_test]
fn missing_target_is_inert() {
    let window = Wingman::new(JsValue::from_str("#does-not-exist"), JsValue::UNDEFINED);
    assert!(!window.is_bound());
    assert!(!window.maximize());
    assert!(window.state_json().is_none());

    assert!(Wingman::bind(JsValue::from_str("#does-not-exist"), JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn maximize_fills_container() {
    let target = mount("maximize");
    let window = Wingman::new(target.clone().into(), JsValue::UNDEFINED);

    assert!(window.maximize());
    assert_eq!(window.mode(), "maximized");
    assert!(target.class_list().contains("wingman-maximized"));
    assert_eq!(target.style().get_property_value("width").unwrap(), "1000px");

    assert!(window.restore());
    assert_eq!(target.style().get_property_value("width").unwrap(), "700px");
    window.close(Some(true));
}

#[wasm_bindgen_test]
fn title_drag_moves_window() {
    let target = mount("drag");
    let window = Wingman::new(target.clone().into(), JsValue::UNDEFINED);
    let title: HtmlElement = target
        .query_selector(".wingman-header-title")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();

    title.dispatch_event(&mouse("mousedown", 100, 100)).unwrap();
    assert!(target.class_list().contains("wingman-dragging"));
    document().dispatch_event(&mouse("mousemove", 130, 95)).unwrap();
    document().dispatch_event(&mouse("mouseup", 130, 95)).unwrap();

    assert!(!target.class_list().contains("wingman-dragging"));
    assert_eq!(target.style().get_property_value("left").unwrap(), "180px");
    assert_eq!(target.style().get_property_value("top").unwrap(), "145px");
    window.close(Some(true));
}

#[wasm_bindgen_test]
fn close_removes_element_and_is_idempotent() {
    let target = mount("close");
    let window = Wingman::new(target.clone().into(), JsValue::UNDEFINED);

    assert!(window.close(None));
    assert!(target.parent_node().is_none());
    assert!(window.is_closed());
    assert!(!window.close(None));
}

#[wasm_bindgen_test]
fn chrome_build_leaves_content_in_place() {
    let target: HtmlElement = document().create_element("div").unwrap().dyn_into().unwrap();
    target.set_inner_html("<p>content</p>");

    let chrome = Chrome::build(&document(), &WindowOptions::default()).unwrap();
    assert_eq!(target.child_element_count(), 1);
    assert_eq!(chrome.content().child_element_count(), 0);

    chrome.mount(&target).unwrap();
    assert!(chrome.content().query_selector("p").unwrap().is_some());
    assert!(target.query_selector(":scope > header").unwrap().is_some());
}

#[wasm_bindgen_test]
fn failed_mount_returns_content() {
    let target: HtmlElement = document().create_element("div").unwrap().dyn_into().unwrap();
    target.set_inner_html("<p>content</p>");

    let chrome = Chrome::build(&document(), &WindowOptions::default()).unwrap();
    // A header that contains the target cannot be inserted into it
    chrome.header.append_child(&target).unwrap();

    assert!(chrome.mount(&target).is_err());
    assert!(target.query_selector(":scope > p").unwrap().is_some());
    assert!(target.query_selector(".wingman-content-wrapper").unwrap().is_none());
    assert_eq!(chrome.content().child_element_count(), 0);
}
