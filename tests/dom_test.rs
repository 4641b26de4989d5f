//! Browser tests for the DOM-backed implementations
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use hover_player_wasm::api::JsHoverCoordinateTracker;
use hover_player_wasm::dom::{first_line_height, representative_node, DomPage};
use hover_player_wasm::hover::{element_bounds, is_point_inside, Page};
use hover_player_wasm::{HoverCoordinateTracker, Point, TrackerConfig};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

/// Absolutely positioned paragraph inside a fresh container on `<body>`
fn mount_paragraph(page: &DomPage, left: f64, top: f64, font_size: &str) -> (HtmlElement, HtmlElement) {
    let document = page.document();
    let container: HtmlElement = document
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    let paragraph: HtmlElement = document.create_element("p").unwrap().dyn_into().unwrap();

    let style = paragraph.style();
    style.set_property("position", "absolute").unwrap();
    style.set_property("margin", "0").unwrap();
    style.set_property("left", &format!("{}px", left)).unwrap();
    style.set_property("top", &format!("{}px", top)).unwrap();
    style.set_property("width", "200px").unwrap();
    style.set_property("height", "40px").unwrap();
    style.set_property("font-size", font_size).unwrap();
    paragraph.set_text_content(Some("A readable paragraph"));

    container.append_child(&paragraph).unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    (container, paragraph)
}

fn dispatch_mouse_move(page: &DomPage, x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    page.window().dispatch_event(&event).unwrap();
}

fn body_child_count(page: &DomPage) -> u32 {
    page.document().body().unwrap().child_element_count()
}

#[wasm_bindgen_test]
fn test_bounds_aliases_match() {
    let page = DomPage::new().unwrap();
    let (container, paragraph) = mount_paragraph(&page, 50.0, 100.0, "16px");

    let bounds = element_bounds(&page, &paragraph);
    assert_eq!(bounds.x(), bounds.left());
    assert_eq!(bounds.y(), bounds.top());
    assert_eq!(bounds.width(), 200.0);
    assert_eq!(bounds.height(), 40.0);

    container.remove();
}

#[wasm_bindgen_test]
fn test_point_inside_paragraph() {
    let page = DomPage::new().unwrap();
    let (container, paragraph) = mount_paragraph(&page, 50.0, 100.0, "16px");
    let rect = page.viewport_rect(&paragraph);

    assert!(is_point_inside(&page, Point::new(rect.left() + 10.0, rect.top() + 10.0), &paragraph));
    assert!(is_point_inside(&page, Point::new(rect.left(), rect.top()), &paragraph));
    assert!(!is_point_inside(&page, Point::new(rect.right() + 1.0, rect.top()), &paragraph));

    container.remove();
}

#[wasm_bindgen_test]
fn test_line_height_leaves_no_probe_behind() {
    let page = DomPage::new().unwrap();
    let (container, paragraph) = mount_paragraph(&page, 50.0, 100.0, "16px");
    let before = body_child_count(&page);

    let height = first_line_height(page.window(), page.document(), &paragraph, "Sample text").unwrap();

    assert_eq!(height, 16);
    assert_eq!(body_child_count(&page), before);
    container.remove();
}

#[wasm_bindgen_test]
fn test_line_height_ignores_original_text() {
    let page = DomPage::new().unwrap();
    let (first_container, first) = mount_paragraph(&page, 0.0, 0.0, "22px");
    let (second_container, second) = mount_paragraph(&page, 0.0, 60.0, "22px");
    second.set_text_content(Some("Something much longer that would wrap across several lines of text"));

    let a = page.first_line_height(&first, "Sample text").unwrap();
    let b = page.first_line_height(&second, "Sample text").unwrap();

    assert_eq!(a, b);
    first_container.remove();
    second_container.remove();
}

#[wasm_bindgen_test]
fn test_representative_node_selection() {
    let page = DomPage::new().unwrap();
    let document = page.document();

    let with_text: Element = document.create_element("p").unwrap();
    with_text.set_text_content(Some("plain text first"));
    assert_eq!(representative_node(&with_text), with_text);

    let with_span: Element = document.create_element("p").unwrap();
    let span = document.create_element("span").unwrap();
    with_span.append_child(&span).unwrap();
    assert_eq!(representative_node(&with_span), span);

    let empty: Element = document.create_element("p").unwrap();
    assert_eq!(representative_node(&empty), empty);
}

#[wasm_bindgen_test]
fn test_window_listener_drives_tracker() {
    let page = Rc::new(DomPage::new().unwrap());
    let (container, paragraph) = mount_paragraph(&page, 50.0, 100.0, "16px");
    let rect = page.viewport_rect(&paragraph);
    let scroll = page.scroll_offset();

    let candidate: Element = paragraph.clone().into();
    let candidates: Rc<[Element]> = Rc::from(vec![candidate]);
    let mut tracker =
        HoverCoordinateTracker::new(Rc::clone(&page), candidates, TrackerConfig::default()).unwrap();

    dispatch_mouse_move(&page, (rect.left() + 10.0) as i32, (rect.top() + 10.0) as i32);

    let info = tracker.current().expect("paragraph hovered");
    let container_element: &Element = container.as_ref();
    assert_eq!(&info.element, container_element);
    assert_eq!(info.top, rect.top() + scroll.y);
    assert_eq!(info.left, rect.left() + scroll.x - 40.0);
    assert_eq!(info.height_of_first_line, 16);

    tracker.dispose();
    let version = tracker.version();
    dispatch_mouse_move(&page, (rect.left() + 10.0) as i32, (rect.top() + 10.0) as i32);
    assert_eq!(tracker.version(), version);

    container.remove();
}

#[wasm_bindgen_test]
fn test_js_tracker_same_array_is_noop() {
    let page = DomPage::new().unwrap();
    let (container, paragraph) = mount_paragraph(&page, 50.0, 100.0, "16px");

    let candidates = js_sys::Array::of1(&paragraph);
    let mut tracker = JsHoverCoordinateTracker::new(candidates.clone(), JsValue::UNDEFINED).unwrap();
    assert!(tracker.is_active());
    assert!(tracker.current().unwrap().is_null());

    assert!(!tracker.set_candidates(candidates).unwrap());
    assert!(tracker.set_candidates(js_sys::Array::of1(&paragraph)).unwrap());

    tracker.dispose();
    assert!(!tracker.is_active());
    container.remove();
}

#[wasm_bindgen_test]
fn test_js_tracker_rejects_non_elements() {
    let candidates = js_sys::Array::of1(&JsValue::from_str("not an element"));

    assert!(JsHoverCoordinateTracker::new(candidates, JsValue::UNDEFINED).is_err());
}
