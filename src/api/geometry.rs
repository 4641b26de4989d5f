//! Stand-alone geometry functions
//!
//! Thin wrappers over the `Page` helpers, bound to the live document.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::helpers::{deserialize, report, serialize};
use crate::dom::DomPage;
use crate::geometry::Point;
use crate::hover::{config::DEFAULT_SAMPLE_TEXT, element_bounds, is_point_inside, Page};

/// Page-absolute bounds of an element
///
/// # Returns
/// `{x, y, top, left, width, height}` where `x == left` and `y == top`
#[wasm_bindgen(js_name = getElementBounds)]
pub fn get_element_bounds(element: &Element) -> Result<JsValue, JsValue> {
    let page = DomPage::new().map_err(report)?;
    serialize(&element_bounds(&page, element), "Bounds serialization error")
}

/// Whether a viewport point `{x, y}` lies inside an element (edges count)
#[wasm_bindgen(js_name = isPointInsideElement)]
pub fn is_point_inside_element(coordinate: JsValue, element: &Element) -> Result<bool, JsValue> {
    let point: Point = deserialize(coordinate, "Invalid coordinate")?;
    let page = DomPage::new().map_err(report)?;
    Ok(is_point_inside(&page, point, element))
}

/// Estimated pixel height of the first line of text in an element
#[wasm_bindgen(js_name = getLineHeightOfFirstLine)]
pub fn get_line_height_of_first_line(element: &Element) -> Result<u32, JsValue> {
    let page = DomPage::new().map_err(report)?;
    page.first_line_height(element, DEFAULT_SAMPLE_TEXT)
        .map_err(report)
}
