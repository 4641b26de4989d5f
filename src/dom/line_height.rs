//! First-line height estimation
//!
//! Reading a real line height is unreliable when it is not set explicitly,
//! so the estimate is the computed `font-size` of a throwaway clone of the
//! node that renders the first line.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::HoverError;
use crate::geometry::parse_css_pixels;

/// Node whose font metrics stand for the element's first line.
///
/// The first child when it is itself an element, otherwise the element
/// (text first child, comment first child, or no children at all).
pub fn representative_node(element: &Element) -> Element {
    element
        .first_child()
        .and_then(|child| child.dyn_into::<Element>().ok())
        .unwrap_or_else(|| element.clone())
}

/// Detached clone attached to `<body>` only for the duration of a measurement
struct Probe {
    element: Element,
}

impl Drop for Probe {
    fn drop(&mut self) {
        self.element.remove();
    }
}

fn hide_probe(element: &Element) -> Result<(), HoverError> {
    // Non-HTML nodes (e.g. SVG) have no inline style declaration to touch
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let style = html.style();
        style
            .set_property("position", "absolute")
            .map_err(|e| HoverError::dom("style.setProperty", e))?;
        style
            .set_property("visibility", "hidden")
            .map_err(|e| HoverError::dom("style.setProperty", e))?;
    }
    Ok(())
}

/// Estimate the pixel height of the first text line of `element`.
///
/// Mutates the document transiently; the probe node is gone again by the
/// time this returns, on success and on error.
pub fn first_line_height(
    window: &Window,
    document: &Document,
    element: &Element,
    sample_text: &str,
) -> Result<u32, HoverError> {
    let source = representative_node(element);
    let clone = source
        .clone_node_with_deep(true)
        .map_err(|e| HoverError::dom("cloneNode", e))?
        .dyn_into::<Element>()
        .map_err(|_| HoverError::Dom {
            call: "cloneNode",
            message: "clone of an element is not an element".to_string(),
        })?;
    clone.set_text_content(Some(sample_text));
    hide_probe(&clone)?;

    let body = document.body().ok_or(HoverError::NoBody)?;
    body.append_child(&clone)
        .map_err(|e| HoverError::dom("appendChild", e))?;
    let probe = Probe { element: clone };

    let style = window
        .get_computed_style(&probe.element)
        .map_err(|e| HoverError::dom("getComputedStyle", e))?
        .ok_or(HoverError::ComputedStyleUnavailable)?;
    let font_size = style
        .get_property_value("font-size")
        .map_err(|e| HoverError::dom("getPropertyValue", e))?;

    Ok(parse_css_pixels(&font_size))
}
