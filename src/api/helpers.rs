//! Shared helpers for the JS-facing API
//!
//! Serialization, candidate array conversion and error reporting used by
//! every exported function.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::error::HoverError;
use crate::hover::HoveredElementInfo;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript, logging and wrapping failures
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("[HoverPlayer] {}", msg);
        JsValue::from_str(&msg)
    })
}

/// Like `deserialize`, but `undefined`/`null` yield `T::default()`
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, error_context)
}

/// Serialize a value to JavaScript, logging and wrapping failures
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("[HoverPlayer] {}", msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Error Helpers
// ============================================================================

/// Log a crate error and convert it for the JS boundary
pub fn report(err: HoverError) -> JsValue {
    log::error!("[HoverPlayer] {}", err);
    err.into()
}

// ============================================================================
// Conversion Helpers
// ============================================================================

/// Convert a JS array into the candidate list, rejecting non-elements
pub fn candidates_from_array(array: &js_sys::Array) -> Result<Rc<[Element]>, HoverError> {
    array
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value
                .dyn_into::<Element>()
                .map_err(|_| HoverError::NotAnElement(index as u32))
        })
        .collect()
}

fn set_property(target: &js_sys::Object, key: &str, value: &JsValue) -> Result<(), HoverError> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| HoverError::dom("Reflect.set", e))
}

/// Build `{element, top, left, heightOfFirstLine}`
///
/// Built by hand since `Element` has no serde representation.
pub fn hovered_info_to_js(info: &HoveredElementInfo<Element>) -> Result<JsValue, HoverError> {
    let result = js_sys::Object::new();
    set_property(&result, "element", &JsValue::from(info.element.clone()))?;
    set_property(&result, "top", &JsValue::from_f64(info.top))?;
    set_property(&result, "left", &JsValue::from_f64(info.left))?;
    set_property(
        &result,
        "heightOfFirstLine",
        &JsValue::from_f64(info.height_of_first_line as f64),
    )?;
    Ok(result.into())
}

/// `null` when nothing is hovered
pub fn optional_info_to_js(
    info: Option<&HoveredElementInfo<Element>>,
) -> Result<JsValue, HoverError> {
    match info {
        Some(info) => hovered_info_to_js(info),
        None => Ok(JsValue::NULL),
    }
}
