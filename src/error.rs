//! Error types for hover tracking
//!
//! The geometry helpers themselves never fail for attached, measurable
//! elements. What can fail is the platform underneath them: a missing
//! window or body, a DOM call rejecting, or bad input crossing the JS
//! boundary.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Top-level error type for the crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HoverError {
    /// No global `window` (e.g. running inside a worker)
    #[error("no global window available")]
    NoWindow,

    /// The window has no document attached
    #[error("window has no document")]
    NoDocument,

    /// The document has no `<body>` to host measurement probes
    #[error("document has no body")]
    NoBody,

    /// A DOM method threw
    #[error("DOM call `{call}` failed: {message}")]
    Dom { call: &'static str, message: String },

    /// `getComputedStyle` returned nothing for the probe node
    #[error("computed style unavailable")]
    ComputedStyleUnavailable,

    /// A candidate array entry was not an `Element`
    #[error("candidate at index {0} is not an Element")]
    NotAnElement(u32),

    /// The tracker configuration was rejected
    #[error("invalid tracker configuration: {0}")]
    InvalidConfig(String),
}

impl HoverError {
    /// Wrap a thrown JS value from the named DOM call
    pub fn dom(call: &'static str, err: JsValue) -> Self {
        let message = err
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", err));
        HoverError::Dom { call, message }
    }
}

impl From<HoverError> for JsValue {
    fn from(err: HoverError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
