//! `HoverCoordinateTracker` class exported to JavaScript
//!
//! Meant to be driven from a component lifecycle: construct on mount, call
//! `setCandidates` on every render with the parsed paragraph list, and
//! `dispose` on unmount.

use wasm_bindgen::prelude::*;

use super::helpers::{candidates_from_array, deserialize_or_default, optional_info_to_js, report};
use crate::dom::DomPage;
use crate::hover::{HoverCoordinateTracker, TrackerConfig};
use std::rc::Rc;

#[wasm_bindgen(js_name = HoverCoordinateTracker)]
pub struct JsHoverCoordinateTracker {
    inner: HoverCoordinateTracker<DomPage>,
    // The JS array last passed in; its identity decides re-subscription
    candidates_key: js_sys::Array,
}

#[wasm_bindgen(js_class = HoverCoordinateTracker)]
impl JsHoverCoordinateTracker {
    /// Start tracking `candidates` (an array of Elements)
    ///
    /// # Parameters
    /// - `candidates`: ordered readable paragraphs
    /// - `config`: optional `{playControlOffset, matchPolicy, leavePolicy, sampleText}`
    #[wasm_bindgen(constructor)]
    pub fn new(candidates: js_sys::Array, config: JsValue) -> Result<JsHoverCoordinateTracker, JsValue> {
        let config: TrackerConfig = deserialize_or_default(config, "Invalid tracker config")?;
        let elements = candidates_from_array(&candidates).map_err(report)?;
        let page = DomPage::new().map_err(report)?;

        let inner = HoverCoordinateTracker::new(Rc::new(page), elements, config).map_err(report)?;
        log::info!("[HoverPlayer] tracker created for {} candidates", candidates.length());

        Ok(Self {
            inner,
            candidates_key: candidates,
        })
    }

    /// Replace the candidate list
    ///
    /// Passing the same array object again is a no-op and returns `false`.
    /// A different array re-subscribes and returns `true`.
    #[wasm_bindgen(js_name = setCandidates)]
    pub fn set_candidates(&mut self, candidates: js_sys::Array) -> Result<bool, JsValue> {
        if js_sys::Object::is(&self.candidates_key, &candidates) {
            return Ok(false);
        }

        let elements = candidates_from_array(&candidates).map_err(report)?;
        let changed = self.inner.set_candidates(elements).map_err(report)?;
        self.candidates_key = candidates;
        Ok(changed)
    }

    /// Current `{element, top, left, heightOfFirstLine}` or `null`
    pub fn current(&self) -> Result<JsValue, JsValue> {
        optional_info_to_js(self.inner.current().as_ref()).map_err(report)
    }

    /// Number of publications so far
    pub fn version(&self) -> f64 {
        self.inner.version() as f64
    }

    /// Call `callback(info | null)` on every publication; returns an id
    pub fn subscribe(&self, callback: js_sys::Function) -> u32 {
        self.inner.subscribe(move |info| {
            let value = optional_info_to_js(info).unwrap_or_else(|err| {
                log::warn!("[HoverPlayer] could not convert hover info: {}", err);
                JsValue::NULL
            });
            if let Err(e) = callback.call1(&JsValue::NULL, &value) {
                log::warn!("[HoverPlayer] subscriber threw: {:?}", e);
            }
        })
    }

    pub fn unsubscribe(&self, id: u32) -> bool {
        self.inner.unsubscribe(id)
    }

    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    /// Remove the window listener. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.inner.dispose();
    }
}
