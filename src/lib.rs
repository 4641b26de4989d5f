//! Hover Player WASM Module
//!
//! Works out which readable paragraph the pointer is over and where a
//! floating play control should sit next to it. The paragraph list comes
//! from the host page; this module does geometry, first-line measurement
//! and publishes the result through a subscribable tracker.

pub mod api;
pub mod dom;
pub mod error;
pub mod geometry;
pub mod hover;

// Re-export commonly used types
pub use error::HoverError;
pub use geometry::{Point, Rect};
pub use hover::{HoverCoordinateTracker, HoveredElementInfo, LeavePolicy, MatchPolicy, TrackerConfig};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A logger may already be installed by the host; that is fine
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).ok();

    log::info!("[HoverPlayer] WASM module initialized");
}
