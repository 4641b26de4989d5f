//! Pure geometry used by hover detection
//!
//! Nothing here touches the DOM, so it runs (and is tested) natively.

pub mod css;
pub mod rect;

pub use css::parse_css_pixels;
pub use rect::{Point, Rect};
