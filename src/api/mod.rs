//! JavaScript-facing API
//!
//! # Module Structure
//!
//! - `helpers`: serialization, candidate conversion and error reporting
//! - `geometry`: `getElementBounds`, `isPointInsideElement`, `getLineHeightOfFirstLine`
//! - `tracker`: the `HoverCoordinateTracker` class

pub mod helpers;
pub mod geometry;
pub mod tracker;

pub use geometry::{get_element_bounds, get_line_height_of_first_line, is_point_inside_element};
pub use tracker::JsHoverCoordinateTracker;
