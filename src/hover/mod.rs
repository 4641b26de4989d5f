//! Hover detection and play-control positioning
//!
//! - `page`: platform traits plus the bounds / point-in-rect helpers
//! - `config`: tracker configuration and policies
//! - `state`: the observable published value
//! - `tracker`: the subscription tying it all together

pub mod config;
pub mod page;
pub mod state;
pub mod tracker;

pub use config::{LeavePolicy, MatchPolicy, TrackerConfig};
pub use page::{element_bounds, is_point_inside, Page, PointerHandler, PointerSource};
pub use state::{HoverState, SubscriptionId};
pub use tracker::{describe_hover, find_hovered, HoverCoordinateTracker, HoveredElementInfo};
