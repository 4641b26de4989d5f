//! DOM-backed implementations (browser only at runtime)

pub mod line_height;
pub mod page;

pub use line_height::{first_line_height, representative_node};
pub use page::{DomPage, WindowListener};
