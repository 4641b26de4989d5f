//! Platform seam for hover tracking
//!
//! `Page` answers the geometry questions, `PointerSource` delivers pointer
//! moves. The browser implementation lives in `crate::dom`; tests drive the
//! tracker with a scripted page instead.

use std::rc::Rc;

use crate::error::HoverError;
use crate::geometry::{Point, Rect};

/// Callback invoked with the viewport position of every pointer move
pub type PointerHandler = Rc<dyn Fn(Point)>;

/// Read-only view of a laid-out page
pub trait Page {
    /// Handle to an element on the page (cheap to clone)
    type Element: Clone;

    /// Element rectangle relative to the viewport
    fn viewport_rect(&self, element: &Self::Element) -> Rect;

    /// Current page scroll offset
    fn scroll_offset(&self) -> Point;

    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Estimated pixel height of the element's first text line
    fn first_line_height(
        &self,
        element: &Self::Element,
        sample_text: &str,
    ) -> Result<u32, HoverError>;
}

/// Source of global pointer-move events
pub trait PointerSource {
    /// Token returned by `listen`, handed back to `unlisten`
    type Registration;

    fn listen(&self, handler: PointerHandler) -> Result<Self::Registration, HoverError>;

    fn unlisten(&self, registration: Self::Registration);
}

/// Page-absolute bounds of `element` (viewport rect plus scroll offset).
///
/// Always recomputed: scroll and layout may have changed since the last call.
pub fn element_bounds<P: Page + ?Sized>(page: &P, element: &P::Element) -> Rect {
    let scroll = page.scroll_offset();
    page.viewport_rect(element).translate(scroll.x, scroll.y)
}

/// Whether a viewport point lies within `element`, edges included
pub fn is_point_inside<P: Page + ?Sized>(page: &P, point: Point, element: &P::Element) -> bool {
    page.viewport_rect(element).contains(point)
}
