//! Browser implementation of the hover platform traits

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, Window};

use super::line_height::first_line_height;
use crate::error::HoverError;
use crate::geometry::{Point, Rect};
use crate::hover::{Page, PointerHandler, PointerSource};

const MOUSE_MOVE: &str = "mousemove";

/// The live document in the current window
#[derive(Debug, Clone)]
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn new() -> Result<Self, HoverError> {
        let window = web_sys::window().ok_or(HoverError::NoWindow)?;
        let document = window.document().ok_or(HoverError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// A `mousemove` listener registered on `window`.
///
/// Owns the JS closure; it must outlive the registration, so it is only
/// dropped after `removeEventListener`.
pub struct WindowListener {
    closure: Closure<dyn FnMut(MouseEvent)>,
}

impl Page for DomPage {
    type Element = Element;

    fn viewport_rect(&self, element: &Element) -> Rect {
        let rect = element.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn scroll_offset(&self) -> Point {
        let x = self.window.scroll_x().unwrap_or_else(|e| {
            log::warn!("[HoverPlayer] scrollX unavailable: {:?}", e);
            0.0
        });
        let y = self.window.scroll_y().unwrap_or_else(|e| {
            log::warn!("[HoverPlayer] scrollY unavailable: {:?}", e);
            0.0
        });
        Point::new(x, y)
    }

    fn parent(&self, element: &Element) -> Option<Element> {
        element.parent_element()
    }

    fn first_line_height(&self, element: &Element, sample_text: &str) -> Result<u32, HoverError> {
        first_line_height(&self.window, &self.document, element, sample_text)
    }
}

impl PointerSource for DomPage {
    type Registration = WindowListener;

    fn listen(&self, handler: PointerHandler) -> Result<WindowListener, HoverError> {
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            handler(Point::new(event.client_x() as f64, event.client_y() as f64));
        });

        self.window
            .add_event_listener_with_callback(MOUSE_MOVE, closure.as_ref().unchecked_ref())
            .map_err(|e| HoverError::dom("addEventListener", e))?;

        Ok(WindowListener { closure })
    }

    fn unlisten(&self, registration: WindowListener) {
        if let Err(e) = self.window.remove_event_listener_with_callback(
            MOUSE_MOVE,
            registration.closure.as_ref().unchecked_ref(),
        ) {
            log::warn!("[HoverPlayer] removeEventListener failed: {:?}", e);
        }
    }
}
