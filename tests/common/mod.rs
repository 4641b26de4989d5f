// Scripted page shared by the native tracker tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use hover_player_wasm::hover::{Page, PointerHandler, PointerSource};
use hover_player_wasm::{HoverError, Point, Rect};

pub type ElementId = usize;

struct Node {
    rect: Rect,
    parent: Option<ElementId>,
    font_size: u32,
}

/// In-memory page: elements are indices, listeners are counted
#[derive(Default)]
pub struct ScriptedPage {
    nodes: RefCell<Vec<Node>>,
    scroll: Cell<(f64, f64)>,
    listeners: RefCell<Vec<(u32, PointerHandler)>>,
    next_listener: Cell<u32>,
    pub attached: Cell<u32>,
    pub detached: Cell<u32>,
    pub measured: RefCell<Vec<ElementId>>,
    pub fail_measurement: Cell<bool>,
}

impl ScriptedPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with a viewport rect `(left, top, width, height)`
    pub fn add(&self, rect: (f64, f64, f64, f64), parent: Option<ElementId>, font_size: u32) -> ElementId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            rect: Rect::new(rect.0, rect.1, rect.2, rect.3),
            parent,
            font_size,
        });
        nodes.len() - 1
    }

    pub fn set_scroll(&self, x: f64, y: f64) {
        self.scroll.set((x, y));
    }

    pub fn live_listeners(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Dispatch a pointer move to every registered listener
    pub fn move_pointer(&self, x: f64, y: f64) {
        let handlers: Vec<PointerHandler> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(Point::new(x, y));
        }
    }
}

impl Page for ScriptedPage {
    type Element = ElementId;

    fn viewport_rect(&self, element: &ElementId) -> Rect {
        self.nodes.borrow()[*element].rect
    }

    fn scroll_offset(&self) -> Point {
        let (x, y) = self.scroll.get();
        Point::new(x, y)
    }

    fn parent(&self, element: &ElementId) -> Option<ElementId> {
        self.nodes.borrow()[*element].parent
    }

    fn first_line_height(&self, element: &ElementId, _sample_text: &str) -> Result<u32, HoverError> {
        if self.fail_measurement.get() {
            return Err(HoverError::ComputedStyleUnavailable);
        }
        self.measured.borrow_mut().push(*element);
        Ok(self.nodes.borrow()[*element].font_size)
    }
}

impl PointerSource for ScriptedPage {
    type Registration = u32;

    fn listen(&self, handler: PointerHandler) -> Result<u32, HoverError> {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().push((id, handler));
        self.attached.set(self.attached.get() + 1);
        Ok(id)
    }

    fn unlisten(&self, registration: u32) {
        self.listeners.borrow_mut().retain(|(id, _)| *id != registration);
        self.detached.set(self.detached.get() + 1);
    }
}
