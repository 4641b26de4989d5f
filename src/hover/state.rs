//! Single-slot observable value
//!
//! Holds the currently published hover info. All writes come from the
//! pointer-move handler on the UI thread, so `Rc<RefCell<..>>` is enough.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Handle returned by `subscribe`
pub type SubscriptionId = u32;

type Subscriber<T> = Rc<dyn Fn(Option<&T>)>;

struct Slot<T> {
    value: Option<T>,
    version: u64,
    next_id: SubscriptionId,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
}

/// Observable `Option<T>` with get / publish / subscribe semantics
pub struct HoverState<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for HoverState<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> Default for HoverState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for HoverState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.borrow();
        f.debug_struct("HoverState")
            .field("is_some", &slot.value.is_some())
            .field("version", &slot.version)
            .field("subscribers", &slot.subscribers.len())
            .finish()
    }
}

impl<T> HoverState<T> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                value: None,
                version: 0,
                next_id: 1,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn is_some(&self) -> bool {
        self.slot.borrow().value.is_some()
    }

    /// Number of publications so far (0 until the first publish)
    pub fn version(&self) -> u64 {
        self.slot.borrow().version
    }

    pub fn subscribe(&self, callback: impl Fn(Option<&T>) + 'static) -> SubscriptionId {
        let mut slot = self.slot.borrow_mut();
        let id = slot.next_id;
        slot.next_id = slot.next_id.wrapping_add(1);
        slot.subscribers.push((id, Rc::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut slot = self.slot.borrow_mut();
        let before = slot.subscribers.len();
        slot.subscribers.retain(|(sub_id, _)| *sub_id != id);
        slot.subscribers.len() != before
    }
}

impl<T: Clone> HoverState<T> {
    pub fn get(&self) -> Option<T> {
        self.slot.borrow().value.clone()
    }

    /// Replace the value and notify every subscriber.
    ///
    /// Subscribers run after the borrow is released, so they may read the
    /// state or (un)subscribe from inside the callback.
    pub fn publish(&self, value: Option<T>) {
        let (subscribers, snapshot) = {
            let mut slot = self.slot.borrow_mut();
            slot.value = value;
            slot.version += 1;
            let subscribers: Vec<Subscriber<T>> =
                slot.subscribers.iter().map(|(_, s)| Rc::clone(s)).collect();
            (subscribers, slot.value.clone())
        };

        for subscriber in subscribers {
            subscriber(snapshot.as_ref());
        }
    }
}
