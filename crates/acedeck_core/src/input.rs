//! Process-wide input fan-out with scoped subscriptions.
//!
//! The host owns one [`InputBus`] and pushes every input event into it.
//! Components that want to react while they are active call
//! [`InputBus::subscribe`] and keep the returned [`Subscription`]; dropping the
//! guard removes the handler, so a handler can never outlive its owner and
//! repeated mount/unmount cycles never stack duplicate handlers.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`). Events are delivered
//! synchronously in subscription order.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Handler<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct BusInner<E> {
    next_id: u64,
    handlers: Vec<(u64, Handler<E>)>,
}

/// Fan-out of events of type `E` to all live subscriptions.
pub struct InputBus<E> {
    inner: Rc<RefCell<BusInner<E>>>,
}

impl<E> Default for InputBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for InputBus<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> fmt::Debug for InputBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl<E> InputBus<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    /// Register `handler` until the returned guard is dropped.
    #[must_use = "dropping the subscription immediately unsubscribes the handler"]
    pub fn subscribe<F>(&self, handler: F) -> Subscription<E>
    where
        F: FnMut(&E) + 'static,
        E: 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let handler: Handler<E> = Rc::new(RefCell::new(handler));
        inner.handlers.push((id, handler));

        Subscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver `event` to every subscriber. Returns how many handlers ran.
    ///
    /// Handlers may subscribe or drop subscriptions while running; such
    /// changes take effect from the next dispatch. A handler that is already
    /// running (re-entrant dispatch) is skipped rather than re-entered.
    pub fn dispatch(&self, event: &E) -> usize {
        let snapshot: Vec<Handler<E>> = self
            .inner
            .borrow()
            .handlers
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();

        let mut delivered = 0;
        for entry in snapshot {
            if let Ok(mut handler) = entry.try_borrow_mut() {
                (&mut *handler)(event);
                delivered += 1;
            }
        }
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

/// Guard for one bus handler. Dropping it unsubscribes.
pub struct Subscription<E> {
    id: u64,
    bus: Weak<RefCell<BusInner<E>>>,
}

impl<E> Subscription<E> {
    /// Whether the bus this handler was registered on still exists.
    pub fn is_attached(&self) -> bool {
        self.bus.strong_count() > 0
    }
}

impl<E> fmt::Debug for Subscription<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        let Some(bus) = self.bus.upgrade() else {
            return;
        };
        // dispatch releases its borrow before running handlers
        if let Ok(mut inner) = bus.try_borrow_mut() {
            inner.handlers.retain(|(id, _)| *id != self.id);
        }
    }
}
