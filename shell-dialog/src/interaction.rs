//! Synchronous request/response channel between a session and its presenter.
//!
//! [`Interaction::raise`] hands a mutable envelope to the registered handler
//! and returns once the handler has returned. The handler is expected to fill
//! the envelope in before returning; the channel itself never waits, queues, or
//! crosses threads.
//!
//! Usage constraints:
//! - Register a single handler. With several registered, each runs in
//!   registration order against the same envelope, which is rarely meaningful.
//! - A handler must not raise the same channel again before returning. A
//!   nested raise skips the handler that is already running.
//! - Raise from the thread that owns the session.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

/// Handle returned by [`Interaction::register`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type Handler<T> = Rc<RefCell<dyn FnMut(&mut T)>>;

/// Single-shot synchronous broadcast of a mutable envelope.
pub struct Interaction<T> {
    next_id: Cell<u64>,
    handlers: RefCell<Vec<(HandlerId, Handler<T>)>>,
}

impl<T> Default for Interaction<T> {
    fn default() -> Self {
        Self {
            next_id: Cell::new(0),
            handlers: RefCell::new(Vec::new()),
        }
    }
}

impl<T> std::fmt::Debug for Interaction<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interaction")
            .field("handlers", &self.handlers.borrow().len())
            .finish()
    }
}

impl<T> Interaction<T> {
    /// Creates a channel with no handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler.
    pub fn register(&self, handler: impl FnMut(&mut T) + 'static) -> HandlerId {
        let id = HandlerId(self.next_id.get());
        self.next_id.set(id.0.wrapping_add(1));
        let handler: Handler<T> = Rc::new(RefCell::new(handler));
        let mut handlers = self.handlers.borrow_mut();
        handlers.push((id, handler));
        #[cfg(feature = "tracing")]
        if handlers.len() > 1 {
            debug!(count = handlers.len(), "interaction has more than one handler");
        }
        id
    }

    /// Removes a handler. Returns `false` if it was not registered.
    pub fn unregister(&self, id: HandlerId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let Some(i) = handlers.iter().position(|(hid, _)| *hid == id) else {
            return false;
        };
        handlers.remove(i);
        true
    }

    /// Removes every handler.
    pub fn clear(&self) {
        self.handlers.borrow_mut().clear();
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Invokes the registered handlers with `envelope` and returns after they do.
    ///
    /// Without a handler this is a no-op and the envelope stays unfulfilled.
    pub fn raise(&self, envelope: &mut T) {
        let handlers: Vec<Handler<T>> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();
        for handler in handlers {
            match handler.try_borrow_mut() {
                Ok(mut f) => (&mut *f)(envelope),
                Err(_) => {
                    #[cfg(feature = "tracing")]
                    warn!("nested raise skipped a handler that is still running");
                }
            }
        }
    }
}
