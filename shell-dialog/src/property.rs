//! Single-threaded observable values.
//!
//! A [`Property`] is a shared cell: clones observe and mutate the same value.
//! Subscribers run synchronously inside [`Property::set`], and only when the
//! value actually changes.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Handle returned by [`Property::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<T>,
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(SubscriptionId, Callback<T>)>>,
}

/// Settable, observable value.
pub struct Property<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.inner.value.borrow())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

impl<T: Default + Clone + PartialEq + 'static> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> Property<T> {
    /// Creates a property holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                next_id: Cell::new(0),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Borrows the current value.
    ///
    /// `f` must not call [`Property::set`] on this property.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Stores `value` and notifies subscribers if it differs from the current one.
    ///
    /// Returns `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        {
            let mut cur = self.inner.value.borrow_mut();
            if *cur == value {
                return false;
            }
            *cur = value;
        }
        self.notify();
        true
    }

    fn notify(&self) {
        // Snapshot both so subscribers may set properties or (un)subscribe.
        let value = self.get();
        let callbacks: Vec<Callback<T>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for cb in callbacks {
            cb(&value);
        }
    }

    /// Registers a change callback. The callback is not invoked for the current value.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0.wrapping_add(1));
        self.inner.subscribers.borrow_mut().push((id, Rc::new(f)));
        id
    }

    /// Removes a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = self.inner.subscribers.borrow_mut();
        let Some(i) = subs.iter().position(|(sid, _)| *sid == id) else {
            return false;
        };
        subs.remove(i);
        true
    }

    /// Removes every callback.
    pub fn clear_subscribers(&self) {
        self.inner.subscribers.borrow_mut().clear();
    }

    /// Number of registered callbacks.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Read-only view sharing this property's value.
    pub fn read_only(&self) -> ReadOnlyProperty<T> {
        ReadOnlyProperty {
            property: self.clone(),
        }
    }
}

/// Observable value that cannot be set through this handle.
#[derive(Clone, Debug)]
pub struct ReadOnlyProperty<T> {
    property: Property<T>,
}

impl<T: Clone + PartialEq + 'static> ReadOnlyProperty<T> {
    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.property.get()
    }

    /// Borrows the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.property.with(f)
    }

    /// Registers a change callback.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubscriptionId {
        self.property.subscribe(f)
    }

    /// Removes a callback.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.property.unsubscribe(id)
    }
}
