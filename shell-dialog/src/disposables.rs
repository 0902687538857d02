use crate::property::{Property, SubscriptionId};

/// Registry of release actions run in reverse registration order.
///
/// Actions run exactly once, on [`Disposables::dispose`] or on drop. An action
/// added after disposal runs immediately.
#[derive(Default)]
pub struct Disposables {
    entries: Vec<Box<dyn FnOnce()>>,
    disposed: bool,
}

impl Disposables {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a release action.
    pub fn add(&mut self, release: impl FnOnce() + 'static) {
        if self.disposed {
            release();
            return;
        }
        self.entries.push(Box::new(release));
    }

    /// Registers the removal of a property subscription.
    pub fn add_subscription<T>(&mut self, property: &Property<T>, id: SubscriptionId)
    where
        T: Clone + PartialEq + 'static,
    {
        let property = property.clone();
        self.add(move || {
            property.unsubscribe(id);
        });
    }

    /// Registers the release of every subscriber of a property.
    pub fn add_property<T>(&mut self, property: &Property<T>)
    where
        T: Clone + PartialEq + 'static,
    {
        let property = property.clone();
        self.add(move || property.clear_subscribers());
    }

    /// Runs all pending actions, last registered first.
    pub fn dispose(&mut self) {
        self.disposed = true;
        while let Some(release) = self.entries.pop() {
            release();
        }
    }

    /// Returns `true` once [`Disposables::dispose`] ran.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Number of pending actions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no actions are pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Drop for Disposables {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Disposables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposables")
            .field("pending", &self.entries.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl Fn(u32) -> Box<dyn FnOnce()>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let make = move |n: u32| {
            let sink = Rc::clone(&sink);
            Box::new(move || sink.borrow_mut().push(n)) as Box<dyn FnOnce()>
        };
        (log, make)
    }

    #[test]
    fn releases_in_reverse_order_once() {
        let (log, make) = recorder();
        let mut bag = Disposables::new();
        bag.add(make(1));
        bag.add(make(2));
        bag.add(make(3));
        bag.dispose();
        bag.dispose();
        assert_eq!(*log.borrow(), vec![3, 2, 1]);
        assert!(bag.is_disposed());
        assert!(bag.is_empty());
    }

    #[test]
    fn drop_disposes() {
        let (log, make) = recorder();
        {
            let mut bag = Disposables::new();
            bag.add(make(1));
            bag.add(make(2));
        }
        assert_eq!(*log.borrow(), vec![2, 1]);
    }

    #[test]
    fn add_after_dispose_runs_immediately() {
        let (log, make) = recorder();
        let mut bag = Disposables::new();
        bag.dispose();
        bag.add(make(7));
        assert_eq!(*log.borrow(), vec![7]);
    }

    #[test]
    fn subscription_entries_unsubscribe() {
        let p = Property::new(0u8);
        let mut bag = Disposables::new();
        let id = p.subscribe(|_| {});
        bag.add_subscription(&p, id);
        p.subscribe(|_| {});
        bag.add_property(&p);
        assert_eq!(p.subscriber_count(), 2);
        bag.dispose();
        assert_eq!(p.subscriber_count(), 0);
    }
}
