use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::property::{Property, ReadOnlyProperty, SubscriptionId};

/// Continuously maintained permission to issue a dialog request.
///
/// The gate is open while none of its named blockers is `true`. Each blocker
/// tracks a boolean property and the gate recomputes on every change, so
/// [`Gate::enabled`] always reflects the current inputs.
#[derive(Debug)]
pub struct Gate {
    blockers: Rc<RefCell<IndexMap<String, bool>>>,
    enabled: Property<bool>,
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}

impl Gate {
    /// Creates an open gate with no blockers.
    pub fn new() -> Self {
        Self {
            blockers: Rc::new(RefCell::new(IndexMap::new())),
            enabled: Property::new(true),
        }
    }

    /// Adds a named blocker driven by `source` (`true` blocks).
    ///
    /// Re-adding a name replaces its current value. The returned id belongs to
    /// `source` and must be released by the caller.
    pub fn add_blocker(&self, name: impl Into<String>, source: &Property<bool>) -> SubscriptionId {
        let name = name.into();
        self.blockers
            .borrow_mut()
            .insert(name.clone(), source.get());
        recompute(&self.blockers, &self.enabled);

        let blockers = Rc::clone(&self.blockers);
        let enabled = self.enabled.clone();
        source.subscribe(move |blocked| {
            if let Some(v) = blockers.borrow_mut().get_mut(&name) {
                *v = *blocked;
            }
            recompute(&blockers, &enabled);
        })
    }

    /// Returns `true` if no blocker is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Observable gate state.
    pub fn enabled(&self) -> ReadOnlyProperty<bool> {
        self.enabled.read_only()
    }

    /// Names of the blockers currently active, in registration order.
    pub fn active_blockers(&self) -> Vec<String> {
        self.blockers
            .borrow()
            .iter()
            .filter(|(_, blocked)| **blocked)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

fn recompute(blockers: &RefCell<IndexMap<String, bool>>, enabled: &Property<bool>) {
    let open = !blockers.borrow().values().any(|b| *b);
    enabled.set(open);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_single_blocker() {
        let gate = Gate::new();
        let view_error = Property::new(false);
        gate.add_blocker("view-error", &view_error);
        assert!(gate.is_enabled());

        view_error.set(true);
        assert!(!gate.is_enabled());
        assert_eq!(gate.active_blockers(), vec!["view-error".to_string()]);

        view_error.set(false);
        assert!(gate.is_enabled());
    }

    #[test]
    fn initial_blocked_source_closes_gate() {
        let gate = Gate::new();
        gate.add_blocker("busy", &Property::new(true));
        assert!(!gate.is_enabled());
    }

    #[test]
    fn all_blockers_must_clear() {
        let gate = Gate::new();
        let a = Property::new(true);
        let b = Property::new(true);
        gate.add_blocker("a", &a);
        gate.add_blocker("b", &b);

        a.set(false);
        assert!(!gate.is_enabled());
        b.set(false);
        assert!(gate.is_enabled());
    }

    #[test]
    fn enabled_is_observable() {
        let gate = Gate::new();
        let src = Property::new(false);
        gate.add_blocker("x", &src);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        gate.enabled().subscribe(move |v| sink.borrow_mut().push(*v));

        src.set(true);
        src.set(false);
        assert_eq!(*seen.borrow(), vec![false, true]);
    }
}
