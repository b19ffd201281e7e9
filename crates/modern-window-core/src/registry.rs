//! Routing table from native window handles to window state.
//!
//! The window procedure only receives a handle; this table maps it back
//! to the instance that owns it. Entries are non-owning: the window owns
//! its state, and a lookup after the owner is gone simply misses.

use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Handle-keyed table of weak references.
///
/// Not `Sync`: all access happens on the UI thread that owns the windows.
#[derive(Debug)]
pub struct HandleRegistry<T> {
    entries: HashMap<usize, Weak<T>>,
}

impl<T> HandleRegistry<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Binds `handle` to `state`, replacing any previous binding.
    pub fn insert(&mut self, handle: usize, state: &Rc<T>) {
        self.entries.insert(handle, Rc::downgrade(state));
    }

    /// Returns the live state bound to `handle`.
    ///
    /// A binding whose owner was dropped is pruned and reported as absent.
    pub fn get(&mut self, handle: usize) -> Option<Rc<T>> {
        let state = self.entries.get(&handle)?.upgrade();
        if state.is_none() {
            self.entries.remove(&handle);
        }
        state
    }

    /// Erases the binding for `handle`. Returns whether one existed.
    pub fn remove(&mut self, handle: usize) -> bool {
        self.entries.remove(&handle).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for HandleRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_bound_state() {
        // Arrange
        let mut registry = HandleRegistry::new();
        let state = Rc::new("main");

        // Act
        registry.insert(0x1234, &state);

        // Assert
        assert_eq!(registry.get(0x1234).as_deref(), Some(&"main"));
        assert!(registry.get(0x9999).is_none());
    }

    #[test]
    fn registry_does_not_keep_state_alive() {
        // Arrange
        let mut registry = HandleRegistry::new();
        let state = Rc::new(42);
        registry.insert(1, &state);

        // Act
        drop(state);

        // Assert
        assert!(registry.get(1).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn remove_erases_binding() {
        // Arrange
        let mut registry = HandleRegistry::new();
        let state = Rc::new(());
        registry.insert(7, &state);

        // Act / Assert
        assert!(registry.remove(7));
        assert!(!registry.remove(7));
        assert!(registry.get(7).is_none());
        assert_eq!(Rc::strong_count(&state), 1);
    }

    #[test]
    fn rebinding_replaces_previous_state() {
        let mut registry = HandleRegistry::new();
        let first = Rc::new(1);
        let second = Rc::new(2);
        registry.insert(5, &first);
        registry.insert(5, &second);
        assert_eq!(registry.get(5).as_deref(), Some(&2));
        assert_eq!(registry.len(), 1);
    }
}
