//! Per-feature dialog state machine: `Closed | Open(target?)`.
//!
//! Injected by value instead of living in ambient context, so each feature's
//! dialog flow is testable in isolation.

use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone, Debug, PartialEq)]
pub enum DialogState<T> {
    Closed,
    /// Open without a target for the create flow, with a target for edit.
    Open(Option<T>),
}

#[derive(Clone)]
pub struct DialogStore<T> {
    state: Arc<Mutex<DialogState<T>>>,
}

impl<T> Default for DialogStore<T> {
    fn default() -> Self {
        DialogStore {
            state: Arc::new(Mutex::new(DialogState::Closed)),
        }
    }
}

impl<T: Clone> DialogStore<T> {
    pub fn new() -> Self {
        DialogStore::default()
    }

    /// Open the create dialog (no edit target).
    pub fn open_blank(&self) {
        *self.lock() = DialogState::Open(None);
    }

    /// Open the edit dialog for one row.
    pub fn open(&self, target: T) {
        *self.lock() = DialogState::Open(Some(target));
    }

    pub fn close(&self) {
        *self.lock() = DialogState::Closed;
    }

    pub fn state(&self) -> DialogState<T> {
        self.lock().clone()
    }

    pub fn is_open(&self) -> bool {
        !matches!(*self.lock(), DialogState::Closed)
    }

    /// The row being edited, if any.
    pub fn target(&self) -> Option<T> {
        match &*self.lock() {
            DialogState::Open(target) => target.clone(),
            DialogState::Closed => None,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DialogState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let store: DialogStore<i64> = DialogStore::new();
        assert_eq!(store.state(), DialogState::Closed);
        assert!(!store.is_open());
    }

    #[test]
    fn open_blank_has_no_target() {
        let store: DialogStore<i64> = DialogStore::new();
        store.open_blank();
        assert!(store.is_open());
        assert_eq!(store.target(), None);
    }

    #[test]
    fn open_with_target_then_close() {
        let store = DialogStore::new();
        store.open(42i64);
        assert_eq!(store.state(), DialogState::Open(Some(42)));
        assert_eq!(store.target(), Some(42));
        store.close();
        assert_eq!(store.state(), DialogState::Closed);
    }

    #[test]
    fn reopening_replaces_the_target() {
        let store = DialogStore::new();
        store.open(1i64);
        store.open(2i64);
        assert_eq!(store.target(), Some(2));
    }
}
