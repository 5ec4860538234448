//! Full-screen loading overlay as an explicit observable store.
//!
//! Replaces the original's bare module-level listener list. `show`/`hide`
//! nest: the overlay stays visible while any request is in flight.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};

type Listener = Arc<dyn Fn(bool) + Send + Sync>;

#[derive(Default)]
struct LoadingInner {
    depth: u32,
    next_id: u64,
    subscribers: HashMap<u64, Listener>,
}

#[derive(Clone, Default)]
pub struct LoadingStore {
    inner: Arc<Mutex<LoadingInner>>,
}

impl LoadingStore {
    pub fn new() -> Self {
        LoadingStore::default()
    }

    pub fn show(&self) {
        let listeners = {
            let mut inner = lock(&self.inner);
            inner.depth += 1;
            if inner.depth == 1 {
                snapshot(&inner)
            } else {
                Vec::new()
            }
        };
        notify(&listeners, true);
    }

    pub fn hide(&self) {
        let listeners = {
            let mut inner = lock(&self.inner);
            inner.depth = inner.depth.saturating_sub(1);
            if inner.depth == 0 {
                snapshot(&inner)
            } else {
                Vec::new()
            }
        };
        notify(&listeners, false);
    }

    pub fn is_visible(&self) -> bool {
        lock(&self.inner).depth > 0
    }

    /// Register a visibility listener. The subscription ends when the returned
    /// guard drops, tying listener lifecycle to component mount/unmount.
    pub fn subscribe(&self, listener: impl Fn(bool) + Send + Sync + 'static) -> Subscription {
        let id = {
            let mut inner = lock(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.insert(id, Arc::new(listener));
            id
        };
        Subscription {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Show the overlay for the duration of the returned guard.
    pub fn begin(&self) -> OverlayGuard {
        self.show();
        OverlayGuard {
            store: self.clone(),
        }
    }
}

fn snapshot(inner: &LoadingInner) -> Vec<Listener> {
    inner.subscribers.values().cloned().collect()
}

// Listeners run outside the lock so they may call back into the store.
fn notify(listeners: &[Listener], visible: bool) {
    for listener in listeners {
        listener(visible);
    }
}

fn lock(m: &Mutex<LoadingInner>) -> std::sync::MutexGuard<'_, LoadingInner> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct Subscription {
    inner: Weak<Mutex<LoadingInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            lock(&inner).subscribers.remove(&self.id);
        }
    }
}

/// Keeps the overlay shown while a request is in flight; hides on drop, so
/// every exit path of a request balances its `show`.
pub struct OverlayGuard {
    store: LoadingStore,
}

impl Drop for OverlayGuard {
    fn drop(&mut self) {
        self.store.hide();
    }
}
