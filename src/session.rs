//! Bearer session store with exactly-once sign-out.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Seam for the application's sign-out side effect (clear cookies, redirect to
/// re-auth, ...). Fired at most once per installed session.
#[async_trait]
pub trait SignOutHook: Send + Sync {
    async fn signed_out(&self);
}

/// Server-issued bearer credential. Expiry is informational; the backend's 401
/// is authoritative.
#[derive(Clone, Debug)]
pub struct Session {
    pub access_token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    session: Mutex<Option<Session>>,
    signed_out: AtomicBool,
    hook: Mutex<Option<Arc<dyn SignOutHook>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore::default()
    }

    pub fn set_hook(&self, hook: Arc<dyn SignOutHook>) {
        *lock(&self.inner.hook) = Some(hook);
    }

    /// Install a session and re-arm the sign-out hook.
    pub fn set_session(&self, session: Session) {
        *lock(&self.inner.session) = Some(session);
        self.inner.signed_out.store(false, Ordering::SeqCst);
    }

    pub fn token(&self) -> Option<String> {
        lock(&self.inner.session)
            .as_ref()
            .map(|s| s.access_token.clone())
    }

    pub fn is_signed_out(&self) -> bool {
        self.inner.signed_out.load(Ordering::SeqCst)
    }

    /// Terminate the session. The hook fires exactly once no matter how many
    /// concurrent callers observe a 401 in the same tick.
    pub async fn sign_out(&self) {
        if self.inner.signed_out.swap(true, Ordering::SeqCst) {
            return;
        }
        *lock(&self.inner.session) = None;
        tracing::warn!("session terminated, signing out");
        let hook = lock(&self.inner.hook).clone();
        if let Some(hook) = hook {
            hook.signed_out().await;
        }
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}
