//! Explicit application-level stores: loading overlay, per-feature dialog
//! state, and the fetched-list state with its optimistic patch policy.

mod dialog;
mod list;
mod loading;

pub use dialog::{DialogState, DialogStore};
pub use list::ListState;
pub use loading::{LoadingStore, OverlayGuard, Subscription};
