//! Fetched-list state with the optimistic patch policy.

use crate::entities::Identifiable;
use crate::response::ListData;

/// Rows and total count of the last list fetch.
#[derive(Clone, Debug, Default)]
pub struct ListState<T> {
    pub rows: Vec<T>,
    pub count: u64,
}

impl<T: Identifiable> ListState<T> {
    pub fn new() -> Self {
        ListState {
            rows: Vec::new(),
            count: 0,
        }
    }

    /// Reconcile with a full refetch.
    pub fn replace(&mut self, data: ListData<T>) {
        self.rows = data.items;
        self.count = data.count;
    }

    /// Optimistic patch: after a successful mutation, only the affected
    /// field(s) of the displayed row update synchronously from the mutation
    /// response; every other field stays stale until the next full refetch.
    /// Returns false when the row is not in the current page.
    pub fn patch_row(&mut self, id: i64, patch: impl FnOnce(&mut T)) -> bool {
        match self.rows.iter_mut().find(|row| row.id() == id) {
            Some(row) => {
                patch(row);
                true
            }
            None => false,
        }
    }

    /// Drop a row after a successful delete, keeping the count in step.
    pub fn remove_row(&mut self, id: i64) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id() != id);
        if self.rows.len() < before {
            self.count = self.count.saturating_sub(1);
            true
        } else {
            false
        }
    }
}
