//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, expense::ExpenseStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory expense store, shared by all route handlers.
    ///
    /// The store itself is not thread-safe, so every handler that touches it
    /// must go through this mutex.
    pub expense_store: Arc<Mutex<ExpenseStore>>,
}

impl AppState {
    /// Create a new [AppState] that owns `expense_store`.
    pub fn new(expense_store: ExpenseStore) -> Self {
        Self {
            expense_store: Arc::new(Mutex::new(expense_store)),
        }
    }

    /// Acquire the expense store lock.
    ///
    /// # Errors
    /// Returns [Error::StoreLock] if the lock is poisoned. The underlying
    /// error is logged here; clients only see a generic internal server
    /// error.
    pub(crate) fn lock_store(&self) -> Result<MutexGuard<'_, ExpenseStore>, Error> {
        self.expense_store.lock().map_err(|error| {
            tracing::error!("could not acquire expense store lock: {error}");
            Error::StoreLock
        })
    }
}
