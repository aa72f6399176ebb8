//! Application state for the Time & Billing Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::RateBook;
use crate::store::TimesheetStore;

/// Shared application state.
///
/// Contains the loaded rate book and the in-memory time entry store. The
/// store sits behind an async `RwLock` that handlers hold only around
/// store access; the calculation functions themselves are pure and run
/// outside the lock wherever possible.
#[derive(Clone)]
pub struct AppState {
    rate_book: Arc<RateBook>,
    store: Arc<RwLock<TimesheetStore>>,
}

impl AppState {
    /// Creates a new application state with the given rate book and an
    /// empty store.
    pub fn new(rate_book: RateBook) -> Self {
        Self {
            rate_book: Arc::new(rate_book),
            store: Arc::new(RwLock::new(TimesheetStore::new())),
        }
    }

    /// Returns a reference to the rate book.
    pub fn rate_book(&self) -> &RateBook {
        &self.rate_book
    }

    /// Returns the shared time entry store.
    pub fn store(&self) -> &RwLock<TimesheetStore> {
        &self.store
    }
}
