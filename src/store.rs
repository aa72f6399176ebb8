//! In-memory time entry repository.
//!
//! The store holds the canonical collection of [`TimeEntry`] records keyed
//! by `(date, employee_id)`. It stores entries only; financial results are
//! always recomputed from the entry and the rate card in force, so there is
//! no derived state to invalidate on edit. The engine itself never touches
//! the store — callers pass entries in, which keeps the calculation logic
//! swappable onto a real datastore later.

use std::collections::BTreeMap;
use std::ops::Bound;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::TimeEntry;

/// An in-memory collection of time entries keyed by `(date, employee_id)`.
///
/// Each employee has at most one entry per calendar date; committing an
/// edit for an existing `(employee, date)` pair replaces the stored entry.
/// Keys are ordered by date first so daily and range queries are ordered
/// scans rather than full filters.
///
/// # Example
///
/// ```
/// use timebill_engine::store::TimesheetStore;
/// use timebill_engine::models::TimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut store = TimesheetStore::new();
/// let entry = TimeEntry {
///     employee_id: "emp_001".to_string(),
///     project_id: "proj_acme".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     regular_hours: Decimal::new(80, 1),
///     overtime_hours: Decimal::ZERO,
/// };
///
/// store.upsert(entry.clone()).unwrap();
/// assert_eq!(store.get("emp_001", entry.date), Some(&entry));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimesheetStore {
    entries: BTreeMap<(NaiveDate, String), TimeEntry>,
}

impl TimesheetStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for its `(employee, date)` pair.
    ///
    /// The entry is validated before it is stored. Returns the entry that
    /// was replaced, if one existed.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTimeEntry`] if the entry fails
    /// validation; the store is left unchanged.
    pub fn upsert(&mut self, entry: TimeEntry) -> EngineResult<Option<TimeEntry>> {
        entry.validate()?;
        let key = (entry.date, entry.employee_id.clone());
        Ok(self.entries.insert(key, entry))
    }

    /// Returns the stored entry for an employee on a date, if any.
    pub fn get(&self, employee_id: &str, date: NaiveDate) -> Option<&TimeEntry> {
        self.entries.get(&(date, employee_id.to_string()))
    }

    /// Removes and returns the entry for an employee on a date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EntryNotFound`] if no entry is stored for the
    /// pair.
    pub fn remove(&mut self, employee_id: &str, date: NaiveDate) -> EngineResult<TimeEntry> {
        self.entries
            .remove(&(date, employee_id.to_string()))
            .ok_or_else(|| EngineError::EntryNotFound {
                employee_id: employee_id.to_string(),
                date,
            })
    }

    /// Returns all entries for one calendar date, ordered by employee id.
    pub fn entries_on(&self, date: NaiveDate) -> Vec<&TimeEntry> {
        self.entries
            .range((Bound::Included((date, String::new())), Bound::Unbounded))
            .take_while(|((d, _), _)| *d == date)
            .map(|(_, entry)| entry)
            .collect()
    }

    /// Returns all entries in an inclusive date range, ordered by date then
    /// employee id. An inverted range (`from > to`) is simply empty.
    pub fn entries_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<&TimeEntry> {
        self.entries
            .range((Bound::Included((from, String::new())), Bound::Unbounded))
            .take_while(|((d, _), _)| *d <= to)
            .map(|(_, entry)| entry)
            .collect()
    }

    /// Returns all entries for one employee, ordered by date.
    pub fn entries_for_employee(&self, employee_id: &str) -> Vec<&TimeEntry> {
        self.entries
            .values()
            .filter(|entry| entry.employee_id == employee_id)
            .collect()
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all stored entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &TimeEntry> {
        self.entries.values()
    }
}
