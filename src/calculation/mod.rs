//! Calculation logic for the Time & Billing Engine.
//!
//! This module contains the pure functions that turn time entries and rate
//! cards into financial outcomes: per-entry labor cost, billed revenue, and
//! profit, aggregation of those results across a set of entries, and period
//! summaries pairing per-entry lines with totals.

mod aggregate;
mod entry_financials;
mod summary;

pub use aggregate::aggregate;
pub use entry_financials::compute_entry;
pub use summary::summarize;
