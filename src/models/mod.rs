//! Core data models for the Time & Billing Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod financials;
mod rate_card;
mod time_entry;

pub use financials::{AggregateResult, EntryFinancials, FinancialResult, PeriodSummary};
pub use rate_card::{DEFAULT_OVERTIME_MULTIPLIER, RateCard};
pub use time_entry::TimeEntry;
