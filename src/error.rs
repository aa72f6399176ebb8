//! Error types for the Time & Billing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing attendance
//! financials or loading the rate book.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Time & Billing Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timebill_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No rate card exists for the given employee and no default is configured.
    #[error("Rate card not found for employee '{employee_id}'")]
    RateCardNotFound {
        /// The employee id the lookup was for.
        employee_id: String,
    },

    /// A time entry contained invalid data (e.g. negative hours).
    #[error("Invalid time entry field '{field}': {message}")]
    InvalidTimeEntry {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A rate card contained invalid data (e.g. a negative rate).
    #[error("Invalid rate card field '{field}': {message}")]
    InvalidRateCard {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No time entry is stored for the given employee and date.
    #[error("Time entry not found for employee '{employee_id}' on {date}")]
    EntryNotFound {
        /// The employee id the lookup was for.
        employee_id: String,
        /// The date the lookup was for.
        date: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
