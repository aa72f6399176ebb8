//! Time entry model.
//!
//! This module defines the TimeEntry struct representing one employee's
//! attendance record for a single calendar date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents one employee's recorded hours for one calendar date.
///
/// Hours are split into regular and overtime portions. Both are non-negative
/// decimals with no upper bound imposed here; input layers may clamp to a
/// working-day ceiling, but the engine accepts whatever was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Identifier of the employee the hours belong to.
    pub employee_id: String,
    /// Identifier of the project the hours are billed against.
    pub project_id: String,
    /// The calendar date the hours were worked.
    pub date: NaiveDate,
    /// Hours worked at the regular rate.
    pub regular_hours: Decimal,
    /// Hours worked beyond the regular threshold, paid and billed at the
    /// overtime multiplier.
    pub overtime_hours: Decimal,
}

impl TimeEntry {
    /// Returns the total hours recorded on this entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use timebill_engine::models::TimeEntry;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let entry = TimeEntry {
    ///     employee_id: "emp_001".to_string(),
    ///     project_id: "proj_acme".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     regular_hours: Decimal::new(80, 1),  // 8.0
    ///     overtime_hours: Decimal::new(20, 1), // 2.0
    /// };
    /// assert_eq!(entry.total_hours(), Decimal::new(100, 1)); // 10.0
    /// ```
    pub fn total_hours(&self) -> Decimal {
        self.regular_hours + self.overtime_hours
    }

    /// Validates the time entry invariants.
    ///
    /// Negative hours are rejected rather than clamped; silently coercing a
    /// negative input would hide a caller bug.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTimeEntry`] if `employee_id` is empty
    /// or either hours field is negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.employee_id.is_empty() {
            return Err(EngineError::InvalidTimeEntry {
                field: "employee_id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.regular_hours < Decimal::ZERO {
            return Err(EngineError::InvalidTimeEntry {
                field: "regular_hours".to_string(),
                message: format!("must not be negative, got {}", self.regular_hours),
            });
        }
        if self.overtime_hours < Decimal::ZERO {
            return Err(EngineError::InvalidTimeEntry {
                field: "overtime_hours".to_string(),
                message: format!("must not be negative, got {}", self.overtime_hours),
            });
        }
        Ok(())
    }
}
