//! Per-entry financials calculation.
//!
//! This module provides the core function for turning one time entry and
//! the rate card in force into total hours, labor cost, billed revenue,
//! and profit.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{FinancialResult, RateCard, TimeEntry};

/// Computes the financial outcome of a single time entry.
///
/// Regular hours are paid and billed at the card's base rates; overtime
/// hours are paid and billed at the base rates scaled by the card's
/// overtime multiplier. Profit is revenue minus labor cost and may be
/// negative, in which case it is returned as-is rather than clamped.
///
/// The function is pure: it reads its arguments, performs decimal
/// arithmetic, and returns. There is no logging, no rounding step, and no
/// stored state.
///
/// # Arguments
///
/// * `entry` - The time entry carrying regular and overtime hours
/// * `rate` - The rate card in force for the entry's employee
///
/// # Errors
///
/// Fails fast with [`EngineError::InvalidTimeEntry`] or
/// [`EngineError::InvalidRateCard`] before any arithmetic runs, so a
/// rejected call never produces a partial result.
///
/// [`EngineError::InvalidTimeEntry`]: crate::error::EngineError::InvalidTimeEntry
/// [`EngineError::InvalidRateCard`]: crate::error::EngineError::InvalidRateCard
///
/// # Examples
///
/// ## Standard day with overtime
///
/// ```
/// use timebill_engine::calculation::compute_entry;
/// use timebill_engine::models::{RateCard, TimeEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let entry = TimeEntry {
///     employee_id: "emp_001".to_string(),
///     project_id: "proj_acme".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     regular_hours: Decimal::from_str("8").unwrap(),
///     overtime_hours: Decimal::from_str("2").unwrap(),
/// };
/// let rate = RateCard {
///     hourly_labor_cost: Decimal::from_str("50.00").unwrap(),
///     billing_rate: Decimal::from_str("150.00").unwrap(),
///     overtime_multiplier: Decimal::from_str("1.5").unwrap(),
/// };
///
/// let result = compute_entry(&entry, &rate).unwrap();
/// assert_eq!(result.total_hours, Decimal::from_str("10").unwrap());
/// assert_eq!(result.labor_cost, Decimal::from_str("550.00").unwrap());
/// assert_eq!(result.revenue, Decimal::from_str("1650.00").unwrap());
/// assert_eq!(result.profit, Decimal::from_str("1100.00").unwrap());
/// ```
///
/// ## Loss-making rate card
///
/// ```
/// use timebill_engine::calculation::compute_entry;
/// use timebill_engine::models::{RateCard, TimeEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let entry = TimeEntry {
///     employee_id: "emp_002".to_string(),
///     project_id: "proj_acme".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     regular_hours: Decimal::from_str("8").unwrap(),
///     overtime_hours: Decimal::ZERO,
/// };
/// let rate = RateCard {
///     hourly_labor_cost: Decimal::from_str("100").unwrap(),
///     billing_rate: Decimal::from_str("80").unwrap(),
///     overtime_multiplier: Decimal::from_str("1.5").unwrap(),
/// };
///
/// let result = compute_entry(&entry, &rate).unwrap();
/// assert_eq!(result.profit, Decimal::from_str("-160").unwrap());
/// ```
pub fn compute_entry(entry: &TimeEntry, rate: &RateCard) -> EngineResult<FinancialResult> {
    // Reject bad inputs before any arithmetic
    entry.validate()?;
    rate.validate()?;

    let total_hours = entry.regular_hours + entry.overtime_hours;

    // Overtime hours are paid and billed at the multiplied rates
    let labor_cost = entry.regular_hours * rate.hourly_labor_cost
        + entry.overtime_hours * rate.overtime_labor_rate();
    let revenue = entry.regular_hours * rate.billing_rate
        + entry.overtime_hours * rate.overtime_billing_rate();

    Ok(FinancialResult {
        total_hours,
        labor_cost,
        revenue,
        profit: revenue - labor_cost,
    })
}
