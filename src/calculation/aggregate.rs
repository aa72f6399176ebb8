//! Aggregation across a set of time entries.
//!
//! This module sums per-entry financials into the daily and period totals
//! the dashboard and exporters consume.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AggregateResult, RateCard, TimeEntry};

use super::entry_financials::compute_entry;

/// Aggregates financials across a set of (entry, rate card) pairs.
///
/// Every total is the sum of [`compute_entry`] applied to each pair, so
/// aggregation is commutative and associative over the input list: any
/// permutation of `pairs` produces identical totals. `employee_count`
/// counts distinct employee ids, `entry_count` counts pairs, and
/// `average_hours_per_entry` divides total hours by the entry count.
///
/// An empty input is not an error; it yields [`AggregateResult::empty`].
///
/// # Errors
///
/// Fails with the first validation error any pair produces. No partial
/// aggregate is returned.
///
/// # Examples
///
/// ```
/// use timebill_engine::calculation::aggregate;
/// use timebill_engine::models::{RateCard, TimeEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = RateCard {
///     hourly_labor_cost: Decimal::from_str("50.00").unwrap(),
///     billing_rate: Decimal::from_str("150.00").unwrap(),
///     overtime_multiplier: Decimal::from_str("1.5").unwrap(),
/// };
/// let entry = TimeEntry {
///     employee_id: "emp_001".to_string(),
///     project_id: "proj_acme".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     regular_hours: Decimal::from_str("8").unwrap(),
///     overtime_hours: Decimal::from_str("2").unwrap(),
/// };
///
/// let totals = aggregate(&[(entry, rate)]).unwrap();
/// assert_eq!(totals.entry_count, 1);
/// assert_eq!(totals.total_profit, Decimal::from_str("1100.00").unwrap());
/// ```
pub fn aggregate(pairs: &[(TimeEntry, RateCard)]) -> EngineResult<AggregateResult> {
    if pairs.is_empty() {
        return Ok(AggregateResult::empty());
    }

    let mut employees: HashSet<&str> = HashSet::new();
    let mut total_hours = Decimal::ZERO;
    let mut total_labor_cost = Decimal::ZERO;
    let mut total_revenue = Decimal::ZERO;
    let mut total_profit = Decimal::ZERO;

    for (entry, rate) in pairs {
        let result = compute_entry(entry, rate)?;
        employees.insert(entry.employee_id.as_str());
        total_hours += result.total_hours;
        total_labor_cost += result.labor_cost;
        total_revenue += result.revenue;
        total_profit += result.profit;
    }

    let entry_count = pairs.len();
    let average_hours_per_entry = total_hours / Decimal::from(entry_count as u64);

    Ok(AggregateResult {
        employee_count: employees.len(),
        entry_count,
        total_hours,
        total_labor_cost,
        total_revenue,
        total_profit,
        average_hours_per_entry,
    })
}
