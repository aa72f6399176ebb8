//! Financial result models for the Time & Billing Engine.
//!
//! This module contains the [`FinancialResult`] type produced for a single
//! time entry, together with the aggregate structures built from it:
//! [`AggregateResult`], [`EntryFinancials`], and [`PeriodSummary`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TimeEntry;

/// The financial outcome of a single time entry.
///
/// Every field is derived from the entry's hours and the rate card in force;
/// nothing here is stored or cached. `profit` may be negative and is never
/// clamped, so a loss-making entry surfaces exactly as recorded.
///
/// # Example
///
/// ```
/// use timebill_engine::models::FinancialResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = FinancialResult {
///     total_hours: Decimal::from_str("10").unwrap(),
///     labor_cost: Decimal::from_str("550.00").unwrap(),
///     revenue: Decimal::from_str("1650.00").unwrap(),
///     profit: Decimal::from_str("1100.00").unwrap(),
/// };
/// assert!(!result.is_loss());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialResult {
    /// Regular plus overtime hours for the entry.
    pub total_hours: Decimal,
    /// What the hours cost the organization in pay.
    pub labor_cost: Decimal,
    /// What the organization bills the client for the hours.
    pub revenue: Decimal,
    /// Revenue minus labor cost. Negative when the entry is billed below
    /// cost.
    pub profit: Decimal,
}

impl FinancialResult {
    /// Returns true if the entry cost more in pay than it billed.
    pub fn is_loss(&self) -> bool {
        self.profit < Decimal::ZERO
    }
}

/// Aggregated totals across a set of time entries.
///
/// Every total is the sum of the per-entry results; the aggregate of an
/// empty set is all zeros rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Number of distinct employees in the aggregated set.
    pub employee_count: usize,
    /// Number of entries aggregated.
    pub entry_count: usize,
    /// Sum of total hours across all entries.
    pub total_hours: Decimal,
    /// Sum of labor cost across all entries.
    pub total_labor_cost: Decimal,
    /// Sum of billed revenue across all entries.
    pub total_revenue: Decimal,
    /// Sum of profit across all entries. Negative when the set as a whole
    /// is billed below cost.
    pub total_profit: Decimal,
    /// `total_hours / entry_count`, or zero for an empty set.
    pub average_hours_per_entry: Decimal,
}

impl AggregateResult {
    /// Returns the aggregate of an empty set: all counts and totals zero.
    pub fn empty() -> Self {
        Self {
            employee_count: 0,
            entry_count: 0,
            total_hours: Decimal::ZERO,
            total_labor_cost: Decimal::ZERO,
            total_revenue: Decimal::ZERO,
            total_profit: Decimal::ZERO,
            average_hours_per_entry: Decimal::ZERO,
        }
    }

    /// Returns true if the aggregated set cost more in pay than it billed.
    pub fn is_loss(&self) -> bool {
        self.total_profit < Decimal::ZERO
    }
}

/// One line of a period summary: a time entry paired with its financials.
///
/// This is the row shape an exporter consumes directly, so its field names
/// and types are part of the engine's stable output contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryFinancials {
    /// The time entry the line was computed from.
    pub entry: TimeEntry,
    /// The financial outcome of that entry.
    pub financials: FinancialResult,
}

/// A full summary over a set of entries: per-entry lines plus totals.
///
/// The totals always equal the aggregate of the same entries; the two are
/// computed together and never diverge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// One line per aggregated entry, in input order.
    pub lines: Vec<EntryFinancials>,
    /// Aggregated totals over all lines.
    pub totals: AggregateResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    /// Helper function to create Decimal values from strings
    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_entry() -> TimeEntry {
        TimeEntry {
            employee_id: "emp_001".to_string(),
            project_id: "proj_acme".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            regular_hours: dec("8"),
            overtime_hours: dec("2"),
        }
    }

    fn create_sample_result() -> FinancialResult {
        FinancialResult {
            total_hours: dec("10"),
            labor_cost: dec("550.00"),
            revenue: dec("1650.00"),
            profit: dec("1100.00"),
        }
    }

    #[test]
    fn test_profitable_result_is_not_a_loss() {
        assert!(!create_sample_result().is_loss());
    }

    #[test]
    fn test_negative_profit_is_a_loss() {
        let result = FinancialResult {
            total_hours: dec("8"),
            labor_cost: dec("800.00"),
            revenue: dec("640.00"),
            profit: dec("-160.00"),
        };
        assert!(result.is_loss());
    }

    #[test]
    fn test_zero_profit_is_not_a_loss() {
        let result = FinancialResult {
            total_hours: dec("8"),
            labor_cost: dec("400.00"),
            revenue: dec("400.00"),
            profit: dec("0"),
        };
        assert!(!result.is_loss());
    }

    #[test]
    fn test_empty_aggregate_is_all_zeros() {
        let empty = AggregateResult::empty();
        assert_eq!(empty.employee_count, 0);
        assert_eq!(empty.entry_count, 0);
        assert_eq!(empty.total_hours, Decimal::ZERO);
        assert_eq!(empty.total_labor_cost, Decimal::ZERO);
        assert_eq!(empty.total_revenue, Decimal::ZERO);
        assert_eq!(empty.total_profit, Decimal::ZERO);
        assert_eq!(empty.average_hours_per_entry, Decimal::ZERO);
        assert!(!empty.is_loss());
    }

    #[test]
    fn test_financial_result_serialization() {
        let result = create_sample_result();

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"total_hours\":\"10\""));
        assert!(json.contains("\"labor_cost\":\"550.00\""));
        assert!(json.contains("\"revenue\":\"1650.00\""));
        assert!(json.contains("\"profit\":\"1100.00\""));
    }

    #[test]
    fn test_financial_result_deserialization() {
        let json = r#"{
            "total_hours": "10",
            "labor_cost": "550.00",
            "revenue": "1650.00",
            "profit": "1100.00"
        }"#;

        let result: FinancialResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.total_hours, dec("10"));
        assert_eq!(result.labor_cost, dec("550.00"));
        assert_eq!(result.revenue, dec("1650.00"));
        assert_eq!(result.profit, dec("1100.00"));
    }

    #[test]
    fn test_negative_profit_survives_round_trip() {
        let result = FinancialResult {
            total_hours: dec("8"),
            labor_cost: dec("800"),
            revenue: dec("640"),
            profit: dec("-160"),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"profit\":\"-160\""));

        let deserialized: FinancialResult = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.profit, dec("-160"));
        assert!(deserialized.is_loss());
    }

    #[test]
    fn test_aggregate_result_serialization() {
        let aggregate = AggregateResult {
            employee_count: 2,
            entry_count: 3,
            total_hours: dec("26"),
            total_labor_cost: dec("1300.00"),
            total_revenue: dec("3900.00"),
            total_profit: dec("2600.00"),
            average_hours_per_entry: dec("8.6666666666666666666666666667"),
        };

        let json = serde_json::to_string(&aggregate).unwrap();
        assert!(json.contains("\"employee_count\":2"));
        assert!(json.contains("\"entry_count\":3"));
        assert!(json.contains("\"total_hours\":\"26\""));
        assert!(json.contains("\"total_profit\":\"2600.00\""));
    }

    #[test]
    fn test_entry_financials_serialization() {
        let line = EntryFinancials {
            entry: create_sample_entry(),
            financials: create_sample_result(),
        };

        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"entry\":{"));
        assert!(json.contains("\"employee_id\":\"emp_001\""));
        assert!(json.contains("\"financials\":{"));
        assert!(json.contains("\"profit\":\"1100.00\""));
    }

    #[test]
    fn test_period_summary_totals_match_lines() {
        let lines = vec![
            EntryFinancials {
                entry: create_sample_entry(),
                financials: create_sample_result(),
            },
            EntryFinancials {
                entry: TimeEntry {
                    employee_id: "emp_002".to_string(),
                    date: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
                    regular_hours: dec("8"),
                    overtime_hours: dec("0"),
                    ..create_sample_entry()
                },
                financials: FinancialResult {
                    total_hours: dec("8"),
                    labor_cost: dec("400.00"),
                    revenue: dec("1200.00"),
                    profit: dec("800.00"),
                },
            },
        ];

        let summed_profit: Decimal = lines.iter().map(|l| l.financials.profit).sum();
        assert_eq!(summed_profit, dec("1900.00"));

        let summary = PeriodSummary {
            lines,
            totals: AggregateResult {
                employee_count: 2,
                entry_count: 2,
                total_hours: dec("18"),
                total_labor_cost: dec("950.00"),
                total_revenue: dec("2850.00"),
                total_profit: dec("1900.00"),
                average_hours_per_entry: dec("9"),
            },
        };

        assert_eq!(summary.totals.total_profit, summed_profit);
        assert_eq!(summary.lines.len(), summary.totals.entry_count);
    }

    #[test]
    fn test_period_summary_deserialization() {
        let json = r#"{
            "lines": [],
            "totals": {
                "employee_count": 0,
                "entry_count": 0,
                "total_hours": "0",
                "total_labor_cost": "0",
                "total_revenue": "0",
                "total_profit": "0",
                "average_hours_per_entry": "0"
            }
        }"#;

        let summary: PeriodSummary = serde_json::from_str(json).unwrap();
        assert!(summary.lines.is_empty());
        assert_eq!(summary.totals, AggregateResult::empty());
    }
}
