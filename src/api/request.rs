//! Request types for the Time & Billing Engine API.
//!
//! This module defines the JSON request structures for the compute,
//! summarize, and entry endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DEFAULT_OVERTIME_MULTIPLIER, RateCard, TimeEntry};

/// Request body for the `/compute` endpoint.
///
/// Carries one time entry together with the rate card to price it with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeRequest {
    /// The time entry to price.
    pub entry: TimeEntryRequest,
    /// The rate card in force for the entry.
    pub rate_card: RateCardRequest,
}

/// Request body for the `/summarize` endpoint.
///
/// A stateless batch: each element carries its own rate card, so entries
/// priced under different cards can be summarized together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// The (entry, rate card) pairs to summarize.
    pub entries: Vec<EntryRateRequest>,
}

/// One (entry, rate card) pair in a summarize request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRateRequest {
    /// The time entry to price.
    pub entry: TimeEntryRequest,
    /// The rate card in force for the entry.
    pub rate_card: RateCardRequest,
}

/// Time entry information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryRequest {
    /// Identifier of the employee the hours belong to.
    pub employee_id: String,
    /// Identifier of the project the hours are billed against.
    pub project_id: String,
    /// The calendar date the hours were worked.
    pub date: NaiveDate,
    /// Hours worked at the regular rate.
    pub regular_hours: Decimal,
    /// Hours worked beyond the regular threshold. Defaults to zero.
    #[serde(default)]
    pub overtime_hours: Decimal,
}

/// Rate card information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateCardRequest {
    /// Amount the organization pays per regular hour.
    pub hourly_labor_cost: Decimal,
    /// Amount the organization bills the client per regular hour.
    pub billing_rate: Decimal,
    /// Multiplier applied to both rates for overtime hours. Defaults to
    /// 1.5 when omitted.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
}

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_MULTIPLIER
}

impl From<TimeEntryRequest> for TimeEntry {
    fn from(req: TimeEntryRequest) -> Self {
        TimeEntry {
            employee_id: req.employee_id,
            project_id: req.project_id,
            date: req.date,
            regular_hours: req.regular_hours,
            overtime_hours: req.overtime_hours,
        }
    }
}

impl From<RateCardRequest> for RateCard {
    fn from(req: RateCardRequest) -> Self {
        RateCard {
            hourly_labor_cost: req.hourly_labor_cost,
            billing_rate: req.billing_rate,
            overtime_multiplier: req.overtime_multiplier,
        }
    }
}
