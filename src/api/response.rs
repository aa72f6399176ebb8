//! Response types for the Time & Billing Engine API.
//!
//! This module defines the response envelopes, the non-fatal warnings the
//! API attaches to valid-but-notable results, and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    AggregateResult, EntryFinancials, FinancialResult, PeriodSummary, RateCard, TimeEntry,
};

/// A non-fatal warning attached to a successful response.
///
/// Warnings flag valid data the caller may want to surface — a loss-making
/// entry or a rate card billed below cost. They never change the computed
/// numbers and never turn a response into an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl ApiWarning {
    /// Warning for a rate card that bills below its labor cost.
    pub fn rate_below_cost(card: &RateCard) -> Self {
        Self {
            code: "RATE_BELOW_COST".to_string(),
            message: format!(
                "Billing rate {} is below hourly labor cost {}",
                card.billing_rate, card.hourly_labor_cost
            ),
            severity: "medium".to_string(),
        }
    }

    /// Warning for a single entry that cost more in pay than it billed.
    pub fn entry_loss(entry: &TimeEntry, financials: &FinancialResult) -> Self {
        Self {
            code: "ENTRY_LOSS".to_string(),
            message: format!(
                "Entry for employee '{}' on {} has negative profit {}",
                entry.employee_id, entry.date, financials.profit
            ),
            severity: "medium".to_string(),
        }
    }

    /// Warning for a summarized period with a negative total profit.
    pub fn period_loss(totals: &AggregateResult) -> Self {
        Self {
            code: "PERIOD_LOSS".to_string(),
            message: format!(
                "Period total profit is negative: {}",
                totals.total_profit
            ),
            severity: "high".to_string(),
        }
    }
}

/// Response envelope for single-entry computations.
///
/// Returned by `/compute` and the entry endpoints that recompute on a
/// committed edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeResponse {
    /// Unique identifier for this computation.
    pub computation_id: Uuid,
    /// When the computation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The time entry the result was computed from.
    pub entry: TimeEntry,
    /// The computed financials.
    pub financials: FinancialResult,
    /// Non-fatal warnings about the result.
    pub warnings: Vec<ApiWarning>,
}

impl ComputeResponse {
    /// Builds the envelope for one computed entry, attaching loss and
    /// below-cost warnings as applicable.
    pub fn new(entry: TimeEntry, rate: &RateCard, financials: FinancialResult) -> Self {
        let mut warnings = Vec::new();
        if rate.bills_below_cost() {
            warnings.push(ApiWarning::rate_below_cost(rate));
        }
        if financials.is_loss() {
            warnings.push(ApiWarning::entry_loss(&entry, &financials));
        }

        Self {
            computation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            entry,
            financials,
            warnings,
        }
    }
}

/// Response envelope for summaries.
///
/// Returned by `/summarize` and the store-backed summary endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Unique identifier for this summary.
    pub summary_id: Uuid,
    /// When the summary was produced.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// One line per summarized entry, in input order.
    pub lines: Vec<EntryFinancials>,
    /// Aggregated totals over all lines.
    pub totals: AggregateResult,
    /// Non-fatal warnings about the result.
    pub warnings: Vec<ApiWarning>,
}

impl SummaryResponse {
    /// Builds the envelope for a period summary, attaching per-line loss
    /// warnings and a period-loss warning as applicable.
    pub fn new(summary: PeriodSummary) -> Self {
        let mut warnings = Vec::new();
        for line in &summary.lines {
            if line.financials.is_loss() {
                warnings.push(ApiWarning::entry_loss(&line.entry, &line.financials));
            }
        }
        if summary.totals.is_loss() {
            warnings.push(ApiWarning::period_loss(&summary.totals));
        }

        Self {
            summary_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            lines: summary.lines,
            totals: summary.totals,
            warnings,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::RateCardNotFound { employee_id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RATE_CARD_NOT_FOUND",
                    format!("Rate card not found for employee '{}'", employee_id),
                    "The employee has no rate card and no default card is configured",
                ),
            },
            EngineError::InvalidTimeEntry { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIME_ENTRY",
                    format!("Invalid time entry field '{}': {}", field, message),
                    "The time entry contains invalid data",
                ),
            },
            EngineError::InvalidRateCard { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RATE_CARD",
                    format!("Invalid rate card field '{}': {}", field, message),
                    "The rate card contains invalid data",
                ),
            },
            EngineError::EntryNotFound { employee_id, date } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "ENTRY_NOT_FOUND",
                    format!(
                        "Time entry not found for employee '{}' on {}",
                        employee_id, date
                    ),
                    "No entry is stored for the requested employee and date",
                ),
            },
        }
    }
}
