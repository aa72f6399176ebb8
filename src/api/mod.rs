//! HTTP API module for the Time & Billing Engine.
//!
//! This module provides the REST endpoints for pricing time entries,
//! maintaining the stored timesheet, and producing daily and period
//! summaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ComputeRequest, EntryRateRequest, RateCardRequest, SummarizeRequest, TimeEntryRequest};
pub use response::{ApiError, ApiWarning, ComputeResponse, SummaryResponse};
pub use state::AppState;
