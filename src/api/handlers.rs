//! HTTP request handlers for the Time & Billing Engine API.
//!
//! This module contains the handler functions for all API endpoints: the
//! stateless compute and summarize endpoints, the store-backed entry
//! endpoints that recompute financials on every committed edit, and the
//! daily and range summary endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_entry, summarize};
use crate::error::EngineError;
use crate::models::{EntryFinancials, RateCard, TimeEntry};

use super::request::{ComputeRequest, SummarizeRequest, TimeEntryRequest};
use super::response::{ApiError, ApiErrorResponse, ComputeResponse, SummaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/compute", post(compute_handler))
        .route("/summarize", post(summarize_handler))
        .route("/entries", put(upsert_entry_handler))
        .route("/entries/:employee_id", get(list_entries_handler))
        .route(
            "/entries/:employee_id/:date",
            get(get_entry_handler).delete(delete_entry_handler),
        )
        .route("/summary/day/:date", get(day_summary_handler))
        .route("/summary/range", get(range_summary_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to a 400 response.
fn map_json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
}

/// Logs an engine error under the request's correlation id and converts it
/// to its HTTP shape.
fn engine_error(correlation_id: Uuid, err: EngineError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    err.into()
}

/// Handler for POST /compute.
///
/// Prices one time entry against the rate card supplied in the request.
async fn compute_handler(
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compute request");

    let Json(request) = payload.map_err(|r| map_json_rejection(correlation_id, r))?;
    let entry: TimeEntry = request.entry.into();
    let rate: RateCard = request.rate_card.into();

    let start_time = Instant::now();
    let financials =
        compute_entry(&entry, &rate).map_err(|err| engine_error(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %entry.employee_id,
        total_hours = %financials.total_hours,
        profit = %financials.profit,
        duration_us = start_time.elapsed().as_micros(),
        "Compute completed"
    );
    Ok(Json(ComputeResponse::new(entry, &rate, financials)))
}

/// Handler for POST /summarize.
///
/// Stateless batch: summarizes the (entry, rate card) pairs supplied in
/// the request without touching the store.
async fn summarize_handler(
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summarize request");

    let Json(request) = payload.map_err(|r| map_json_rejection(correlation_id, r))?;
    let pairs: Vec<(TimeEntry, RateCard)> = request
        .entries
        .into_iter()
        .map(|pair| (pair.entry.into(), pair.rate_card.into()))
        .collect();

    let start_time = Instant::now();
    let summary = summarize(&pairs).map_err(|err| engine_error(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        entry_count = summary.totals.entry_count,
        total_profit = %summary.totals.total_profit,
        duration_us = start_time.elapsed().as_micros(),
        "Summarize completed"
    );
    Ok(Json(SummaryResponse::new(summary)))
}

/// Handler for PUT /entries.
///
/// The committed-edit boundary: resolves the employee's rate card from the
/// rate book, recomputes financials synchronously, and upserts the entry
/// into the store. Validation failures leave the store unchanged.
async fn upsert_entry_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimeEntryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing entry upsert");

    let Json(request) = payload.map_err(|r| map_json_rejection(correlation_id, r))?;
    let entry: TimeEntry = request.into();

    let rate = state
        .rate_book()
        .rate_card_for(&entry.employee_id)
        .map_err(|err| engine_error(correlation_id, err))?;

    // Compute first so an invalid entry is rejected before it is stored
    let financials =
        compute_entry(&entry, &rate).map_err(|err| engine_error(correlation_id, err))?;

    let replaced = state
        .store()
        .write()
        .await
        .upsert(entry.clone())
        .map_err(|err| engine_error(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %entry.employee_id,
        date = %entry.date,
        replaced = replaced.is_some(),
        profit = %financials.profit,
        "Entry upserted"
    );
    Ok(Json(ComputeResponse::new(entry, &rate, financials)))
}

/// Handler for GET /entries/:employee_id.
///
/// Returns all stored entries for the employee, each with freshly
/// recomputed financials.
async fn list_entries_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let rate = state
        .rate_book()
        .rate_card_for(&employee_id)
        .map_err(ApiErrorResponse::from)?;

    let store = state.store().read().await;
    let mut lines = Vec::new();
    for entry in store.entries_for_employee(&employee_id) {
        let financials = compute_entry(entry, &rate).map_err(ApiErrorResponse::from)?;
        lines.push(EntryFinancials {
            entry: entry.clone(),
            financials,
        });
    }

    Ok(Json(lines))
}

/// Handler for GET /entries/:employee_id/:date.
async fn get_entry_handler(
    State(state): State<AppState>,
    Path((employee_id, date)): Path<(String, NaiveDate)>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let rate = state
        .rate_book()
        .rate_card_for(&employee_id)
        .map_err(ApiErrorResponse::from)?;

    let entry = state
        .store()
        .read()
        .await
        .get(&employee_id, date)
        .cloned()
        .ok_or_else(|| {
            ApiErrorResponse::from(EngineError::EntryNotFound {
                employee_id: employee_id.clone(),
                date,
            })
        })?;

    let financials = compute_entry(&entry, &rate).map_err(ApiErrorResponse::from)?;
    Ok(Json(EntryFinancials { entry, financials }))
}

/// Handler for DELETE /entries/:employee_id/:date.
async fn delete_entry_handler(
    State(state): State<AppState>,
    Path((employee_id, date)): Path<(String, NaiveDate)>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    state
        .store()
        .write()
        .await
        .remove(&employee_id, date)
        .map_err(|err| engine_error(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        date = %date,
        "Entry removed"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /summary/day/:date.
///
/// Summarizes all stored entries for one calendar date across employees.
async fn day_summary_handler(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let pairs = {
        let store = state.store().read().await;
        collect_pairs(&state, store.entries_on(date))
            .map_err(|err| engine_error(correlation_id, err))?
    };

    let summary = summarize(&pairs).map_err(|err| engine_error(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        date = %date,
        entry_count = summary.totals.entry_count,
        total_profit = %summary.totals.total_profit,
        "Day summary produced"
    );
    Ok(Json(SummaryResponse::new(summary)))
}

/// Query parameters for GET /summary/range.
#[derive(Debug, Deserialize)]
struct RangeParams {
    /// Start of the range (inclusive).
    from: NaiveDate,
    /// End of the range (inclusive).
    to: NaiveDate,
    /// Restrict the summary to one employee.
    employee_id: Option<String>,
}

/// Handler for GET /summary/range.
///
/// Summarizes stored entries over an inclusive date range, optionally
/// filtered to a single employee.
async fn range_summary_handler(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let pairs = {
        let store = state.store().read().await;
        let entries: Vec<&TimeEntry> = store
            .entries_between(params.from, params.to)
            .into_iter()
            .filter(|entry| {
                params
                    .employee_id
                    .as_deref()
                    .is_none_or(|id| entry.employee_id == id)
            })
            .collect();
        collect_pairs(&state, entries).map_err(|err| engine_error(correlation_id, err))?
    };

    let summary = summarize(&pairs).map_err(|err| engine_error(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        from = %params.from,
        to = %params.to,
        entry_count = summary.totals.entry_count,
        total_profit = %summary.totals.total_profit,
        "Range summary produced"
    );
    Ok(Json(SummaryResponse::new(summary)))
}

/// Pairs each stored entry with the rate card in force for its employee.
fn collect_pairs(
    state: &AppState,
    entries: Vec<&TimeEntry>,
) -> Result<Vec<(TimeEntry, RateCard)>, EngineError> {
    entries
        .into_iter()
        .map(|entry| {
            let rate = state.rate_book().rate_card_for(&entry.employee_id)?;
            Ok((entry.clone(), rate))
        })
        .collect()
}
