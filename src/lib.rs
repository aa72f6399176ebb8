//! Time & Billing Engine for contract workforce attendance.
//!
//! This crate turns attendance records (regular and overtime hours) and
//! per-employee rate cards into labor cost, billed revenue, and profit,
//! and aggregates those financials across employees and date ranges. The
//! calculation core is pure and stateless; an in-memory store holds the
//! entries and an HTTP API serves the committed-edit and summary surfaces.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
