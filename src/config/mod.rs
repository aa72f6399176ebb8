//! Configuration loading and management for the Time & Billing Engine.
//!
//! This module provides functionality to load the billing rate book from
//! YAML files: organization metadata, the default rate card, and
//! per-employee rate cards.
//!
//! # Example
//!
//! ```no_run
//! use timebill_engine::config::RateBook;
//!
//! let book = RateBook::load("./config/billing").unwrap();
//! println!("Loaded rate book for: {}", book.metadata().organization);
//! ```

mod loader;
mod types;

pub use loader::RateBook;
pub use types::{BillingConfig, BillingMetadata, RateCardConfig, RateCardsConfig};
