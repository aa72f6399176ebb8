//! Configuration types for the billing rate book.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::{DEFAULT_OVERTIME_MULTIPLIER, RateCard};

/// Metadata about the billing configuration.
///
/// Identifies the organization the rate book belongs to, the currency the
/// rates are denominated in, and the configuration version.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingMetadata {
    /// The name of the organization the rate book applies to.
    pub organization: String,
    /// The currency code all rates are denominated in (e.g., "USD").
    pub currency: String,
    /// The version or effective date of this rate book.
    pub version: String,
}

/// A rate card as written in configuration.
///
/// The overtime multiplier may be omitted per card; the default of 1.5 is
/// applied when the card is converted into a domain [`RateCard`]. That is
/// the construction boundary — nothing inside a calculation ever defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RateCardConfig {
    /// Amount the organization pays per regular hour.
    pub hourly_labor_cost: Decimal,
    /// Amount the organization bills the client per regular hour.
    pub billing_rate: Decimal,
    /// Multiplier applied to both rates for overtime hours. Defaults to
    /// 1.5 when omitted.
    #[serde(default)]
    pub overtime_multiplier: Option<Decimal>,
}

impl RateCardConfig {
    /// Converts the configured card into a domain rate card, applying the
    /// default overtime multiplier if none was configured.
    pub fn into_rate_card(self) -> RateCard {
        RateCard {
            hourly_labor_cost: self.hourly_labor_cost,
            billing_rate: self.billing_rate,
            overtime_multiplier: self
                .overtime_multiplier
                .unwrap_or(DEFAULT_OVERTIME_MULTIPLIER),
        }
    }
}

/// Structure of the `billing.yaml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Metadata about the rate book.
    #[serde(flatten)]
    pub metadata: BillingMetadata,
    /// The rate card used for employees with no card of their own.
    pub default_rate_card: Option<RateCardConfig>,
}

/// Structure of the `rate_cards.yaml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct RateCardsConfig {
    /// Map of employee id to that employee's rate card.
    pub rate_cards: HashMap<String, RateCardConfig>,
}
