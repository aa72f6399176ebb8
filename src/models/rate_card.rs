//! Rate card model.
//!
//! This module defines the RateCard struct describing what an employee's
//! time costs the organization and what it bills the client per hour.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The overtime multiplier applied when none is configured explicitly.
///
/// Both the labor-cost rate and the billing rate are scaled by this factor
/// for overtime hours. The default is 1.5 (time-and-a-half). Defaulting
/// happens at construction boundaries (request parsing, config loading),
/// never silently inside a calculation.
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Represents the pay and billing rates in force for one employee.
///
/// A rate card carries the two sides of every attendance entry: what the
/// organization pays the employee per regular hour, and what it bills the
/// client for that same hour. Overtime hours scale both sides by
/// `overtime_multiplier`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    /// Amount the organization pays the employee per regular hour.
    pub hourly_labor_cost: Decimal,
    /// Amount the organization bills the client per regular hour.
    pub billing_rate: Decimal,
    /// Multiplier applied to both rates for overtime hours (at least 1.0).
    pub overtime_multiplier: Decimal,
}

impl RateCard {
    /// Returns the labor-cost rate for one overtime hour.
    pub fn overtime_labor_rate(&self) -> Decimal {
        self.hourly_labor_cost * self.overtime_multiplier
    }

    /// Returns the billing rate for one overtime hour.
    pub fn overtime_billing_rate(&self) -> Decimal {
        self.billing_rate * self.overtime_multiplier
    }

    /// Returns true if every hour on this card is billed below its cost.
    ///
    /// A loss-making card is valid data. The engine computes the resulting
    /// negative profit as-is and leaves it to the caller to flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use timebill_engine::models::RateCard;
    /// use rust_decimal::Decimal;
    ///
    /// let card = RateCard {
    ///     hourly_labor_cost: Decimal::new(10000, 2), // 100.00
    ///     billing_rate: Decimal::new(8000, 2),       // 80.00
    ///     overtime_multiplier: Decimal::new(15, 1),  // 1.5
    /// };
    /// assert!(card.bills_below_cost());
    /// ```
    pub fn bills_below_cost(&self) -> bool {
        self.billing_rate < self.hourly_labor_cost
    }

    /// Validates the rate card invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRateCard`] if `hourly_labor_cost` or
    /// `billing_rate` is negative, or if `overtime_multiplier` is below 1.0.
    pub fn validate(&self) -> EngineResult<()> {
        if self.hourly_labor_cost < Decimal::ZERO {
            return Err(EngineError::InvalidRateCard {
                field: "hourly_labor_cost".to_string(),
                message: format!("must not be negative, got {}", self.hourly_labor_cost),
            });
        }
        if self.billing_rate < Decimal::ZERO {
            return Err(EngineError::InvalidRateCard {
                field: "billing_rate".to_string(),
                message: format!("must not be negative, got {}", self.billing_rate),
            });
        }
        if self.overtime_multiplier < Decimal::ONE {
            return Err(EngineError::InvalidRateCard {
                field: "overtime_multiplier".to_string(),
                message: format!("must be at least 1.0, got {}", self.overtime_multiplier),
            });
        }
        Ok(())
    }
}
