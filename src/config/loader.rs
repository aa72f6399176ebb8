//! Rate book loading functionality.
//!
//! This module provides the [`RateBook`] type for loading billing
//! configuration from YAML files and resolving the rate card in force for
//! an employee.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::RateCard;

use super::types::{BillingConfig, BillingMetadata, RateCardsConfig};

/// Loads and provides access to the billing rate book.
///
/// The `RateBook` reads YAML configuration files from a directory and
/// resolves the rate card in force for each employee: the per-employee
/// card if one is configured, otherwise the default card.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/billing/
/// ├── billing.yaml     # Organization metadata and the default rate card
/// └── rate_cards.yaml  # Per-employee rate cards
/// ```
///
/// # Example
///
/// ```no_run
/// use timebill_engine::config::RateBook;
///
/// let book = RateBook::load("./config/billing").unwrap();
///
/// let card = book.rate_card_for("emp_001").unwrap();
/// println!("Billing rate: ${}/h", card.billing_rate);
/// ```
#[derive(Debug, Clone)]
pub struct RateBook {
    metadata: BillingMetadata,
    default_card: Option<RateCard>,
    employee_cards: HashMap<String, RateCard>,
}

impl RateBook {
    /// Loads the rate book from the specified directory.
    ///
    /// Every configured card is validated at load time, so a rate book
    /// that loads successfully can never hand out an invalid card.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either required file is missing
    /// - Either file contains invalid YAML
    /// - Any configured card fails rate card validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let billing_path = path.join("billing.yaml");
        let billing = Self::load_yaml::<BillingConfig>(&billing_path)?;

        let cards_path = path.join("rate_cards.yaml");
        let cards_config = Self::load_yaml::<RateCardsConfig>(&cards_path)?;

        let default_card = billing
            .default_rate_card
            .map(|config| config.into_rate_card());

        let employee_cards = cards_config
            .rate_cards
            .into_iter()
            .map(|(employee_id, config)| (employee_id, config.into_rate_card()))
            .collect();

        Self::from_parts(billing.metadata, default_card, employee_cards)
    }

    /// Builds a rate book from already-parsed parts, validating every card.
    pub fn from_parts(
        metadata: BillingMetadata,
        default_card: Option<RateCard>,
        employee_cards: HashMap<String, RateCard>,
    ) -> EngineResult<Self> {
        if let Some(card) = &default_card {
            card.validate()?;
        }
        for card in employee_cards.values() {
            card.validate()?;
        }

        Ok(Self {
            metadata,
            default_card,
            employee_cards,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the rate book metadata.
    pub fn metadata(&self) -> &BillingMetadata {
        &self.metadata
    }

    /// Returns the default rate card, if one is configured.
    pub fn default_card(&self) -> Option<&RateCard> {
        self.default_card.as_ref()
    }

    /// Returns the employee ids with a card of their own.
    pub fn employee_ids(&self) -> impl Iterator<Item = &str> {
        self.employee_cards.keys().map(String::as_str)
    }

    /// Resolves the rate card in force for an employee.
    ///
    /// Resolution order: the employee's own card if configured, otherwise
    /// the default card.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RateCardNotFound`] if the employee has no
    /// card and no default is configured.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use timebill_engine::config::RateBook;
    ///
    /// let book = RateBook::load("./config/billing")?;
    /// let card = book.rate_card_for("emp_001")?;
    /// # Ok::<(), timebill_engine::error::EngineError>(())
    /// ```
    pub fn rate_card_for(&self, employee_id: &str) -> EngineResult<RateCard> {
        self.employee_cards
            .get(employee_id)
            .or(self.default_card.as_ref())
            .cloned()
            .ok_or_else(|| EngineError::RateCardNotFound {
                employee_id: employee_id.to_string(),
            })
    }
}
