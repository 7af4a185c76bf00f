//! Store configuration.
//!
//! Tunable constants for pricing and search behavior. Defaults
//! reproduce the storefront's shipped values; a TOML (or JSON) file can
//! override them.

use std::path::Path;
use std::time::Duration;

use mobi_commerce::cart::PricingRules;
use mobi_commerce::money::Money;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Store configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Pricing constants.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Search behavior.
    #[serde(default)]
    pub search: SearchConfig,
}

impl StoreConfig {
    /// Load config from a file. `.json` files parse as JSON, everything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(toml::from_str(&content)?)
        }
    }

    /// Pricing rules for the cart's totals computation.
    pub fn pricing_rules(&self) -> PricingRules {
        PricingRules {
            free_shipping_threshold: Money::rupees(self.pricing.free_shipping_threshold),
            shipping_fee: Money::rupees(self.pricing.shipping_fee),
        }
    }

    /// Quiet period for the search debouncer.
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }
}

/// Pricing constants, in whole rupees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Orders strictly above this subtotal ship free.
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: i64,

    /// Flat shipping fee below the threshold.
    #[serde(default = "default_shipping_fee")]
    pub shipping_fee: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: default_free_shipping_threshold(),
            shipping_fee: default_shipping_fee(),
        }
    }
}

fn default_free_shipping_threshold() -> i64 {
    10_000
}

fn default_shipping_fee() -> i64 {
    99
}

/// Search behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Milliseconds of keyboard quiet before suggestions recompute.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Maximum number of suggestion rows.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    350
}

fn default_suggestion_limit() -> usize {
    8
}
