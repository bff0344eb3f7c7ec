//! Scan configuration: stake budget and display filter.

use serde::{Deserialize, Serialize};

use crate::application::scan::DEFAULT_MAX_CONCURRENT;
use crate::application::ProfitFilter;
use crate::domain::StakeBudget;
use crate::error::{ConfigError, Result};

/// Smallest accepted total stake.
pub const MIN_TOTAL_STAKE: f64 = 10.0;
/// Largest accepted total stake.
pub const MAX_TOTAL_STAKE: f64 = 1000.0;
/// Largest accepted profit threshold.
pub const MAX_MIN_PROFIT: f64 = 100.0;

/// Parameters passed into each scan.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Total amount split across the three outcomes of each match.
    #[serde(default = "default_total_stake")]
    pub total_stake: f64,

    /// Minimum guaranteed profit shown when `only_profitable` is set.
    #[serde(default = "default_min_profit")]
    pub min_profit: f64,

    /// Hide matches without a profitable arbitrage.
    #[serde(default = "default_only_profitable")]
    pub only_profitable: bool,

    /// Odds fetches in flight per league.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

fn default_total_stake() -> f64 {
    100.0
}

fn default_min_profit() -> f64 {
    1.0
}

fn default_only_profitable() -> bool {
    true
}

fn default_max_concurrent() -> usize {
    DEFAULT_MAX_CONCURRENT
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            total_stake: default_total_stake(),
            min_profit: default_min_profit(),
            only_profitable: default_only_profitable(),
            max_concurrent: default_max_concurrent(),
        }
    }
}

impl ScanConfig {
    /// Check ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.total_stake.is_finite()
            || !(MIN_TOTAL_STAKE..=MAX_TOTAL_STAKE).contains(&self.total_stake)
        {
            return Err(ConfigError::InvalidValue {
                field: "total_stake",
                reason: format!("must be between {MIN_TOTAL_STAKE} and {MAX_TOTAL_STAKE}"),
            }
            .into());
        }
        if !self.min_profit.is_finite() || !(0.0..=MAX_MIN_PROFIT).contains(&self.min_profit) {
            return Err(ConfigError::InvalidValue {
                field: "min_profit",
                reason: format!("must be between 0 and {MAX_MIN_PROFIT}"),
            }
            .into());
        }
        if self.max_concurrent == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_concurrent",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// The configured stake as a validated budget.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the stake is not positive and finite.
    pub fn budget(&self) -> Result<StakeBudget> {
        Ok(StakeBudget::try_new(self.total_stake)?)
    }

    #[must_use]
    pub const fn profit_filter(&self) -> ProfitFilter {
        ProfitFilter::new(self.only_profitable, self.min_profit)
    }
}
