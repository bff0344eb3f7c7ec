//! Display filtering of evaluated matches.
//!
//! Every match is evaluated; this filter only decides what is shown.

use serde::Serialize;

use crate::domain::MatchReport;

/// Post-filter applied to [`MatchReport`]s before presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfitFilter {
    /// Only show feasible arbitrage at or above `min_profit`.
    pub only_profitable: bool,
    /// Minimum guaranteed profit, in stake currency.
    pub min_profit: f64,
}

impl ProfitFilter {
    #[must_use]
    pub const fn new(only_profitable: bool, min_profit: f64) -> Self {
        Self {
            only_profitable,
            min_profit,
        }
    }

    /// Show everything, including near misses and incomplete boards.
    #[must_use]
    pub const fn show_all() -> Self {
        Self::new(false, 0.0)
    }

    #[must_use]
    pub fn admits(&self, report: &MatchReport) -> bool {
        if !self.only_profitable {
            return true;
        }
        report
            .result
            .max_profit()
            .is_some_and(|profit| profit >= self.min_profit)
    }

    /// Keep admitted reports, preserving order.
    pub fn apply<'a, I>(&self, reports: I) -> Vec<&'a MatchReport>
    where
        I: IntoIterator<Item = &'a MatchReport>,
    {
        reports.into_iter().filter(|r| self.admits(r)).collect()
    }
}

impl Default for ProfitFilter {
    fn default() -> Self {
        Self::new(true, 1.0)
    }
}
