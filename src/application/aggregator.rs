//! Best-of aggregation across bookmakers.

use crate::domain::{BestOdds, BookmakerOdds};

/// Reduces a match's per-bookmaker odds to the best odds per outcome.
///
/// Stateless; safe to share across tasks and matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct OddsAggregator;

impl OddsAggregator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highest odds per outcome across every bookmaker that prices it.
    ///
    /// Outcomes no bookmaker prices stay absent. An empty board yields an
    /// empty [`BestOdds`].
    #[must_use]
    pub fn aggregate(&self, odds: &BookmakerOdds) -> BestOdds {
        odds.quotes()
            .flat_map(|quote| quote.priced())
            .fold(BestOdds::empty(), |best, (outcome, price)| {
                best.with(outcome, price)
            })
    }
}
