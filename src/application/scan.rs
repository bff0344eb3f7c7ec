//! League scanning: discovery, odds extraction, aggregation, evaluation.
//!
//! # Flow
//!
//! ```text
//! LeagueRef --MatchSource--> [MatchRef] --OddsSource--> BookmakerOdds
//!                                                          |
//!                                          OddsAggregator  v
//!                                                       BestOdds
//!                                     ArbitrageCalculator  |
//!                                                          v
//!                                                    MatchReport
//! ```
//!
//! Every discovered match is evaluated. Filtering for display happens later
//! via [`super::ProfitFilter`].

use std::collections::HashSet;
use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use super::{ArbitrageCalculator, OddsAggregator};
use crate::domain::{LeagueRef, LeagueReport, MatchRef, MatchReport, ScanReport, StakeBudget};
use crate::port::outbound::{MatchSource, OddsSource};

/// Default number of odds fetches in flight per league.
pub const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Orchestrates a scan over one or more leagues.
pub struct ScanService {
    matches: Arc<dyn MatchSource>,
    odds: Arc<dyn OddsSource>,
    aggregator: OddsAggregator,
    calculator: ArbitrageCalculator,
    max_concurrent: usize,
}

impl ScanService {
    pub fn new(matches: Arc<dyn MatchSource>, odds: Arc<dyn OddsSource>) -> Self {
        Self {
            matches,
            odds,
            aggregator: OddsAggregator::new(),
            calculator: ArbitrageCalculator::new(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }

    /// Bound the number of concurrent odds fetches (minimum 1).
    #[must_use]
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    #[must_use]
    pub const fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Scan every league in order.
    pub async fn scan(&self, leagues: &[LeagueRef], budget: StakeBudget) -> ScanReport {
        let mut reports = Vec::with_capacity(leagues.len());
        for league in leagues {
            reports.push(self.scan_league(league, budget).await);
        }
        ScanReport::new(budget, reports)
    }

    /// Scan a single league.
    ///
    /// A discovery failure is logged and produces an empty report.
    pub async fn scan_league(&self, league: &LeagueRef, budget: StakeBudget) -> LeagueReport {
        let refs = match self.matches.matches(league).await {
            Ok(refs) => dedup_preserving_order(refs),
            Err(error) => {
                warn!(league = %league, error = %error, "Match discovery failed");
                Vec::new()
            }
        };
        debug!(league = %league, matches = refs.len(), "Discovered matches");

        let matches: Vec<MatchReport> = stream::iter(refs)
            .map(|match_ref| self.evaluate_match(league, match_ref, budget))
            .buffered(self.max_concurrent)
            .collect()
            .await;

        let report = LeagueReport::new(league.clone(), matches);
        info!(
            league = %league,
            matches = report.matches.len(),
            feasible = report.feasible_count(),
            "League scanned"
        );
        report
    }

    async fn evaluate_match(
        &self,
        league: &LeagueRef,
        match_ref: MatchRef,
        budget: StakeBudget,
    ) -> MatchReport {
        let board = self.odds.odds(&match_ref).await;
        let best_odds = self.aggregator.aggregate(&board);
        let result = self.calculator.evaluate(&best_odds, budget);

        match result.arbitrage() {
            Some(arb) => info!(
                match_ref = %match_ref,
                inverse_odds_sum = arb.inverse_odds_sum(),
                profit = arb.max_profit(),
                "Arbitrage found"
            ),
            None => debug!(
                match_ref = %match_ref,
                bookmakers = board.len(),
                inverse_odds_sum = ?result.inverse_odds_sum(),
                "No arbitrage"
            ),
        }

        MatchReport {
            league: league.clone(),
            match_ref,
            bookmakers: board.len(),
            best_odds,
            result,
        }
    }
}

fn dedup_preserving_order(refs: Vec<MatchRef>) -> Vec<MatchRef> {
    let mut seen = HashSet::with_capacity(refs.len());
    refs.into_iter()
        .filter(|r| seen.insert(r.clone()))
        .collect()
}
