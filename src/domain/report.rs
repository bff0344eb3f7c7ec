//! Scan reports: evaluated matches grouped by league.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::arbitrage::ArbitrageResult;
use super::best_odds::BestOdds;
use super::id::{LeagueRef, MatchRef};
use super::stake::StakeBudget;

/// Evaluation of a single match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub league: LeagueRef,
    pub match_ref: MatchRef,
    /// Number of bookmakers that priced at least one outcome.
    pub bookmakers: usize,
    pub best_odds: BestOdds,
    pub result: ArbitrageResult,
}

impl MatchReport {
    /// Ranking used for display: feasible matches by profit (highest first),
    /// then overround near misses by inverse odds sum (lowest first), then
    /// incomplete outcome sets.
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        match (self.result.max_profit(), other.result.max_profit()) {
            (Some(a), Some(b)) => return b.total_cmp(&a),
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => {}
        }
        match (self.result.inverse_odds_sum(), other.result.inverse_odds_sum()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// All evaluated matches for one league, in discovery order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueReport {
    pub league: LeagueRef,
    pub matches: Vec<MatchReport>,
}

impl LeagueReport {
    #[must_use]
    pub fn new(league: LeagueRef, matches: Vec<MatchReport>) -> Self {
        Self { league, matches }
    }

    #[must_use]
    pub fn feasible_count(&self) -> usize {
        self.matches.iter().filter(|m| m.result.is_feasible()).count()
    }
}

/// Result of scanning one or more leagues.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub generated_at: DateTime<Utc>,
    pub total_stake: f64,
    pub leagues: Vec<LeagueReport>,
}

impl ScanReport {
    /// Stamp a report with the current time.
    #[must_use]
    pub fn new(budget: StakeBudget, leagues: Vec<LeagueReport>) -> Self {
        Self {
            generated_at: Utc::now(),
            total_stake: budget.amount(),
            leagues,
        }
    }

    /// Every match across leagues, in scan order.
    pub fn all_matches(&self) -> impl Iterator<Item = &MatchReport> {
        self.leagues.iter().flat_map(|l| l.matches.iter())
    }

    /// Every match across leagues, best opportunities first.
    #[must_use]
    pub fn ranked(&self) -> Vec<&MatchReport> {
        let mut matches: Vec<_> = self.all_matches().collect();
        matches.sort_by(|a, b| a.rank_cmp(b));
        matches
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.leagues.iter().map(|l| l.matches.len()).sum()
    }

    #[must_use]
    pub fn feasible_count(&self) -> usize {
        self.leagues.iter().map(LeagueReport::feasible_count).sum()
    }
}
