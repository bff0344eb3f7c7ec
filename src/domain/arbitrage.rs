//! Arbitrage evaluation results.
//!
//! An [`ArbitrageResult`] is produced once per match and never mutated. It is
//! either a feasible [`Arbitrage`] with a full stake split, or a
//! [`NotFeasible`] reason that still carries the inverse odds sum when one
//! could be computed, so near misses remain visible.

use serde::Serialize;

use super::odds::Odds;
use super::outcome::{Outcome, PerOutcome};
use super::stake::StakeBudget;

/// A guaranteed-profit stake allocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arbitrage {
    inverse_odds_sum: f64,
    total_stake: f64,
    odds: PerOutcome<Odds>,
    stakes: PerOutcome<f64>,
    payouts: PerOutcome<f64>,
    profit: PerOutcome<f64>,
}

impl Arbitrage {
    /// Split `budget` proportionally to each outcome's implied probability.
    ///
    /// Callers must ensure `inverse_odds_sum < 1.0` and that it was computed
    /// from `odds`.
    pub(crate) fn allocate(
        odds: PerOutcome<Odds>,
        inverse_odds_sum: f64,
        budget: StakeBudget,
    ) -> Self {
        let total_stake = budget.amount();
        let stakes = odds.map(|_, o| o.implied_probability() / inverse_odds_sum * total_stake);
        let payouts = stakes.map(|outcome, stake| stake * odds.get(outcome).value());
        let profit = payouts.map(|_, payout| payout - total_stake);

        Self {
            inverse_odds_sum,
            total_stake,
            odds,
            stakes,
            payouts,
            profit,
        }
    }

    #[must_use]
    pub const fn inverse_odds_sum(&self) -> f64 {
        self.inverse_odds_sum
    }

    #[must_use]
    pub const fn total_stake(&self) -> f64 {
        self.total_stake
    }

    #[must_use]
    pub const fn odds(&self) -> &PerOutcome<Odds> {
        &self.odds
    }

    #[must_use]
    pub const fn stakes(&self) -> &PerOutcome<f64> {
        &self.stakes
    }

    #[must_use]
    pub const fn payouts(&self) -> &PerOutcome<f64> {
        &self.payouts
    }

    #[must_use]
    pub const fn profit(&self) -> &PerOutcome<f64> {
        &self.profit
    }

    /// Largest per-outcome profit. All outcomes pay the same up to rounding,
    /// so this is the guaranteed profit.
    #[must_use]
    pub fn max_profit(&self) -> f64 {
        self.profit.max()
    }

    /// Profit as a fraction of the total stake.
    #[must_use]
    pub fn roi(&self) -> f64 {
        1.0 / self.inverse_odds_sum - 1.0
    }
}

/// Why a match offers no arbitrage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum NotFeasible {
    /// Implied probabilities add up to 100% or more.
    Overround { inverse_odds_sum: f64 },
    /// At least one outcome has no price, so it cannot be hedged.
    IncompleteOutcomeSet { missing: Vec<Outcome> },
}

impl NotFeasible {
    /// Human-readable explanation for tables and logs.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Overround { inverse_odds_sum } => {
                format!("no arbitrage with these odds (sum 1/odds = {inverse_odds_sum:.4})")
            }
            Self::IncompleteOutcomeSet { missing } => {
                let missing: Vec<&str> = missing.iter().map(|o| o.as_str()).collect();
                format!("incomplete outcome set (missing {})", missing.join(", "))
            }
        }
    }
}

/// Outcome of evaluating one match for arbitrage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArbitrageResult {
    Feasible(Arbitrage),
    NotFeasible(NotFeasible),
}

impl ArbitrageResult {
    #[must_use]
    pub const fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible(_))
    }

    #[must_use]
    pub const fn arbitrage(&self) -> Option<&Arbitrage> {
        match self {
            Self::Feasible(arb) => Some(arb),
            Self::NotFeasible(_) => None,
        }
    }

    /// Σ 1/odds, when the outcome set was complete.
    #[must_use]
    pub fn inverse_odds_sum(&self) -> Option<f64> {
        match self {
            Self::Feasible(arb) => Some(arb.inverse_odds_sum),
            Self::NotFeasible(NotFeasible::Overround { inverse_odds_sum }) => {
                Some(*inverse_odds_sum)
            }
            Self::NotFeasible(NotFeasible::IncompleteOutcomeSet { .. }) => None,
        }
    }

    #[must_use]
    pub fn stakes(&self) -> Option<&PerOutcome<f64>> {
        self.arbitrage().map(Arbitrage::stakes)
    }

    #[must_use]
    pub fn profit(&self) -> Option<&PerOutcome<f64>> {
        self.arbitrage().map(Arbitrage::profit)
    }

    #[must_use]
    pub fn max_profit(&self) -> Option<f64> {
        self.arbitrage().map(Arbitrage::max_profit)
    }
}
