//! Arbitrage feasibility and stake allocation.
//!
//! For best odds `o` on Home/Draw/Away, arbitrage exists when
//! `Σ 1/o < 1`. Staking `(1/o) / Σ(1/o) * total` on each outcome makes every
//! payout equal `total / Σ(1/o)`, so the profit
//! `total * (1/Σ(1/o) - 1)` is the same whichever outcome occurs.

use tracing::trace;

use crate::domain::{Arbitrage, ArbitrageResult, BestOdds, DomainError, NotFeasible, StakeBudget};

/// Evaluates best odds for a guaranteed-profit stake split.
///
/// Pure and stateless: identical input always yields identical output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArbitrageCalculator;

impl ArbitrageCalculator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluate `best_odds` with a validated stake budget.
    ///
    /// An incomplete outcome set is not feasible and no arithmetic is done
    /// over the outcomes that are present.
    #[must_use]
    pub fn evaluate(&self, best_odds: &BestOdds, budget: StakeBudget) -> ArbitrageResult {
        let odds = match best_odds.to_complete() {
            Ok(odds) => odds,
            Err(missing) => {
                return ArbitrageResult::NotFeasible(NotFeasible::IncompleteOutcomeSet { missing })
            }
        };

        let inverse_odds_sum = odds.map(|_, o| o.implied_probability()).sum();
        trace!(inverse_odds_sum, "evaluated inverse odds sum");

        if inverse_odds_sum >= 1.0 {
            return ArbitrageResult::NotFeasible(NotFeasible::Overround { inverse_odds_sum });
        }

        ArbitrageResult::Feasible(Arbitrage::allocate(odds, inverse_odds_sum, budget))
    }

    /// Evaluate with a raw stake amount.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStakeBudget`] if `total_stake` is not a
    /// positive finite number.
    pub fn evaluate_amount(
        &self,
        best_odds: &BestOdds,
        total_stake: f64,
    ) -> Result<ArbitrageResult, DomainError> {
        let budget = StakeBudget::try_new(total_stake)?;
        Ok(self.evaluate(best_odds, budget))
    }
}
