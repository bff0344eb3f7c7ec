//! Best available odds per outcome for one match.

use serde::Serialize;

use super::odds::Odds;
use super::outcome::{Outcome, PerOutcome};

/// Highest odds seen for each outcome across all bookmakers.
///
/// An outcome no bookmaker priced stays absent. Absent is never the same as
/// "zero odds": it blocks arbitrage because the outcome cannot be hedged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct BestOdds(PerOutcome<Option<Odds>>);

impl BestOdds {
    /// No outcome priced.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Best odds with every outcome present.
    #[must_use]
    pub fn complete(home: Odds, draw: Odds, away: Odds) -> Self {
        Self(PerOutcome::new(Some(home), Some(draw), Some(away)))
    }

    /// Record an observed price, keeping the maximum.
    pub fn observe(&mut self, outcome: Outcome, odds: Odds) {
        let slot = self.0.get_mut(outcome);
        *slot = Some(match *slot {
            Some(best) => best.max(odds),
            None => odds,
        });
    }

    /// Builder-style variant of [`BestOdds::observe`].
    #[must_use]
    pub fn with(mut self, outcome: Outcome, odds: Odds) -> Self {
        self.observe(outcome, odds);
        self
    }

    #[must_use]
    pub fn get(&self, outcome: Outcome) -> Option<Odds> {
        *self.0.get(outcome)
    }

    /// Outcomes with no price, in display order.
    #[must_use]
    pub fn missing(&self) -> Vec<Outcome> {
        self.0
            .iter()
            .filter(|(_, odds)| odds.is_none())
            .map(|(o, _)| o)
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|(_, odds)| odds.is_none())
    }

    /// Every outcome's odds, or the list of missing outcomes.
    ///
    /// # Errors
    ///
    /// Returns the missing outcomes when the set is incomplete.
    pub fn to_complete(&self) -> Result<PerOutcome<Odds>, Vec<Outcome>> {
        match (self.0.home, self.0.draw, self.0.away) {
            (Some(home), Some(draw), Some(away)) => Ok(PerOutcome::new(home, draw, away)),
            _ => Err(self.missing()),
        }
    }
}
