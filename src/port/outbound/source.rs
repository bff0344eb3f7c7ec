//! Match discovery and odds extraction ports.
//!
//! These are the integration points for whatever supplies odds: a scraper,
//! an API client, or a fixture file. The scan service depends only on these
//! traits.

use async_trait::async_trait;

use crate::domain::{BookmakerOdds, LeagueRef, MatchRef};
use crate::error::Error;

/// Discovers the matches listed for a league.
#[async_trait]
pub trait MatchSource: Send + Sync {
    /// Match references for `league`, in listing order.
    ///
    /// Duplicates are allowed; the scan service removes them.
    async fn matches(&self, league: &LeagueRef) -> Result<Vec<MatchRef>, Error>;
}

/// Extracts per-bookmaker odds for a match.
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// Odds for `match_ref`.
    ///
    /// Implementations convert fetch and parse failures into an empty
    /// [`BookmakerOdds`]; they never fail across this boundary.
    async fn odds(&self, match_ref: &MatchRef) -> BookmakerOdds;
}
