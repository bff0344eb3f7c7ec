//! JSON fixture implementation of the match and odds ports.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, info};

use super::dto::{self, FixtureDocument};
use crate::domain::{BookmakerOdds, LeagueRef, MatchRef};
use crate::error::{Error, Result};
use crate::port::outbound::{MatchSource, OddsSource};

/// Matches and odds boards loaded once from a fixture document.
///
/// Odds are validated at load time, so lookups are cheap and infallible.
#[derive(Debug, Default)]
pub struct FixtureSource {
    leagues: HashMap<String, Vec<MatchRef>>,
    boards: HashMap<MatchRef, BookmakerOdds>,
}

impl FixtureSource {
    /// Load a fixture from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read, or a JSON error if it
    /// is not a valid fixture document.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Source(format!("failed to read fixture {}: {e}", path.display()))
        })?;
        let source = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            leagues = source.leagues.len(),
            matches = source.boards.len(),
            "Loaded odds fixture"
        );
        Ok(source)
    }

    /// Parse a fixture from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the text is not a valid fixture document.
    pub fn from_json(content: &str) -> Result<Self> {
        let document: FixtureDocument = serde_json::from_str(content)?;
        Ok(Self::from_document(document))
    }

    fn from_document(document: FixtureDocument) -> Self {
        let leagues = document
            .leagues
            .into_iter()
            .map(|(league, refs)| {
                let refs = refs
                    .iter()
                    .filter_map(|r| MatchRef::try_new(r).ok())
                    .collect();
                (league.trim().to_string(), refs)
            })
            .collect();

        let boards = document
            .matches
            .iter()
            .filter_map(|(match_ref, raw)| {
                let key = MatchRef::try_new(match_ref).ok()?;
                Some((key, dto::to_bookmaker_odds(match_ref, raw)))
            })
            .collect();

        Self { leagues, boards }
    }
}

#[async_trait]
impl MatchSource for FixtureSource {
    async fn matches(&self, league: &LeagueRef) -> Result<Vec<MatchRef>> {
        match self.leagues.get(league.as_str()) {
            Some(refs) => Ok(refs.clone()),
            None => {
                debug!(league = %league, "League not present in fixture");
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait]
impl OddsSource for FixtureSource {
    async fn odds(&self, match_ref: &MatchRef) -> BookmakerOdds {
        self.boards.get(match_ref).cloned().unwrap_or_default()
    }
}
