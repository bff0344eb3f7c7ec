//! Fixture file data transfer objects.
//!
//! A fixture is a JSON document listing the matches per league and the odds
//! board per match:
//! ```json
//! {
//!   "leagues": { "premier-league": ["ars-che", "liv-mci"] },
//!   "matches": {
//!     "ars-che": {
//!       "Bet365": { "home": 2.10, "draw": 3.40, "away": 3.90 },
//!       "Unibet": { "1": "2.15", "X": "3.30", "2": "-" }
//!     }
//!   }
//! }
//! ```
//! Odds may be numbers or numeric strings, as scraped boards usually are.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;

use crate::domain::{BookmakerId, BookmakerOdds, BookmakerQuote, Odds, Outcome};

/// Top-level fixture document.
#[derive(Debug, Default, Deserialize)]
pub struct FixtureDocument {
    #[serde(default)]
    pub leagues: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub matches: BTreeMap<String, RawBoard>,
}

/// Bookmaker name to outcome label to raw odds.
pub type RawBoard = BTreeMap<String, BTreeMap<String, RawOdds>>;

/// An odds cell as it appears in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawOdds {
    Number(f64),
    Text(String),
}

impl RawOdds {
    fn parse(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Convert a raw board into validated domain odds.
///
/// Blank bookmaker names, unknown outcome labels, unparseable cells and odds
/// at or below 1.0 are dropped with a warning; everything else is kept.
pub fn to_bookmaker_odds(match_ref: &str, raw: &RawBoard) -> BookmakerOdds {
    let mut board = BookmakerOdds::new();

    for (name, cells) in raw {
        let Ok(bookmaker) = BookmakerId::try_new(name) else {
            warn!(match_ref, "Skipping bookmaker with empty name");
            continue;
        };

        let mut quote = BookmakerQuote::new();
        for (label, cell) in cells {
            let outcome = match label.parse::<Outcome>() {
                Ok(outcome) => outcome,
                Err(error) => {
                    warn!(match_ref, bookmaker = %bookmaker, %error, "Skipping odds cell");
                    continue;
                }
            };
            let Some(value) = cell.parse() else {
                warn!(
                    match_ref,
                    bookmaker = %bookmaker,
                    outcome = %outcome,
                    "Skipping unparseable odds"
                );
                continue;
            };
            match Odds::try_new(value) {
                Ok(odds) => quote.set(outcome, odds),
                Err(error) => {
                    warn!(
                        match_ref,
                        bookmaker = %bookmaker,
                        outcome = %outcome,
                        %error,
                        "Excluding invalid odds"
                    );
                }
            }
        }
        board.insert(bookmaker, quote);
    }

    board
}
