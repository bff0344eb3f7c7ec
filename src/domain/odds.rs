//! Decimal odds and per-bookmaker odds boards.
//!
//! - [`Odds`] - Validated decimal odds (finite, strictly above 1.0)
//! - [`BookmakerQuote`] - One bookmaker's odds, possibly missing outcomes
//! - [`BookmakerOdds`] - Every bookmaker's quote for a single match

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::error::DomainError;
use super::id::BookmakerId;
use super::outcome::{Outcome, PerOutcome};

/// Decimal odds for a single outcome.
///
/// A payout of `stake * odds` is returned when the outcome occurs. Values at
/// or below 1.0 can never return a profit and are rejected, which also keeps
/// zero out of every reciprocal computed downstream.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Odds(f64);

impl Odds {
    /// Validate and wrap a decimal odds value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidOdds`] for non-finite values or values
    /// less than or equal to 1.0.
    pub fn try_new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || value <= 1.0 {
            return Err(DomainError::InvalidOdds { value });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Bookmaker's implied probability, `1 / odds`.
    #[must_use]
    pub fn implied_probability(self) -> f64 {
        1.0 / self.0
    }

    /// The larger of two odds.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<f64> for Odds {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

/// One bookmaker's board for a match. Outcomes the bookmaker does not price
/// are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct BookmakerQuote(PerOutcome<Option<Odds>>);

impl BookmakerQuote {
    /// An empty quote that prices nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A quote pricing all three outcomes.
    #[must_use]
    pub fn full(home: Odds, draw: Odds, away: Odds) -> Self {
        Self(PerOutcome::new(Some(home), Some(draw), Some(away)))
    }

    /// Builder-style setter for a single outcome.
    #[must_use]
    pub fn with(mut self, outcome: Outcome, odds: Odds) -> Self {
        self.set(outcome, odds);
        self
    }

    pub fn set(&mut self, outcome: Outcome, odds: Odds) {
        *self.0.get_mut(outcome) = Some(odds);
    }

    #[must_use]
    pub fn get(&self, outcome: Outcome) -> Option<Odds> {
        *self.0.get(outcome)
    }

    /// Iterate only the outcomes this bookmaker prices.
    pub fn priced(&self) -> impl Iterator<Item = (Outcome, Odds)> + '_ {
        self.0.iter().filter_map(|(o, odds)| odds.map(|odds| (o, odds)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.priced().next().is_none()
    }
}

/// Odds from every bookmaker for a single match.
///
/// Keyed by bookmaker, so each bookmaker appears at most once; inserting a
/// bookmaker again replaces its previous quote.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct BookmakerOdds(BTreeMap<BookmakerId, BookmakerQuote>);

impl BookmakerOdds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a bookmaker's quote. Empty quotes are ignored.
    pub fn insert(&mut self, bookmaker: BookmakerId, quote: BookmakerQuote) {
        if quote.is_empty() {
            return;
        }
        self.0.insert(bookmaker, quote);
    }

    #[must_use]
    pub fn get(&self, bookmaker: &BookmakerId) -> Option<&BookmakerQuote> {
        self.0.get(bookmaker)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BookmakerId, &BookmakerQuote)> {
        self.0.iter()
    }

    /// Every quote, regardless of bookmaker.
    pub fn quotes(&self) -> impl Iterator<Item = &BookmakerQuote> {
        self.0.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(BookmakerId, BookmakerQuote)> for BookmakerOdds {
    fn from_iter<I: IntoIterator<Item = (BookmakerId, BookmakerQuote)>>(iter: I) -> Self {
        let mut odds = Self::new();
        for (bookmaker, quote) in iter {
            odds.insert(bookmaker, quote);
        }
        odds
    }
}
