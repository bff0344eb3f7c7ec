//! Match outcomes and per-outcome value containers.
//!
//! - [`Outcome`] - The closed set of 1X2 results: Home, Draw, Away
//! - [`PerOutcome`] - One value bound to each outcome

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::DomainError;

/// A mutually exclusive football match result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Home,
    Draw,
    Away,
}

impl Outcome {
    /// Every outcome, in display order.
    pub const ALL: [Self; 3] = [Self::Home, Self::Draw, Self::Away];

    /// Lowercase label used in config, JSON, and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Draw => "draw",
            Self::Away => "away",
        }
    }

    /// Capitalized label for table headers.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Draw => "Draw",
            Self::Away => "Away",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = DomainError;

    /// Accepts `home`/`draw`/`away` in any case, plus the 1X2 shorthand.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "1" => Ok(Self::Home),
            "draw" | "x" => Ok(Self::Draw),
            "away" | "2" => Ok(Self::Away),
            _ => Err(DomainError::UnknownOutcome {
                label: s.to_string(),
            }),
        }
    }
}

/// A value for each of Home, Draw and Away.
///
/// Used wherever the arbitrage engine needs a complete outcome set: odds,
/// stakes, payouts and profits. Because every field is required, a
/// `PerOutcome` can never be missing an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PerOutcome<T> {
    pub home: T,
    pub draw: T,
    pub away: T,
}

impl<T> PerOutcome<T> {
    pub const fn new(home: T, draw: T, away: T) -> Self {
        Self { home, draw, away }
    }

    /// Build by evaluating `f` once per outcome.
    pub fn from_fn(mut f: impl FnMut(Outcome) -> T) -> Self {
        Self {
            home: f(Outcome::Home),
            draw: f(Outcome::Draw),
            away: f(Outcome::Away),
        }
    }

    #[must_use]
    pub const fn get(&self, outcome: Outcome) -> &T {
        match outcome {
            Outcome::Home => &self.home,
            Outcome::Draw => &self.draw,
            Outcome::Away => &self.away,
        }
    }

    pub fn get_mut(&mut self, outcome: Outcome) -> &mut T {
        match outcome {
            Outcome::Home => &mut self.home,
            Outcome::Draw => &mut self.draw,
            Outcome::Away => &mut self.away,
        }
    }

    /// Transform every value, keeping the outcome binding.
    pub fn map<U>(&self, mut f: impl FnMut(Outcome, &T) -> U) -> PerOutcome<U> {
        PerOutcome::from_fn(|outcome| f(outcome, self.get(outcome)))
    }

    /// Iterate `(outcome, value)` pairs in [`Outcome::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, &T)> {
        Outcome::ALL.into_iter().map(move |o| (o, self.get(o)))
    }
}

impl PerOutcome<f64> {
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.home + self.draw + self.away
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.home.max(self.draw).max(self.away)
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.home.min(self.draw).min(self.away)
    }
}
