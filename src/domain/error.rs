//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors when an input would
//! violate a domain invariant. Once a value is constructed it is valid, so the
//! arbitrage arithmetic never sees zero odds or a negative stake.
//!
//! # Examples
//!
//! ```
//! use arbradar::domain::{DomainError, Odds};
//!
//! assert!(matches!(Odds::try_new(0.0), Err(DomainError::InvalidOdds { .. })));
//! assert!(Odds::try_new(2.5).is_ok());
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Decimal odds must be finite and strictly greater than 1.0.
    #[error("odds must be finite and greater than 1.0, got {value}")]
    InvalidOdds {
        /// The rejected odds value.
        value: f64,
    },

    /// The total stake must be finite and strictly positive.
    #[error("stake budget must be finite and greater than 0, got {value}")]
    InvalidStakeBudget {
        /// The rejected stake amount.
        value: f64,
    },

    /// Bookmaker names must contain at least one non-whitespace character.
    #[error("bookmaker name cannot be empty")]
    EmptyBookmakerId,

    /// Outcome labels must be one of home/draw/away (or 1/x/2).
    #[error("unknown outcome '{label}'")]
    UnknownOutcome {
        /// The label that could not be parsed.
        label: String,
    },

    /// Match and league references must not be blank.
    #[error("{kind} reference cannot be empty")]
    EmptyReference {
        /// Which reference kind was blank ("match" or "league").
        kind: &'static str,
    },
}
