//! Total stake budget.

use std::fmt;

use serde::Serialize;

use super::error::DomainError;

/// Total amount to split across the outcomes of a match.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct StakeBudget(f64);

impl StakeBudget {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStakeBudget`] unless `amount` is finite
    /// and strictly positive.
    pub fn try_new(amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DomainError::InvalidStakeBudget { value: amount });
        }
        Ok(Self(amount))
    }

    #[must_use]
    pub const fn amount(self) -> f64 {
        self.0
    }
}

impl fmt::Display for StakeBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
