//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::Serialize;

use super::error::DomainError;

/// Bookmaker identifier - trimmed, non-empty name.
///
/// The inner String is private to ensure all construction goes through
/// [`BookmakerId::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BookmakerId(String);

impl BookmakerId {
    /// Create a new `BookmakerId`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyBookmakerId`] if the trimmed name is empty.
    pub fn try_new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(DomainError::EmptyBookmakerId);
        }
        Ok(Self(name.to_string()))
    }

    /// Get the bookmaker name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookmakerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to a single match (typically a URL).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MatchRef(String);

impl MatchRef {
    /// Create a new `MatchRef`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyReference`] if the trimmed reference is empty.
    pub fn try_new(reference: impl AsRef<str>) -> Result<Self, DomainError> {
        let reference = reference.as_ref().trim();
        if reference.is_empty() {
            return Err(DomainError::EmptyReference { kind: "match" });
        }
        Ok(Self(reference.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to a league listing (typically a URL).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LeagueRef(String);

impl LeagueRef {
    /// Create a new `LeagueRef`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyReference`] if the trimmed reference is empty.
    pub fn try_new(reference: impl AsRef<str>) -> Result<Self, DomainError> {
        let reference = reference.as_ref().trim();
        if reference.is_empty() {
            return Err(DomainError::EmptyReference { kind: "league" });
        }
        Ok(Self(reference.to_string()))
    }

    /// Parse a newline-separated list of league references.
    ///
    /// Blank lines are skipped, so this never fails.
    #[must_use]
    pub fn parse_lines(text: &str) -> Vec<Self> {
        text.lines().filter_map(|line| Self::try_new(line).ok()).collect()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
