//! Odds source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::LeagueRef;
use crate::error::{ConfigError, Result};

/// Which adapter supplies matches and odds.
///
/// The active variant is selected by the `type` field in the TOML config.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    /// Odds boards read from a JSON fixture file.
    Fixture(FixtureSourceConfig),
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::Fixture(FixtureSourceConfig::default())
    }
}

impl SourceConfig {
    /// Leagues to scan when none are given on the command line.
    #[must_use]
    pub fn leagues(&self) -> Vec<LeagueRef> {
        match self {
            Self::Fixture(fixture) => fixture
                .leagues
                .iter()
                .filter_map(|l| LeagueRef::try_new(l).ok())
                .collect(),
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when the fixture path is blank.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Fixture(fixture) => {
                if fixture.path.as_os_str().is_empty() {
                    return Err(ConfigError::MissingField { field: "path" }.into());
                }
            }
        }
        Ok(())
    }
}

/// Settings for the JSON fixture source.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FixtureSourceConfig {
    /// Path to the odds board JSON file.
    #[serde(default = "default_fixture_path")]
    pub path: PathBuf,

    /// League references to scan, in order.
    #[serde(default)]
    pub leagues: Vec<String>,
}

fn default_fixture_path() -> PathBuf {
    PathBuf::from("boards.json")
}

impl Default for FixtureSourceConfig {
    fn default() -> Self {
        Self {
            path: default_fixture_path(),
            leagues: Vec::new(),
        }
    }
}
