//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::diagnostic::ConfigDiagnostic;
use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::source::SourceConfig;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your leagues", path.display()));
    output::note("2. Point [source].path at an odds fixture");
    output::note(&format!("3. Run: arbradar config validate -c {}", path.display()));
    output::note(&format!("4. Run: arbradar scan -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = if path.exists() {
        Config::load(path)?
    } else {
        output::hint(&format!("{} not found, showing defaults", path.display()));
        Config::default()
    };

    if output::is_json() {
        output::json_output(serde_json::to_value(&config)?);
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Scan");
    output::field("Total stake", format!("{:.2}", config.scan.total_stake));
    output::field("Min profit", format!("{:.2}", config.scan.min_profit));
    output::field(
        "Filter",
        if config.scan.only_profitable {
            "profitable only"
        } else {
            "all matches"
        },
    );
    output::field("Concurrency", config.scan.max_concurrent);

    output::section("Source");
    match &config.source {
        SourceConfig::Fixture(fixture) => {
            output::field("Type", "fixture");
            output::field("Path", fixture.path.display());
        }
    }
    let leagues = config.source.leagues();
    if leagues.is_empty() {
        output::note("(no leagues configured)");
    } else {
        for league in &leagues {
            output::note(&format!("- {league}"));
        }
    }

    output::section("TOML");
    output::lines(&config.to_toml()?);
    Ok(())
}

/// Execute `config validate`.
///
/// Errors with a known location are rendered as a source diagnostic before
/// being returned.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());

    let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
    if let Err(error) = Config::parse_toml(&content) {
        if !output::is_json() {
            if let Some(diagnostic) = ConfigDiagnostic::from_error(path, &content, &error) {
                diagnostic.render();
            }
        }
        return Err(error);
    }

    output::success("Config file is valid");
    output::field("Next", format!("arbradar scan -c {}", path.display()));
    Ok(())
}

/// Resolve configuration for commands that accept an optional `--config`.
///
/// An explicit path must load. Otherwise the default location is used when
/// it exists, and built-in defaults when it does not.
pub fn resolve(explicit: Option<&Path>, default: &Path) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None if default.exists() => Config::load(default),
        None => Ok(Config::default()),
    }
}
