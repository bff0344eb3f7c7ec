//! Command-line interface definitions.
//!
//! Defines the CLI structure for arbradar using `clap`: scanning leagues for
//! arbitrage, evaluating a single set of odds, and managing configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::paths;

/// Football odds arbitrage radar
#[derive(Parser, Debug)]
#[command(name = "arbradar")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Resolve to a concrete on/off decision.
    #[must_use]
    pub fn enabled(&self, auto: impl FnOnce() -> bool) -> bool {
        match self {
            Self::Auto => auto(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan leagues for arbitrage opportunities
    Scan(ScanArgs),

    /// Evaluate one set of best odds
    Evaluate(EvaluateArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `arbradar config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `scan` subcommand.
///
/// Flags override the corresponding configuration values.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Path to the configuration file (defaults to ~/.arbradar/config.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Odds fixture JSON file.
    #[arg(long)]
    pub fixture: Option<PathBuf>,

    /// League to scan (repeatable).
    #[arg(short, long = "league")]
    pub leagues: Vec<String>,

    /// File with one league reference per line.
    #[arg(long)]
    pub leagues_file: Option<PathBuf>,

    /// Total stake split across each match's outcomes.
    #[arg(long)]
    pub stake: Option<f64>,

    /// Minimum guaranteed profit to show.
    #[arg(long)]
    pub min_profit: Option<f64>,

    /// Show every evaluated match, not only profitable arbitrage.
    #[arg(long)]
    pub all: bool,

    /// Odds fetches in flight per league.
    #[arg(long)]
    pub max_concurrent: Option<usize>,
}

/// Arguments for the `evaluate` subcommand.
///
/// Omitted outcomes are treated as unpriced.
#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    /// Best decimal odds for a home win.
    #[arg(long)]
    pub home: Option<f64>,

    /// Best decimal odds for a draw.
    #[arg(long)]
    pub draw: Option<f64>,

    /// Best decimal odds for an away win.
    #[arg(long)]
    pub away: Option<f64>,

    /// Total stake to split.
    #[arg(long, default_value_t = 100.0)]
    pub stake: f64,
}
