//! Command dispatch.

use crate::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use crate::adapter::inbound::cli::{config, evaluate, output, scan};
use crate::error::Result;
use crate::infrastructure::config::logging::LoggingConfig;

/// Install the tracing subscriber, letting `-q`/`-v` override the level.
pub fn init_logging(logging: &LoggingConfig) {
    match LoggingConfig::level_for_verbosity(output::is_quiet(), output::verbosity()) {
        Some(level) => LoggingConfig {
            level: level.to_string(),
            ..logging.clone()
        }
        .init(),
        None => logging.init(),
    }
}

/// Dispatch a parsed command line.
///
/// # Errors
///
/// Returns the first error raised by the selected command.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Scan(args) => scan::execute(&args).await,
        Commands::Evaluate(args) => {
            init_logging(&LoggingConfig::default());
            evaluate::execute(&args)
        }
        Commands::Config(command) => {
            init_logging(&LoggingConfig::default());
            match command {
                ConfigCommand::Init(args) => config::execute_init(&args.path, args.force),
                ConfigCommand::Show(args) => config::execute_show(&args.config),
                ConfigCommand::Validate(args) => config::execute_validate(&args.config),
            }
        }
    }
}
