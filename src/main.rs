use clap::Parser;

use arbradar::adapter::inbound::cli::command::Cli;
use arbradar::adapter::inbound::cli::{output, run};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(
        cli.json,
        cli.quiet,
        cli.verbose,
        cli.color.enabled(output::auto_color),
    ));

    if let Err(e) = run::run(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
