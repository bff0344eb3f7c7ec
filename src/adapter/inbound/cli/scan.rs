//! Handler for the `scan` command.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::command::ScanArgs;
use crate::adapter::inbound::cli::{config, output, paths, run, table};
use crate::application::ProfitFilter;
use crate::domain::{LeagueRef, LeagueReport, ScanReport};
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::source::SourceConfig;

/// Load configuration and fold command-line overrides into it.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the overridden values
/// fail validation.
pub fn effective_config(args: &ScanArgs) -> Result<Config> {
    let mut config = config::resolve(args.config.as_deref(), &paths::default_config())?;

    if let Some(path) = &args.fixture {
        match &mut config.source {
            SourceConfig::Fixture(fixture) => fixture.path.clone_from(path),
        }
    }
    if let Some(stake) = args.stake {
        config.scan.total_stake = stake;
    }
    if let Some(min_profit) = args.min_profit {
        config.scan.min_profit = min_profit;
    }
    if args.all {
        config.scan.only_profitable = false;
    }
    if let Some(max_concurrent) = args.max_concurrent {
        config.scan.max_concurrent = max_concurrent;
    }

    config.validate()?;
    Ok(config)
}

/// Leagues from `--league`, then `--leagues-file`, then the config.
///
/// # Errors
///
/// Returns an error if the leagues file cannot be read, or if no league is
/// named anywhere.
pub fn resolve_leagues(args: &ScanArgs, config: &Config) -> Result<Vec<LeagueRef>> {
    let mut leagues: Vec<LeagueRef> = args
        .leagues
        .iter()
        .filter_map(|l| LeagueRef::try_new(l).ok())
        .collect();

    if leagues.is_empty() {
        if let Some(file) = &args.leagues_file {
            leagues = read_leagues_file(file)?;
        }
    }
    if leagues.is_empty() {
        leagues = config.source.leagues();
    }
    if leagues.is_empty() {
        return Err(ConfigError::MissingField { field: "leagues" }.into());
    }
    Ok(leagues)
}

fn read_leagues_file(path: &Path) -> Result<Vec<LeagueRef>> {
    let content = std::fs::read_to_string(path)?;
    Ok(LeagueRef::parse_lines(&content))
}

/// Execute `scan`.
pub async fn execute(args: &ScanArgs) -> Result<()> {
    let config = effective_config(args)?;
    run::init_logging(&config.logging);

    let leagues = resolve_leagues(args, &config)?;
    let budget = config.scan.budget()?;
    let filter = config.scan.profit_filter();

    let service = bootstrap::build_scan_service(&config)?;

    if !output::is_json() {
        output::section("Arbitrage Scan");
        output::field("Total stake", format!("{:.2}", budget.amount()));
        output::field("Filter", describe_filter(&filter));
        output::field("Leagues", leagues.len());
    }

    let mut reports = Vec::with_capacity(leagues.len());
    for league in &leagues {
        let pb = output::spinner(&format!("Scanning {league}"));
        let report = service.scan_league(league, budget).await;
        output::spinner_success(
            &pb,
            &format!(
                "{league}: {} matches, {} with arbitrage",
                report.matches.len(),
                report.feasible_count()
            ),
        );
        render_league(&report, &filter);
        reports.push(report);
    }

    let report = ScanReport::new(budget, reports);
    if output::is_json() {
        let shown: Vec<_> = filter
            .apply(report.ranked())
            .into_iter()
            .map(|m| json!({ "league": m.league, "match": m.match_ref }))
            .collect();
        output::json_output(json!({
            "command": "scan",
            "filter": filter,
            "report": report,
            "shown": shown,
        }));
        return Ok(());
    }

    render_summary(&report, &filter);
    Ok(())
}

fn describe_filter(filter: &ProfitFilter) -> String {
    if filter.only_profitable {
        format!("profit >= {:.2}", filter.min_profit)
    } else {
        "all matches".to_string()
    }
}

fn render_league(report: &LeagueReport, filter: &ProfitFilter) {
    if output::is_json() {
        return;
    }

    output::section(report.league.as_str());
    let mut ranked: Vec<_> = report.matches.iter().collect();
    ranked.sort_by(|a, b| a.rank_cmp(b));
    let shown = filter.apply(ranked);

    if shown.is_empty() {
        output::note(&format!(
            "no matches shown ({} evaluated)",
            report.matches.len()
        ));
        return;
    }
    output::lines(&table::matches(&shown));
}

fn render_summary(report: &ScanReport, filter: &ProfitFilter) {
    output::section("Summary");
    output::field("Matches", report.match_count());
    output::field("Arbitrage", report.feasible_count());

    let ranked = report.ranked();
    let shown = filter.apply(ranked.iter().copied());
    let profitable: Vec<_> = shown
        .iter()
        .copied()
        .filter(|m| m.result.is_feasible())
        .collect();

    match profitable.first().and_then(|m| m.result.max_profit()) {
        Some(best) => {
            output::field("Best profit", output::positive(format!("{best:.2}")));
            output::lines(&table::summary(&profitable));
        }
        None if report.feasible_count() > 0 => {
            output::warning(&format!(
                "{} arbitrage below the minimum profit of {:.2}",
                report.feasible_count(),
                filter.min_profit
            ));
            output::hint("lower --min-profit or pass --all to show them");
        }
        None => {
            output::warning("No profitable arbitrage found");
            let closest = ranked
                .first()
                .and_then(|m| m.result.inverse_odds_sum().map(|sum| (m, sum)));
            if let Some((m, sum)) = closest {
                output::hint(&format!(
                    "closest: {} ({}) with Σ 1/odds = {}",
                    m.match_ref,
                    m.league,
                    output::negative(format!("{sum:.4}"))
                ));
            }
        }
    }
}
