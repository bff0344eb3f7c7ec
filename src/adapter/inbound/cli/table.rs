//! Tabular rendering of match reports.

use tabled::{Table, Tabled};

use crate::domain::{ArbitrageResult, MatchReport, NotFeasible, Outcome};

/// One evaluated match within a league.
#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "Match")]
    match_ref: String,
    #[tabled(rename = "Books")]
    bookmakers: usize,
    #[tabled(rename = "Home")]
    home: String,
    #[tabled(rename = "Draw")]
    draw: String,
    #[tabled(rename = "Away")]
    away: String,
    #[tabled(rename = "Σ 1/odds")]
    inverse_sum: String,
    #[tabled(rename = "Stake H")]
    stake_home: String,
    #[tabled(rename = "Stake D")]
    stake_draw: String,
    #[tabled(rename = "Stake A")]
    stake_away: String,
    #[tabled(rename = "Profit")]
    profit: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

/// One row of the cross-league summary.
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "League")]
    league: String,
    #[tabled(rename = "Match")]
    match_ref: String,
    #[tabled(rename = "Profit")]
    profit: String,
    #[tabled(rename = "Σ 1/odds")]
    inverse_sum: String,
}

const NONE: &str = "-";

fn money(value: f64) -> String {
    format!("{value:.2}")
}

fn inverse_sum(result: &ArbitrageResult) -> String {
    result
        .inverse_odds_sum()
        .map_or_else(|| NONE.to_string(), |sum| format!("{sum:.4}"))
}

/// Short status label for a result.
#[must_use]
pub fn status(result: &ArbitrageResult) -> &'static str {
    match result {
        ArbitrageResult::Feasible(_) => "arbitrage",
        ArbitrageResult::NotFeasible(NotFeasible::Overround { .. }) => "overround",
        ArbitrageResult::NotFeasible(NotFeasible::IncompleteOutcomeSet { .. }) => "incomplete",
    }
}

fn match_row(report: &MatchReport) -> MatchRow {
    let odds = |outcome: Outcome| {
        report
            .best_odds
            .get(outcome)
            .map_or_else(|| NONE.to_string(), |o| o.to_string())
    };
    let stake = |outcome: Outcome| {
        report
            .result
            .stakes()
            .map_or_else(|| NONE.to_string(), |s| money(*s.get(outcome)))
    };

    MatchRow {
        match_ref: report.match_ref.to_string(),
        bookmakers: report.bookmakers,
        home: odds(Outcome::Home),
        draw: odds(Outcome::Draw),
        away: odds(Outcome::Away),
        inverse_sum: inverse_sum(&report.result),
        stake_home: stake(Outcome::Home),
        stake_draw: stake(Outcome::Draw),
        stake_away: stake(Outcome::Away),
        profit: report
            .result
            .max_profit()
            .map_or_else(|| NONE.to_string(), money),
        status: status(&report.result),
    }
}

/// Render matches of a single league.
#[must_use]
pub fn matches(reports: &[&MatchReport]) -> String {
    Table::new(reports.iter().map(|r| match_row(r))).to_string()
}

/// Render the cross-league ranking.
#[must_use]
pub fn summary(reports: &[&MatchReport]) -> String {
    let rows = reports.iter().map(|r| SummaryRow {
        league: r.league.to_string(),
        match_ref: r.match_ref.to_string(),
        profit: r.result.max_profit().map_or_else(|| NONE.to_string(), money),
        inverse_sum: inverse_sum(&r.result),
    });
    Table::new(rows).to_string()
}
