//! Handler for the `evaluate` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::EvaluateArgs;
use crate::adapter::inbound::cli::output;
use crate::application::ArbitrageCalculator;
use crate::domain::{Arbitrage, ArbitrageResult, BestOdds, Odds, Outcome, StakeBudget};
use crate::error::Result;

#[derive(Tabled)]
struct AllocationRow {
    #[tabled(rename = "Outcome")]
    outcome: &'static str,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Payout")]
    payout: String,
    #[tabled(rename = "Profit")]
    profit: String,
}

/// Build best odds from the optional per-outcome flags.
///
/// # Errors
///
/// Returns a domain error for any provided value that is not valid odds.
pub fn best_odds(args: &EvaluateArgs) -> Result<BestOdds> {
    let mut best = BestOdds::empty();
    for (outcome, value) in [
        (Outcome::Home, args.home),
        (Outcome::Draw, args.draw),
        (Outcome::Away, args.away),
    ] {
        if let Some(value) = value {
            best = best.with(outcome, Odds::try_new(value)?);
        }
    }
    Ok(best)
}

fn allocation_rows(arbitrage: &Arbitrage) -> Vec<AllocationRow> {
    Outcome::ALL
        .iter()
        .map(|&outcome| AllocationRow {
            outcome: outcome.title(),
            odds: arbitrage.odds().get(outcome).to_string(),
            stake: format!("{:.2}", arbitrage.stakes().get(outcome)),
            payout: format!("{:.2}", arbitrage.payouts().get(outcome)),
            profit: format!("{:.2}", arbitrage.profit().get(outcome)),
        })
        .collect()
}

/// Execute `evaluate`.
pub fn execute(args: &EvaluateArgs) -> Result<()> {
    let best = best_odds(args)?;
    let budget = StakeBudget::try_new(args.stake)?;
    let result = ArbitrageCalculator::new().evaluate(&best, budget);

    if output::is_json() {
        output::json_output(json!({
            "command": "evaluate",
            "total_stake": budget.amount(),
            "best_odds": best,
            "result": result,
        }));
        return Ok(());
    }

    output::section("Arbitrage Evaluation");
    output::field("Total stake", format!("{:.2}", budget.amount()));
    if let Some(sum) = result.inverse_odds_sum() {
        output::field("Σ 1/odds", format!("{sum:.4}"));
    }

    match &result {
        ArbitrageResult::Feasible(arbitrage) => {
            output::success("Arbitrage found");
            output::field(
                "Profit",
                output::positive(format!("{:.2}", arbitrage.max_profit())),
            );
            output::field(
                "ROI",
                output::positive(format!("{:.2}%", arbitrage.roi() * 100.0)),
            );
            output::section("Allocation");
            output::lines(&Table::new(allocation_rows(arbitrage)).to_string());
        }
        ArbitrageResult::NotFeasible(reason) => {
            output::warning(&reason.describe());
        }
    }
    Ok(())
}
