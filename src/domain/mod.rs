//! Bookmaker-agnostic domain logic for 1X2 odds arbitrage.

pub mod arbitrage;
pub mod best_odds;
pub mod error;
pub mod id;
pub mod odds;
pub mod outcome;
pub mod report;
pub mod stake;

pub use arbitrage::{Arbitrage, ArbitrageResult, NotFeasible};
pub use best_odds::BestOdds;
pub use error::DomainError;
pub use id::{BookmakerId, LeagueRef, MatchRef};
pub use odds::{BookmakerOdds, BookmakerQuote, Odds};
pub use outcome::{Outcome, PerOutcome};
pub use report::{LeagueReport, MatchReport, ScanReport};
pub use stake::StakeBudget;
