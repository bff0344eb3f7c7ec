//! Arbradar - football odds aggregation and arbitrage detection.
//!
//! For every match in a league, the best decimal odds per outcome (Home,
//! Draw, Away) are picked across bookmakers. If the implied probabilities of
//! those best odds sum to less than one, a stake can be split across all
//! three outcomes so that every result pays out more than was staked.
//!
//! # Architecture
//!
//! - **`domain`** - Odds, outcomes, stake budgets and arbitrage results
//! - **`application`** - `OddsAggregator`, `ArbitrageCalculator` and the
//!   `ScanService` that drives them per league
//! - **`port`** - Traits for match discovery and odds retrieval
//! - **`adapter`** - The CLI and a JSON fixture odds source
//! - **`infrastructure`** - Configuration, logging and wiring
//!
//! # Example
//!
//! ```
//! use arbradar::application::{ArbitrageCalculator, OddsAggregator};
//! use arbradar::domain::{BookmakerId, BookmakerOdds, BookmakerQuote, Odds, StakeBudget};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut board = BookmakerOdds::new();
//!     board.insert(
//!         BookmakerId::try_new("Bet365")?,
//!         BookmakerQuote::full(Odds::try_new(2.3)?, Odds::try_new(3.2)?, Odds::try_new(4.4)?),
//!     );
//!     board.insert(
//!         BookmakerId::try_new("Unibet")?,
//!         BookmakerQuote::full(Odds::try_new(2.1)?, Odds::try_new(3.6)?, Odds::try_new(3.9)?),
//!     );
//!
//!     let best = OddsAggregator::new().aggregate(&board);
//!     let result = ArbitrageCalculator::new().evaluate(&best, StakeBudget::try_new(100.0)?);
//!
//!     assert!(result.is_feasible());
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
