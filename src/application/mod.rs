//! Application layer: the arbitrage engine and the scan orchestrator.

pub mod aggregator;
pub mod calculator;
pub mod filter;
pub mod scan;

pub use aggregator::OddsAggregator;
pub use calculator::ArbitrageCalculator;
pub use filter::ProfitFilter;
pub use scan::ScanService;
