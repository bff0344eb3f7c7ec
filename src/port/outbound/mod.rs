//! Outbound ports: traits implemented by adapters that supply data.

pub mod source;

pub use source::{MatchSource, OddsSource};
