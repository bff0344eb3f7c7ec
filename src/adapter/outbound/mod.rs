//! Outbound adapters (implement `port::outbound` traits).

pub mod fixture;
