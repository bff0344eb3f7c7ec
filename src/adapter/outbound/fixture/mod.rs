//! Fixture-file odds source.
//!
//! Stands in for a live scraper: league listings and odds boards are read
//! from a JSON document instead of fetched pages.

pub mod dto;
pub mod source;

pub use source::FixtureSource;
