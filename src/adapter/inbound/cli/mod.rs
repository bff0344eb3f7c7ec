//! CLI module graph.

pub mod command;
pub mod config;
pub mod diagnostic;
pub mod evaluate;
pub mod output;
pub mod paths;
pub mod run;
pub mod scan;
pub mod table;
