//! Infrastructure configuration modules.

pub mod logging;
pub mod scan;
pub mod settings;
pub mod source;
