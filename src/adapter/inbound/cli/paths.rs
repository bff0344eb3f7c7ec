//! Path utilities for arbradar.
//!
//! Data lives under `~/.arbradar/`:
//! - `~/.arbradar/config.toml` - main configuration
//! - `~/.arbradar/boards.json` - default odds fixture

use std::path::PathBuf;

/// Returns the arbradar home directory (`~/.arbradar/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".arbradar")
}

/// Returns the default config file path (`~/.arbradar/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_arbradar_home() {
        let home = home_dir();
        let config = default_config();

        assert!(home.to_string_lossy().contains(".arbradar"));
        assert!(config.starts_with(&home));
        assert!(config.ends_with("config.toml"));
    }
}
