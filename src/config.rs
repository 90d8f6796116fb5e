//! Application configuration loaded from environment variables.
//!
//! Everything has a sensible default so a bare host can start without any
//! environment at all; a `.env` file is honored when present.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted workout slot
    pub data_dir: PathBuf,
    /// Zoom level used when the map is initialized or recentered
    pub map_zoom: u8,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".waytrack"),
            map_zoom: 13,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let data_dir = env::var("WAYTRACK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let map_zoom = match env::var("WAYTRACK_MAP_ZOOM") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("WAYTRACK_MAP_ZOOM"))?,
            Err(_) => 13,
        };

        Ok(Self { data_dir, map_zoom })
    }
}

/// Default slot directory: `~/.waytrack`, falling back to the working
/// directory when no home is known.
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".waytrack")
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the process-wide env vars are not mutated concurrently.
    #[test]
    fn test_config_from_env() {
        env::set_var("WAYTRACK_DATA_DIR", "/tmp/waytrack-test");
        env::set_var("WAYTRACK_MAP_ZOOM", "11");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.data_dir, PathBuf::from("/tmp/waytrack-test"));
        assert_eq!(config.map_zoom, 11);

        env::set_var("WAYTRACK_MAP_ZOOM", "not-a-number");
        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        env::remove_var("WAYTRACK_DATA_DIR");
        env::remove_var("WAYTRACK_MAP_ZOOM");
    }
}
