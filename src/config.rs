//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Shortest allowed pause between cleanup sweeps, in seconds.
pub const MIN_CLEANUP_INTERVAL: u64 = 1;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL in seconds applied to every write of the product collection
    pub cache_seconds: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_SECONDS` - Cache TTL in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1, minimum: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_seconds: env_or("CACHE_SECONDS", defaults.cache_seconds),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval)
                .max(MIN_CLEANUP_INTERVAL),
        }
    }

    /// Cache TTL as a `Duration`.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_seconds: 60,
            server_port: 3000,
            cleanup_interval: 1,
        }
    }
}

// Unset or unparsable variables fall back to the default.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_seconds, 60);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 1);
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_config_from_env_defaults() {
        env::remove_var("CACHE_SECONDS");
        env::remove_var("SERVER_PORT");
        env::remove_var("CLEANUP_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.cache_seconds, 60);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 1);
    }

    #[test]
    fn test_config_zero_cleanup_interval_is_clamped() {
        env::set_var("CLEANUP_INTERVAL", "0");
        let config = Config::from_env();
        env::remove_var("CLEANUP_INTERVAL");

        assert_eq!(config.cleanup_interval, MIN_CLEANUP_INTERVAL);
    }

    #[test]
    fn test_env_or_unparsable_falls_back() {
        env::set_var("FEEDBACK_API_TEST_BOGUS", "not-a-number");
        assert_eq!(env_or("FEEDBACK_API_TEST_BOGUS", 7u64), 7);
        env::remove_var("FEEDBACK_API_TEST_BOGUS");
    }
}
