//! Configuration management for the contact service core.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file picked up via `dotenvy`.

use std::env;

use crate::error::{ConfigError, ConfigResult};

/// Configuration for the contact service core.
#[derive(Debug, Clone)]
pub struct Config {
    /// Region service base URL
    pub region_api_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Retries after the first attempt for transient network failures
    /// (default: 3)
    pub retry_max_attempts: u32,

    /// Fixed delay between retry attempts in milliseconds (default: 4000)
    pub retry_delay_ms: u64,

    /// Cache entry TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,

    /// Channel name for contact-created events (default: "contact-created")
    pub contact_created_channel: String,

    /// Whether a failed event delivery is ignored by the create workflow
    /// (default: true). A policy decision, not an environment variable.
    pub ignore_delivery_failure: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `REGION_API_BASE_URL`: Base URL for the region service
    ///
    /// Optional environment variables:
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `RETRY_MAX_ATTEMPTS`: retries after the first attempt (default: 3)
    /// - `RETRY_DELAY_MS`: delay between attempts in ms (default: 4000)
    /// - `CACHE_TTL_SECONDS`: cache entry TTL (default: 300)
    /// - `CONTACT_CREATED_CHANNEL`: event channel name (default: "contact-created")
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Pick up a .env file if present, without failing when absent
        let _ = dotenvy::dotenv();

        let region_api_url = env::var("REGION_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("REGION_API_BASE_URL".to_string()))?;

        if !region_api_url.starts_with("http://") && !region_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "REGION_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let retry_max_attempts = Self::parse_env_u32("RETRY_MAX_ATTEMPTS", 3)?;
        let retry_delay_ms = Self::parse_env_u64("RETRY_DELAY_MS", 4000)?;
        let cache_ttl_seconds = Self::parse_env_u64("CACHE_TTL_SECONDS", 300)?;

        let contact_created_channel = env::var("CONTACT_CREATED_CHANNEL")
            .unwrap_or_else(|_| "contact-created".to_string());

        if contact_created_channel.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_CREATED_CHANNEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            region_api_url,
            request_timeout,
            retry_max_attempts,
            retry_delay_ms,
            cache_ttl_seconds,
            contact_created_channel,
            ignore_delivery_failure: true,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            region_api_url: String::new(),
            request_timeout: 10,
            retry_max_attempts: 3,
            retry_delay_ms: 4000,
            cache_ttl_seconds: 300,
            contact_created_channel: "contact-created".to_string(),
            ignore_delivery_failure: true,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.retry_max_attempts, 3);
        assert_eq!(config.retry_delay_ms, 4000);
        assert_eq!(config.cache_ttl_seconds, 300);
        assert_eq!(config.contact_created_channel, "contact-created");
        assert!(config.ignore_delivery_failure);
    }

    #[test]
    #[serial]
    fn test_config_from_env_missing_required() {
        let _ = dotenvy::dotenv();
        env::remove_var("REGION_API_BASE_URL");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::MissingVar(var)) = result {
            assert_eq!(var, "REGION_API_BASE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("REGION_API_BASE_URL", "not-a-url");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "REGION_API_BASE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("REGION_API_BASE_URL", "https://regions.example.com");
        guard.set("RETRY_MAX_ATTEMPTS", "5");
        guard.set("RETRY_DELAY_MS", "250");
        guard.set("CACHE_TTL_SECONDS", "60");
        guard.set("CONTACT_CREATED_CHANNEL", "contact-insert-exchange");

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.region_api_url, "https://regions.example.com");
        assert_eq!(config.retry_max_attempts, 5);
        assert_eq!(config.retry_delay_ms, 250);
        assert_eq!(config.cache_ttl_seconds, 60);
        assert_eq!(config.contact_created_channel, "contact-insert-exchange");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_number() {
        let mut guard = EnvGuard::new();
        guard.set("REGION_API_BASE_URL", "https://regions.example.com");
        guard.set("RETRY_DELAY_MS", "not-a-number");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "RETRY_DELAY_MS");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_channel() {
        let mut guard = EnvGuard::new();
        guard.set("REGION_API_BASE_URL", "https://regions.example.com");
        guard.set("CONTACT_CREATED_CHANNEL", "   ");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "CONTACT_CREATED_CHANNEL");
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64", "42");

        let result = Config::parse_env_u64("TEST_U64", 10);
        assert_eq!(result.unwrap(), 42);

        let result = Config::parse_env_u64("NONEXISTENT", 10);
        assert_eq!(result.unwrap(), 10);
    }
}
