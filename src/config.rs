//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! binds; an incomplete configuration aborts startup so no request ever
//! reaches the store with a half-configured handler.
//!
//! ## Required Variables
//!
//! - `STORE_URL` - Object store location, e.g. `s3://my-bucket/links`,
//!   `file:///var/lib/shortlink`, or `memory:///` for local development
//! - `STATIC_ENDPOINT` - Public base URL short links are composed from,
//!   e.g. `https://s.example.com`
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `MAX_ALLOCATION_ATTEMPTS` - Allocation retry ceiling (default: 10)

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Object store location URL (scheme selects the backend).
    pub store_url: String,
    /// Public base URL used to compose shortened links.
    pub static_endpoint: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound on generate/probe/write attempts per allocation.
    pub max_allocation_attempts: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `STORE_URL` or `STATIC_ENDPOINT` is missing.
    pub fn from_env() -> Result<Self> {
        let store_url = env::var("STORE_URL").context("STORE_URL must be set")?;
        let static_endpoint =
            env::var("STATIC_ENDPOINT").context("STATIC_ENDPOINT must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let max_allocation_attempts = env::var("MAX_ALLOCATION_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            store_url,
            static_endpoint,
            listen_addr,
            log_level,
            log_format,
            max_allocation_attempts,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `STORE_URL` is not a valid URL
    /// - `STATIC_ENDPOINT` is not an absolute URL with a host
    /// - `LOG_FORMAT` is not `text` or `json`
    /// - `LISTEN` is not in `host:port` form
    /// - `MAX_ALLOCATION_ATTEMPTS` is outside 1..=100
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.store_url)
            .with_context(|| format!("STORE_URL is not a valid URL: '{}'", self.store_url))?;

        let endpoint = Url::parse(&self.static_endpoint).with_context(|| {
            format!(
                "STATIC_ENDPOINT is not a valid URL: '{}'",
                self.static_endpoint
            )
        })?;
        if endpoint.host_str().is_none() {
            anyhow::bail!(
                "STATIC_ENDPOINT must be an absolute URL with a host, got '{}'",
                self.static_endpoint
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.max_allocation_attempts == 0 || self.max_allocation_attempts > 100 {
            anyhow::bail!(
                "MAX_ALLOCATION_ATTEMPTS must be between 1 and 100, got {}",
                self.max_allocation_attempts
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Store: {}", self.store_url);
        tracing::info!("  Static endpoint: {}", self.static_endpoint);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Max allocation attempts: {}",
            self.max_allocation_attempts
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// Expects environment variables to be already loaded (e.g., via
/// `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config() -> Config {
        Config {
            store_url: "memory:///".to_string(),
            static_endpoint: "https://s.example.com".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            max_allocation_attempts: 10,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.store_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.store_url = "s3://bucket/links".to_string();
        assert!(config.validate().is_ok());

        config.static_endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.static_endpoint = "https://s.example.com".to_string();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.max_allocation_attempts = 0;
        assert!(config.validate().is_err());

        config.max_allocation_attempts = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_requires_store_url() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("STORE_URL");
            env::set_var("STATIC_ENDPOINT", "https://s.example.com");
        }

        let result = Config::from_env();
        assert!(result.is_err());

        // Cleanup
        unsafe {
            env::remove_var("STATIC_ENDPOINT");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_static_endpoint() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("STORE_URL", "memory:///");
            env::remove_var("STATIC_ENDPOINT");
        }

        let result = Config::from_env();
        assert!(result.is_err());

        // Cleanup
        unsafe {
            env::remove_var("STORE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_applies_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("STORE_URL", "memory:///");
            env::set_var("STATIC_ENDPOINT", "https://s.example.com");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("MAX_ALLOCATION_ATTEMPTS");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.max_allocation_attempts, 10);

        // Cleanup
        unsafe {
            env::remove_var("STORE_URL");
            env::remove_var("STATIC_ENDPOINT");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_reads_attempt_ceiling() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("STORE_URL", "memory:///");
            env::set_var("STATIC_ENDPOINT", "https://s.example.com");
            env::set_var("MAX_ALLOCATION_ATTEMPTS", "5");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.max_allocation_attempts, 5);

        // Cleanup
        unsafe {
            env::remove_var("STORE_URL");
            env::remove_var("STATIC_ENDPOINT");
            env::remove_var("MAX_ALLOCATION_ATTEMPTS");
        }
    }
}
