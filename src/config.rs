//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="https://s.example.com"
//!
//! # Optional remote log collector
//! export LOG_ENDPOINT="http://logs.example.com/evaluation-service/logs"
//! export LOG_TOKEN="..."
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public prefix of short links (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_VALIDITY_MINUTES` - Link lifetime when a request omits it (default: 30)
//! - `LOG_ENDPOINT` - Remote log collector URL; remote logging is off when unset
//! - `LOG_TOKEN` - Bearer token for the collector, required with `LOG_ENDPOINT`
//! - `LOG_QUEUE_CAPACITY` - Log event buffer size (default: 1000, min: 10)
//! - `LOG_TIMEOUT_SECONDS` - Per-request timeout for the collector (default: 5)

use anyhow::{Context, Result};
use std::env;

use crate::application::services::link_service::DEFAULT_VALIDITY_MINUTES;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub default_validity_minutes: u32,
    /// Remote log collector. `None` keeps events in the local log only.
    pub log_endpoint: Option<String>,
    pub log_token: Option<String>,
    pub log_queue_capacity: usize,
    pub log_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let default_validity_minutes =
            parse_var("DEFAULT_VALIDITY_MINUTES")?.unwrap_or(DEFAULT_VALIDITY_MINUTES);

        let log_endpoint = non_empty_var("LOG_ENDPOINT");
        let log_token = non_empty_var("LOG_TOKEN");

        let log_queue_capacity = parse_var("LOG_QUEUE_CAPACITY")?.unwrap_or(1_000);
        let log_timeout_seconds = parse_var("LOG_TIMEOUT_SECONDS")?.unwrap_or(5);

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            default_validity_minutes,
            log_endpoint,
            log_token,
            log_queue_capacity,
            log_timeout_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `base_url` or `log_endpoint` is not an http(s) URL
    /// - `log_format` is not `text` or `json`
    /// - `log_endpoint` is set without `log_token`
    /// - a numeric setting is out of range
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.default_validity_minutes == 0 {
            anyhow::bail!("DEFAULT_VALIDITY_MINUTES must be greater than 0");
        }

        if let Some(ref endpoint) = self.log_endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                anyhow::bail!(
                    "LOG_ENDPOINT must start with 'http://' or 'https://', got '{}'",
                    endpoint
                );
            }

            if self.log_token.is_none() {
                anyhow::bail!("LOG_TOKEN must be set when LOG_ENDPOINT is provided");
            }
        }

        if self.log_queue_capacity < 10 {
            anyhow::bail!(
                "LOG_QUEUE_CAPACITY must be at least 10, got {}",
                self.log_queue_capacity
            );
        }

        if self.log_queue_capacity > 100_000 {
            anyhow::bail!(
                "LOG_QUEUE_CAPACITY is too large (max: 100000), got {}",
                self.log_queue_capacity
            );
        }

        if self.log_timeout_seconds == 0 {
            anyhow::bail!("LOG_TIMEOUT_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether events are forwarded to a remote collector.
    pub fn is_remote_logging_enabled(&self) -> bool {
        self.log_endpoint.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Default validity: {} min", self.default_validity_minutes);

        match (&self.log_endpoint, &self.log_token) {
            (Some(endpoint), Some(token)) => tracing::info!(
                "  Remote logging: {} (token {})",
                endpoint,
                mask_token(token)
            ),
            _ => tracing::info!("  Remote logging: disabled"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Log queue capacity: {}", self.log_queue_capacity);
    }
}

/// Reads a variable, treating empty values as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parses an optional numeric variable.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    non_empty_var(name)
        .map(|v| {
            v.trim()
                .parse::<T>()
                .with_context(|| format!("{name} must be a number, got '{v}'"))
        })
        .transpose()
}

/// Masks a bearer token for logging, keeping only its last four characters.
///
/// - `abcdefgh12345` → `***2345`
/// - `abc` → `***`
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{tail}")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
