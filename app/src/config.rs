//! Configuration management for the Nutrikit application layer
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config file (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: NUTRIKIT__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub explain: ExplainConfig,
}

/// Explanation-service configuration
///
/// The explanation fetch is best-effort; a misconfigured service degrades
/// to empty explanations, never to a scoring failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainConfig {
    pub base_url: String,
    pub model: String,
    /// API key for the text-generation service. Held as a plain string
    /// here for config-layer round-trips; the client wraps it in a
    /// `secrecy::SecretString` immediately on construction.
    pub api_key: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.anthropic.com".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            api_key: String::new(),
            max_tokens: 1000,
            timeout_secs: 10,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            explain: ExplainConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with NUTRIKIT__ prefix
    ///    e.g., NUTRIKIT__EXPLAIN__MODEL=... sets explain.model
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            .add_source(config::Environment::with_prefix("NUTRIKIT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Whether we are running in production mode (RUST_ENV=production)
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.explain.base_url, "https://api.anthropic.com");
        assert_eq!(config.explain.max_tokens, 1000);
        assert_eq!(config.explain.timeout_secs, 10);
    }

    #[test]
    fn test_is_production() {
        // RUST_ENV is not set in the test environment
        assert!(!AppConfig::is_production());
    }
}
