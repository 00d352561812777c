//! Configuration loading from TOML with environment variable resolution.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Secrets (the inquiry endpoint key) are referenced by env-var name in the
//! config and resolved at runtime via `std::env::var`.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::estimation::currency::{DisplayCurrency, ExchangeRates};

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub currency: CurrencyConfig,
    pub inquiries: InquiriesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub name: String,
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CurrencyConfig {
    pub usd_to_idr: f64,
    #[serde(default)]
    pub default_display: DisplayCurrency,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InquiriesConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    /// Env var holding a bearer key for the endpoint, if it needs one.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::from_toml(&contents).with_context(|| format!("Failed to parse config file: {path}"))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Resolve an environment variable name to its value.
    /// Useful for loading secrets referenced in the config.
    pub fn resolve_env(env_name: &str) -> Result<String> {
        std::env::var(env_name)
            .with_context(|| format!("Environment variable not set: {env_name}"))
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .service
            .bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.service.bind))?;
        Ok(SocketAddr::new(ip, self.service.port))
    }

    pub fn exchange_rates(&self) -> Result<ExchangeRates> {
        let rate = Decimal::try_from(self.currency.usd_to_idr)
            .with_context(|| format!("usd_to_idr is not a finite number: {}", self.currency.usd_to_idr))?;
        Ok(ExchangeRates::new(rate)?)
    }

    pub fn inquiry_timeout(&self) -> Duration {
        Duration::from_secs(self.inquiries.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"
[service]
name = "AURA-TEST"
bind = "127.0.0.1"
port = 9090

[currency]
usd_to_idr = 16260.0
default_display = "IDR"

[inquiries]
endpoint = "http://localhost:3000/api/send-email"
timeout_secs = 5
"#;

    #[test]
    fn test_load_config() {
        // Requires config.toml in the working directory (cargo runs tests from the crate root).
        let result = AppConfig::load("config.toml");
        if let Ok(cfg) = result {
            assert_eq!(cfg.service.name, "AURA-ESTIMATOR");
            assert!(cfg.currency.usd_to_idr > 0.0);
            assert!(cfg.inquiries.endpoint.starts_with("http"));
        }
    }

    #[test]
    fn test_parse_sample() {
        let cfg = AppConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(cfg.socket_addr().unwrap().to_string(), "127.0.0.1:9090");
        assert_eq!(cfg.currency.default_display, DisplayCurrency::Idr);
        assert_eq!(cfg.exchange_rates().unwrap().usd_to_idr(), dec!(16260));
        assert_eq!(cfg.inquiry_timeout(), Duration::from_secs(5));
        assert!(cfg.inquiries.api_key_env.is_none());
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        let cfg = AppConfig::from_toml(&SAMPLE.replace("16260.0", "0.0")).unwrap();
        assert!(cfg.exchange_rates().is_err());
    }

    #[test]
    fn test_missing_section_is_error() {
        assert!(AppConfig::from_toml("[service]\nname = \"x\"\nbind = \"0.0.0.0\"\nport = 1\n").is_err());
    }

    #[test]
    fn test_resolve_env_missing() {
        assert!(AppConfig::resolve_env("AURA_TEST_DEFINITELY_UNSET_VAR").is_err());
    }
}
