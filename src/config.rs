//! Runtime configuration read from the environment (and `.env`)

use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;
use crate::api::coingecko::CoinGeckoClient;
use crate::api::ollama::OllamaClient;

/// How the per-coin history requests of one cycle are issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// One after another, in selection order
    #[default]
    Sequential,
    /// All at once, joined before rendering
    Concurrent,
}

impl FromStr for FetchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(FetchMode::Sequential),
            "concurrent" => Ok(FetchMode::Concurrent),
            other => Err(format!("expected 'sequential' or 'concurrent', got '{}'", other)),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub coingecko_base_url: String,
    pub ollama_base_url: String,
    pub ollama_model: String,
    pub history_fetch_mode: FetchMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8501)),
            coingecko_base_url: CoinGeckoClient::DEFAULT_BASE_URL.to_string(),
            ollama_base_url: OllamaClient::DEFAULT_BASE_URL.to_string(),
            ollama_model: OllamaClient::DEFAULT_MODEL.to_string(),
            history_fetch_mode: FetchMode::default(),
        }
    }
}

fn parse_value<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

impl Config {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup; unset or blank keys keep defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(value) = get("DASHBOARD_BIND_ADDR") {
            config.bind_addr = parse_value("DASHBOARD_BIND_ADDR", value)?;
        }
        if let Some(value) = get("COINGECKO_BASE_URL") {
            config.coingecko_base_url = value;
        }
        if let Some(value) = get("OLLAMA_BASE_URL") {
            config.ollama_base_url = value;
        }
        if let Some(value) = get("OLLAMA_MODEL") {
            config.ollama_model = value;
        }
        if let Some(value) = get("HISTORY_FETCH_MODE") {
            config.history_fetch_mode = parse_value("HISTORY_FETCH_MODE", value)?;
        }

        Ok(config)
    }
}
