use std::collections::HashMap;
use serde::Deserialize;
use thiserror::Error;

/// One coin entry of GET /simple/price
#[derive(Debug, Clone, Deserialize)]
pub struct SimplePriceEntry {
    pub usd: f64,
    pub usd_24h_change: f64,
}

/// Full /simple/price response, keyed by coin id
pub type SimplePriceResponse = HashMap<String, SimplePriceEntry>;

/// Response from GET /coins/{id}/market_chart
///
/// Only `prices` is used; `market_caps` and `total_volumes` are ignored.
/// A missing `prices` field reads as an empty series.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketChartResponse {
    #[serde(default)]
    pub prices: Vec<(f64, f64)>,
}

/// Error payload CoinGecko sends with 4xx/5xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorStatus {
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub status: Option<ErrorStatus>,
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Best human readable message carried by the payload
    pub fn message(&self) -> Option<String> {
        self.status
            .as_ref()
            .and_then(|s| s.error_message.clone())
            .or_else(|| self.error.clone())
    }
}

/// Comprehensive error type for CoinGecko API operations
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network/request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 429 Too Many Requests
    #[error("Rate limited by CoinGecko (retry after {retry_after:?}s)")]
    RateLimited { retry_after: Option<u64> },

    /// Any other non-2xx status
    #[error("HTTP error ({status}): {body}")]
    Status { status: u16, body: String },

    /// Body was not the expected JSON shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}
