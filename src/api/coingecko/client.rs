use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, RETRY_AFTER, USER_AGENT};
use serde::de::DeserializeOwned;
use super::models::{ApiError, ErrorResponse, MarketChartResponse, SimplePriceResponse};
use tracing::{debug, warn};

/// CoinGecko public API client for spot prices and market charts
pub struct CoinGeckoClient {
    http_client: HttpClient,
    base_url: String,
}

impl CoinGeckoClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.coingecko.com/api/v3";

    /// Create a client against `base_url`, e.g. `DEFAULT_BASE_URL` or a local stub
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// CoinGecko rejects some requests that carry no user agent
    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))),
        );
        headers
    }

    /// Parse error response based on HTTP status code
    async fn handle_error_response(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok());
        let body_text = response.text().await.unwrap_or_default();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Rate limited by CoinGecko, retry after {:?}s", retry_after);
            return ApiError::RateLimited { retry_after };
        }

        let body = serde_json::from_str::<ErrorResponse>(&body_text)
            .ok()
            .and_then(|e| e.message())
            .unwrap_or(body_text);

        if status.is_server_error() {
            warn!("CoinGecko server error {}: {}", status.as_u16(), body);
        }

        ApiError::Status {
            status: status.as_u16(),
            body,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self.http_client
            .get(&url)
            .headers(Self::create_headers())
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// GET /simple/price
    ///
    /// Batched lookup of the USD price and 24h change for every id in `ids`.
    pub async fn get_simple_price(&self, ids: &[String]) -> Result<SimplePriceResponse, ApiError> {
        let joined = ids.join(",");
        self.get_json(
            "/simple/price",
            &[
                ("ids", joined.as_str()),
                ("vs_currencies", "usd"),
                ("include_24hr_change", "true"),
            ],
        )
        .await
    }

    /// GET /coins/{id}/market_chart
    ///
    /// USD price samples for the last `days` days.
    pub async fn get_market_chart(&self, coin_id: &str, days: u32) -> Result<MarketChartResponse, ApiError> {
        let days = days.to_string();
        self.get_json(
            &format!("/coins/{}/market_chart", coin_id),
            &[("vs_currency", "usd"), ("days", days.as_str())],
        )
        .await
    }
}
