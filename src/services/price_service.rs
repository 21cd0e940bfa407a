use std::collections::HashMap;
use tracing::{debug, info};
use crate::api::coingecko::{ApiError, CoinGeckoClient};
use crate::models::{MetricTile, PriceQuote};
use crate::utils::{capitalize, format_change, format_usd};

/// Fetch spot price and 24h change for every selected coin in one request.
///
/// Failures are returned as-is: no retry, no fallback value.
pub async fn fetch_prices(
    client: &CoinGeckoClient,
    coin_ids: &[String],
) -> Result<HashMap<String, PriceQuote>, ApiError> {
    let response = client.get_simple_price(coin_ids).await?;
    info!("💹 Fetched {} price quote(s) for {:?}", response.len(), coin_ids);

    Ok(response
        .into_iter()
        .map(|(asset_id, entry)| {
            let quote = PriceQuote {
                asset_id: asset_id.clone(),
                usd_price: entry.usd,
                usd_24h_change_pct: entry.usd_24h_change,
            };
            (asset_id, quote)
        })
        .collect())
}

/// Format one quote as a metric tile
pub fn metric_tile(quote: &PriceQuote) -> MetricTile {
    MetricTile {
        label: capitalize(&quote.asset_id),
        value: format_usd(quote.usd_price),
        delta: format_change(quote.usd_24h_change_pct),
        delta_negative: quote.usd_24h_change_pct < 0.0,
    }
}

/// Tiles in selection order. Coins the API did not answer for get no tile.
pub fn build_metric_tiles(selected: &[String], quotes: &HashMap<String, PriceQuote>) -> Vec<MetricTile> {
    selected
        .iter()
        .filter_map(|coin_id| match quotes.get(coin_id) {
            Some(quote) => Some(metric_tile(quote)),
            None => {
                debug!("No quote returned for {}", coin_id);
                None
            }
        })
        .collect()
}
