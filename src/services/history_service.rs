use futures_util::future::join_all;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use crate::api::coingecko::{ApiError, CoinGeckoClient};
use crate::config::FetchMode;
use crate::models::{HistoryOutcome, HistoryPoint, Notice};
use crate::services::series_service::{self, SeriesError};
use crate::utils::describe_error;

/// Width of the market-chart window, in days
pub const HISTORY_DAYS: u32 = 2;

#[derive(Error, Debug)]
enum HistoryError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Series(#[from] SeriesError),
}

async fn try_fetch_history(client: &CoinGeckoClient, coin_id: &str) -> Result<Vec<HistoryPoint>, HistoryError> {
    let chart = client.get_market_chart(coin_id, HISTORY_DAYS).await?;
    debug!(
        "📊 {} returned {} samples, first: {:?}",
        coin_id,
        chart.prices.len(),
        &chart.prices[..chart.prices.len().min(3)]
    );
    Ok(series_service::to_history_points(&chart.prices)?)
}

/// Fetch the 2-day price series for one coin.
///
/// Never fails: an empty series yields a warning notice and any error yields
/// an error notice naming the coin, both with no points.
pub async fn fetch_history(client: &CoinGeckoClient, coin_id: &str) -> HistoryOutcome {
    match try_fetch_history(client, coin_id).await {
        Ok(points) if points.is_empty() => {
            warn!("No history returned for {}", coin_id);
            HistoryOutcome::empty(coin_id, Notice::warning(format!("No data returned for {}", coin_id)))
        }
        Ok(points) => HistoryOutcome {
            coin_id: coin_id.to_string(),
            points,
            notice: None,
        },
        Err(e) => {
            let reason = describe_error(&e);
            error!("History fetch failed for {}: {}", coin_id, reason);
            HistoryOutcome::empty(
                coin_id,
                Notice::error(format!("Error fetching history for {}: {}", coin_id, reason)),
            )
        }
    }
}

/// Fetch history for every selected coin, results in selection order
pub async fn fetch_histories(
    client: &CoinGeckoClient,
    coin_ids: &[String],
    mode: FetchMode,
) -> Vec<HistoryOutcome> {
    info!("📈 Fetching history for {} coin(s) ({:?})", coin_ids.len(), mode);
    match mode {
        FetchMode::Sequential => {
            let mut outcomes = Vec::with_capacity(coin_ids.len());
            for coin_id in coin_ids {
                outcomes.push(fetch_history(client, coin_id).await);
            }
            outcomes
        }
        FetchMode::Concurrent => join_all(coin_ids.iter().map(|coin_id| fetch_history(client, coin_id))).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoticeLevel;
    use crate::test_support::{spawn_stub, StubRoute};

    #[tokio::test]
    async fn test_history_points() {
        let stub = spawn_stub(vec![StubRoute::json(
            "/coins/bitcoin/market_chart",
            200,
            r#"{"prices": [[1700000000000, 100.0], [1700003600000, 101.5]], "total_volumes": []}"#,
        )])
        .await;
        let client = CoinGeckoClient::with_base_url(stub.base_url());

        let outcome = fetch_history(&client, "bitcoin").await;

        assert!(outcome.notice.is_none());
        assert_eq!(outcome.points.len(), 2);
        assert_eq!(outcome.points[1].usd_price, 101.5);
    }

    #[tokio::test]
    async fn test_empty_prices_warns() {
        let stub = spawn_stub(vec![StubRoute::json("/coins/dogecoin/market_chart", 200, r#"{"prices": []}"#)]).await;
        let client = CoinGeckoClient::with_base_url(stub.base_url());

        let outcome = fetch_history(&client, "dogecoin").await;

        assert!(outcome.points.is_empty());
        let notice = outcome.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "No data returned for dogecoin");
    }

    #[tokio::test]
    async fn test_request_error_degrades_to_empty() {
        // nothing listens on port 1
        let client = CoinGeckoClient::with_base_url("http://127.0.0.1:1");

        let outcome = fetch_history(&client, "cardano").await;

        assert!(outcome.points.is_empty());
        let notice = outcome.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.starts_with("Error fetching history for cardano: "));
    }

    #[tokio::test]
    async fn test_status_error_degrades_to_empty() {
        let stub = spawn_stub(vec![StubRoute::json("/coins/ripple/market_chart", 429, "{}")]).await;
        let client = CoinGeckoClient::with_base_url(stub.base_url());

        let outcome = fetch_history(&client, "ripple").await;

        assert!(outcome.points.is_empty());
        assert_eq!(outcome.notice.unwrap().level, NoticeLevel::Error);
    }

    #[tokio::test]
    async fn test_one_request_per_coin_in_order() {
        let stub = spawn_stub(vec![
            StubRoute::json("/coins/bitcoin/market_chart", 200, r#"{"prices": [[1700000000000, 1.0]]}"#),
            StubRoute::json("/coins/ethereum/market_chart", 200, r#"{"prices": [[1700000000000, 2.0]]}"#),
        ])
        .await;
        let client = CoinGeckoClient::with_base_url(stub.base_url());
        let coins = vec!["ethereum".to_string(), "bitcoin".to_string(), "solana".to_string()];

        for mode in [FetchMode::Sequential, FetchMode::Concurrent] {
            let outcomes = fetch_histories(&client, &coins, mode).await;
            let ids: Vec<&str> = outcomes.iter().map(|o| o.coin_id.as_str()).collect();
            assert_eq!(ids, vec!["ethereum", "bitcoin", "solana"]);
            assert_eq!(outcomes[0].points[0].usd_price, 2.0);
            assert!(outcomes[2].points.is_empty());
            assert!(outcomes[2].notice.is_some());
        }

        assert_eq!(stub.total_hits().await, 6);
    }
}
