//! One render cycle: everything `GET /` shows, fetched fresh

use chrono::Local;
use tracing::{error, info};
use crate::catalog;
use crate::error::DashboardError;
use crate::models::{DashboardView, HistoryOutcome, Notice, SessionState, TrendItem};
use crate::services::{chart_service, history_service, insight_service, price_service};
use crate::state::AppState;

/// Turn history outcomes into chart and notice entries, in selection order.
/// Coins with an empty series get no chart.
fn build_trend_items(outcomes: Vec<HistoryOutcome>) -> Vec<TrendItem> {
    let mut items = Vec::new();
    for outcome in outcomes {
        if let Some(notice) = outcome.notice {
            items.push(TrendItem::Notice(notice));
        }
        if outcome.points.is_empty() {
            continue;
        }

        match chart_service::render_price_chart(
            &outcome.coin_id,
            &outcome.points,
            chart_service::CHART_WIDTH,
            chart_service::CHART_HEIGHT,
        ) {
            Ok(svg) => items.push(TrendItem::Chart {
                coin_id: outcome.coin_id,
                svg,
            }),
            Err(e) => {
                error!("Chart rendering failed for {}: {}", outcome.coin_id, e);
                items.push(TrendItem::Notice(Notice::error(format!(
                    "Failed to render chart for {}: {}",
                    outcome.coin_id, e
                ))));
            }
        }
    }
    items
}

/// Run a full render cycle for the given widget values.
///
/// Price and model failures abort the cycle; history failures only degrade
/// the affected chart.
pub async fn run_render_cycle(state: &AppState, session: &SessionState) -> Result<DashboardView, DashboardError> {
    let selected = session.selected.clone();
    info!("🔄 Render cycle for {:?}", selected);

    let (tiles, trends, selection_notice) = if selected.is_empty() {
        (
            Vec::new(),
            Vec::new(),
            Some(Notice::info("Select at least one coin to see prices and trends.")),
        )
    } else {
        let quotes = price_service::fetch_prices(&state.coingecko, &selected).await?;
        let tiles = price_service::build_metric_tiles(&selected, &quotes);

        let outcomes = history_service::fetch_histories(
            &state.coingecko,
            &selected,
            state.config.history_fetch_mode,
        )
        .await;
        (tiles, build_trend_items(outcomes), None)
    };

    let answer = insight_service::forward(state.llm.as_ref(), &session.question).await?;

    Ok(DashboardView {
        selected,
        selection_notice,
        tiles,
        trends,
        news: catalog::get_news_items(),
        question: session.question.clone(),
        answer,
        updated_at: Local::now(),
    })
}
