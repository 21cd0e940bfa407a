use std::sync::Arc;
use axum::extract::State;
use axum::Json;
use crate::models::PingMetrics;
use crate::services::ping_service;
use crate::state::AppState;

pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingMetrics> {
    Json(ping_service::get_ping_metrics(&state).await)
}
