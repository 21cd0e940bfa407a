use std::sync::Arc;
use axum::routing::get;
use axum::Router;
use crate::state::AppState;

pub mod dashboard;
pub mod ping;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard::show_dashboard))
        .route("/ping", get(ping::ping))
        .with_state(state)
}
