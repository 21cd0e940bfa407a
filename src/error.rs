use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use crate::api::coingecko::ApiError;
use crate::api::llm::LlmError;
use crate::utils::describe_error;
use crate::views;

/// Failures that halt a render cycle
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Price request failed: {0}")]
    Prices(#[from] ApiError),

    #[error("Insight request failed: {0}")]
    Insight(#[from] LlmError),
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let message = describe_error(&self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(views::render_error_page(&message)),
        )
            .into_response()
    }
}
