use std::sync::Arc;
use axum::extract::{RawQuery, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{Html, IntoResponse, Response};
use tracing::{error, warn};
use crate::models::SessionState;
use crate::services::{dashboard_service, session_service};
use crate::state::AppState;
use crate::views;

/// GET / — one full render cycle for the caller's session
pub async fn show_dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let form = session_service::parse_form_query(query.as_deref());
    let cookie_id = session_service::session_id_from_cookies(&headers);

    let (known_id, mut session) = match state.sessions.load(cookie_id).await {
        Some((id, session)) => (Some(id), session),
        None => (None, SessionState::default()),
    };
    let submitted = form.submitted;
    session_service::apply_form(&mut session, form);

    // plain loads without a live session render defaults and store nothing
    let session_id = if submitted {
        Some(state.sessions.save(known_id, session.clone()).await)
    } else {
        known_id
    };

    let mut response = match dashboard_service::run_render_cycle(&state, &session).await {
        Ok(view) => Html(views::render_page(&view)).into_response(),
        Err(e) => {
            error!("Render cycle failed (session {:?}): {}", session_id, e);
            e.into_response()
        }
    };

    if let Some(id) = session_id.filter(|id| cookie_id != Some(*id)) {
        match HeaderValue::from_str(&session_service::session_cookie(id)) {
            Ok(value) => {
                response.headers_mut().insert(SET_COOKIE, value);
            }
            Err(e) => warn!("Failed to build session cookie: {}", e),
        }
    }

    response
}
