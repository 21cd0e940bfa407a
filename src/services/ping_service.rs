use crate::models::PingMetrics;
use crate::state::AppState;
use crate::utils::format_uptime;

pub async fn get_ping_metrics(state: &AppState) -> PingMetrics {
    PingMetrics {
        status: "ok",
        uptime: format_uptime(state.started_at.elapsed()),
        active_sessions: state.sessions.len().await,
    }
}
