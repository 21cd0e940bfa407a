//! Ping/status models

use serde::Serialize;

/// Liveness information returned by `/ping`
#[derive(Debug, Serialize)]
pub struct PingMetrics {
    pub status: &'static str,
    pub uptime: String,
    pub active_sessions: usize,
}
