//! Widget state that survives between render cycles
//!
//! Each visitor gets a `Uuid` in the `dashboard_session` cookie. The store maps
//! it to the last selection and question so reruns see the same widget values.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;
use crate::catalog;
use crate::models::SessionState;

pub const SESSION_COOKIE: &str = "dashboard_session";

/// Sessions not seen for this long are dropped on the next write
pub const SESSION_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

struct StoredSession {
    state: SessionState,
    last_seen: Instant,
}

/// In-memory session map.
///
/// Entries are only created when a form is submitted, so plain page loads
/// (health checks, crawlers) never allocate one.
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, StoredSession>>,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_idle_ttl(SESSION_IDLE_TTL)
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_ttl,
        }
    }

    fn sweep(sessions: &mut HashMap<Uuid, StoredSession>, idle_ttl: Duration) {
        let before = sessions.len();
        sessions.retain(|_, s| s.last_seen.elapsed() < idle_ttl);
        let dropped = before - sessions.len();
        if dropped > 0 {
            debug!("Dropped {} idle session(s)", dropped);
        }
    }

    /// Look up a live session and mark it as seen
    pub async fn load(&self, id: Option<Uuid>) -> Option<(Uuid, SessionState)> {
        let id = id?;
        let mut sessions = self.sessions.lock().await;
        match sessions.get_mut(&id) {
            Some(stored) if stored.last_seen.elapsed() < self.idle_ttl => {
                stored.last_seen = Instant::now();
                Some((id, stored.state.clone()))
            }
            _ => {
                debug!("Unknown or expired session {}", id);
                None
            }
        }
    }

    /// Store state under `id`, or under a fresh id when `None`. Returns the id used.
    pub async fn save(&self, id: Option<Uuid>, state: SessionState) -> Uuid {
        let mut sessions = self.sessions.lock().await;
        Self::sweep(&mut sessions, self.idle_ttl);

        let id = id.unwrap_or_else(Uuid::new_v4);
        sessions.insert(
            id,
            StoredSession {
                state,
                last_seen: Instant::now(),
            },
        );
        id
    }

    pub async fn len(&self) -> usize {
        let mut sessions = self.sessions.lock().await;
        Self::sweep(&mut sessions, self.idle_ttl);
        sessions.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the session id from the request's `Cookie` headers
pub fn session_id_from_cookies(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value for a session id
pub fn session_cookie(id: Uuid) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}

/// Widget values submitted with the dashboard form
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormInput {
    pub submitted: bool,
    pub coins: Vec<String>,
    pub question: Option<String>,
}

/// Parse the raw query string of `GET /`.
///
/// `coins` may repeat; `submitted` marks a form post so that an empty
/// selection can be told apart from a plain page load.
pub fn parse_form_query(raw: Option<&str>) -> FormInput {
    let mut form = FormInput::default();
    let Some(raw) = raw else {
        return form;
    };

    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "submitted" => form.submitted = true,
            "coins" => form.coins.push(value.into_owned()),
            "q" => form.question = Some(value.into_owned()),
            _ => {}
        }
    }
    form
}

/// Apply submitted widget values to the session.
///
/// Unknown coin ids are dropped and duplicates collapse to their first
/// position. A page load without the form leaves the session untouched.
pub fn apply_form(state: &mut SessionState, form: FormInput) {
    if !form.submitted {
        return;
    }

    let mut selected: Vec<String> = Vec::with_capacity(form.coins.len());
    for coin in form.coins {
        if !catalog::is_available(&coin) {
            warn!("Ignoring unknown coin id in selection: {}", coin);
            continue;
        }
        if !selected.contains(&coin) {
            selected.push(coin);
        }
    }

    state.selected = selected;
    state.question = form.question.unwrap_or_default();
}
