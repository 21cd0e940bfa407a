//! In-process HTTP stubs standing in for CoinGecko and Ollama in tests

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::response::Response;
use axum::Router;
use tokio::sync::Mutex;

/// Canned response served for one exact path
#[derive(Debug, Clone)]
pub struct StubRoute {
    pub path: String,
    pub status: u16,
    pub body: String,
}

impl StubRoute {
    pub fn json(path: &str, status: u16, body: &str) -> Self {
        Self {
            path: path.to_string(),
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: String,
    pub body: String,
}

#[derive(Clone)]
struct StubState {
    routes: Arc<HashMap<String, StubRoute>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn requests(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .await
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }

    pub async fn queries(&self, path: &str) -> Vec<String> {
        self.requests(path).await.into_iter().map(|r| r.query).collect()
    }

    pub async fn total_hits(&self) -> usize {
        self.requests.lock().await.len()
    }
}

/// Bind a stub server on an ephemeral local port
pub async fn spawn_stub(routes: Vec<StubRoute>) -> StubServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        routes: Arc::new(routes.into_iter().map(|r| (r.path.clone(), r)).collect()),
        requests: requests.clone(),
    };
    let app = Router::new().fallback(handle).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubServer { addr, requests }
}

async fn handle(State(state): State<StubState>, request: Request) -> Response {
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or_default().to_string();
    let body = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map(|b| String::from_utf8_lossy(&b).into_owned())
        .unwrap_or_default();

    state.requests.lock().await.push(RecordedRequest {
        path: path.clone(),
        query,
        body,
    });

    match state.routes.get(&path) {
        Some(route) => Response::builder()
            .status(route.status)
            .header("content-type", "application/json")
            .body(Body::from(route.body.clone()))
            .unwrap(),
        None => Response::builder()
            .status(404)
            .body(Body::from("no stub for path"))
            .unwrap(),
    }
}
