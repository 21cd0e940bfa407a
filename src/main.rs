use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod api;
mod catalog;
mod config;
mod error;
mod models;
mod routes;
mod services;
mod state;
mod utils;
mod views;

#[cfg(test)]
mod test_support;

use config::Config;
use state::AppState;

const DEFAULT_LOG_DIRECTIVES: [&str; 3] = ["crypto_dashboard=debug", "hyper=warn", "reqwest=warn"];

/// `RUST_LOG` (INFO when unset) with the crate defaults layered on top
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(rust_log.unwrap_or_default());
    for directive in DEFAULT_LOG_DIRECTIVES {
        match directive.parse() {
            Ok(d) => filter = filter.add_directive(d),
            Err(e) => eprintln!("Ignoring log directive {}: {}", directive, e),
        }
    }
    filter
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, stopping dashboard"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("💰 Starting Crypto Dashboard v{}...", env!("CARGO_PKG_VERSION"));

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!("   CoinGecko: {}", config.coingecko_base_url);
    info!("   Ollama:    {} (model: {})", config.ollama_base_url, config.ollama_model);
    info!("   History:   {:?}", config.history_fetch_mode);

    let bind_addr = config.bind_addr;
    let router = routes::build_router(Arc::new(AppState::from_config(config)));

    let listener = match tokio::net::TcpListener::bind(bind_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind {}: {}", bind_addr, e);
            std::process::exit(1);
        }
    };
    info!("📊 Dashboard listening on http://{}", bind_addr);

    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_keeps_defaults_with_rust_log() {
        let filter = log_filter(Some("warn,my_dep=trace")).to_string().to_lowercase();
        assert!(filter.contains("my_dep=trace"));
        assert!(filter.contains("hyper=warn"));
        assert!(filter.contains("reqwest=warn"));
        assert!(filter.contains("crypto_dashboard=debug"));

        let filter = log_filter(None).to_string().to_lowercase();
        assert!(filter.contains("hyper=warn"));
    }
}
