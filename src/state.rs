use std::sync::Arc;
use std::time::Instant;
use crate::api::coingecko::CoinGeckoClient;
use crate::api::llm::LanguageModel;
use crate::api::ollama::OllamaClient;
use crate::config::Config;
use crate::services::session_service::SessionStore;

/// Shared by every request handler
pub struct AppState {
    pub config: Config,
    pub coingecko: CoinGeckoClient,
    pub llm: Arc<dyn LanguageModel>,
    pub sessions: SessionStore,
    pub started_at: Instant,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let llm = Arc::new(OllamaClient::with_base_url(
            config.ollama_base_url.clone(),
            config.ollama_model.clone(),
        ));
        Self::with_model(config, llm)
    }

    pub fn with_model(config: Config, llm: Arc<dyn LanguageModel>) -> Self {
        Self {
            coingecko: CoinGeckoClient::with_base_url(config.coingecko_base_url.clone()),
            llm,
            sessions: SessionStore::new(),
            started_at: Instant::now(),
            config,
        }
    }
}
