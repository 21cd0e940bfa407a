pub mod coingecko;
pub mod llm;
pub mod ollama;
