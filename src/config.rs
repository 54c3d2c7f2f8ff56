//! Configuration for the hakbot pipeline
//!
//! All timeouts and tuning knobs live here so the orchestrator, retrieval
//! engine and synthesizer can be constructed from one place. Environment
//! variables override defaults for deployment.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the embedding provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Embedding dimension
    pub dimension: usize,
    /// Maximum cleaned-text length in characters before truncation
    pub max_chars: usize,
    /// Batch size for chunked batch embedding
    pub batch_size: usize,
    /// Retries per chunk before giving up
    pub max_retries: usize,
    /// Fixed backoff between retries
    pub retry_delay_ms: u64,
    /// Whether to normalize embeddings to unit length
    pub normalize: bool,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimension: 384,
            max_chars: 1536,
            batch_size: 32,
            max_retries: 3,
            retry_delay_ms: 200,
            normalize: true,
        }
    }
}

/// Configuration for the retrieval engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Number of passages retained after ranking
    pub top_k: usize,
    /// Minimum cosine similarity for a vector match
    pub min_score: f32,
    /// Budget for the embed-then-vector-search path
    pub vector_timeout_ms: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 4,
            min_score: 0.35,
            vector_timeout_ms: 3_000,
        }
    }
}

impl RetrievalConfig {
    pub fn vector_timeout(&self) -> Duration {
        Duration::from_millis(self.vector_timeout_ms)
    }
}

/// Configuration for answer synthesis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Model name passed to the completion API
    pub model: String,
    /// Optional base URL for OpenAI-compatible APIs (e.g. Ollama)
    pub base_url: Option<String>,
    /// API key; empty is acceptable for local endpoints
    pub api_key: String,
    /// Budget for the completion call
    pub completion_timeout_ms: u64,
    /// Maximum completion tokens
    pub max_tokens: u16,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            base_url: None,
            api_key: String::new(),
            completion_timeout_ms: 12_000,
            max_tokens: 500,
            temperature: 0.3,
        }
    }
}

impl SynthesisConfig {
    pub fn completion_timeout(&self) -> Duration {
        Duration::from_millis(self.completion_timeout_ms)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub synthesis: SynthesisConfig,
}

impl Config {
    /// Build a config from defaults plus environment overrides.
    ///
    /// Recognized variables: `OPENAI_API_KEY`, `HAKBOT_BASE_URL`,
    /// `HAKBOT_MODEL`.
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            config.synthesis.api_key = key;
        }
        if let Ok(url) = std::env::var("HAKBOT_BASE_URL") {
            if !url.is_empty() {
                config.synthesis.base_url = Some(url);
            }
        }
        if let Ok(model) = std::env::var("HAKBOT_MODEL") {
            if !model.is_empty() {
                config.synthesis.model = model;
            }
        }

        config
    }
}
