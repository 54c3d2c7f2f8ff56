//! # hakbot
//!
//! A multilingual retrieval-augmented chatbot answering migrant-worker rights
//! questions for Malaysia. Questions pass a topic guard, are grounded against
//! a SQLite knowledge base (vector search with a deterministic keyword
//! fallback), and are answered through an OpenAI-compatible completion API
//! with a templated fallback when the API is slow or down.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hakbot::{Chatbot, Config, KnowledgeStore, Language};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(KnowledgeStore::new("knowledge.db")?);
//!     let bot = Chatbot::from_config(&Config::from_env(), store);
//!
//!     let turn = bot
//!         .answer("What is the minimum wage in Malaysia?", Language::En, None)
//!         .await?;
//!     println!("{} (sources: {:?})", turn.answer, turn.citations);
//!
//!     Ok(())
//! }
//! ```

// Core modules
pub mod chat;
pub mod config;
pub mod error;
pub mod guard;
pub mod ml;
pub mod retrieval;
pub mod storage;
pub mod synthesis;
pub mod types;
pub mod wage;

// Re-export main API types
pub use chat::{refusal_template, Chatbot};
pub use config::Config;
pub use error::{HakbotError, Result};
pub use guard::{TopicGuard, Verdict};
pub use ml::{cosine_similarity, EmbeddingProvider};
pub use retrieval::{Retrieval, RetrievalEngine};
pub use storage::{KnowledgeStore, SeedItem, StoreStats};
pub use synthesis::{AnswerSynthesizer, CompletionClient, OpenAiCompletion};
pub use types::{
    ChatTurn, KnowledgeItem, Language, RetrievalMethod, RetrievalResult, SourceTable, SourceType,
};
pub use wage::{calculate as calculate_wage, WageBreakdown};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_imports() {
        // Ensure all major types can be imported
        let _config = Config::default();
        let _guard = TopicGuard::new();
    }
}
