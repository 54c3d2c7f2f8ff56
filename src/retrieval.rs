//! Two-tier retrieval: vector search under a timeout, keyword fallback
//!
//! The vector tier embeds the question and runs a cosine search; if that
//! times out, errors, or comes back empty, the keyword tier answers from the
//! raw question text. Callers never see the vector failure as an error, only
//! as a (possibly less relevant) result set tagged with the method that
//! produced it.

use crate::config::RetrievalConfig;
use crate::error::{HakbotError, Result};
use crate::ml::EmbeddingProvider;
use crate::storage::KnowledgeStore;
use crate::types::{Language, RetrievalMethod, RetrievalResult};
use std::sync::Arc;
use tokio::time::timeout;

/// Outcome of a retrieval pass: ranked results plus the tier that produced
/// them. Empty results mean the synthesizer proceeds in general-knowledge
/// mode.
#[derive(Debug, Clone)]
pub struct Retrieval {
    pub results: Vec<RetrievalResult>,
    pub method: RetrievalMethod,
}

impl Retrieval {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Orchestrates vector search with keyword fallback
pub struct RetrievalEngine {
    store: Arc<KnowledgeStore>,
    embedder: Arc<EmbeddingProvider>,
    config: RetrievalConfig,
}

impl RetrievalEngine {
    pub fn new(
        store: Arc<KnowledgeStore>,
        embedder: Arc<EmbeddingProvider>,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            store,
            embedder,
            config,
        }
    }

    /// Retrieve grounding passages for a question.
    ///
    /// The `language` parameter is carried for parity with the chat surface;
    /// the knowledge base is multilingual and both tiers match across
    /// languages, so it only feeds logging today.
    pub async fn retrieve(&self, question: &str, language: Language) -> Result<Retrieval> {
        let budget = self.config.vector_timeout();

        let vector = match timeout(budget, self.vector_tier(question)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(HakbotError::DependencyTimeout(format!(
                "vector tier exceeded {}ms budget",
                self.config.vector_timeout_ms
            ))),
        };

        match vector {
            Ok(results) if !results.is_empty() => {
                log::debug!(
                    "Vector tier returned {} results for {} question",
                    results.len(),
                    language.code()
                );
                return Ok(Retrieval {
                    results,
                    method: RetrievalMethod::Vector,
                });
            }
            Ok(_) => {
                log::debug!("Vector tier empty, falling back to keyword search");
            }
            Err(e) => {
                log::warn!("Vector tier failed, falling back to keyword search: {}", e);
            }
        }

        // The keyword tier degrades to empty rather than erroring so the
        // caller always gets a usable (possibly general-mode) outcome.
        let results = match self.store.keyword_search(question, self.config.top_k) {
            Ok(results) => results,
            Err(e) => {
                log::error!("Keyword tier failed: {}", e);
                Vec::new()
            }
        };

        Ok(Retrieval {
            results,
            method: RetrievalMethod::Keyword,
        })
    }

    async fn vector_tier(&self, question: &str) -> Result<Vec<RetrievalResult>> {
        let query = self.embedder.embed(question).await?;
        self.store
            .vector_search(&query, self.config.top_k, self.config.min_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmbeddingConfig;
    use crate::storage::SeedItem;
    use crate::types::SourceTable;

    fn seeded_store() -> Arc<KnowledgeStore> {
        let store = KnowledgeStore::memory().unwrap();
        store
            .insert_items(&[
                SeedItem {
                    source_table: SourceTable::WageRule,
                    primary_text: "Minimum wage in Malaysia is RM1700 per month".to_string(),
                    secondary_text: String::new(),
                    category: "wages".to_string(),
                    language: Language::En,
                },
                SeedItem {
                    source_table: SourceTable::Faq,
                    primary_text: "Annual leave entitlement depends on years of service"
                        .to_string(),
                    secondary_text: String::new(),
                    category: "leave".to_string(),
                    language: Language::En,
                },
            ])
            .unwrap();
        Arc::new(store)
    }

    fn engine(store: Arc<KnowledgeStore>, vector_timeout_ms: u64) -> RetrievalEngine {
        let embedder = Arc::new(EmbeddingProvider::new(EmbeddingConfig::default()));
        RetrievalEngine::new(
            store,
            embedder,
            RetrievalConfig {
                top_k: 4,
                min_score: 0.35,
                vector_timeout_ms,
            },
        )
    }

    #[tokio::test]
    async fn test_falls_back_to_keyword_when_no_embeddings() {
        // No backfill has run, so the vector tier returns empty
        let store = seeded_store();
        let engine = engine(store.clone(), 3_000);

        let retrieval = engine
            .retrieve("minimum wage malaysia", Language::En)
            .await
            .unwrap();

        assert_eq!(retrieval.method, RetrievalMethod::Keyword);
        assert!(!retrieval.is_empty());
        assert!(retrieval.results[0].item.primary_text.contains("RM1700"));
    }

    #[tokio::test]
    async fn test_keyword_fallback_matches_standalone_search() {
        let store = seeded_store();
        let engine = engine(store.clone(), 3_000);

        let retrieval = engine
            .retrieve("annual leave entitlement", Language::En)
            .await
            .unwrap();
        let standalone = store.keyword_search("annual leave entitlement", 4).unwrap();

        assert_eq!(retrieval.results.len(), standalone.len());
        for (a, b) in retrieval.results.iter().zip(standalone.iter()) {
            assert_eq!(a.item.id, b.item.id);
            assert_eq!(a.score, b.score);
        }
    }

    #[tokio::test]
    async fn test_vector_tier_used_after_backfill() {
        let store = seeded_store();
        let embedder = Arc::new(EmbeddingProvider::new(EmbeddingConfig::default()));

        for item in store.items_missing_embedding().unwrap() {
            let embedding = embedder.embed(&item.searchable_text()).await.unwrap();
            store.store_embedding(item.id, &embedding).unwrap();
        }

        let engine = RetrievalEngine::new(
            store,
            embedder,
            RetrievalConfig {
                top_k: 4,
                // Deterministic hash embeddings only guarantee similarity ~1
                // for near-identical text, so keep the threshold permissive.
                min_score: 0.1,
                vector_timeout_ms: 3_000,
            },
        );

        let retrieval = engine
            .retrieve("Minimum wage in Malaysia is RM1700 per month", Language::En)
            .await
            .unwrap();

        assert_eq!(retrieval.method, RetrievalMethod::Vector);
        assert!(retrieval.results[0].item.primary_text.contains("RM1700"));
    }

    #[tokio::test]
    async fn test_no_results_from_either_tier() {
        let store = seeded_store();
        let engine = engine(store, 3_000);

        let retrieval = engine
            .retrieve("quantum chromodynamics", Language::En)
            .await
            .unwrap();
        assert!(retrieval.is_empty());
        assert_eq!(retrieval.method, RetrievalMethod::Keyword);
    }
}
