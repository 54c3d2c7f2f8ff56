//! End-to-end pipeline tests
//!
//! Exercises the full guard -> retrieve -> synthesize flow with scripted
//! completion clients and seeded knowledge bases, plus the wage calculator
//! surface.

use async_trait::async_trait;
use hakbot::{
    refusal_template, Chatbot, CompletionClient, Config, EmbeddingProvider, HakbotError,
    KnowledgeStore, Language, Result, RetrievalEngine, RetrievalMethod, SeedItem, SourceTable,
    SourceType,
};
use std::sync::Arc;

/// Completion client that answers like a well-behaved model: it repeats the
/// key fact and the label of the first source it was given.
struct GroundedClient;

#[async_trait]
impl CompletionClient for GroundedClient {
    async fn complete(&self, _system: &str, user: &str) -> Result<String> {
        // Extract the first citation label from the prompt, e.g. "wage_rule#1"
        let citation = user
            .split('|')
            .nth(1)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        Ok(format!(
            "The minimum wage in Malaysia is RM1700 per month ({}).",
            citation
        ))
    }
}

/// Completion client that never answers within any reasonable budget
struct StalledClient;

#[async_trait]
impl CompletionClient for StalledClient {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
        tokio::time::sleep(std::time::Duration::from_secs(30)).await;
        Ok("too late".to_string())
    }
}

/// Completion client that always errors
struct DownClient;

#[async_trait]
impl CompletionClient for DownClient {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
        Err(HakbotError::CompletionUnavailable("connection refused".to_string()))
    }
}

fn seeded_store() -> Arc<KnowledgeStore> {
    let store = KnowledgeStore::memory().unwrap();
    store
        .insert_items(&[
            SeedItem {
                source_table: SourceTable::WageRule,
                primary_text: "The minimum wage in Malaysia is RM1700 per month".to_string(),
                secondary_text: "Minimum Wages Order, effective February 2025".to_string(),
                category: "wages".to_string(),
                language: Language::En,
            },
            SeedItem {
                source_table: SourceTable::Faq,
                primary_text: "Can my employer keep my passport?".to_string(),
                secondary_text: "No. Passport retention is an offence; report it to JTK"
                    .to_string(),
                category: "documents".to_string(),
                language: Language::En,
            },
        ])
        .unwrap();
    Arc::new(store)
}

#[tokio::test]
async fn minimum_wage_question_is_database_grounded() {
    let store = seeded_store();
    let bot = Chatbot::with_completion_client(&Config::default(), store, Arc::new(GroundedClient));

    let turn = bot
        .answer("What is the minimum wage in Malaysia?", Language::En, None)
        .await
        .unwrap();

    assert_eq!(turn.source_type, SourceType::Database);
    assert!(turn.answer.contains("1700"));
    assert!(!turn.citations.is_empty());
    assert!(turn.citations.iter().any(|c| c.starts_with("wage_rule#")));
}

#[tokio::test]
async fn unsafe_question_gets_fixed_refusal_regardless_of_knowledge_base() {
    let store = seeded_store();
    let bot = Chatbot::with_completion_client(&Config::default(), store, Arc::new(GroundedClient));

    let turn = bot
        .answer("How to make a bomb?", Language::En, None)
        .await
        .unwrap();

    assert_eq!(turn.source_type, SourceType::OffTopic);
    assert_eq!(turn.answer, refusal_template(Language::En));
    assert!(turn.citations.is_empty());
}

#[tokio::test]
async fn stalled_completion_still_produces_an_answer() {
    let store = seeded_store();
    let mut config = Config::default();
    config.synthesis.completion_timeout_ms = 50;
    let bot = Chatbot::with_completion_client(&config, store, Arc::new(StalledClient));

    let turn = bot
        .answer("What is the minimum wage in Malaysia?", Language::En, None)
        .await
        .unwrap();

    // Passage-derived fallback, never a raised timeout
    assert!(!turn.answer.is_empty());
    assert!(turn.answer.contains("RM1700"));
    assert_eq!(turn.source_type, SourceType::Database);
}

#[tokio::test]
async fn dead_completion_api_degrades_to_template() {
    let store = seeded_store();
    let bot = Chatbot::with_completion_client(&Config::default(), store, Arc::new(DownClient));

    let turn = bot
        .answer("Can my employer keep my passport?", Language::En, None)
        .await
        .unwrap();

    assert!(!turn.answer.is_empty());
    assert!(turn.answer.contains("Passport retention is an offence"));
    assert_eq!(turn.citations.len(), 1);
}

#[tokio::test]
async fn retrieval_without_embeddings_matches_standalone_keyword_search() {
    let store = seeded_store();
    let config = Config::default();
    let embedder = Arc::new(EmbeddingProvider::new(config.embedding.clone()));
    let engine = RetrievalEngine::new(store.clone(), embedder, config.retrieval.clone());

    let retrieval = engine
        .retrieve("employer keep passport", Language::En)
        .await
        .unwrap();
    let standalone = store.keyword_search("employer keep passport", 4).unwrap();

    assert_eq!(retrieval.method, RetrievalMethod::Keyword);
    assert!(!retrieval.results.is_empty());
    assert_eq!(retrieval.results.len(), standalone.len());
    for (a, b) in retrieval.results.iter().zip(standalone.iter()) {
        assert_eq!(a.item.id, b.item.id);
        assert_eq!(a.score, b.score);
    }
}

#[tokio::test]
async fn seed_backfill_and_vector_search_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("knowledge.db");
    let store = Arc::new(KnowledgeStore::new(&db_path).unwrap());
    store
        .insert_items(&[SeedItem {
            source_table: SourceTable::EmploymentLaw,
            primary_text: "Overtime on a normal working day is paid at 1.5 times the hourly rate"
                .to_string(),
            secondary_text: "Employment Act 1955, Section 60A(3)(a)".to_string(),
            category: "overtime".to_string(),
            language: Language::En,
        }])
        .unwrap();

    let config = Config::default();
    let embedder = EmbeddingProvider::new(config.embedding.clone());

    let pending = store.items_missing_embedding().unwrap();
    assert_eq!(pending.len(), 1);
    let texts: Vec<String> = pending.iter().map(|i| i.searchable_text()).collect();
    let embeddings = embedder.embed_batch(&texts).await.unwrap();
    for (item, embedding) in pending.iter().zip(embeddings.iter()) {
        assert!(store.store_embedding(item.id, embedding).unwrap());
    }

    let query = embedder.embed(&pending[0].searchable_text()).await.unwrap();
    let results = store.vector_search(&query, 4, 0.9).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].method, RetrievalMethod::Vector);
    assert!(results[0].score > 0.99);
}

#[tokio::test]
async fn chat_turns_are_persisted_asynchronously() {
    let store = seeded_store();
    let bot = Chatbot::with_completion_client(
        &Config::default(),
        store.clone(),
        Arc::new(GroundedClient),
    );

    bot.answer("What is the minimum wage in Malaysia?", Language::En, Some("s1".into()))
        .await
        .unwrap();

    // The log write is fire-and-forget; give the blocking task a moment
    let mut logged = 0;
    for _ in 0..50 {
        logged = store.stats().unwrap().logged_turns;
        if logged > 0 {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    assert_eq!(logged, 1);
}

#[test]
fn wage_surface_matches_statutory_example() {
    let breakdown = hakbot::calculate_wage(1700.0, 10.0).unwrap();
    assert_eq!(breakdown.steps.len(), 4);
    assert!(breakdown.steps[0].contains("RM65.38"));
    assert!(breakdown.steps[1].contains("RM8.17"));
    assert!(breakdown.steps[2].contains("RM12.26"));
    assert!((breakdown.total_overtime_pay.unwrap() - 122.60).abs() < 0.01);

    assert!(matches!(
        hakbot::calculate_wage(-5.0, 0.0),
        Err(HakbotError::Validation(_))
    ));
    assert!(matches!(
        hakbot::calculate_wage(1000.0, -1.0),
        Err(HakbotError::Validation(_))
    ));
}
