//! Chat orchestration: guard, retrieve, synthesize, log
//!
//! The chatbot owns explicitly constructed components (no module-level
//! singletons) and wires them into the request flow: TopicGuard first, then
//! the retrieval engine, then the synthesizer. Conversation logging is
//! fire-and-forget and can never delay or fail a response.

use crate::config::Config;
use crate::error::{HakbotError, Result};
use crate::guard::TopicGuard;
use crate::ml::EmbeddingProvider;
use crate::retrieval::RetrievalEngine;
use crate::storage::KnowledgeStore;
use crate::synthesis::{AnswerSynthesizer, CompletionClient, OpenAiCompletion};
use crate::types::{ChatTurn, Language, SourceType};
use std::sync::Arc;
use std::time::Instant;

/// Maximum accepted question length in characters
pub const MAX_QUESTION_CHARS: usize = 1000;

/// Fixed refusal template for off-topic or deny-listed questions
pub fn refusal_template(language: Language) -> &'static str {
    match language {
        Language::En => {
            "I can only answer questions about migrant-worker rights, employment, \
             wages, and related welfare topics in Malaysia. Please ask me about \
             those topics."
        }
        Language::Ms => {
            "Saya hanya boleh menjawab soalan tentang hak pekerja migran, pekerjaan, \
             gaji, dan kebajikan berkaitan di Malaysia. Sila tanya tentang topik \
             tersebut."
        }
        Language::Ne => {
            "म मलेसियामा आप्रवासी कामदारको अधिकार, रोजगार, तलब र सम्बन्धित विषयहरूका \
             प्रश्नहरूको मात्र जवाफ दिन सक्छु। कृपया ती विषयहरूबारे सोध्नुहोस्।"
        }
        Language::Hi => {
            "मैं केवल मलेशिया में प्रवासी मजदूरों के अधिकार, रोजगार, वेतन और संबंधित \
             विषयों के प्रश्नों का उत्तर दे सकता हूँ। कृपया उन्हीं विषयों के बारे में पूछें।"
        }
        Language::Bn => {
            "আমি শুধুমাত্র মালয়েশিয়ায় অভিবাসী শ্রমিকদের অধিকার, কর্মসংস্থান, মজুরি এবং \
             সংশ্লিষ্ট বিষয়ের প্রশ্নের উত্তর দিতে পারি। অনুগ্রহ করে সেই বিষয়ে প্রশ্ন করুন।"
        }
    }
}

/// The assembled question-answering pipeline
pub struct Chatbot {
    guard: TopicGuard,
    engine: RetrievalEngine,
    synthesizer: AnswerSynthesizer,
    store: Arc<KnowledgeStore>,
}

impl Chatbot {
    pub fn new(
        guard: TopicGuard,
        engine: RetrievalEngine,
        synthesizer: AnswerSynthesizer,
        store: Arc<KnowledgeStore>,
    ) -> Self {
        Self {
            guard,
            engine,
            synthesizer,
            store,
        }
    }

    /// Assemble the full pipeline from a config and an open knowledge store,
    /// using the production completion client.
    pub fn from_config(config: &Config, store: Arc<KnowledgeStore>) -> Self {
        let client: Arc<dyn CompletionClient> = Arc::new(OpenAiCompletion::new(&config.synthesis));
        Self::with_completion_client(config, store, client)
    }

    /// Assemble the pipeline with an injected completion client (tests,
    /// alternative providers).
    pub fn with_completion_client(
        config: &Config,
        store: Arc<KnowledgeStore>,
        client: Arc<dyn CompletionClient>,
    ) -> Self {
        let embedder = Arc::new(EmbeddingProvider::new(config.embedding.clone()));
        let engine = RetrievalEngine::new(
            Arc::clone(&store),
            embedder,
            config.retrieval.clone(),
        );
        let synthesizer = AnswerSynthesizer::new(client, config.synthesis.clone());
        Self::new(TopicGuard::new(), engine, synthesizer, store)
    }

    /// Answer one question. Only validation failures surface as errors;
    /// everything else degrades to a best-effort `ChatTurn`.
    pub async fn answer(
        &self,
        question: &str,
        language: Language,
        session_id: Option<String>,
    ) -> Result<ChatTurn> {
        let question = question.trim();
        if question.is_empty() {
            return Err(HakbotError::Validation(
                "question must not be empty".to_string(),
            ));
        }
        if question.chars().count() > MAX_QUESTION_CHARS {
            return Err(HakbotError::Validation(format!(
                "question exceeds {} characters",
                MAX_QUESTION_CHARS
            )));
        }

        let started = Instant::now();

        let verdict = self.guard.classify(question, language);
        let turn = if !verdict.in_scope {
            log::info!("Question rejected by topic guard ({:?})", verdict.reason);
            ChatTurn {
                question: question.to_string(),
                language,
                answer: refusal_template(language).to_string(),
                source_type: SourceType::OffTopic,
                citations: Vec::new(),
                response_time_ms: started.elapsed().as_millis() as u64,
                session_id,
            }
        } else {
            let retrieval = self.engine.retrieve(question, language).await?;
            let synthesis = self.synthesizer.synthesize(question, language, &retrieval).await;

            let source_type = if retrieval.is_empty() {
                SourceType::General
            } else {
                SourceType::Database
            };

            ChatTurn {
                question: question.to_string(),
                language,
                answer: synthesis.answer,
                source_type,
                citations: synthesis.citations,
                response_time_ms: started.elapsed().as_millis() as u64,
                session_id,
            }
        };

        self.log_turn_detached(&turn);
        Ok(turn)
    }

    /// Schedule persistence of the turn without awaiting it. Failures are
    /// reported to the log only, never to the user.
    fn log_turn_detached(&self, turn: &ChatTurn) {
        let store = Arc::clone(&self.store);
        let turn = turn.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = store.log_turn(&turn) {
                log::warn!("Failed to persist chat turn: {}", e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SeedItem;
    use crate::types::SourceTable;
    use async_trait::async_trait;

    struct EchoClient;

    #[async_trait]
    impl CompletionClient for EchoClient {
        async fn complete(&self, _system: &str, user: &str) -> Result<String> {
            Ok(format!("echo: {}", user.chars().take(120).collect::<String>()))
        }
    }

    fn bot() -> Chatbot {
        let store = Arc::new(KnowledgeStore::memory().unwrap());
        store
            .insert_items(&[SeedItem {
                source_table: SourceTable::WageRule,
                primary_text: "Minimum wage in Malaysia is RM1700 per month".to_string(),
                secondary_text: String::new(),
                category: "wages".to_string(),
                language: Language::En,
            }])
            .unwrap();
        Chatbot::with_completion_client(&Config::default(), store, Arc::new(EchoClient))
    }

    #[tokio::test]
    async fn test_empty_question_is_validation_error() {
        let bot = bot();
        match bot.answer("   ", Language::En, None).await {
            Err(HakbotError::Validation(_)) => (),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_oversized_question_is_validation_error() {
        let bot = bot();
        let long = "wage ".repeat(300);
        match bot.answer(&long, Language::En, None).await {
            Err(HakbotError::Validation(msg)) => assert!(msg.contains("1000")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_off_topic_returns_refusal_template() {
        let bot = bot();
        let turn = bot
            .answer("Tell me about football scores", Language::En, None)
            .await
            .unwrap();
        assert_eq!(turn.source_type, SourceType::OffTopic);
        assert_eq!(turn.answer, refusal_template(Language::En));
        assert!(turn.citations.is_empty());
    }

    #[tokio::test]
    async fn test_grounded_answer_is_database_sourced() {
        let bot = bot();
        let turn = bot
            .answer("What is the minimum wage in Malaysia?", Language::En, None)
            .await
            .unwrap();
        assert_eq!(turn.source_type, SourceType::Database);
        assert!(!turn.citations.is_empty());
    }

    #[tokio::test]
    async fn test_in_scope_without_matches_is_general() {
        let bot = bot();
        // Domain keyword ("sick leave") with no matching knowledge rows
        let turn = bot
            .answer("How many days of sick leave do I get?", Language::En, None)
            .await
            .unwrap();
        assert_eq!(turn.source_type, SourceType::General);
        assert!(turn.citations.is_empty());
    }
}
