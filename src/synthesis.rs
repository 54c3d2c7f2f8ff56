//! Grounded answer synthesis via an OpenAI-compatible completion API
//!
//! Builds a system prompt scoped to migrant-worker rights in Malaysia, labels
//! retrieved passages so citation identifiers can be extracted, and calls the
//! completion API under a timeout. Timeouts and API errors fall back to a
//! templated answer built from the top passage; a raw exception is never
//! surfaced to the user.

use crate::config::SynthesisConfig;
use crate::error::{HakbotError, Result};
use crate::retrieval::Retrieval;
use crate::types::Language;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::time::timeout;

/// Seam for the hosted completion API so tests can script the collaborator
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String>;
}

/// Production completion client backed by async-openai. Works against
/// OpenAI or any compatible endpoint via `base_url` (e.g. Ollama).
pub struct OpenAiCompletion {
    client: Client<OpenAIConfig>,
    model: String,
    max_tokens: u16,
    temperature: f32,
}

impl OpenAiCompletion {
    pub fn new(config: &SynthesisConfig) -> Self {
        let api_config = match &config.base_url {
            Some(base_url) => OpenAIConfig::new()
                .with_api_key(config.api_key.clone())
                .with_api_base(base_url.clone()),
            None => OpenAIConfig::new().with_api_key(config.api_key.clone()),
        };

        Self {
            client: Client::with_config(api_config),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletion {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String> {
        let messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                content: ChatCompletionRequestSystemMessageContent::Text(
                    system_prompt.to_string(),
                ),
                name: None,
            }),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                content: ChatCompletionRequestUserMessageContent::Text(user_message.to_string()),
                name: None,
            }),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .max_tokens(self.max_tokens)
            .temperature(self.temperature)
            .build()
            .map_err(|e| HakbotError::CompletionUnavailable(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| HakbotError::CompletionUnavailable(e.to_string()))?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_ref())
            .ok_or_else(|| {
                HakbotError::CompletionUnavailable("no content in completion response".to_string())
            })?;

        Ok(content.clone())
    }
}

/// Synthesized answer plus the citations that grounded it
#[derive(Debug, Clone)]
pub struct Synthesis {
    pub answer: String,
    pub citations: Vec<String>,
}

/// Builds grounded prompts and post-processes completion replies
pub struct AnswerSynthesizer {
    client: Arc<dyn CompletionClient>,
    config: SynthesisConfig,
}

impl AnswerSynthesizer {
    pub fn new(client: Arc<dyn CompletionClient>, config: SynthesisConfig) -> Self {
        Self { client, config }
    }

    /// Synthesize an answer from the retrieval snapshot. Never fails: on
    /// timeout or API error the templated fallback answer is returned.
    pub async fn synthesize(
        &self,
        question: &str,
        language: Language,
        retrieval: &Retrieval,
    ) -> Synthesis {
        let system_prompt = build_system_prompt(language);
        let user_message = build_user_message(question, retrieval);

        let reply = match timeout(
            self.config.completion_timeout(),
            self.client.complete(&system_prompt, &user_message),
        )
        .await
        {
            Ok(Ok(reply)) if !reply.trim().is_empty() => reply.trim().to_string(),
            Ok(Ok(_)) => {
                log::warn!("Completion API returned an empty reply, using fallback answer");
                return self.fallback(language, retrieval);
            }
            Ok(Err(e)) => {
                log::warn!("Completion API error, using fallback answer: {}", e);
                return self.fallback(language, retrieval);
            }
            Err(_) => {
                log::warn!(
                    "Completion API exceeded {}ms budget, using fallback answer",
                    self.config.completion_timeout_ms
                );
                return self.fallback(language, retrieval);
            }
        };

        let citations = match_citations(&reply, retrieval);
        Synthesis {
            answer: reply,
            citations,
        }
    }

    fn fallback(&self, language: Language, retrieval: &Retrieval) -> Synthesis {
        match retrieval.results.first() {
            Some(top) => {
                let mut answer = format!(
                    "{}\n\n{}",
                    fallback_preamble(language),
                    top.item.primary_text.trim()
                );
                let secondary = top.item.secondary_text.trim();
                if !secondary.is_empty() {
                    answer.push('\n');
                    answer.push_str(secondary);
                }
                Synthesis {
                    answer,
                    citations: vec![top.item.citation_id()],
                }
            }
            None => Synthesis {
                answer: cannot_answer(language).to_string(),
                citations: Vec::new(),
            },
        }
    }
}

fn build_system_prompt(language: Language) -> String {
    format!(
        "You are an assistant for migrant workers in Malaysia. Answer only \
         questions about migrant-worker rights, employment law, wages, and \
         related welfare topics in Malaysia.\n\
         Rules:\n\
         1. Ground your answer in the labeled sources when they are provided, \
         and mention the source labels (e.g. faq#12) you relied on.\n\
         2. If the sources do not cover the question, say so and give careful \
         general guidance.\n\
         3. Answer strictly in {}. Do not switch languages.\n\
         4. Be concise, practical, and never invent laws or numbers.",
        language.name()
    )
}

/// Label each passage so citation identifiers survive into the reply
fn build_user_message(question: &str, retrieval: &Retrieval) -> String {
    if retrieval.is_empty() {
        return question.to_string();
    }

    let context = retrieval
        .results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "[S{} | {} | {}]\n{}\n{}",
                i + 1,
                r.item.citation_id(),
                r.item.category,
                r.item.primary_text.trim(),
                r.item.secondary_text.trim()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Sources from the knowledge base:\n{}\n\nQuestion: {}",
        context, question
    )
}

/// Heuristic citation matching: keep the retrieved identifiers the answer
/// plausibly references (citation id, category, or a leading fragment of the
/// passage). When nothing matches, conservatively return every identifier
/// that was in context.
fn match_citations(answer: &str, retrieval: &Retrieval) -> Vec<String> {
    if retrieval.is_empty() {
        return Vec::new();
    }

    let lowered = answer.to_lowercase();
    let matched: Vec<String> = retrieval
        .results
        .iter()
        .filter(|r| {
            let id = r.item.citation_id();
            let fragment: String = r
                .item
                .primary_text
                .to_lowercase()
                .chars()
                .take(40)
                .collect();
            lowered.contains(&id)
                || (!r.item.category.is_empty()
                    && lowered.contains(&r.item.category.to_lowercase()))
                || (!fragment.trim().is_empty() && lowered.contains(fragment.trim()))
        })
        .map(|r| r.item.citation_id())
        .collect();

    if matched.is_empty() {
        retrieval
            .results
            .iter()
            .map(|r| r.item.citation_id())
            .collect()
    } else {
        matched
    }
}

fn fallback_preamble(language: Language) -> &'static str {
    match language {
        Language::En => "Here is the most relevant information from our knowledge base:",
        Language::Ms => "Berikut maklumat paling berkaitan daripada pangkalan pengetahuan kami:",
        Language::Ne => "हाम्रो ज्ञान आधारबाट सबैभन्दा सान्दर्भिक जानकारी यहाँ छ:",
        Language::Hi => "हमारे ज्ञान आधार से सबसे प्रासंगिक जानकारी यह है:",
        Language::Bn => "আমাদের জ্ঞানভান্ডার থেকে সবচেয়ে প্রাসঙ্গিক তথ্য এখানে:",
    }
}

fn cannot_answer(language: Language) -> &'static str {
    match language {
        Language::En => {
            "I could not find this in our knowledge base. Please contact the nearest \
             Labour Department (JTK) office or your embassy for help with this question."
        }
        Language::Ms => {
            "Maklumat ini tiada dalam pangkalan pengetahuan kami. Sila hubungi pejabat \
             Jabatan Tenaga Kerja (JTK) terdekat atau kedutaan anda untuk bantuan."
        }
        Language::Ne => {
            "यो जानकारी हाम्रो ज्ञान आधारमा भेटिएन। कृपया नजिकको श्रम विभाग (JTK) कार्यालय \
             वा आफ्नो दूतावासमा सम्पर्क गर्नुहोस्।"
        }
        Language::Hi => {
            "यह जानकारी हमारे ज्ञान आधार में नहीं मिली। कृपया निकटतम श्रम विभाग (JTK) \
             कार्यालय या अपने दूतावास से संपर्क करें।"
        }
        Language::Bn => {
            "এই তথ্য আমাদের জ্ঞানভান্ডারে পাওয়া যায়নি। অনুগ্রহ করে নিকটস্থ শ্রম বিভাগ (JTK) \
             অফিস বা আপনার দূতাবাসে যোগাযোগ করুন।"
        }
    }
}
