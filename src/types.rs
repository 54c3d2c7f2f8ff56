//! Core domain types shared across the pipeline

use serde::{Deserialize, Serialize};

/// Supported answer languages. Unknown codes fall back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Malay
    Ms,
    /// Nepali
    Ne,
    /// Hindi
    Hi,
    /// Bengali
    Bn,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Ms,
        Language::Ne,
        Language::Hi,
        Language::Bn,
    ];

    /// Parse a language code, defaulting to English for anything unknown.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "ms" | "my" => Language::Ms,
            "ne" => Language::Ne,
            "hi" => Language::Hi,
            "bn" => Language::Bn,
            _ => Language::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ms => "ms",
            Language::Ne => "ne",
            Language::Hi => "hi",
            Language::Bn => "bn",
        }
    }

    /// Human-readable name used in prompts
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ms => "Malay",
            Language::Ne => "Nepali",
            Language::Hi => "Hindi",
            Language::Bn => "Bengali",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

/// Logical source table a knowledge item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTable {
    RightsGuide,
    EmploymentLaw,
    Faq,
    WageRule,
}

impl SourceTable {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTable::RightsGuide => "rights_guide",
            SourceTable::EmploymentLaw => "employment_law",
            SourceTable::Faq => "faq",
            SourceTable::WageRule => "wage_rule",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s {
            "rights_guide" => Some(SourceTable::RightsGuide),
            "employment_law" => Some(SourceTable::EmploymentLaw),
            "faq" => Some(SourceTable::Faq),
            "wage_rule" => Some(SourceTable::WageRule),
            _ => None,
        }
    }
}

/// One row of the knowledge base. Immutable after creation except for
/// `embedding`, which an offline backfill job writes exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeItem {
    pub id: i64,
    pub source_table: SourceTable,
    /// Main passage text (question for FAQs, section text for laws)
    pub primary_text: String,
    /// Supporting text (answer for FAQs, summary for guides)
    pub secondary_text: String,
    pub category: String,
    pub language: Language,
    /// Absent until the backfill job has run for this row
    pub embedding: Option<Vec<f32>>,
}

impl KnowledgeItem {
    /// Stable citation identifier, e.g. `faq#12`
    pub fn citation_id(&self) -> String {
        format!("{}#{}", self.source_table.as_str(), self.id)
    }

    /// Text fed to the embedding model and keyword matcher
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.primary_text, self.secondary_text)
    }
}

/// How a retrieval result was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetrievalMethod {
    Vector,
    Keyword,
}

/// A ranked passage returned by the retrieval engine
#[derive(Debug, Clone)]
pub struct RetrievalResult {
    pub item: KnowledgeItem,
    pub score: f32,
    pub method: RetrievalMethod,
}

/// Where the final answer was grounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceType {
    /// At least one knowledge-base passage grounded the prompt
    Database,
    /// No grounding passages were available
    General,
    /// The topic guard rejected the question
    OffTopic,
}

/// Completed chat exchange returned to the caller and logged asynchronously
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub question: String,
    pub language: Language,
    pub answer: String,
    pub source_type: SourceType,
    pub citations: Vec<String>,
    pub response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("ms"), Language::Ms);
        assert_eq!(Language::from_code("NE"), Language::Ne);
        assert_eq!(Language::from_code("hi "), Language::Hi);
        assert_eq!(Language::from_code("bn"), Language::Bn);
        assert_eq!(Language::from_code("en"), Language::En);
        // Unknown codes default to English
        assert_eq!(Language::from_code("fr"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }

    #[test]
    fn test_citation_id() {
        let item = KnowledgeItem {
            id: 12,
            source_table: SourceTable::Faq,
            primary_text: "q".into(),
            secondary_text: "a".into(),
            category: "wages".into(),
            language: Language::En,
            embedding: None,
        };
        assert_eq!(item.citation_id(), "faq#12");
    }

    #[test]
    fn test_source_table_round_trip() {
        for table in [
            SourceTable::RightsGuide,
            SourceTable::EmploymentLaw,
            SourceTable::Faq,
            SourceTable::WageRule,
        ] {
            assert_eq!(SourceTable::from_str_loose(table.as_str()), Some(table));
        }
        assert_eq!(SourceTable::from_str_loose("bogus"), None);
    }
}
