//! Topic guard: in-scope/deny classification before any retrieval
//!
//! Pure keyword classification over per-language tables. Deny terms always
//! win over domain terms; a question matching neither is rejected. If the
//! tables are unusable the guard constructs closed and rejects everything.

mod keywords;

use crate::types::Language;
use unicode_normalization::UnicodeNormalization;

/// Classification verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub in_scope: bool,
    pub reason: VerdictReason,
}

/// Why a question was accepted or rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictReason {
    /// Matched at least one in-domain term
    DomainMatch,
    /// Matched a deny-list term (takes precedence over domain matches)
    DenyListed,
    /// Matched no in-domain term
    OutOfScope,
    /// Guard is in the closed state (table validation failed)
    GuardClosed,
}

/// Keyword-based topic classifier
pub struct TopicGuard {
    /// When false, every question is rejected
    open: bool,
}

struct LanguageTables {
    domain: &'static [&'static str],
    deny: &'static [&'static str],
}

fn tables_for(language: Language) -> LanguageTables {
    match language {
        Language::En => LanguageTables {
            domain: keywords::DOMAIN_EN,
            deny: keywords::DENY_EN,
        },
        Language::Ms => LanguageTables {
            domain: keywords::DOMAIN_MS,
            deny: keywords::DENY_MS,
        },
        Language::Ne => LanguageTables {
            domain: keywords::DOMAIN_NE,
            deny: keywords::DENY_NE,
        },
        Language::Hi => LanguageTables {
            domain: keywords::DOMAIN_HI,
            deny: keywords::DENY_HI,
        },
        Language::Bn => LanguageTables {
            domain: keywords::DOMAIN_BN,
            deny: keywords::DENY_BN,
        },
    }
}

impl TopicGuard {
    /// Construct the guard, validating that every supported language has
    /// non-empty domain and deny tables. On validation failure the guard is
    /// closed: it rejects everything rather than letting unknown input
    /// through the safety boundary.
    pub fn new() -> Self {
        let open = Language::ALL.iter().all(|&lang| {
            let t = tables_for(lang);
            !t.domain.is_empty() && !t.deny.is_empty()
        });

        if !open {
            log::error!("Topic guard keyword tables failed validation; guard is closed");
        }

        Self { open }
    }

    /// A guard that rejects everything, for tests and emergency lockdown.
    pub fn closed() -> Self {
        Self { open: false }
    }

    /// Classify a question. Pure; no side effects.
    ///
    /// Deny terms are checked across all language tables (questions often mix
    /// scripts); domain terms are checked against the requested language plus
    /// English, which covers romanized usage in every supported community.
    pub fn classify(&self, question: &str, language: Language) -> Verdict {
        if !self.open {
            return Verdict {
                in_scope: false,
                reason: VerdictReason::GuardClosed,
            };
        }

        let normalized = normalize(question);

        for &lang in Language::ALL.iter() {
            let t = tables_for(lang);
            if t.deny.iter().any(|kw| matches_keyword(&normalized, kw)) {
                log::debug!("Question rejected by deny list ({})", lang.code());
                return Verdict {
                    in_scope: false,
                    reason: VerdictReason::DenyListed,
                };
            }
        }

        let mut domain_hit = tables_for(language)
            .domain
            .iter()
            .any(|kw| matches_keyword(&normalized, kw));
        if !domain_hit && language != Language::En {
            domain_hit = tables_for(Language::En)
                .domain
                .iter()
                .any(|kw| matches_keyword(&normalized, kw));
        }

        if domain_hit {
            Verdict {
                in_scope: true,
                reason: VerdictReason::DomainMatch,
            }
        } else {
            Verdict {
                in_scope: false,
                reason: VerdictReason::OutOfScope,
            }
        }
    }
}

impl Default for TopicGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// NFC-normalize, lowercase, replace punctuation with spaces, collapse runs.
/// Punctuation is stripped by listing it rather than keeping alphanumerics
/// only: Devanagari and Bengali vowel signs are combining marks, not
/// alphanumerics, and must survive.
fn normalize(text: &str) -> String {
    let lowered: String = text.nfc().collect::<String>().to_lowercase();
    let stripped: String = lowered
        .chars()
        .map(|c| {
            let punct = c.is_ascii_punctuation()
                || matches!(
                    c,
                    '।' | '॥' | '“' | '”' | '‘' | '’' | '…' | '—' | '–' | '、' | '。' | '，' | '؟'
                );
            if punct {
                ' '
            } else {
                c
            }
        })
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Short keywords must match on word boundaries to avoid substring noise
/// ("ot" inside "hotel"); longer keywords match as substrings, which keeps
/// inflected forms like "gajinya" covered by "gaji".
fn matches_keyword(normalized: &str, keyword: &str) -> bool {
    if keyword.chars().count() <= 3 {
        let padded = format!(" {} ", normalized);
        padded.contains(&format!(" {} ", keyword))
    } else {
        normalized.contains(keyword)
    }
}
