//! SQLite operations for the knowledge base
//!
//! The store owns a single embedded SQLite connection behind a mutex. Vector
//! search is a brute-force cosine scan over rows carrying an embedding;
//! keyword search is the authoritative fallback and never touches the
//! embedding path.

use crate::error::{HakbotError, Result};
use crate::ml::cosine_similarity;
use crate::storage::schema::*;
use crate::types::{
    ChatTurn, KnowledgeItem, Language, RetrievalMethod, RetrievalResult, SourceTable,
};
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// Knowledge item as it appears in a seed JSON document (no id, no embedding)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedItem {
    pub source_table: SourceTable,
    pub primary_text: String,
    #[serde(default)]
    pub secondary_text: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub language: Language,
}

/// Knowledge store statistics
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub total_items: usize,
    pub embedded_items: usize,
    pub items_per_table: HashMap<String, usize>,
    pub logged_turns: usize,
}

/// Database connection and operations
pub struct KnowledgeStore {
    conn: Mutex<Connection>,
}

impl KnowledgeStore {
    /// Open (or create) a database at the given path
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)
            .map_err(|e| HakbotError::Storage(format!("Failed to open database: {}", e)))?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Create an in-memory database (for testing)
    pub fn memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| {
            HakbotError::Storage(format!("Failed to create in-memory database: {}", e))
        })?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.initialize()?;
        Ok(store)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| HakbotError::Storage("connection mutex poisoned".to_string()))
    }

    /// Initialize database schema
    fn initialize(&self) -> Result<()> {
        let conn = self.lock()?;

        // Enable WAL mode for better concurrency
        let _: String = conn
            .query_row("PRAGMA journal_mode=WAL", [], |row| row.get(0))
            .map_err(|e| HakbotError::Storage(format!("Failed to enable WAL mode: {}", e)))?;

        conn.execute(CREATE_KNOWLEDGE_TABLE, [])
            .map_err(|e| HakbotError::Storage(format!("Failed to create knowledge table: {}", e)))?;
        conn.execute(CREATE_CHAT_LOG_TABLE, [])
            .map_err(|e| HakbotError::Storage(format!("Failed to create chat_log table: {}", e)))?;
        conn.execute(CREATE_METADATA_TABLE, [])
            .map_err(|e| HakbotError::Storage(format!("Failed to create metadata table: {}", e)))?;
        conn.execute_batch(CREATE_KNOWLEDGE_INDEXES)
            .map_err(|e| HakbotError::Storage(format!("Failed to create indexes: {}", e)))?;

        conn.execute(
            "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)",
            params![SCHEMA_VERSION.to_string()],
        )
        .map_err(|e| HakbotError::Storage(format!("Failed to set schema version: {}", e)))?;

        log::info!("Knowledge store initialized with schema version {}", SCHEMA_VERSION);
        Ok(())
    }

    /// Insert seed items in one transaction. Embeddings are left NULL for the
    /// backfill job.
    pub fn insert_items(&self, items: &[SeedItem]) -> Result<usize> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| HakbotError::Storage(format!("Failed to start transaction: {}", e)))?;

        {
            let mut stmt = tx
                .prepare(
                    r#"
                    INSERT INTO knowledge (source_table, primary_text, secondary_text, category, language)
                    VALUES (?, ?, ?, ?, ?)
                    "#,
                )
                .map_err(|e| HakbotError::Storage(format!("Failed to prepare statement: {}", e)))?;

            for item in items {
                stmt.execute(params![
                    item.source_table.as_str(),
                    item.primary_text,
                    item.secondary_text,
                    item.category,
                    item.language.code(),
                ])
                .map_err(|e| HakbotError::Storage(format!("Failed to insert item: {}", e)))?;
            }
        }

        tx.commit()
            .map_err(|e| HakbotError::Storage(format!("Failed to commit transaction: {}", e)))?;

        log::info!("Inserted {} knowledge items", items.len());
        Ok(items.len())
    }

    /// Rows still waiting for the embedding backfill
    pub fn items_missing_embedding(&self) -> Result<Vec<KnowledgeItem>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT id, source_table, primary_text, secondary_text, category, language, embedding
                 FROM knowledge WHERE embedding IS NULL ORDER BY id",
            )
            .map_err(|e| HakbotError::Storage(format!("Failed to prepare query: {}", e)))?;

        let rows = stmt
            .query_map([], row_to_item)
            .map_err(|e| HakbotError::Storage(format!("Failed to query items: {}", e)))?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row.map_err(|e| HakbotError::Storage(format!("Bad row: {}", e)))?);
        }
        Ok(result)
    }

    /// Write an embedding for a row. Written once by the batch job: rows that
    /// already carry an embedding are left untouched.
    pub fn store_embedding(&self, id: i64, embedding: &[f32]) -> Result<bool> {
        let conn = self.lock()?;
        let updated = conn
            .execute(
                "UPDATE knowledge SET embedding = ? WHERE id = ? AND embedding IS NULL",
                params![encode_embedding(embedding), id],
            )
            .map_err(|e| HakbotError::Storage(format!("Failed to store embedding: {}", e)))?;
        Ok(updated == 1)
    }

    /// Brute-force cosine search over every row with a stored embedding.
    /// Rows with a NULL embedding are excluded; results above `min_score`
    /// are returned descending by score, truncated to `top_k`.
    pub fn vector_search(
        &self,
        query: &[f32],
        top_k: usize,
        min_score: f32,
    ) -> Result<Vec<RetrievalResult>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT id, source_table, primary_text, secondary_text, category, language, embedding
                 FROM knowledge WHERE embedding IS NOT NULL",
            )
            .map_err(|e| HakbotError::Storage(format!("Failed to prepare query: {}", e)))?;

        let rows = stmt
            .query_map([], row_to_item)
            .map_err(|e| HakbotError::Storage(format!("Failed to query embeddings: {}", e)))?;

        let mut scored: Vec<RetrievalResult> = Vec::new();
        for row in rows {
            let item = row.map_err(|e| HakbotError::Storage(format!("Bad row: {}", e)))?;
            let score = match item.embedding.as_deref() {
                Some(embedding) => cosine_similarity(query, embedding),
                None => continue,
            };
            if score >= min_score {
                scored.push(RetrievalResult {
                    item,
                    score,
                    method: RetrievalMethod::Vector,
                });
            }
        }

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);
        Ok(scored)
    }

    /// Token-overlap keyword search across the text fields. Independent of
    /// the embedding provider; this is the authoritative fallback when the
    /// vector path is slow, empty, or down.
    pub fn keyword_search(&self, query: &str, top_k: usize) -> Result<Vec<RetrievalResult>> {
        let tokens = query_tokens(query);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self.lock()?;
        let mut candidates: HashMap<i64, KnowledgeItem> = HashMap::new();

        // LIKE prefilter per token, scored in Rust below
        let mut stmt = conn
            .prepare(
                "SELECT id, source_table, primary_text, secondary_text, category, language, embedding
                 FROM knowledge
                 WHERE primary_text LIKE ?1 OR secondary_text LIKE ?1 OR category LIKE ?1
                 LIMIT 200",
            )
            .map_err(|e| HakbotError::Storage(format!("Failed to prepare search query: {}", e)))?;

        for token in &tokens {
            let pattern = format!("%{}%", token);
            let rows = stmt
                .query_map(params![pattern], row_to_item)
                .map_err(|e| HakbotError::Storage(format!("Failed to search items: {}", e)))?;
            for row in rows {
                let item = row.map_err(|e| HakbotError::Storage(format!("Bad row: {}", e)))?;
                candidates.entry(item.id).or_insert(item);
            }
        }

        let mut scored: Vec<RetrievalResult> = candidates
            .into_values()
            .map(|item| {
                let haystack = format!(
                    "{} {} {}",
                    item.primary_text, item.secondary_text, item.category
                )
                .to_lowercase();
                let matched = tokens.iter().filter(|t| haystack.contains(*t)).count();
                RetrievalResult {
                    item,
                    score: matched as f32,
                    method: RetrievalMethod::Keyword,
                }
            })
            .filter(|r| r.score > 0.0)
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.item.id.cmp(&b.item.id))
        });
        scored.truncate(top_k);
        Ok(scored)
    }

    /// Persist a completed chat turn
    pub fn log_turn(&self, turn: &ChatTurn) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            r#"
            INSERT INTO chat_log (session_id, question, language, answer, source_type, citations, response_time_ms, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                turn.session_id,
                turn.question,
                turn.language.code(),
                turn.answer,
                serde_json::to_string(&turn.source_type)?,
                serde_json::to_string(&turn.citations)?,
                turn.response_time_ms as i64,
                chrono::Utc::now().to_rfc3339(),
            ],
        )
        .map_err(|e| HakbotError::Storage(format!("Failed to log chat turn: {}", e)))?;
        Ok(())
    }

    /// Knowledge-base statistics
    pub fn stats(&self) -> Result<StoreStats> {
        let conn = self.lock()?;

        let total_items: i64 = conn
            .query_row("SELECT COUNT(*) FROM knowledge", [], |row| row.get(0))
            .map_err(|e| HakbotError::Storage(format!("Failed to count items: {}", e)))?;
        let embedded_items: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM knowledge WHERE embedding IS NOT NULL",
                [],
                |row| row.get(0),
            )
            .map_err(|e| HakbotError::Storage(format!("Failed to count embeddings: {}", e)))?;
        let logged_turns: i64 = conn
            .query_row("SELECT COUNT(*) FROM chat_log", [], |row| row.get(0))
            .map_err(|e| HakbotError::Storage(format!("Failed to count chat turns: {}", e)))?;

        let mut items_per_table = HashMap::new();
        let mut stmt = conn
            .prepare("SELECT source_table, COUNT(*) FROM knowledge GROUP BY source_table")
            .map_err(|e| HakbotError::Storage(format!("Failed to prepare stats query: {}", e)))?;
        let rows = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })
            .map_err(|e| HakbotError::Storage(format!("Failed to query stats: {}", e)))?;
        for row in rows {
            let (table, count) =
                row.map_err(|e| HakbotError::Storage(format!("Bad stats row: {}", e)))?;
            items_per_table.insert(table, count as usize);
        }

        Ok(StoreStats {
            total_items: total_items as usize,
            embedded_items: embedded_items as usize,
            items_per_table,
            logged_turns: logged_turns as usize,
        })
    }
}

/// Tokens used for keyword scoring: lowercase alphanumeric runs of length >= 2
fn query_tokens(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .map(|t| t.to_string())
        .collect()
}

fn encode_embedding(embedding: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(embedding.len() * 4);
    for &val in embedding {
        bytes.extend_from_slice(&val.to_le_bytes());
    }
    bytes
}

fn decode_embedding(blob: &[u8]) -> Vec<f32> {
    blob.chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Convert a database row to a `KnowledgeItem`
fn row_to_item(row: &Row) -> rusqlite::Result<KnowledgeItem> {
    let source: String = row.get(1)?;
    let language: String = row.get(5)?;
    let embedding = row
        .get::<_, Option<Vec<u8>>>(6)?
        .map(|blob| decode_embedding(&blob));

    Ok(KnowledgeItem {
        id: row.get(0)?,
        source_table: SourceTable::from_str_loose(&source).unwrap_or(SourceTable::Faq),
        primary_text: row.get(2)?,
        secondary_text: row.get(3)?,
        category: row.get(4)?,
        language: Language::from_code(&language),
        embedding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> KnowledgeStore {
        let store = KnowledgeStore::memory().unwrap();
        store
            .insert_items(&[
                SeedItem {
                    source_table: SourceTable::WageRule,
                    primary_text: "Minimum wage in Malaysia is RM1700 per month".to_string(),
                    secondary_text: "Applies to all sectors from February 2025".to_string(),
                    category: "wages".to_string(),
                    language: Language::En,
                },
                SeedItem {
                    source_table: SourceTable::Faq,
                    primary_text: "Can my employer keep my passport?".to_string(),
                    secondary_text: "No. Retaining a worker's passport is an offence".to_string(),
                    category: "documents".to_string(),
                    language: Language::En,
                },
                SeedItem {
                    source_table: SourceTable::EmploymentLaw,
                    primary_text: "Overtime must be paid at 1.5 times the hourly rate".to_string(),
                    secondary_text: "Employment Act 1955, Section 60A".to_string(),
                    category: "overtime".to_string(),
                    language: Language::En,
                },
            ])
            .unwrap();
        store
    }

    #[test]
    fn test_insert_and_stats() {
        let store = seeded_store();
        let stats = store.stats().unwrap();
        assert_eq!(stats.total_items, 3);
        assert_eq!(stats.embedded_items, 0);
        assert_eq!(stats.items_per_table.get("faq"), Some(&1));
        assert_eq!(stats.logged_turns, 0);
    }

    #[test]
    fn test_keyword_search_scores_by_matched_tokens() {
        let store = seeded_store();
        let results = store.keyword_search("minimum wage malaysia", 5).unwrap();
        assert!(!results.is_empty());
        assert_eq!(results[0].method, RetrievalMethod::Keyword);
        assert!(results[0].item.primary_text.contains("RM1700"));
        // All three tokens match the top row
        assert_eq!(results[0].score, 3.0);
    }

    #[test]
    fn test_keyword_search_no_match() {
        let store = seeded_store();
        let results = store.keyword_search("completely unrelated topic", 5).unwrap();
        assert!(results.is_empty());
        // Queries with no usable tokens return empty too
        assert!(store.keyword_search("? !", 5).unwrap().is_empty());
    }

    #[test]
    fn test_vector_search_excludes_null_embeddings() {
        let store = seeded_store();
        // Nothing backfilled yet
        let results = store.vector_search(&[1.0, 0.0, 0.0], 5, 0.0).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_embedding_backfill_round_trip() {
        let store = seeded_store();
        let pending = store.items_missing_embedding().unwrap();
        assert_eq!(pending.len(), 3);

        let embedding = vec![0.6, 0.8, 0.0];
        assert!(store.store_embedding(pending[0].id, &embedding).unwrap());
        // Write-once: a second write is a no-op
        assert!(!store.store_embedding(pending[0].id, &[1.0, 0.0, 0.0]).unwrap());

        let results = store.vector_search(&[0.6, 0.8, 0.0], 5, 0.5).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item.id, pending[0].id);
        assert_eq!(results[0].method, RetrievalMethod::Vector);
        assert!((results[0].score - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_vector_search_min_score_filter() {
        let store = seeded_store();
        let pending = store.items_missing_embedding().unwrap();
        store.store_embedding(pending[0].id, &[1.0, 0.0]).unwrap();
        store.store_embedding(pending[1].id, &[0.0, 1.0]).unwrap();

        let results = store.vector_search(&[1.0, 0.0], 5, 0.5).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item.id, pending[0].id);
    }

    #[test]
    fn test_log_turn() {
        let store = seeded_store();
        let turn = ChatTurn {
            question: "What is the minimum wage?".to_string(),
            language: Language::En,
            answer: "RM1700 per month".to_string(),
            source_type: crate::types::SourceType::Database,
            citations: vec!["wage_rule#1".to_string()],
            response_time_ms: 120,
            session_id: Some("abc".to_string()),
        };
        store.log_turn(&turn).unwrap();
        assert_eq!(store.stats().unwrap().logged_turns, 1);
    }
}
