//! Database schema definitions

/// Database schema version
pub const SCHEMA_VERSION: u32 = 1;

/// SQL for creating the knowledge table. The four logical source tables
/// (rights guide, employment laws, FAQ, wage rules) share one physical table
/// discriminated by `source_table`. The embedding column stays NULL until the
/// offline backfill job writes it.
pub const CREATE_KNOWLEDGE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS knowledge (
    id INTEGER PRIMARY KEY,
    source_table TEXT NOT NULL,
    primary_text TEXT NOT NULL,
    secondary_text TEXT NOT NULL DEFAULT '',
    category TEXT NOT NULL DEFAULT '',
    language TEXT NOT NULL DEFAULT 'en',
    embedding BLOB
);
"#;

/// SQL for creating the chat log table (fire-and-forget persistence)
pub const CREATE_CHAT_LOG_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS chat_log (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    session_id TEXT,
    question TEXT NOT NULL,
    language TEXT NOT NULL,
    answer TEXT NOT NULL,
    source_type TEXT NOT NULL,
    citations TEXT NOT NULL,
    response_time_ms INTEGER NOT NULL,
    created_at TEXT NOT NULL
);
"#;

/// SQL for creating the metadata table
pub const CREATE_METADATA_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// SQL for creating indexes on the knowledge table
pub const CREATE_KNOWLEDGE_INDEXES: &str = r#"
CREATE INDEX IF NOT EXISTS idx_knowledge_source ON knowledge(source_table);
CREATE INDEX IF NOT EXISTS idx_knowledge_language ON knowledge(language);
CREATE INDEX IF NOT EXISTS idx_knowledge_category ON knowledge(category);
"#;
