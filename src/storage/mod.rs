//! SQLite persistence for the knowledge base and chat log

pub mod database;
pub mod schema;

pub use database::{KnowledgeStore, SeedItem, StoreStats};
