//! Embedding generation and vector math

pub mod embedding;

pub use embedding::{cosine_similarity, Embedding, EmbeddingProvider};
