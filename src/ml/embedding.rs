//! Deterministic embedding generation
//!
//! Texts are cleaned, tokenized on whitespace, and hashed into a fixed-length
//! unit vector. The model loads lazily on first use; concurrent callers are
//! collapsed onto a single initialization via `OnceCell`. Batch embedding
//! processes bounded chunks with retry and fixed backoff, raising
//! `EmbeddingUnavailable` once retries exhaust.

use crate::config::EmbeddingConfig;
use crate::error::{HakbotError, Result};
use rayon::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tokio::sync::OnceCell;
use unicode_normalization::UnicodeNormalization;

/// Embedding vector type
pub type Embedding = Vec<f32>;

/// Cosine similarity between two vectors. Defined as 0.0 when either vector
/// is all-zero or the lengths differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// The loaded model. Read-only after initialization and safe to share.
struct EmbeddingModel {
    dimension: usize,
    normalize: bool,
    max_chars: usize,
}

impl EmbeddingModel {
    async fn load(config: &EmbeddingConfig) -> Result<Self> {
        if config.dimension == 0 {
            return Err(HakbotError::Config(
                "embedding dimension must be non-zero".to_string(),
            ));
        }
        log::info!(
            "Embedding model ready ({} dimensions, normalize={})",
            config.dimension,
            config.normalize
        );
        Ok(Self {
            dimension: config.dimension,
            normalize: config.normalize,
            max_chars: config.max_chars,
        })
    }

    /// Collapse whitespace, NFC-normalize, lowercase, and truncate so
    /// oversized inputs cannot blow up cost or get truncated provider-side.
    fn clean_text(&self, text: &str) -> String {
        let collapsed = text
            .nfc()
            .collect::<String>()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if collapsed.chars().count() > self.max_chars {
            collapsed.chars().take(self.max_chars).collect()
        } else {
            collapsed
        }
    }

    fn encode(&self, text: &str) -> Embedding {
        let cleaned = self.clean_text(text);
        let mut embedding = vec![0.0f32; self.dimension];

        for (i, word) in cleaned.split_whitespace().enumerate() {
            let mut hasher = DefaultHasher::new();
            word.hash(&mut hasher);
            let hash = hasher.finish();

            // Distribute hash bits across embedding dimensions with a mild
            // positional decay so word order contributes to the vector.
            let pos_weight = 1.0 / (i as f32 + 1.0).sqrt();
            for j in 0..10.min(self.dimension) {
                let idx = ((hash as usize).wrapping_add(j * 19)) % self.dimension;
                let value = ((hash >> (j * 6)) & 0x3F) as f32 / 64.0 - 0.5;
                embedding[idx] += value * pos_weight;
            }
        }

        if self.normalize {
            normalize_embedding(&mut embedding);
        }
        embedding
    }
}

fn normalize_embedding(embedding: &mut [f32]) {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 1e-12 {
        for val in embedding.iter_mut() {
            *val /= norm;
        }
    }
}

/// Lazily-initialized embedding provider.
///
/// States: uninitialized -> initializing -> ready. `initializing` collapses
/// concurrent callers onto one underlying load; `ready` is terminal.
pub struct EmbeddingProvider {
    config: EmbeddingConfig,
    model: OnceCell<EmbeddingModel>,
}

impl EmbeddingProvider {
    pub fn new(config: EmbeddingConfig) -> Self {
        Self {
            config,
            model: OnceCell::new(),
        }
    }

    async fn model(&self) -> Result<&EmbeddingModel> {
        self.model
            .get_or_try_init(|| EmbeddingModel::load(&self.config))
            .await
    }

    /// Embedding dimension this provider produces
    pub fn dimension(&self) -> usize {
        self.config.dimension
    }

    /// Whether the underlying model has finished loading
    pub fn is_ready(&self) -> bool {
        self.model.initialized()
    }

    /// Embed a single text
    pub async fn embed(&self, text: &str) -> Result<Embedding> {
        let model = self.model().await?;
        Ok(model.encode(text))
    }

    /// Embed a batch of texts in bounded chunks, retrying each chunk with
    /// fixed backoff. Raises `EmbeddingUnavailable` when a chunk still fails
    /// after all retries.
    pub async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let model = self.model().await?;
        let mut embeddings = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(self.config.batch_size.max(1)) {
            let mut attempts = 0;
            loop {
                match Self::encode_chunk(model, chunk) {
                    Ok(mut batch) => {
                        embeddings.append(&mut batch);
                        break;
                    }
                    Err(e) => {
                        attempts += 1;
                        if attempts > self.config.max_retries {
                            return Err(HakbotError::EmbeddingUnavailable(format!(
                                "chunk of {} texts failed after {} attempts: {}",
                                chunk.len(),
                                attempts,
                                e
                            )));
                        }
                        log::warn!(
                            "Embedding chunk failed (attempt {}/{}): {}",
                            attempts,
                            self.config.max_retries,
                            e
                        );
                        tokio::time::sleep(std::time::Duration::from_millis(
                            self.config.retry_delay_ms,
                        ))
                        .await;
                    }
                }
            }
        }

        Ok(embeddings)
    }

    fn encode_chunk(model: &EmbeddingModel, chunk: &[String]) -> Result<Vec<Embedding>> {
        Ok(chunk.par_iter().map(|text| model.encode(text)).collect())
    }
}
