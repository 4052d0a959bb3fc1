use async_trait::async_trait;

use ragweed_core::{Embedding, EmbeddingError};

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

fn fnv1a(bytes: &[u8], seed: u64) -> u64 {
    let mut hash = FNV_OFFSET ^ seed;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Deterministic embedder for fixtures and offline tests.
///
/// Each component hashes the text with a per-index seed; the vector is then
/// scaled onto the unit sphere, so identical texts always land on the same
/// point with cosine similarity 1.0. No semantics, just stability.
#[derive(Clone)]
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut components: Vec<f32> = (0..self.dimension)
            .map(|index| {
                let hash = fnv1a(text.as_bytes(), index as u64);
                (hash % 2_000) as f32 / 1_000.0 - 1.0
            })
            .collect();

        let norm = components.iter().map(|value| value * value).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut components {
                *value /= norm;
            }
        } else if let Some(first) = components.first_mut() {
            *first = 1.0;
        }
        components
    }
}

#[async_trait]
impl Embedding for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.embed_text(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(texts.iter().map(|text| self.embed_text(text)).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
