//! Local feature-hashing embedding provider

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::domain::embedding::EmbeddingProvider;
use crate::domain::DomainError;

/// Default vector size for the hashing provider
pub const DEFAULT_HASHING_DIMENSIONS: usize = 256;

/// Deterministic, offline embedding provider.
///
/// Each lowercase word is hashed into a signed bucket and the resulting
/// vector is L2-normalized. Identical texts always produce identical
/// vectors, which makes it suitable for dry runs and tests.
#[derive(Debug, Clone)]
pub struct HashingEmbeddingProvider {
    dimensions: usize,
}

impl HashingEmbeddingProvider {
    pub fn new(dimensions: usize) -> Result<Self, DomainError> {
        if dimensions == 0 {
            return Err(DomainError::validation("dimensions must be greater than 0"));
        }

        Ok(Self { dimensions })
    }

    fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];

        for word in text.split_whitespace() {
            let digest = Sha256::digest(word.to_lowercase().as_bytes());
            let mut bucket_bytes = [0u8; 8];
            bucket_bytes.copy_from_slice(&digest[..8]);

            let bucket = (u64::from_le_bytes(bucket_bytes) % self.dimensions as u64) as usize;
            let sign = if digest[8] & 1 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|v| *v /= norm);
        }

        vector
    }
}

impl Default for HashingEmbeddingProvider {
    fn default() -> Self {
        Self {
            dimensions: DEFAULT_HASHING_DIMENSIONS,
        }
    }
}

#[async_trait]
impl EmbeddingProvider for HashingEmbeddingProvider {
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, DomainError> {
        Ok(texts.iter().map(|text| self.embed_text(text)).collect())
    }

    fn provider_name(&self) -> &'static str {
        "hashing"
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
