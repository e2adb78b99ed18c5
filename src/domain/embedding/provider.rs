//! Embedding provider trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for embedding providers
///
/// The provider receives chunk texts in order and must return exactly one
/// vector per input, in the same order.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Generate one embedding per input text
    async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Dimensionality of the produced vectors
    fn dimensions(&self) -> usize;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Mock embedding provider that records every batch it receives
    #[derive(Debug)]
    pub struct MockEmbeddingProvider {
        dimensions: usize,
        error: Option<String>,
        short_by: usize,
        reported_dimensions: Option<usize>,
        batches: Mutex<Vec<Vec<String>>>,
    }

    impl MockEmbeddingProvider {
        pub fn new(dimensions: usize) -> Self {
            Self {
                dimensions,
                error: None,
                short_by: 0,
                reported_dimensions: None,
                batches: Mutex::new(Vec::new()),
            }
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        /// Return `count` fewer vectors than requested
        pub fn with_missing_vectors(mut self, count: usize) -> Self {
            self.short_by = count;
            self
        }

        /// Advertise a vector size other than the one produced
        pub fn with_reported_dimensions(mut self, dimensions: usize) -> Self {
            self.reported_dimensions = Some(dimensions);
            self
        }

        pub fn batches(&self) -> Vec<Vec<String>> {
            self.batches.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EmbeddingProvider for MockEmbeddingProvider {
        async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, DomainError> {
            self.batches.lock().unwrap().push(texts.clone());

            if let Some(ref error) = self.error {
                return Err(DomainError::provider("mock", error));
            }

            let returned = texts.len().saturating_sub(self.short_by);

            Ok(texts
                .iter()
                .take(returned)
                .map(|text| vec![text.chars().count() as f32; self.dimensions])
                .collect())
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }

        fn dimensions(&self) -> usize {
            self.reported_dimensions.unwrap_or(self.dimensions)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_provider_batch_input() {
            let provider = MockEmbeddingProvider::new(4);

            let vectors = provider
                .embed(vec!["Hello".into(), "World!".into()])
                .await
                .unwrap();

            assert_eq!(vectors.len(), 2);
            assert_eq!(vectors[0], vec![5.0; 4]);
            assert_eq!(vectors[1], vec![6.0; 4]);
            assert_eq!(provider.batches().len(), 1);
        }

        #[tokio::test]
        async fn test_mock_provider_error() {
            let provider = MockEmbeddingProvider::new(4).with_error("API error");

            let result = provider.embed(vec!["Hello".into()]).await;

            assert!(result.is_err());
        }
    }
}
