//! Ingestion pipeline types and configuration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::DomainError;

/// Configuration for document ingestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionConfig {
    /// Number of chunks sent to the embedding provider per call
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Custom metadata to add to all chunk records
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

fn default_batch_size() -> usize {
    100
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            metadata: HashMap::new(),
        }
    }
}

impl IngestionConfig {
    /// Create a new ingestion configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Add metadata
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.batch_size == 0 {
            return Err(DomainError::validation("batch_size must be greater than 0"));
        }

        Ok(())
    }
}

/// Error that occurred during ingestion of a specific chunk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionError {
    /// Chunk index where the error occurred (None if document-level)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_index: Option<usize>,
    /// Error message
    pub message: String,
}

impl IngestionError {
    /// Create a document-level error
    pub fn document(message: impl Into<String>) -> Self {
        Self {
            chunk_index: None,
            message: message.into(),
        }
    }

    /// Create a chunk-level error
    pub fn chunk(index: usize, message: impl Into<String>) -> Self {
        Self {
            chunk_index: Some(index),
            message: message.into(),
        }
    }
}

/// Result of ingesting a single document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionResult {
    /// Source the chunks were ingested under
    pub source_id: String,
    /// Number of chunks successfully stored
    pub chunks_created: usize,
    /// Number of chunks that failed
    pub chunks_failed: usize,
    /// Errors that occurred during ingestion
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<IngestionError>,
}

impl IngestionResult {
    /// Create a successful result
    pub fn success(source_id: impl Into<String>, chunks_created: usize) -> Self {
        Self {
            source_id: source_id.into(),
            chunks_created,
            chunks_failed: 0,
            errors: Vec::new(),
        }
    }

    /// Create a failed result
    pub fn failed(source_id: impl Into<String>, error: IngestionError) -> Self {
        Self {
            source_id: source_id.into(),
            chunks_created: 0,
            chunks_failed: 0,
            errors: vec![error],
        }
    }

    /// Check if the ingestion was fully successful
    pub fn is_success(&self) -> bool {
        self.errors.is_empty() && self.chunks_failed == 0
    }

    /// Check if the ingestion had any failures
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.chunks_failed > 0
    }

    /// Add an error
    pub fn add_error(&mut self, error: IngestionError) {
        self.errors.push(error);
    }
}

/// Result of batch ingestion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchIngestionResult {
    /// Total documents processed
    pub total_documents: usize,
    /// Number of successful documents
    pub successful: usize,
    /// Number of failed documents
    pub failed: usize,
    /// Individual results for each document
    pub results: Vec<IngestionResult>,
}

impl BatchIngestionResult {
    /// Create an empty batch result
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a result to the batch
    pub fn add(&mut self, result: IngestionResult) {
        self.total_documents += 1;

        if result.is_success() {
            self.successful += 1;
        } else {
            self.failed += 1;
        }

        self.results.push(result);
    }

    /// Check if all documents were processed successfully
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Get total chunks created across all documents
    pub fn total_chunks_created(&self) -> usize {
        self.results.iter().map(|r| r.chunks_created).sum()
    }
}
