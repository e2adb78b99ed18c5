//! Chunk records handed to a chunk store

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One embedded chunk, ready to be persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// Unique identifier, `{source_id}_chunk_{index}`
    pub id: String,
    /// Source document the chunk belongs to
    pub source_id: String,
    /// Chunk content, overlap included
    pub content: String,
    /// Chunk metadata merged with document-level metadata
    pub metadata: HashMap<String, serde_json::Value>,
    /// Embedding vector for `content`
    pub embedding: Vec<f32>,
}

impl ChunkRecord {
    /// Build the record id for a chunk of a source document
    pub fn make_id(source_id: &str, chunk_index: usize) -> String {
        format!("{}_chunk_{}", source_id, chunk_index)
    }

    /// Recover the chunk index from a record id
    pub fn chunk_index_from_id(id: &str) -> Option<usize> {
        id.rsplit_once("_chunk_")
            .and_then(|(_, index)| index.parse().ok())
    }
}

/// Result of adding records to a store
#[derive(Debug, Clone, Default)]
pub struct AddRecordsResult {
    /// Number of records stored
    pub added: usize,
    /// Number of records rejected
    pub failed: usize,
    /// `(record id, error message)` per rejected record
    pub errors: Vec<(String, String)>,
}

impl AddRecordsResult {
    pub fn success(added: usize) -> Self {
        Self {
            added,
            ..Self::default()
        }
    }

    pub fn partial(added: usize, errors: Vec<(String, String)>) -> Self {
        Self {
            added,
            failed: errors.len(),
            errors,
        }
    }
}
