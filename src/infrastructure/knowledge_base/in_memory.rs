//! In-memory chunk store for development and testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::knowledge_base::{AddRecordsResult, ChunkRecord, ChunkStore};
use crate::domain::DomainError;

/// In-memory chunk store keyed by record id
#[derive(Debug, Default, Clone)]
pub struct InMemoryChunkStore {
    records: Arc<RwLock<HashMap<String, ChunkRecord>>>,
}

impl InMemoryChunkStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChunkStore for InMemoryChunkStore {
    fn store_type(&self) -> &'static str {
        "in_memory"
    }

    async fn add_records(&self, records: Vec<ChunkRecord>) -> Result<AddRecordsResult, DomainError> {
        let mut stored = self.records.write().await;

        let expected = stored
            .values()
            .chain(records.iter())
            .map(|record| record.embedding.len())
            .find(|len| *len > 0);

        if let Some(expected) = expected {
            if let Some(record) = records
                .iter()
                .find(|r| !r.embedding.is_empty() && r.embedding.len() != expected)
            {
                return Err(DomainError::storage(format!(
                    "record {} has {} dimensions, store holds {}",
                    record.id,
                    record.embedding.len(),
                    expected
                )));
            }
        }

        let mut added = 0;
        let mut errors = Vec::new();

        for record in records {
            if record.embedding.is_empty() {
                errors.push((record.id, "Record has no embedding".to_string()));
                continue;
            }

            stored.insert(record.id.clone(), record);
            added += 1;
        }

        if errors.is_empty() {
            Ok(AddRecordsResult::success(added))
        } else {
            Ok(AddRecordsResult::partial(added, errors))
        }
    }

    async fn delete_by_source(&self, source_id: &str) -> Result<usize, DomainError> {
        let mut stored = self.records.write().await;
        let before = stored.len();

        stored.retain(|_, record| record.source_id != source_id);

        Ok(before - stored.len())
    }

    async fn list_by_source(&self, source_id: &str) -> Result<Vec<ChunkRecord>, DomainError> {
        let stored = self.records.read().await;

        let mut records: Vec<ChunkRecord> = stored
            .values()
            .filter(|record| record.source_id == source_id)
            .cloned()
            .collect();
        records.sort_by_key(|record| ChunkRecord::chunk_index_from_id(&record.id));

        Ok(records)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.records.read().await.len())
    }
}
