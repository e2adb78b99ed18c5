//! Chunk store trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::record::{AddRecordsResult, ChunkRecord};
use crate::domain::error::DomainError;

/// Persistence boundary for embedded chunks
#[async_trait]
pub trait ChunkStore: Send + Sync + Debug {
    /// Get the store type name
    fn store_type(&self) -> &'static str;

    /// Persist records, replacing any with the same id
    async fn add_records(&self, records: Vec<ChunkRecord>) -> Result<AddRecordsResult, DomainError>;

    /// Delete every record of a source document, returning how many were removed
    async fn delete_by_source(&self, source_id: &str) -> Result<usize, DomainError>;

    /// List the records of a source document in chunk order
    async fn list_by_source(&self, source_id: &str) -> Result<Vec<ChunkRecord>, DomainError>;

    /// Total number of stored records
    async fn count(&self) -> Result<usize, DomainError>;
}
