//! Ingestion pipeline service

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::embedding::EmbeddingProvider;
use crate::domain::ingestion::{
    BatchIngestionResult, Chunk, ChunkingStrategy, IngestionConfig, IngestionError,
    IngestionResult,
};
use crate::domain::knowledge_base::{ChunkRecord, ChunkStore};
use crate::domain::DomainError;

/// Ingestion pipeline: chunk, embed in batches, persist
#[derive(Debug)]
pub struct IngestionPipeline<E, S>
where
    E: EmbeddingProvider,
    S: ChunkStore,
{
    chunker: Arc<dyn ChunkingStrategy>,
    embedder: Arc<E>,
    store: Arc<S>,
}

impl<E: EmbeddingProvider, S: ChunkStore> IngestionPipeline<E, S> {
    /// Create a new ingestion pipeline
    pub fn new(chunker: Arc<dyn ChunkingStrategy>, embedder: Arc<E>, store: Arc<S>) -> Self {
        Self {
            chunker,
            embedder,
            store,
        }
    }

    /// Ingest a single document under `source_id`
    ///
    /// A batch the embedding provider rejects is reported per chunk in the
    /// result; the remaining batches are still stored.
    pub async fn ingest(
        &self,
        source_id: &str,
        content: &str,
        config: &IngestionConfig,
    ) -> Result<IngestionResult, DomainError> {
        config.validate()?;

        let chunks = self.chunker.chunk(content);

        if chunks.is_empty() {
            info!(source_id, "Document produced no chunks");
            return Ok(IngestionResult::success(source_id, 0));
        }

        let total = chunks.len();
        let mut result = IngestionResult::success(source_id, 0);
        let mut records = Vec::with_capacity(total);

        for (batch_index, batch) in chunks.chunks(config.batch_size).enumerate() {
            let offset = batch_index * config.batch_size;
            let texts = batch.iter().map(|chunk| chunk.content.clone()).collect();

            let vectors = match self.embedder.embed(texts).await {
                Ok(vectors) => vectors,
                Err(e) => {
                    warn!(
                        source_id,
                        batch = batch_index,
                        provider = self.embedder.provider_name(),
                        error = %e,
                        "Embedding batch failed"
                    );

                    for index in offset..offset + batch.len() {
                        result.add_error(IngestionError::chunk(index, e.to_string()));
                    }
                    result.chunks_failed += batch.len();
                    continue;
                }
            };

            if vectors.len() != batch.len() {
                return Err(DomainError::provider(
                    self.embedder.provider_name(),
                    format!(
                        "expected {} embeddings, received {}",
                        batch.len(),
                        vectors.len()
                    ),
                ));
            }

            let dimensions = self.embedder.dimensions();
            if let Some(vector) = vectors.iter().find(|v| v.len() != dimensions) {
                return Err(DomainError::provider(
                    self.embedder.provider_name(),
                    format!(
                        "expected {}-dimensional embeddings, received {}",
                        dimensions,
                        vector.len()
                    ),
                ));
            }

            for (position, (chunk, vector)) in batch.iter().zip(vectors).enumerate() {
                records.push(self.create_record(
                    source_id,
                    offset + position,
                    total,
                    chunk,
                    vector,
                    &config.metadata,
                ));
            }
        }

        if !records.is_empty() {
            let add_result = self.store.add_records(records).await?;

            result.chunks_created = add_result.added;
            result.chunks_failed += add_result.failed;

            for (record_id, error) in add_result.errors {
                let chunk_index = ChunkRecord::chunk_index_from_id(&record_id);
                result.add_error(IngestionError::chunk(chunk_index.unwrap_or(0), error));
            }
        }

        info!(
            source_id,
            chunker = self.chunker.name(),
            store = self.store.store_type(),
            chunks = total,
            created = result.chunks_created,
            failed = result.chunks_failed,
            "Ingested document"
        );

        Ok(result)
    }

    /// Ingest multiple `(source_id, content)` documents in order
    pub async fn ingest_batch(
        &self,
        documents: Vec<(String, String)>,
        config: &IngestionConfig,
    ) -> Result<BatchIngestionResult, DomainError> {
        let mut batch_result = BatchIngestionResult::new();

        for (source_id, content) in documents {
            let result = self.ingest(&source_id, &content, config).await?;
            batch_result.add(result);
        }

        Ok(batch_result)
    }

    /// Replace a document: delete its stored chunks, then ingest again
    pub async fn reingest(
        &self,
        source_id: &str,
        content: &str,
        config: &IngestionConfig,
    ) -> Result<IngestionResult, DomainError> {
        let deleted = self.store.delete_by_source(source_id).await?;
        info!(source_id, deleted, "Deleted previous chunks");

        self.ingest(source_id, content, config).await
    }

    fn create_record(
        &self,
        source_id: &str,
        chunk_index: usize,
        total_chunks: usize,
        chunk: &Chunk,
        embedding: Vec<f32>,
        custom_metadata: &HashMap<String, serde_json::Value>,
    ) -> ChunkRecord {
        let mut metadata = chunk.metadata.to_json_map();

        metadata.insert(
            "chunk_index".to_string(),
            serde_json::Value::Number(chunk_index.into()),
        );
        metadata.insert(
            "total_chunks".to_string(),
            serde_json::Value::Number(total_chunks.into()),
        );

        for (key, value) in custom_metadata {
            metadata.insert(key.clone(), value.clone());
        }

        metadata.insert(
            "source_id".to_string(),
            serde_json::Value::String(source_id.to_string()),
        );

        ChunkRecord {
            id: ChunkRecord::make_id(source_id, chunk_index),
            source_id: source_id.to_string(),
            content: chunk.content.clone(),
            metadata,
            embedding,
        }
    }
}
