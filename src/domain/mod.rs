//! Domain layer - Core types and collaborator traits

pub mod embedding;
pub mod error;
pub mod ingestion;
pub mod knowledge_base;

pub use embedding::EmbeddingProvider;
pub use error::DomainError;
pub use ingestion::{
    BatchIngestionResult, Chunk, ChunkMetadata, ChunkType, ChunkingConfig, ChunkingStrategy,
    IngestionConfig, IngestionError, IngestionResult,
};
pub use knowledge_base::{AddRecordsResult, ChunkRecord, ChunkStore};
