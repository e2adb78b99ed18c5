//! Document ingestion domain types and traits
//!
//! This module provides:
//! - `ChunkingStrategy` trait for splitting documents into chunks
//! - Configuration and result types for the ingestion pipeline

pub mod chunker;
pub mod pipeline;

// Re-export main types
pub use chunker::{Chunk, ChunkMetadata, ChunkType, ChunkingConfig, ChunkingStrategy};
pub use pipeline::{BatchIngestionResult, IngestionConfig, IngestionError, IngestionResult};

// Re-export mocks for testing
#[cfg(test)]
pub use chunker::mock::MockChunkingStrategy;
