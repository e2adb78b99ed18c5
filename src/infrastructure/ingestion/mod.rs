//! Document ingestion infrastructure
//!
//! This module provides the markdown chunker and the ingestion pipeline.

pub mod chunkers;
pub mod pipeline;

// Re-export chunkers
pub use chunkers::MarkdownChunker;

// Re-export pipeline
pub use pipeline::IngestionPipeline;
