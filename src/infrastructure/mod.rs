//! Infrastructure layer - chunker, pipeline and collaborator implementations

pub mod embedding;
pub mod ingestion;
pub mod knowledge_base;
pub mod logging;
