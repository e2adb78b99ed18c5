//! Knowledge-base chunker
//!
//! Markdown-aware chunking for knowledge-base ingestion:
//! - Header-path sectioning and element-boundary packing
//! - Sentence splitting of oversized elements and chunk overlap
//! - An ingestion pipeline over pluggable embedding and storage collaborators

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
