//! Markdown-aware chunking strategy
//!
//! Splits a markdown document into bounded chunks in three stages:
//!
//! 1. **Sectioning** - the document is cut at header lines. Each section is
//!    tagged with the texts of the headers strictly enclosing it.
//! 2. **Packing** - each section is parsed into heading, paragraph, list and
//!    code elements, which are packed greedily into chunks of at most
//!    `max_chunk_size` characters. Elements larger than the bound are split
//!    at sentence boundaries. A section's final buffer is dropped when it is
//!    shorter than `min_chunk_size`, unless that would leave the whole
//!    document without any chunk.
//! 3. **Overlap** - every chunk after the first is prefixed with the last
//!    `overlap_size` characters of its predecessor.
//!
//! Chunking never fails. Malformed markdown (unclosed fences, odd list
//! markers) degrades to best-effort spans.

mod element;
mod line;
mod overlap;
mod packing;
mod section;
mod split;

use tracing::debug;

use crate::domain::ingestion::{Chunk, ChunkingConfig, ChunkingStrategy};
use crate::domain::DomainError;

use overlap::apply_overlap;
use packing::pack_section;
use section::split_sections;

/// Chunking strategy that follows markdown structure
#[derive(Debug, Clone, Default)]
pub struct MarkdownChunker {
    config: ChunkingConfig,
}

impl MarkdownChunker {
    /// Create a markdown chunker, validating the configuration
    pub fn new(config: ChunkingConfig) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Chunk a markdown document, preserving document order.
    ///
    /// Empty or blank input yields no chunks.
    pub fn chunk_markdown(&self, content: &str) -> Vec<Chunk> {
        let sections = split_sections(content);

        let mut chunks = Vec::new();
        let mut dropped = Vec::new();

        for section in &sections {
            let packed = pack_section(section, &self.config);
            chunks.extend(packed.chunks);
            dropped.extend(packed.dropped);
        }

        if chunks.is_empty() {
            chunks = dropped;
        } else if !dropped.is_empty() {
            debug!(
                dropped = dropped.len(),
                min_chunk_size = self.config.min_chunk_size,
                "Dropped short trailing section content"
            );
        }

        debug!(
            sections = sections.len(),
            chunks = chunks.len(),
            "Chunked markdown document"
        );

        apply_overlap(chunks, self.config.overlap_size)
    }
}

impl ChunkingStrategy for MarkdownChunker {
    fn chunk(&self, content: &str) -> Vec<Chunk> {
        self.chunk_markdown(content)
    }

    fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    fn name(&self) -> &'static str {
        "markdown"
    }
}
