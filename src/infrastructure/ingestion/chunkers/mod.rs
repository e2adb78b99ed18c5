//! Chunking strategy implementations

mod markdown;

pub use markdown::MarkdownChunker;
