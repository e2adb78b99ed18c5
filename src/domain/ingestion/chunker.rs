//! Chunking strategy trait and types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Debug};

use crate::domain::DomainError;

/// Default upper bound on chunk content length, in characters
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1000;

/// Default size below which a trailing section remainder is dropped
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 100;

/// Default number of trailing characters carried into the next chunk
pub const DEFAULT_OVERLAP_SIZE: usize = 100;

/// Configuration for chunking
///
/// All sizes are measured in characters (Unicode scalar values), not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Upper bound on chunk content length
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,
    /// Trailing section buffers shorter than this are dropped
    #[serde(default = "default_min_chunk_size")]
    pub min_chunk_size: usize,
    /// Characters of the previous chunk prefixed onto the next one
    #[serde(default = "default_overlap_size")]
    pub overlap_size: usize,
}

fn default_max_chunk_size() -> usize {
    DEFAULT_MAX_CHUNK_SIZE
}

fn default_min_chunk_size() -> usize {
    DEFAULT_MIN_CHUNK_SIZE
}

fn default_overlap_size() -> usize {
    DEFAULT_OVERLAP_SIZE
}

impl ChunkingConfig {
    /// Create a new chunking configuration
    pub fn new(max_chunk_size: usize, overlap_size: usize) -> Self {
        Self {
            max_chunk_size,
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE.min(max_chunk_size),
            overlap_size,
        }
    }

    /// Set minimum chunk size
    pub fn with_min_chunk_size(mut self, min_size: usize) -> Self {
        self.min_chunk_size = min_size;
        self
    }

    /// Set overlap size
    pub fn with_overlap_size(mut self, overlap_size: usize) -> Self {
        self.overlap_size = overlap_size;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.max_chunk_size == 0 {
            return Err(DomainError::validation(
                "max_chunk_size must be greater than 0",
            ));
        }

        if self.overlap_size >= self.max_chunk_size {
            return Err(DomainError::validation(
                "overlap_size must be less than max_chunk_size",
            ));
        }

        if self.min_chunk_size > self.max_chunk_size {
            return Err(DomainError::validation(
                "min_chunk_size must be less than or equal to max_chunk_size",
            ));
        }

        Ok(())
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE,
            overlap_size: DEFAULT_OVERLAP_SIZE,
        }
    }
}

/// Structural kind of a chunk's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkType {
    Heading,
    Paragraph,
    List,
    Code,
    /// More than one of heading, list or code markers present
    Mixed,
}

impl ChunkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::List => "list",
            Self::Code => "code",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Texts of the headers enclosing the chunk's section, outermost first
    pub headers: Vec<String>,
    /// Structural kind of the chunk content
    #[serde(rename = "type")]
    pub chunk_type: ChunkType,
}

impl ChunkMetadata {
    /// Create new chunk metadata
    pub fn new(headers: Vec<String>, chunk_type: ChunkType) -> Self {
        Self {
            headers,
            chunk_type,
        }
    }

    /// Convert to JSON value map
    pub fn to_json_map(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert(
            "headers".to_string(),
            serde_json::Value::Array(
                self.headers
                    .iter()
                    .cloned()
                    .map(serde_json::Value::String)
                    .collect(),
            ),
        );
        map.insert(
            "type".to_string(),
            serde_json::Value::String(self.chunk_type.as_str().to_string()),
        );
        map
    }
}

/// A chunk of text extracted from a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk content
    pub content: String,
    /// Chunk metadata
    pub metadata: ChunkMetadata,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(content: impl Into<String>, metadata: ChunkMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// Get the chunk type
    pub fn chunk_type(&self) -> ChunkType {
        self.metadata.chunk_type
    }

    /// Get the content length in characters
    pub fn char_count(&self) -> usize {
        helpers::char_len(&self.content)
    }
}

/// Trait for chunking strategies
///
/// Implementations carry their configuration from construction; chunking
/// itself never fails, whatever shape the input has.
pub trait ChunkingStrategy: Send + Sync + Debug {
    /// Split content into chunks, in document order
    fn chunk(&self, content: &str) -> Vec<Chunk>;

    /// Configuration the strategy was built with
    fn config(&self) -> &ChunkingConfig;

    /// Get the strategy name
    fn name(&self) -> &'static str;
}

/// Helper functions for chunking
pub mod helpers {
    /// Length of `text` in characters
    pub fn char_len(text: &str) -> usize {
        text.chars().count()
    }

    /// The last `count` characters of `text` (all of it when shorter)
    pub fn tail_chars(text: &str, count: usize) -> &str {
        if count == 0 {
            return "";
        }

        match text.char_indices().rev().nth(count - 1) {
            Some((start, _)) => &text[start..],
            None => text,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunking_config_default() {
        let config = ChunkingConfig::default();
        assert_eq!(config.max_chunk_size, 1000);
        assert_eq!(config.min_chunk_size, 100);
        assert_eq!(config.overlap_size, 100);
    }

    #[test]
    fn test_chunking_config_validation() {
        assert!(ChunkingConfig::new(100, 50).validate().is_ok());
        assert!(ChunkingConfig::new(100, 0).validate().is_ok());

        assert!(ChunkingConfig::new(0, 0).validate().is_err());
        assert!(ChunkingConfig::new(100, 100).validate().is_err());
        assert!(
            ChunkingConfig::new(100, 10)
                .with_min_chunk_size(101)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_chunking_config_new_clamps_min() {
        let config = ChunkingConfig::new(40, 0);
        assert_eq!(config.min_chunk_size, 40);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chunking_config_partial_deserialize() {
        let config: ChunkingConfig = serde_json::from_str(r#"{"max_chunk_size": 500}"#).unwrap();
        assert_eq!(config.max_chunk_size, 500);
        assert_eq!(config.min_chunk_size, 100);
        assert_eq!(config.overlap_size, 100);
    }

    #[test]
    fn test_chunk_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ChunkType::Mixed).unwrap(),
            "\"mixed\""
        );
        assert_eq!(ChunkType::Code.to_string(), "code");
    }

    #[test]
    fn test_chunk_serializes_type_field() {
        let chunk = Chunk::new(
            "- item",
            ChunkMetadata::new(vec!["Guide".to_string()], ChunkType::List),
        );
        let value = serde_json::to_value(&chunk).unwrap();

        assert_eq!(value["metadata"]["type"], "list");
        assert_eq!(value["metadata"]["headers"][0], "Guide");
    }

    #[test]
    fn test_chunk_metadata_to_json() {
        let meta = ChunkMetadata::new(vec!["A".to_string(), "B".to_string()], ChunkType::Code);
        let map = meta.to_json_map();

        assert_eq!(map.get("type"), Some(&serde_json::json!("code")));
        assert_eq!(map.get("headers"), Some(&serde_json::json!(["A", "B"])));
    }

    #[test]
    fn test_char_count_counts_chars_not_bytes() {
        let chunk = Chunk::new("héllo", ChunkMetadata::new(vec![], ChunkType::Paragraph));
        assert_eq!(chunk.char_count(), 5);
        assert_eq!(chunk.content.len(), 6);
    }

    #[test]
    fn test_tail_chars() {
        assert_eq!(helpers::tail_chars("hello world", 5), "world");
        assert_eq!(helpers::tail_chars("hi", 5), "hi");
        assert_eq!(helpers::tail_chars("hi", 0), "");
        assert_eq!(helpers::tail_chars("naïve café", 4), "café");
    }

    #[test]
    fn test_mock_chunking_strategy() {
        let strategy = mock::MockChunkingStrategy::new();

        let chunks = strategy.chunk("hello world");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "hello world");
        assert!(strategy.chunk("  ").is_empty());
    }
}
