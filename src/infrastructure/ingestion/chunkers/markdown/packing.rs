//! Greedy packing of section elements into chunks

use tracing::warn;

use super::element::{parse_elements, Element};
use super::line::{is_fence, is_header, is_list_marker};
use super::section::Section;
use super::split::split_oversized;
use crate::domain::ingestion::chunker::helpers::char_len;
use crate::domain::ingestion::{Chunk, ChunkMetadata, ChunkType, ChunkingConfig};

/// Separator placed between elements sharing a chunk
pub const ELEMENT_SEPARATOR: &str = "\n\n";

const SEPARATOR_LEN: usize = ELEMENT_SEPARATOR.len();

/// Chunks produced for one section
#[derive(Debug, Default)]
pub struct PackedSection {
    pub chunks: Vec<Chunk>,
    /// Final buffer that fell below the minimum size and was not emitted
    pub dropped: Option<Chunk>,
}

#[derive(Debug, Default)]
struct ChunkBuffer {
    parts: Vec<String>,
    size: usize,
}

impl ChunkBuffer {
    fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Materialized size after appending an element of `len` characters
    fn size_with(&self, len: usize) -> usize {
        if self.is_empty() {
            len
        } else {
            self.size + SEPARATOR_LEN + len
        }
    }

    fn push(&mut self, element: Element, len: usize) {
        self.size = self.size_with(len);
        self.parts.push(element.content);
    }

    fn take(&mut self) -> String {
        self.size = 0;
        std::mem::take(&mut self.parts).join(ELEMENT_SEPARATOR)
    }
}

/// Pack a section's elements into chunks no larger than `max_chunk_size`.
pub fn pack_section(section: &Section, config: &ChunkingConfig) -> PackedSection {
    let mut packed = PackedSection::default();
    let mut buffer = ChunkBuffer::default();
    let make_chunk = |content: String| chunk_for(content, &section.headers);

    for element in parse_elements(&section.content) {
        let len = char_len(&element.content);

        if len > config.max_chunk_size {
            if !buffer.is_empty() {
                packed.chunks.push(make_chunk(buffer.take()));
            }

            for piece in split_oversized(&element.content, config.max_chunk_size) {
                let piece_len = char_len(&piece);
                if piece_len > config.max_chunk_size {
                    warn!(
                        kind = ?element.kind,
                        size = piece_len,
                        max_chunk_size = config.max_chunk_size,
                        "Element has no sentence boundary to split at; emitting oversized chunk"
                    );
                }
                packed.chunks.push(make_chunk(piece));
            }
            continue;
        }

        if !buffer.is_empty() && buffer.size_with(len) > config.max_chunk_size {
            packed.chunks.push(make_chunk(buffer.take()));
        }

        buffer.push(element, len);
    }

    if !buffer.is_empty() {
        let size = buffer.size;
        let chunk = make_chunk(buffer.take());

        if size >= config.min_chunk_size {
            packed.chunks.push(chunk);
        } else {
            packed.dropped = Some(chunk);
        }
    }

    packed
}

fn chunk_for(content: String, headers: &[String]) -> Chunk {
    let chunk_type = detect_chunk_type(&content);
    Chunk::new(content, ChunkMetadata::new(headers.to_vec(), chunk_type))
}

/// Classify materialized chunk content by the markers it contains.
///
/// Heading and list markers inside a fenced block are part of the code and
/// do not count.
pub fn detect_chunk_type(content: &str) -> ChunkType {
    let mut has_code = false;
    let mut has_list = false;
    let mut has_heading = false;
    let mut in_fence = false;

    for line in content.lines() {
        if is_fence(line) {
            has_code = true;
            in_fence = !in_fence;
        } else if !in_fence {
            has_heading |= is_header(line);
            has_list |= is_list_marker(line);
        }
    }

    match (has_heading, has_list, has_code) {
        (false, false, false) => ChunkType::Paragraph,
        (true, false, false) => ChunkType::Heading,
        (false, true, false) => ChunkType::List,
        (false, false, true) => ChunkType::Code,
        _ => ChunkType::Mixed,
    }
}
