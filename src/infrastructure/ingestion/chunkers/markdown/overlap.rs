//! Cross-chunk overlap

use crate::domain::ingestion::chunker::helpers::tail_chars;
use crate::domain::ingestion::Chunk;

/// Separator between the carried-over tail and the chunk's own content
pub const OVERLAP_SEPARATOR: &str = "\n\n";

/// Prefix every chunk after the first with the last `overlap_size`
/// characters of its predecessor's content as it was before any overlap.
pub fn apply_overlap(chunks: Vec<Chunk>, overlap_size: usize) -> Vec<Chunk> {
    if overlap_size == 0 || chunks.len() < 2 {
        return chunks;
    }

    let tails: Vec<String> = chunks
        .iter()
        .map(|chunk| tail_chars(&chunk.content, overlap_size).to_string())
        .collect();

    chunks
        .into_iter()
        .enumerate()
        .map(|(index, mut chunk)| {
            if index > 0 {
                chunk.content = format!(
                    "{}{}{}",
                    tails[index - 1],
                    OVERLAP_SEPARATOR,
                    chunk.content
                );
            }
            chunk
        })
        .collect()
}
