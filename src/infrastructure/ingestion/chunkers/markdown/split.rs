//! Sentence splitting for elements larger than the chunk bound

use crate::domain::ingestion::chunker::helpers::char_len;

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Split text into sentence units.
///
/// A unit ends after a run of `.`, `!` or `?` plus any whitespace that
/// follows it. Text after the last terminator forms a final unit. The units
/// concatenate back to `text`.
pub fn sentence_units(text: &str) -> Vec<&str> {
    let mut units = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        if !is_terminator(ch) {
            continue;
        }

        let mut end = index + ch.len_utf8();

        while let Some(&(next_index, next)) = chars.peek() {
            if !is_terminator(next) {
                break;
            }
            end = next_index + next.len_utf8();
            chars.next();
        }

        while let Some(&(next_index, next)) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            end = next_index + next.len_utf8();
            chars.next();
        }

        units.push(&text[start..end]);
        start = end;
    }

    if start < text.len() {
        units.push(&text[start..]);
    }

    units
}

/// Split an oversized element at sentence boundaries into pieces of at most
/// `max_chunk_size` characters.
///
/// A single sentence longer than the bound becomes its own oversized piece.
/// Every piece is kept regardless of size; none is empty.
pub fn split_oversized(content: &str, max_chunk_size: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut buffer = String::new();
    let mut buffer_size = 0;

    for unit in sentence_units(content) {
        let unit_size = char_len(unit);

        if !buffer.is_empty() && buffer_size + unit_size > max_chunk_size {
            push_piece(&mut pieces, &buffer);
            buffer.clear();
            buffer_size = 0;
        }

        buffer.push_str(unit);
        buffer_size += unit_size;
    }

    push_piece(&mut pieces, &buffer);

    pieces
}

fn push_piece(pieces: &mut Vec<String>, buffer: &str) {
    let piece = buffer.trim();

    if !piece.is_empty() {
        pieces.push(piece.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_units_basic() {
        let units = sentence_units("One. Two! Three? Four");
        assert_eq!(units, vec!["One. ", "Two! ", "Three? ", "Four"]);
    }

    #[test]
    fn test_sentence_units_terminator_runs() {
        let units = sentence_units("Really?! Yes...  Done.");
        assert_eq!(units, vec!["Really?! ", "Yes...  ", "Done."]);
    }

    #[test]
    fn test_sentence_units_reassemble() {
        let text = "Take 2 tablets. Review in 3 days!\nThen stop";
        assert_eq!(sentence_units(text).concat(), text);
    }

    #[test]
    fn test_sentence_units_without_boundary() {
        assert_eq!(sentence_units("no boundary here"), vec!["no boundary here"]);
        assert!(sentence_units("").is_empty());
    }

    #[test]
    fn test_split_oversized_respects_bound() {
        let text = "Alpha beta gamma. ".repeat(20);
        let pieces = split_oversized(&text, 60);

        assert!(pieces.len() > 1);
        for piece in &pieces {
            assert!(char_len(piece) <= 60);
            assert!(piece.ends_with('.'));
        }
        assert_eq!(pieces.concat().replace(' ', ""), text.replace(' ', ""));
    }

    #[test]
    fn test_split_oversized_no_boundary_single_piece() {
        let text = "x".repeat(150);
        let pieces = split_oversized(&text, 100);

        assert_eq!(pieces, vec![text]);
    }

    #[test]
    fn test_split_oversized_long_sentence_isolated() {
        let long = format!("{}.", "y".repeat(120));
        let text = format!("Short one. {} Short two.", long);
        let pieces = split_oversized(&text, 50);

        assert_eq!(pieces, vec!["Short one.".to_string(), long, "Short two.".to_string()]);
    }

    #[test]
    fn test_split_oversized_multibyte() {
        let text = "Ça va très bien. ".repeat(10);
        let pieces = split_oversized(&text, 40);

        for piece in &pieces {
            assert!(char_len(piece) <= 40);
        }
    }
}
