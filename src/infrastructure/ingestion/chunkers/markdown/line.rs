//! Line-level markdown classification

use once_cell::sync::Lazy;
use regex::Regex;

/// Opening and closing marker of a fenced code block
pub const FENCE_MARKER: &str = "```";

/// ATX header: 1-6 `#` followed by whitespace and text
static HEADER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());

/// Bullet (`-`, `*`, `+`) or ordered (`12.`) list marker at any indentation
static LIST_MARKER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:[-*+]|\d+\.)\s+").unwrap());

/// Indentation that makes a non-marker line continue the list above it
const LIST_CONTINUATION_INDENT: &str = "  ";

/// A markdown header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Number of leading `#` characters (1-6)
    pub level: usize,
    /// Header text without the markers
    pub text: String,
}

/// What a single line is, in the context it appears in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Fence,
    Heading,
    ListItem,
    /// Indented non-marker line directly below a list line
    ListContinuation,
    Text,
}

/// Parse a header line, returning `None` for anything else
pub fn parse_header(line: &str) -> Option<Header> {
    let captures = HEADER_PATTERN.captures(line)?;
    let text = captures.get(2)?.as_str().trim();

    if text.is_empty() {
        return None;
    }

    Some(Header {
        level: captures.get(1)?.as_str().len(),
        text: text.to_string(),
    })
}

pub fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with(FENCE_MARKER)
}

pub fn is_list_marker(line: &str) -> bool {
    LIST_MARKER_PATTERN.is_match(line)
}

pub fn is_header(line: &str) -> bool {
    parse_header(line).is_some()
}

/// Classify `line`.
///
/// With `in_list` set, indented lines belong to the list being scanned
/// whatever they contain, so an indented fence does not close it.
pub fn classify_line(line: &str, in_list: bool) -> LineKind {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    if in_list && line.starts_with(LIST_CONTINUATION_INDENT) {
        return if is_list_marker(line) {
            LineKind::ListItem
        } else {
            LineKind::ListContinuation
        };
    }

    if is_fence(line) {
        LineKind::Fence
    } else if is_header(line) {
        LineKind::Heading
    } else if is_list_marker(line) {
        LineKind::ListItem
    } else {
        LineKind::Text
    }
}
