//! Element parsing within a section

use super::line::{classify_line, is_fence, LineKind};

/// Kind of a structural element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Heading,
    Paragraph,
    List,
    Code,
}

/// A classified span of section content, packed into chunks as a unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub content: String,
}

impl Element {
    fn from_lines(kind: ElementKind, lines: &[&str]) -> Self {
        Self {
            kind,
            content: lines.join("\n"),
        }
    }
}

/// Parse section content into elements, top to bottom.
///
/// Each branch advances the cursor by at least one line.
pub fn parse_elements(content: &str) -> Vec<Element> {
    let lines: Vec<&str> = content.lines().collect();
    let mut elements = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let (kind, end) = match classify_line(lines[cursor], false) {
            LineKind::Blank => {
                cursor += 1;
                continue;
            }
            LineKind::Fence => (ElementKind::Code, scan_code(&lines, cursor)),
            LineKind::Heading => (ElementKind::Heading, cursor + 1),
            LineKind::ListItem => (ElementKind::List, scan_list(&lines, cursor)),
            LineKind::Text | LineKind::ListContinuation => {
                (ElementKind::Paragraph, scan_paragraph(&lines, cursor))
            }
        };

        elements.push(Element::from_lines(kind, &lines[cursor..end]));
        cursor = end;
    }

    elements
}

/// End (exclusive) of the code block opened at `start`: just past the
/// closing fence, or the end of the section when the fence never closes.
fn scan_code(lines: &[&str], start: usize) -> usize {
    let mut end = start + 1;

    while end < lines.len() {
        let closes = is_fence(lines[end]);
        end += 1;

        if closes {
            break;
        }
    }

    end
}

fn scan_list(lines: &[&str], start: usize) -> usize {
    let mut end = start + 1;

    while end < lines.len() {
        match classify_line(lines[end], true) {
            LineKind::ListItem | LineKind::ListContinuation => end += 1,
            _ => break,
        }
    }

    end
}

fn scan_paragraph(lines: &[&str], start: usize) -> usize {
    let mut end = start + 1;

    while end < lines.len() && classify_line(lines[end], false) == LineKind::Text {
        end += 1;
    }

    end
}
