//! Header-based sectioning

use super::line::{is_fence, parse_header, Header};

/// Document content falling under one header path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Texts of the headers strictly enclosing the section, outermost first
    pub headers: Vec<String>,
    /// Section lines, starting with its own header line when it has one
    pub content: String,
}

/// Split a document into sections at header lines.
///
/// The header stack is kept strictly increasing in level: a header of level
/// L pops every entry with level >= L before it is pushed. A section is
/// tagged with the stack as it stood just before its own header was pushed.
/// Lines inside a closed fenced code block are never treated as headers; a
/// fence without a closing partner hides nothing.
pub fn split_sections(document: &str) -> Vec<Section> {
    let all_lines: Vec<&str> = document.lines().collect();
    let fenced = closed_fence_mask(&all_lines);

    let mut sections = Vec::new();
    let mut stack: Vec<Header> = Vec::new();
    let mut section_headers: Vec<String> = Vec::new();
    let mut lines: Vec<&str> = Vec::new();

    for (index, line) in all_lines.iter().copied().enumerate() {
        if !fenced[index] {
            if let Some(header) = parse_header(line) {
                flush(&mut sections, &section_headers, &mut lines);

                while stack.last().is_some_and(|top| top.level >= header.level) {
                    stack.pop();
                }

                section_headers = stack.iter().map(|h| h.text.clone()).collect();
                stack.push(header);
            }
        }

        lines.push(line);
    }

    flush(&mut sections, &section_headers, &mut lines);

    sections
}

/// Marks the lines covered by a fence pair, both fences included.
///
/// Fences pair up in document order; a trailing opener with no closing
/// fence leaves the lines after it unmarked.
fn closed_fence_mask(lines: &[&str]) -> Vec<bool> {
    let mut mask = vec![false; lines.len()];
    let mut open: Option<usize> = None;

    for (index, line) in lines.iter().enumerate() {
        if !is_fence(line) {
            continue;
        }

        match open.take() {
            Some(start) => mask[start..=index].iter_mut().for_each(|m| *m = true),
            None => open = Some(index),
        }
    }

    mask
}

fn flush(sections: &mut Vec<Section>, headers: &[String], lines: &mut Vec<&str>) {
    if lines.iter().all(|line| line.trim().is_empty()) {
        lines.clear();
        return;
    }

    sections.push(Section {
        headers: headers.to_vec(),
        content: lines.join("\n"),
    });
    lines.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_of(sections: &[Section]) -> Vec<Vec<&str>> {
        sections
            .iter()
            .map(|s| s.headers.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_empty_document() {
        assert!(split_sections("").is_empty());
        assert!(split_sections("\n\n  \n").is_empty());
    }

    #[test]
    fn test_no_headers_single_section() {
        let sections = split_sections("one\n\ntwo");
        assert_eq!(sections.len(), 1);
        assert!(sections[0].headers.is_empty());
        assert_eq!(sections[0].content, "one\n\ntwo");
    }

    #[test]
    fn test_header_line_starts_its_section() {
        let sections = split_sections("intro\n# A\ncontent1\n## B\ncontent2");

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].content, "intro");
        assert_eq!(sections[1].content, "# A\ncontent1");
        assert_eq!(sections[2].content, "## B\ncontent2");
        assert_eq!(headers_of(&sections), vec![vec![], vec![], vec!["A"]]);
    }

    #[test]
    fn test_sibling_headers_replace_each_other() {
        let sections = split_sections("# A\n## B\ntext1\n## C\ntext2");

        let text2 = sections
            .iter()
            .find(|s| s.content.contains("text2"))
            .unwrap();
        assert_eq!(text2.headers, vec!["A".to_string()]);
        assert!(!text2.headers.contains(&"B".to_string()));
    }

    #[test]
    fn test_shallower_header_pops_deeper_entries() {
        let doc = "# A\n## B\n### C\ndeep\n## D\nmid\n# E\ntop";
        let sections = split_sections(doc);

        assert_eq!(
            headers_of(&sections),
            vec![
                vec![],
                vec!["A"],
                vec!["A", "B"],
                vec!["A"],
                vec![],
            ]
        );
    }

    #[test]
    fn test_skipped_levels_keep_nesting() {
        let sections = split_sections("# A\n### C\ntext\n## B\nmore");
        assert_eq!(headers_of(&sections), vec![vec![], vec!["A"], vec!["A"]]);
    }

    #[test]
    fn test_headers_inside_code_fence_ignored() {
        let doc = "# Setup\n```bash\n# install deps\nnpm ci\n```\nDone.";
        let sections = split_sections(doc);

        assert_eq!(sections.len(), 1);
        assert!(sections[0].content.contains("# install deps"));
    }

    #[test]
    fn test_unclosed_fence_hides_no_headers() {
        let doc = "# A\n```\nstray fence never closed\n\n## B\nBody under B.\n\n## C\nBody under C.";
        let sections = split_sections(doc);

        assert_eq!(sections.len(), 3);
        assert!(sections[0].content.contains("stray fence"));
        assert_eq!(headers_of(&sections), vec![vec![], vec!["A"], vec!["A"]]);
        assert!(sections[2].content.starts_with("## C"));
    }

    #[test]
    fn test_closed_fence_after_unclosed_one_still_pairs() {
        let doc = "# A\n```\n# inside\n```\n```\n## B\ntext";
        let sections = split_sections(doc);

        assert_eq!(sections.len(), 2);
        assert!(sections[0].content.contains("# inside"));
        assert_eq!(sections[1].content, "## B\ntext");
        assert_eq!(headers_of(&sections), vec![vec![], vec!["A"]]);
    }

    #[test]
    fn test_closed_fence_mask() {
        let lines = ["a", "```", "b", "```", "c", "```", "d"];
        assert_eq!(
            closed_fence_mask(&lines),
            vec![false, true, true, true, false, false, false]
        );
    }
}
