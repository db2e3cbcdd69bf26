//! Markdown header parsing: raw text into a flat, ordered list of sections.
//!
//! Only header-based structural parsing, not full CommonMark. A header line
//! is one to six `#` characters followed by whitespace and a title. Content
//! accumulation for a section stops at the next header line of any level;
//! `level` is kept purely as hierarchy metadata for listing.

use crate::corpus::DocumentType;
use crate::sections::Section;

const MAX_HEADER_LEVEL: usize = 6;

/// Parse a document into sections, stamping every section with
/// `document_type`.
///
/// Lines before the first header become an implicit preamble section named
/// after the document's first non-blank line. A header with an empty title
/// is dropped with a warning, along with the body lines that would have
/// belonged to it. An empty document yields no sections.
pub fn parse(document_type: DocumentType, raw: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<Draft> = None;
    let mut preamble: Vec<&str> = Vec::new();
    let mut seen_header = false;

    for line in raw.lines() {
        match header_line(line) {
            Some((level, title)) => {
                if !seen_header {
                    seen_header = true;
                    if let Some(section) = finish_preamble(&preamble, document_type) {
                        sections.push(section);
                    }
                }
                if let Some(draft) = current.take() {
                    sections.push(draft.finish(document_type));
                }
                if title.is_empty() {
                    tracing::warn!(
                        document = %document_type,
                        line,
                        "dropping header line with empty title"
                    );
                } else {
                    current = Some(Draft::new(title, level, line));
                }
            }
            None => {
                if let Some(draft) = current.as_mut() {
                    draft.lines.push(line);
                } else if !seen_header {
                    preamble.push(line);
                }
                // Otherwise the line trails a dropped header and is discarded.
            }
        }
    }

    if let Some(draft) = current.take() {
        sections.push(draft.finish(document_type));
    }
    if !seen_header {
        if let Some(section) = finish_preamble(&preamble, document_type) {
            sections.push(section);
        }
    }

    sections
}

/// Recognize a header line, returning its level and trimmed title.
fn header_line(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > MAX_HEADER_LEVEL {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    Some((hashes as u8, rest.trim()))
}

struct Draft<'a> {
    name: &'a str,
    level: u8,
    lines: Vec<&'a str>,
}

impl<'a> Draft<'a> {
    fn new(name: &'a str, level: u8, header_line: &'a str) -> Self {
        Self {
            name,
            level,
            lines: vec![header_line],
        }
    }

    fn finish(self, document_type: DocumentType) -> Section {
        let content = self.lines.join("\n").trim().to_string();
        Section::new(self.name, self.level, content, document_type)
    }
}

/// Non-header lines before the first header become a section named after
/// the first non-blank line; an all-blank preamble is discarded.
fn finish_preamble(lines: &[&str], document_type: DocumentType) -> Option<Section> {
    let name = lines.iter().map(|l| l.trim()).find(|l| !l.is_empty())?;
    let content = lines.join("\n").trim().to_string();
    Some(Section::new(name, 1, content, document_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: DocumentType = DocumentType::McpDocumentation;

    #[test]
    fn empty_document_yields_no_sections() {
        assert!(parse(DOC, "").is_empty());
        assert!(parse(DOC, "\n\n  \n").is_empty());
    }

    #[test]
    fn splits_on_headers_of_any_level() {
        let raw = "# Top\nintro text\n## Nested\nnested body\n# Second\ntail";
        let sections = parse(DOC, raw);
        let names: Vec<_> = sections.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Top", "Nested", "Second"]);

        // Flat content: a parent's content stops at the nested header.
        assert_eq!(sections[0].content(), "# Top\nintro text");
        assert_eq!(sections[1].content(), "## Nested\nnested body");
        assert_eq!(sections[1].level(), 2);
        assert_eq!(sections[2].level(), 1);
    }

    #[test]
    fn word_counts_cover_every_token_exactly_once() {
        let raw = "# A\none two\n## B\nthree\n### C\nfour five six";
        let sections = parse(DOC, raw);
        let total: usize = sections.iter().map(|s| s.word_count()).sum();
        let expected: usize = sections
            .iter()
            .map(|s| s.content().split_whitespace().count())
            .sum();
        assert_eq!(total, expected);
        // Header titles are part of their section's content.
        assert_eq!(total, raw.split_whitespace().count());
    }

    #[test]
    fn preamble_becomes_named_section() {
        let raw = "Welcome to the guide.\nSome early notes.\n# Real Start\nbody";
        let sections = parse(DOC, raw);
        assert_eq!(sections[0].name(), "Welcome to the guide.");
        assert_eq!(sections[0].level(), 1);
        assert!(sections[0].content().contains("Some early notes."));
        assert_eq!(sections[1].name(), "Real Start");
    }

    #[test]
    fn document_without_headers_is_one_preamble_section() {
        let sections = parse(DOC, "just prose\nand more prose");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name(), "just prose");
    }

    #[test]
    fn empty_header_title_is_dropped_with_its_body() {
        let raw = "# Kept\nkept body\n#   \norphan body\n# Also Kept\ntail";
        let sections = parse(DOC, raw);
        let names: Vec<_> = sections.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Kept", "Also Kept"]);
        assert!(!sections.iter().any(|s| s.content().contains("orphan")));
    }

    #[test]
    fn non_header_hash_lines_stay_in_content() {
        let raw = "# Section\n####### seven hashes\n#nospace\nplain";
        let sections = parse(DOC, raw);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].content().contains("####### seven hashes"));
        assert!(sections[0].content().contains("#nospace"));
    }

    #[test]
    fn duplicate_headers_are_emitted_as_is() {
        // Collision handling belongs to the index builder.
        let sections = parse(DOC, "# Intro\nHello world.\n# Intro\nGoodbye.");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name(), sections[1].name());
    }
}
