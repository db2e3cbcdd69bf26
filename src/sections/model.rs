//! The section model: one named, leveled block of parsed documentation.

use crate::corpus::DocumentType;

/// A contiguous block of a source document headed by a Markdown header line.
///
/// `word_count` is derived and recomputed whenever the content is set, so it
/// always equals `content.split_whitespace().count()`. `level` and the
/// document type are fixed at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    level: u8,
    content: String,
    document_type: DocumentType,
    word_count: usize,
}

impl Section {
    /// Build a section. `name` must be non-empty; the parser enforces this
    /// by dropping headers with empty titles before construction.
    pub fn new(
        name: impl Into<String>,
        level: u8,
        content: impl Into<String>,
        document_type: DocumentType,
    ) -> Self {
        let mut section = Self {
            name: name.into(),
            level,
            content: String::new(),
            document_type,
            word_count: 0,
        };
        section.set_content(content.into());
        section
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Header depth, 1 through 6. Hierarchy metadata only; content nesting
    /// is flat.
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Replace the content, keeping the word count in sync.
    pub fn set_content(&mut self, content: String) {
        self.word_count = content.split_whitespace().count();
        self.content = content;
    }

    /// Rename during index insertion when the original name collides.
    pub(crate) fn rename(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_tracks_content() {
        let mut section = Section::new(
            "Intro",
            1,
            "# Intro\nHello world.",
            DocumentType::McpDocumentation,
        );
        assert_eq!(section.word_count(), 4);

        section.set_content("one  two\tthree\nfour".to_string());
        assert_eq!(section.word_count(), 4);

        section.set_content(String::new());
        assert_eq!(section.word_count(), 0);
    }
}
