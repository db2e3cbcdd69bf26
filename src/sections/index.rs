//! The section index: every parsed section, keyed by name.
//!
//! Built once at startup and immutable thereafter, so readers share it
//! without locking. Rebuilding means constructing a whole new index and
//! swapping the reference, never patching in place.

use std::collections::HashMap;

use crate::corpus::SourceDocument;
use crate::error::EngineError;
use crate::sections::{Section, parser};

/// Immutable, insertion-ordered collection of all sections, with O(1)
/// lookup by name.
#[derive(Debug, Default)]
pub struct SectionIndex {
    sections: Vec<Section>,
    by_name: HashMap<String, usize>,
}

impl SectionIndex {
    /// Parse every document and index the resulting sections.
    ///
    /// A name collision renames the later section to
    /// `"<name> (<document type>)"`; if the disambiguated name also
    /// collides the build fails with [`EngineError::DuplicateSection`].
    pub fn build(documents: &[SourceDocument]) -> Result<Self, EngineError> {
        let mut index = Self::default();
        for document in documents {
            let sections = parser::parse(document.document_type, &document.text);
            tracing::debug!(
                document = %document.document_type,
                sections = sections.len(),
                "parsed document"
            );
            for section in sections {
                index.insert(section)?;
            }
        }
        tracing::info!(sections = index.len(), "section index built");
        Ok(index)
    }

    fn insert(&mut self, mut section: Section) -> Result<(), EngineError> {
        if self.by_name.contains_key(section.name()) {
            let renamed = format!("{} ({})", section.name(), section.document_type().label());
            if self.by_name.contains_key(&renamed) {
                return Err(EngineError::DuplicateSection {
                    name: renamed,
                    document_type: section.document_type(),
                });
            }
            tracing::debug!(
                original = section.name(),
                renamed,
                "disambiguated colliding section name"
            );
            section.rename(renamed);
        }
        self.by_name
            .insert(section.name().to_string(), self.sections.len());
        self.sections.push(section);
        Ok(())
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Result<&Section, EngineError> {
        self.by_name
            .get(name)
            .map(|&i| &self.sections[i])
            .ok_or_else(|| EngineError::SectionNotFound {
                name: name.to_string(),
            })
    }

    /// All sections in insertion order: document order, then intra-document
    /// header order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
