//! Tool layer for browsing the section index.

use std::sync::Arc;

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::corpus;
use crate::sections::SectionIndex;
use crate::sections::outputs::{
    CoreConceptsOutput, GetSectionOutput, ListSectionsOutput, SectionDetails, SectionSummary,
};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetSectionParams {
    #[schemars(
        description = "The exact name of the section to retrieve, as reported by list_sections"
    )]
    pub name: String,
}

/// Browsing tools over the immutable section index. No locking: the index
/// never changes after build.
#[derive(Debug, Clone)]
pub struct SectionTools {
    index: Arc<SectionIndex>,
}

impl SectionTools {
    pub fn new(index: Arc<SectionIndex>) -> Self {
        Self { index }
    }

    pub fn list_sections(&self) -> ListSectionsOutput {
        let sections: Vec<_> = self
            .index
            .sections()
            .iter()
            .map(SectionSummary::from_section)
            .collect();
        ListSectionsOutput {
            total: sections.len(),
            sections,
        }
    }

    pub fn get_section(&self, params: GetSectionParams) -> GetSectionOutput {
        match self.index.get(&params.name) {
            Ok(section) => GetSectionOutput::Success(SectionDetails {
                name: section.name().to_string(),
                document_type: section.document_type().label().to_string(),
                level: section.level(),
                word_count: section.word_count(),
                content: section.content().to_string(),
            }),
            Err(e) => GetSectionOutput::Error {
                error: e.to_string(),
            },
        }
    }

    pub fn core_concepts(&self) -> CoreConceptsOutput {
        CoreConceptsOutput {
            overview: corpus::CORE_CONCEPTS_OVERVIEW.to_string(),
        }
    }
}
