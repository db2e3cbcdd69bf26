//! Output types for the search tools.
//!
//! These are serialized to JSON strings for the MCP protocol, and can be
//! deserialized in tests for type-safe validation.

use serde::{Deserialize, Serialize};

use crate::search::engine::{ContentHit, NameHit, RequirementHit};
use crate::search::extract::Fragment;

/// A ranked name-search match with a content preview.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NameMatch {
    pub name: String,
    pub document_type: String,
    pub level: u8,
    pub word_count: usize,
    pub preview: String,
}

impl NameMatch {
    pub fn from_hit(hit: &NameHit<'_>) -> Self {
        Self {
            name: hit.section.name().to_string(),
            document_type: hit.section.document_type().label().to_string(),
            level: hit.section.level(),
            word_count: hit.section.word_count(),
            preview: hit.preview.clone(),
        }
    }
}

/// Output from the `search_sections_by_name` tool.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchSectionsByNameOutput {
    pub keyword: String,
    pub results: Vec<NameMatch>,
}

impl SearchSectionsByNameOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// A ranked content-search match with per-occurrence snippets.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ContentMatch {
    pub name: String,
    pub document_type: String,
    pub level: u8,
    pub word_count: usize,
    pub occurrences: usize,
    pub snippets: Vec<String>,
}

impl ContentMatch {
    pub fn from_hit(hit: &ContentHit<'_>) -> Self {
        Self {
            name: hit.section.name().to_string(),
            document_type: hit.section.document_type().label().to_string(),
            level: hit.section.level(),
            word_count: hit.section.word_count(),
            occurrences: hit.occurrences,
            snippets: hit.snippets.clone(),
        }
    }
}

/// Output from the `search_content_by_text` tool.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchContentByTextOutput {
    pub keyword: String,
    pub results: Vec<ContentMatch>,
}

impl SearchContentByTextOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// One extracted code or requirement fragment.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct RequirementFragment {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub text: String,
}

impl RequirementFragment {
    pub fn from_fragment(fragment: &Fragment) -> Self {
        Self {
            kind: fragment.kind.as_str().to_string(),
            language: fragment.language.clone(),
            text: fragment.text.clone(),
        }
    }
}

/// A content match narrowed to its code and requirement fragments.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct RequirementMatch {
    pub name: String,
    pub document_type: String,
    pub occurrences: usize,
    pub snippets: Vec<String>,
    pub fragments: Vec<RequirementFragment>,
}

impl RequirementMatch {
    pub fn from_hit(hit: &RequirementHit<'_>) -> Self {
        Self {
            name: hit.section.name().to_string(),
            document_type: hit.section.document_type().label().to_string(),
            occurrences: hit.occurrences,
            snippets: hit.snippets.clone(),
            fragments: hit
                .fragments
                .iter()
                .map(RequirementFragment::from_fragment)
                .collect(),
        }
    }
}

/// Output from the `find_implementation_requirements` tool.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FindRequirementsOutput {
    pub keyword: String,
    pub results: Vec<RequirementMatch>,
}

impl FindRequirementsOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Error output shared by the search tools.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchErrorOutput {
    pub error: String,
}

impl SearchErrorOutput {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}
