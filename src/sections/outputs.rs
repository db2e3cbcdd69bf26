//! Output types for the section browsing tools.
//!
//! These are serialized to JSON strings for the MCP protocol, and can be
//! deserialized in tests for type-safe validation.

use serde::{Deserialize, Serialize};

use crate::sections::Section;

/// Lightweight per-section metadata.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct SectionSummary {
    pub name: String,
    pub document_type: String,
    pub level: u8,
    pub word_count: usize,
}

impl SectionSummary {
    pub fn from_section(section: &Section) -> Self {
        Self {
            name: section.name().to_string(),
            document_type: section.document_type().label().to_string(),
            level: section.level(),
            word_count: section.word_count(),
        }
    }
}

/// Output from the `list_sections` tool, in index insertion order.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ListSectionsOutput {
    pub sections: Vec<SectionSummary>,
    pub total: usize,
}

impl ListSectionsOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Full section record.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SectionDetails {
    pub name: String,
    pub document_type: String,
    pub level: u8,
    pub word_count: usize,
    pub content: String,
}

/// Output from the `get_section` tool.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GetSectionOutput {
    Success(SectionDetails),
    Error { error: String },
}

impl GetSectionOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}

/// Output from the `core_concepts` tool.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CoreConceptsOutput {
    pub overview: String,
}

impl CoreConceptsOutput {
    /// Convert to JSON string for MCP response
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}
