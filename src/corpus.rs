//! The document corpus: which documents exist and where their text comes from.
//!
//! The corpus is embedded at compile time. Each document can be replaced at
//! startup from a file path, after which the index is built once and never
//! touched again.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Embedded MCP documentation.
pub const MCP_DOCUMENTATION: &str = include_str!("../docs/mcp-documentation.md");

/// Embedded Python SDK README.
pub const PYTHON_SDK_README: &str = include_str!("../docs/python-sdk-readme.md");

/// Curated overview served by the `core_concepts` tool. Static by design,
/// not assembled from search results.
pub const CORE_CONCEPTS_OVERVIEW: &str = include_str!("../docs/core-concepts.md");

/// Classification tag for the source a section came from.
///
/// A closed enumeration: adding a corpus document means adding a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "MCP Documentation")]
    McpDocumentation,
    #[serde(rename = "Python SDK")]
    PythonSdk,
}

impl DocumentType {
    /// Human-readable label, also used as the disambiguation suffix when two
    /// sections share a name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::McpDocumentation => "MCP Documentation",
            Self::PythonSdk => "Python SDK",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One raw source document, ready to be parsed into sections.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub document_type: DocumentType,
    pub text: Cow<'static, str>,
}

impl SourceDocument {
    fn embedded(document_type: DocumentType, text: &'static str) -> Self {
        Self {
            document_type,
            text: Cow::Borrowed(text),
        }
    }

    fn from_file(document_type: DocumentType, path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {} from {}", document_type, path.display()))?;
        Ok(Self {
            document_type,
            text: Cow::Owned(text),
        })
    }
}

/// The built-in corpus, in index insertion order.
pub fn builtin_corpus() -> Vec<SourceDocument> {
    vec![
        SourceDocument::embedded(DocumentType::McpDocumentation, MCP_DOCUMENTATION),
        SourceDocument::embedded(DocumentType::PythonSdk, PYTHON_SDK_README),
    ]
}

/// The corpus with optional per-document file overrides applied.
pub fn load_corpus(
    mcp_docs: Option<&Path>,
    sdk_readme: Option<&Path>,
) -> Result<Vec<SourceDocument>> {
    let mcp = match mcp_docs {
        Some(path) => SourceDocument::from_file(DocumentType::McpDocumentation, path)?,
        None => SourceDocument::embedded(DocumentType::McpDocumentation, MCP_DOCUMENTATION),
    };
    let sdk = match sdk_readme {
        Some(path) => SourceDocument::from_file(DocumentType::PythonSdk, path)?,
        None => SourceDocument::embedded(DocumentType::PythonSdk, PYTHON_SDK_README),
    };
    Ok(vec![mcp, sdk])
}
