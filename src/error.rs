//! Error kinds for the section index and search engine.

use thiserror::Error;

use crate::corpus::DocumentType;

/// Errors surfaced by index construction and search operations.
///
/// Zero matches is never an error; these cover malformed parameters,
/// exact-lookup misses, and fatal index-build collisions.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A caller-supplied parameter failed validation.
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    /// Exact-name lookup found no section.
    #[error("no section named '{name}'")]
    SectionNotFound { name: String },

    /// Two sections collided even after disambiguation. Fatal to the build;
    /// the server never serves a partially built index.
    #[error("duplicate section '{name}' from {document_type} after disambiguation")]
    DuplicateSection {
        name: String,
        document_type: DocumentType,
    },
}

impl EngineError {
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }
}
