//! Error types for document decoding, encoding and persistence.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while decoding a document or a node.
///
/// Decoding never recovers from any of these: a single malformed node
/// fails the whole document.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is not valid JSON.
    #[error("document is not valid JSON")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    /// A required field is missing or has the wrong shape.
    #[error("field '{field}' of {node}: expected {expected}")]
    MalformedField {
        node: &'static str,
        field: String,
        expected: String,
    },

    /// A node's `__typeName` is not in the registry.
    #[error("unknown node type '{type_name}'")]
    UnknownNodeType { type_name: String },

    /// An action's `__typeName` is not a known action.
    #[error("unknown action type '{type_name}'")]
    UnknownActionType { type_name: String },

    /// Document version is older than the oldest supported version.
    #[error("document version {found} is no longer supported (minimum: {min_supported})")]
    UnsupportedVersion { found: u32, min_supported: u32 },

    /// Document version is newer than this library understands.
    #[error("document version {found} is newer than supported (maximum: {max_supported})")]
    NewerVersion { found: u32, max_supported: u32 },

    /// Two nodes in the document share an id.
    #[error("node id {id} appears more than once")]
    DuplicateNodeId { id: Uuid },
}

impl DecodeError {
    pub(crate) fn malformed(
        node: &'static str,
        field: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::MalformedField {
            node,
            field: field.into(),
            expected: expected.into(),
        }
    }
}

/// Errors that can occur while encoding a document.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to encode field '{field}' of {node}")]
    Field {
        node: &'static str,
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize document")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from loading or saving document files.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents could not be decoded.
    #[error("Failed to decode document: {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    /// Document could not be encoded.
    #[error("Failed to encode document")]
    Encode {
        #[source]
        source: EncodeError,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocumentError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::Decode { path, source } => match source {
                DecodeError::NewerVersion {
                    found,
                    max_supported,
                } => format!(
                    "The document at {} was created with a newer version of the design tool \
                    (document version {}, this version supports up to {}).",
                    path.display(),
                    found,
                    max_supported
                ),
                DecodeError::UnsupportedVersion { found, .. } => format!(
                    "The document at {} uses version {}, which is no longer supported.",
                    path.display(),
                    found
                ),
                _ => format!(
                    "The file at {} is not a valid document. It may be corrupted.",
                    path.display()
                ),
            },
            Self::Encode { .. } => "An error occurred while saving the document.".to_string(),
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::Decode { source, .. } => match source {
                DecodeError::NewerVersion { .. } => {
                    Some("Update the application to open this document.".into())
                }
                DecodeError::UnsupportedVersion { .. } => {
                    Some("Open and re-save the document with the design tool to upgrade it.".into())
                }
                _ => Some("Try opening a backup if you have one.".into()),
            },
            Self::Encode { .. } => None,
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try saving to a different location.".into())
            }
        }
    }
}

/// Result type alias for file-level document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_mentions_version_mismatch() {
        let error = DocumentError::Decode {
            path: PathBuf::from("home.layers"),
            source: DecodeError::NewerVersion {
                found: 99,
                max_supported: 17,
            },
        };
        assert!(error.user_message().contains("version 99"));
        assert_eq!(
            error.suggestion().as_deref(),
            Some("Update the application to open this document.")
        );
    }

    #[test]
    fn malformed_field_display() {
        let error = DecodeError::malformed("LineLimitModifier", "max", "Option<Variable<f64>>");
        assert_eq!(
            error.to_string(),
            "field 'max' of LineLimitModifier: expected Option<Variable<f64>>"
        );
    }
}
