//! Document loading.

use std::fs;
use std::path::Path;

use crate::document::{Document, ReadOptions};
use crate::error::{DocumentError, Result};

/// Load a document file with default read options.
pub fn load_document(path: &Path) -> Result<Document> {
    load_document_with_options(path, &ReadOptions::default())
}

pub fn load_document_with_options(path: &Path, options: &ReadOptions) -> Result<Document> {
    let bytes = fs::read(path).map_err(|e| DocumentError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    let document =
        Document::read_with_options(&bytes, options).map_err(|e| DocumentError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::info!("Loaded document from {}", path.display());
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use tempfile::tempdir;

    #[test]
    fn decode_errors_carry_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("future.layers");
        fs::write(&path, br#"{"version": 40, "children": []}"#).unwrap();

        let Err(DocumentError::Decode { path: reported, source }) = load_document(&path) else {
            panic!("expected a decode error");
        };
        assert_eq!(reported, path);
        assert!(matches!(source, DecodeError::NewerVersion { found: 40, .. }));
    }

    #[test]
    fn garbage_is_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.layers");
        fs::write(&path, b"NOT_A_DOCUMENT").unwrap();

        assert!(matches!(
            load_document(&path),
            Err(DocumentError::Decode {
                source: DecodeError::InvalidJson { .. },
                ..
            })
        ));
    }
}
