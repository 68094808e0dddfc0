//! Document saving.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::document::{Document, WriteOptions};
use crate::error::{DocumentError, Result};

/// Save a document with default write options.
///
/// Uses atomic write (temp file + rename) so a crash never leaves a
/// half-written document behind.
pub fn save_document(document: &Document, path: &Path) -> Result<()> {
    save_document_with_options(document, path, &WriteOptions::default())
}

pub fn save_document_with_options(
    document: &Document,
    path: &Path,
    options: &WriteOptions,
) -> Result<()> {
    let bytes = document
        .write_with_options(options)
        .map_err(|e| DocumentError::Encode { source: e })?;

    let temp_path = path.with_extension("layers.tmp");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| DocumentError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| DocumentError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(&bytes).map_err(|e| DocumentError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| DocumentError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| DocumentError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!("Saved document to {}", path.display());
    Ok(())
}
