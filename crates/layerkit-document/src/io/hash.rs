//! SHA-256 content hashing.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{DocumentError, Result};

/// Hex-encoded SHA-256 of `bytes`.
pub fn content_hash(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Compute SHA-256 hash of a file.
///
/// Uses buffered reading for efficient processing of large files.
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| DocumentError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer).map_err(|e| DocumentError::Io {
            operation: "read",
            path: path.to_path_buf(),
            source: e,
        })?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Whether a file's hash matches `expected_hash`.
pub fn verify_file_hash(path: &Path, expected_hash: &str) -> Result<bool> {
    Ok(compute_file_hash(path)? == expected_hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HELLO_WORLD: &str = "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f";

    #[test]
    fn file_and_content_hash_agree() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"Hello, World!").unwrap();
        temp_file.flush().unwrap();

        assert_eq!(compute_file_hash(temp_file.path()).unwrap(), HELLO_WORLD);
        assert_eq!(content_hash(b"Hello, World!"), HELLO_WORLD);
        assert!(verify_file_hash(temp_file.path(), HELLO_WORLD).unwrap());
        assert!(!verify_file_hash(temp_file.path(), "wrong_hash").unwrap());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = compute_file_hash(&dir.path().join("missing.layers"));
        assert!(matches!(
            result,
            Err(DocumentError::Io {
                operation: "read",
                ..
            })
        ));
    }
}
