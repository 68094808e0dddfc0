//! File I/O for documents.
//!
//! This module handles:
//! - Saving documents with atomic writes
//! - Loading documents with decode errors tied to the file path
//! - Content hashing for change detection and cache keys

mod hash;
mod load;
mod save;

pub use hash::{compute_file_hash, content_hash, verify_file_hash};
pub use load::{load_document, load_document_with_options};
pub use save::{save_document, save_document_with_options};
