//! Host-owned cache of decoded documents.
//!
//! Keyed by the SHA-256 of the document bytes, so the same content read
//! from different paths (or re-read after an unchanged save) decodes once.
//! Decoding itself stays stateless; the cache is an explicit value the host
//! creates and shares.
//!
//! An unbounded cache keeps entries until the host calls
//! [`DocumentCache::remove`] or [`DocumentCache::clear`]. A bounded cache
//! ([`DocumentCache::with_capacity`]) also drops its oldest entry when full.

use std::collections::{HashMap, VecDeque};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::document::Document;
use crate::error::{DecodeError, DocumentError, Result};
use crate::io::content_hash;

#[derive(Debug, Default)]
struct Entries {
    /// Decoded documents by content hash.
    documents: HashMap<String, Arc<Document>>,
    /// Hashes in insertion order, oldest first.
    order: VecDeque<String>,
}

impl Entries {
    fn remove(&mut self, hash: &str) -> Option<Arc<Document>> {
        let document = self.documents.remove(hash)?;
        self.order.retain(|cached| cached != hash);
        Some(document)
    }
}

#[derive(Debug, Default)]
pub struct DocumentCache {
    entries: Mutex<Entries>,
    /// Maximum number of entries; `None` is unbounded.
    capacity: Option<usize>,
}

impl DocumentCache {
    /// An unbounded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache holding at most `capacity` documents.
    ///
    /// Inserting into a full cache evicts the oldest entry. A capacity of 0
    /// caches nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::default(),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    fn entries(&self) -> MutexGuard<'_, Entries> {
        // Entries are inserted whole, so a poisoned map is still consistent.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Decode `bytes`, or return the document already decoded from the
    /// same content.
    ///
    /// Failed decodes are not cached.
    pub fn get_or_read(&self, bytes: &[u8]) -> std::result::Result<Arc<Document>, DecodeError> {
        let hash = content_hash(bytes);
        if let Some(document) = self.get(&hash) {
            tracing::debug!(hash = %hash, "document cache hit");
            return Ok(document);
        }

        tracing::debug!(hash = %hash, "document cache miss");
        let document = Arc::new(Document::read(bytes)?);
        Ok(self.insert(hash, document))
    }

    /// Store `document` under `hash` unless another decode got there first,
    /// and return whichever is cached.
    fn insert(&self, hash: String, document: Arc<Document>) -> Arc<Document> {
        let mut entries = self.entries();
        if let Some(cached) = entries.documents.get(&hash) {
            return Arc::clone(cached);
        }
        if self.capacity == Some(0) {
            return document;
        }
        if let Some(capacity) = self.capacity {
            while entries.documents.len() >= capacity {
                let Some(oldest) = entries.order.pop_front() else {
                    break;
                };
                entries.documents.remove(&oldest);
                tracing::debug!(hash = %oldest, "document cache eviction");
            }
        }
        entries.order.push_back(hash.clone());
        entries.documents.insert(hash, Arc::clone(&document));
        document
    }

    /// Read the file at `path` and decode it through the cache.
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<Document>> {
        let bytes = fs::read(path).map_err(|e| DocumentError::Io {
            operation: "read",
            path: path.to_path_buf(),
            source: e,
        })?;
        self.get_or_read(&bytes)
            .map_err(|e| DocumentError::Decode {
                path: path.to_path_buf(),
                source: e,
            })
    }

    /// Cached document for a content hash.
    pub fn get(&self, hash: &str) -> Option<Arc<Document>> {
        self.entries().documents.get(hash).cloned()
    }

    /// Drop the entry for a content hash, returning it if present.
    pub fn remove(&self, hash: &str) -> Option<Arc<Document>> {
        self.entries().remove(hash)
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.entries().documents.contains_key(hash)
    }

    pub fn len(&self) -> usize {
        self.entries().documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().documents.is_empty()
    }

    pub fn clear(&self) {
        let mut entries = self.entries();
        entries.documents.clear();
        entries.order.clear();
    }
}
