//! Cache-backed file adapter
//!
//! This module provides the adapter that turns a [`CacheSubstrate`] into a
//! miniature filesystem:
//! - Filesystem-style operations (read, write, delete, rename, keys, mtime,
//!   checksum) composed from the substrate's four primitives
//! - Filesystem-like error reporting via [`AdapterError`]
//! - Rename ordering that never loses the source on a failed destination
//!   write
//!
//! The adapter is a pure translation layer: it holds no state beyond the
//! substrate, performs no retries, and introduces no concurrency of its own.

use crate::error::{AdapterError, AdapterResult};
use crate::substrate::{CacheSubstrate, IterationMode};
use bytes::Bytes;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Filesystem-style adapter over a cache substrate
///
/// Every operation is a synchronous sequence of substrate primitive calls.
/// Entry lifecycle (creation, mutation, eviction) is owned entirely by the
/// substrate; the adapter only translates results and failures.
#[derive(Debug, Clone)]
pub struct CacheAdapter<S: CacheSubstrate> {
    substrate: S,
}

impl<S: CacheSubstrate> CacheAdapter<S> {
    /// Create an adapter over the given substrate
    pub fn new(substrate: S) -> Self {
        Self { substrate }
    }

    /// Borrow the underlying substrate
    pub fn substrate(&self) -> &S {
        &self.substrate
    }

    /// Check whether the key currently resolves to content
    ///
    /// Delegates to the substrate's existence primitive; never fails.
    pub fn exists(&self, key: &str) -> bool {
        self.substrate.contains(key)
    }

    /// Read the content stored under the key
    ///
    /// Success derives solely from the fetch result: a miss fails with
    /// [`AdapterError::StorageRead`], anything else (including empty content)
    /// is returned as-is. A miss here covers both "never existed" and
    /// "evicted between calls"; the two are indistinguishable by design.
    pub fn read(&self, key: &str) -> AdapterResult<Bytes> {
        match self.substrate.fetch(key) {
            Some(content) => Ok(content),
            None => {
                debug!(key, "cache miss on read");
                Err(AdapterError::StorageRead {
                    key: key.to_string(),
                })
            }
        }
    }

    /// Write content under the key, returning the number of bytes written
    ///
    /// The byte count is the length of the input, not a value reported by
    /// the substrate. Fails with [`AdapterError::StorageWrite`] when the
    /// store primitive reports failure.
    pub fn write(&self, key: &str, content: &[u8]) -> AdapterResult<usize> {
        if !self.substrate.store(key, content) {
            warn!(key, "substrate rejected store");
            return Err(AdapterError::StorageWrite {
                key: key.to_string(),
            });
        }
        Ok(content.len())
    }

    /// Delete the entry stored under the key
    ///
    /// Fails with [`AdapterError::FileNotFound`] when the key is absent; in
    /// that case the substrate's delete primitive is never invoked. A delete
    /// primitive failure on an existing key fails with
    /// [`AdapterError::StorageDelete`].
    pub fn delete(&self, key: &str) -> AdapterResult<()> {
        self.assert_exists(key)?;

        if !self.substrate.remove(key) {
            warn!(key, "substrate rejected delete");
            return Err(AdapterError::StorageDelete {
                key: key.to_string(),
            });
        }
        Ok(())
    }

    /// Move the content at `source` to `target`
    ///
    /// The source must exist and the target must not; rename never
    /// overwrites. Composed from the adapter's own operations: read the
    /// source, write the target, and only after the write succeeds, delete
    /// the source. Any write error propagates with the source left intact,
    /// so a failed rename loses no data and is safe to retry.
    pub fn rename(&self, source: &str, target: &str) -> AdapterResult<()> {
        self.assert_exists(source)?;

        if self.exists(target) {
            return Err(AdapterError::UnexpectedFile {
                key: target.to_string(),
            });
        }

        let content = self.read(source)?;
        self.write(target, &content)?;
        self.delete(source)
    }

    /// List all currently-stored keys in ascending lexical order
    ///
    /// The substrate's enumeration order is unspecified, so the collected
    /// keys are sorted and deduplicated before being returned. Fails with
    /// [`AdapterError::StorageIteration`] when the substrate cannot start an
    /// iteration.
    pub fn keys(&self) -> AdapterResult<Vec<String>> {
        let iterator = self
            .substrate
            .iterate(IterationMode::KeysOnly)
            .ok_or(AdapterError::StorageIteration)?;

        let keys: BTreeSet<String> = iterator.map(|entry| entry.key).collect();
        Ok(keys.into_iter().collect())
    }

    /// Modification time of the key's entry, in unix seconds
    ///
    /// Checks existence first and fails with [`AdapterError::FileNotFound`]
    /// for an absent key. Otherwise scans a metadata-inclusive iteration for
    /// the matching record; a missing record, or one without an mtime, fails
    /// with [`AdapterError::StorageMetadata`] (the key can disappear between
    /// the existence check and the scan; that inconsistency is a domain
    /// error, not a panic). The scan is O(n) in the number of stored keys.
    pub fn mtime(&self, key: &str) -> AdapterResult<i64> {
        self.assert_exists(key)?;

        let mut iterator = self
            .substrate
            .iterate(IterationMode::WithMtime)
            .ok_or(AdapterError::StorageIteration)?;

        iterator
            .find(|entry| entry.key == key)
            .and_then(|entry| entry.mtime)
            .ok_or_else(|| {
                debug!(key, "no metadata record for existing key");
                AdapterError::StorageMetadata {
                    key: key.to_string(),
                }
            })
    }

    /// Lowercase hex MD5 digest of the content stored under the key
    pub fn checksum(&self, key: &str) -> AdapterResult<String> {
        let content = self.read(key)?;
        Ok(hex::encode(md5::compute(&content).0))
    }

    /// Whether the key names a directory
    ///
    /// The cache namespace is flat, so this is always false.
    pub fn is_directory(&self, _key: &str) -> bool {
        false
    }

    fn assert_exists(&self, key: &str) -> AdapterResult<()> {
        if !self.exists(key) {
            return Err(AdapterError::FileNotFound {
                key: key.to_string(),
            });
        }
        Ok(())
    }
}
