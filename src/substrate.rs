//! Cache substrate trait and iteration types
//!
//! The substrate is the external, process-wide key-value store that
//! physically owns content, eviction, and iteration order. The adapter only
//! requires the four primitives below; everything else (TTLs, eviction
//! policy, storage layout) stays opaque behind this trait.

use bytes::Bytes;

/// How a substrate iteration should be scoped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationMode {
    /// Yield keys only, the fastest mode
    KeysOnly,
    /// Yield keys together with their modification timestamps
    WithMtime,
}

/// A per-key record yielded during substrate iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEntry {
    /// The entry's key
    pub key: String,
    /// Modification time in unix seconds; only populated under
    /// [`IterationMode::WithMtime`]
    pub mtime: Option<i64>,
}

impl KeyEntry {
    /// A key-only record, as yielded under [`IterationMode::KeysOnly`]
    pub fn key_only(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            mtime: None,
        }
    }

    /// A record carrying a modification timestamp
    pub fn with_mtime(key: impl Into<String>, mtime: i64) -> Self {
        Self {
            key: key.into(),
            mtime: Some(mtime),
        }
    }
}

/// Iteration handle returned by [`CacheSubstrate::iterate`]
///
/// `None` models an invalid handle: iteration is unsupported or could not be
/// started.
pub type KeyIterator = Option<Box<dyn Iterator<Item = KeyEntry> + Send>>;

/// The capability set the adapter requires from a cache substrate
///
/// Primitives report failure through their return values; they never panic on
/// a missing key. A fetch miss is `None`, never an in-band sentinel, so
/// legitimately empty content (`Some` of zero bytes) is always distinguishable
/// from "not found".
pub trait CacheSubstrate: Send + Sync {
    /// Returns true iff the key currently resolves to content
    fn contains(&self, key: &str) -> bool;

    /// Retrieve the stored bytes, or `None` on a cache miss
    fn fetch(&self, key: &str) -> Option<Bytes>;

    /// Store bytes under the key, returning true on success
    ///
    /// Overwrites existing content if the key is already present.
    fn store(&self, key: &str, content: &[u8]) -> bool;

    /// Remove the key, returning true on success
    fn remove(&self, key: &str) -> bool;

    /// Start an iteration over all currently-stored keys
    ///
    /// Enumeration order is unspecified and must not be relied upon. Returns
    /// `None` when iteration cannot be started.
    fn iterate(&self, mode: IterationMode) -> KeyIterator;
}
