//! Error types for the cachette library
//!
//! This module provides a unified error handling system using `thiserror` for
//! all adapter operations. Every substrate failure is translated 1:1 into one
//! of the variants below and surfaced synchronously to the caller; the
//! adapter performs no retries and no local recovery.

use thiserror::Error;

/// Errors raised by the cache-backed file adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// An operation requiring existence found the key absent
    #[error("The file '{key}' was not found.")]
    FileNotFound {
        /// The missing key
        key: String,
    },

    /// An operation requiring absence found the key present
    #[error("The file '{key}' already exists and would be overwritten.")]
    UnexpectedFile {
        /// The key that unexpectedly exists
        key: String,
    },

    /// The substrate reported a miss for a key the adapter tried to read
    #[error("Could not read the '{key}' file.")]
    StorageRead {
        /// The key that could not be read
        key: String,
    },

    /// The substrate's store primitive reported failure
    #[error("Could not write the '{key}' file.")]
    StorageWrite {
        /// The key that could not be written
        key: String,
    },

    /// The substrate's delete primitive reported failure
    #[error("Could not delete the '{key}' file.")]
    StorageDelete {
        /// The key that could not be deleted
        key: String,
    },

    /// The substrate could not start a key iteration
    #[error("Could not get the keys from the cache.")]
    StorageIteration,

    /// The substrate's metadata iteration had no usable record for the key
    #[error("Could not get the mtime of the '{key}' file.")]
    StorageMetadata {
        /// The key with missing or incomplete metadata
        key: String,
    },
}

impl AdapterError {
    /// The key the error refers to, if the variant carries one
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::FileNotFound { key }
            | Self::UnexpectedFile { key }
            | Self::StorageRead { key }
            | Self::StorageWrite { key }
            | Self::StorageDelete { key }
            | Self::StorageMetadata { key } => Some(key),
            Self::StorageIteration => None,
        }
    }
}

/// Convenience type alias for adapter Results
pub type AdapterResult<T> = std::result::Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AdapterError::StorageRead {
            key: "foo".to_string(),
        };
        assert_eq!(error.to_string(), "Could not read the 'foo' file.");

        let error = AdapterError::FileNotFound {
            key: "bar".to_string(),
        };
        assert!(error.to_string().contains("bar"));
    }

    #[test]
    fn test_error_key() {
        let error = AdapterError::UnexpectedFile {
            key: "foo".to_string(),
        };
        assert_eq!(error.key(), Some("foo"));
        assert_eq!(AdapterError::StorageIteration.key(), None);
    }
}
