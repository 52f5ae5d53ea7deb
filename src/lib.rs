//! # Cachette
//!
//! A filesystem-style storage adapter over volatile, process-local key-value
//! caches. Callers get a miniature filesystem (read, write, delete, rename,
//! key listing, mtimes, checksums) while storage and eviction mechanics stay
//! with the underlying cache substrate.
//!
//! ## Features
//!
//! - **Adapter**: the eight filesystem-style operations with filesystem-like
//!   error reporting, composed from four substrate primitives
//! - **Substrate trait**: a narrow capability set any in-process cache can
//!   implement, with an explicit tagged miss (no falsy sentinels)
//! - **Memory substrate**: a ready-to-use in-memory implementation, also the
//!   natural test double
//! - **Loss-free rename**: the source entry is never deleted until the
//!   destination write has been confirmed
//!
//! ## Example
//!
//! ```rust
//! use cachette::{CacheAdapter, MemorySubstrate};
//!
//! let adapter = CacheAdapter::new(MemorySubstrate::new());
//!
//! adapter.write("greeting.txt", b"Some content")?;
//! assert_eq!(adapter.read("greeting.txt")?, "Some content");
//! assert_eq!(adapter.checksum("greeting.txt")?, "b53227da4280f0e18270f21dd77c91d0");
//!
//! adapter.rename("greeting.txt", "hello.txt")?;
//! assert_eq!(adapter.keys()?, vec!["hello.txt".to_string()]);
//! # Ok::<(), cachette::AdapterError>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export core types
pub use adapter::CacheAdapter;
pub use error::{AdapterError, AdapterResult};
pub use memory_substrate::MemorySubstrate;
pub use substrate::{CacheSubstrate, IterationMode, KeyEntry, KeyIterator};

// Core modules
pub mod adapter;
pub mod error;
pub mod memory_substrate;
pub mod substrate;

// Re-export commonly used types
pub mod prelude {
    //! Common types and traits for convenient importing

    pub use crate::adapter::CacheAdapter;
    pub use crate::error::{AdapterError, AdapterResult};
    pub use crate::memory_substrate::MemorySubstrate;
    pub use crate::substrate::{CacheSubstrate, IterationMode, KeyEntry};
}

// Version information
/// The version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
