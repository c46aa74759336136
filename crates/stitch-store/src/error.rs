//! # Store Error Types
//!
//! Error types for document store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError / CoreError (stitch-core)                             │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Domain vs. storage categorization          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (apps/api) ← Mapped to an HTTP status                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use stitch_core::CoreError;
use thiserror::Error;

/// Document store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request was rejected by domain rules. Nothing was written.
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// Reading or writing the data file failed.
    ///
    /// ## When This Occurs
    /// - Disk full
    /// - Permissions changed under a running server
    /// - Rename of the temp file failed
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The document could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The data file location could not be prepared at startup.
    #[error("Cannot open data file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// True when the caller sent something invalid, as opposed to a
    /// storage failure on our side.
    pub fn is_client_error(&self) -> bool {
        matches!(self, StoreError::Domain(_))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
