//! # Store Errors
//!
//! Failures inside a store backend. The API layer collapses all of these
//! to a generic 500 response; the detail stays server-side.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Disk I/O failure in a persistent backend
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The on-disk document could not be decoded
    #[error("Corrupt store file {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A collection lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// I/O error tagged with the file it occurred on
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Decode error tagged with the file it occurred on
    pub fn corrupt(path: &std::path::Path, source: serde_json::Error) -> Self {
        StoreError::Corrupt {
            path: path.display().to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_io_error_carries_path() {
        let err = StoreError::io(
            Path::new("/tmp/store.json"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/tmp/store.json"));
    }
}
