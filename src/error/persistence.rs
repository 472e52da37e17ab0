//! Persistence error module.
//!
//! This module defines the errors raised by the binary trie codec and the
//! text dictionary import/export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving a dictionary.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The file to load does not exist. Callers usually fall back to another
    /// source or an empty dictionary.
    #[error("Dictionary file not found: {0}")]
    FileAbsent(PathBuf),

    /// The binary stream is truncated or inconsistent.
    #[error("Malformed trie data at byte {offset}: {reason}")]
    Decode {
        /// Byte offset at which decoding stopped
        offset: u64,
        /// What was wrong with the stream
        reason: String,
    },

    /// Writing a dictionary failed; the in-memory dictionary is untouched.
    #[error("Failed to write {path}: {source}")]
    Encode {
        /// Target file
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Reading a dictionary file failed for a reason other than absence.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Source file
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// Returns `true` for [`PersistenceError::FileAbsent`].
    pub fn is_file_absent(&self) -> bool {
        matches!(self, Self::FileAbsent(_))
    }
}

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;
