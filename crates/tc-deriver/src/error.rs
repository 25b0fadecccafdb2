//! Error types for transaction derivation

use thiserror::Error;

/// Result type alias for derivation operations
pub type Result<T> = std::result::Result<T, DeriveError>;

/// Errors that can occur while deriving a transaction from an input file.
///
/// Either variant aborts processing of that one file only; the caller moves
/// on to the next file in its share.
#[derive(Debug, Error)]
pub enum DeriveError {
    /// The file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the offending file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line of the file is not a valid integer.
    #[error("{path}:{line}: not an integer: {content:?}")]
    Parse {
        /// Path of the offending file.
        path: String,
        /// 1-based line number.
        line: usize,
        /// The rejected line content.
        content: String,
    },
}
