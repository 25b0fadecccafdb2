//! # Transaction Deriver
//!
//! Turns one numeric input file into a content-addressed [`Transaction`].
//!
//! ## Normalization
//!
//! The file's integers are sorted ascending before hashing, so the digest
//! detects multiset equality rather than file-order equality: two files with
//! the same numbers in a different order derive the same hash. Duplicates
//! are preserved, not collapsed.
//!
//! ## Digest
//!
//! SHA-256 over the decimal-string concatenation of the sorted sequence,
//! hex-encoded. A file containing `5`, `3`, `5` hashes the byte string
//! `"355"`.
//!
//! Reading is synchronous and buffered; one input file is at most a few
//! hundred kilobytes of decimal lines.

pub mod error;

pub use error::{DeriveError, Result};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sha2::{Digest, Sha256};
use shared_types::Transaction;

/// Derives a transaction from the file at `path`.
///
/// # Errors
///
/// - [`DeriveError::Io`] if the file cannot be opened or read
/// - [`DeriveError::Parse`] if any line is not a valid integer
pub fn derive_transaction(path: impl AsRef<Path>) -> Result<Transaction> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let file = File::open(path).map_err(|source| DeriveError::Io {
        path: display.clone(),
        source,
    })?;

    let mut numbers = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| DeriveError::Io {
            path: display.clone(),
            source,
        })?;
        let content = line.trim();
        let value: i64 = content.parse().map_err(|_| DeriveError::Parse {
            path: display.clone(),
            line: index + 1,
            content: content.to_string(),
        })?;
        numbers.push(value);
    }

    numbers.sort_unstable();

    let mut hasher = Sha256::new();
    for number in &numbers {
        hasher.update(number.to_string().as_bytes());
    }

    Ok(Transaction::new(hex::encode(hasher.finalize()), display))
}
