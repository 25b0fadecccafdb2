//! # Core Domain Entities
//!
//! Defines the two values that flow through the pipeline:
//!
//! - **Transaction**: a content-addressed record derived from one input file.
//! - **Block**: an immutable, hash-chained batch of transactions.
//!
//! Both cross the wire via the gossip codec, so both derive `serde` traits.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Sentinel parent hash carried by the genesis block.
pub const GENESIS_PARENT_HASH: &str = "";

/// A content-addressed record derived from one input file.
///
/// The hash is a hex-encoded SHA-256 digest over the file's sorted numeric
/// payload. Uniqueness is not enforced: two files with identical payloads
/// produce two independent transactions with equal hashes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Hex-encoded content digest.
    pub hash: String,
    /// Originating file path.
    pub file_name: String,
}

impl Transaction {
    /// Creates a transaction from a precomputed digest and its source file.
    pub fn new(hash: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            file_name: file_name.into(),
        }
    }
}

/// An immutable batch of transactions chained to its predecessor.
///
/// The self-hash is a pure function of the ordered transaction digests and
/// the predecessor's hash: recomputing it from the stored fields must always
/// reproduce the stored value. Construct blocks only through [`Block::seal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Hex-encoded SHA-256 over the ordered transaction hashes followed by
    /// `previous_hash`.
    pub block_hash: String,
    /// The transactions sealed into this block, in buffer order.
    pub transactions: Vec<Transaction>,
    /// Self-hash of the preceding block, or [`GENESIS_PARENT_HASH`].
    pub previous_hash: String,
}

impl Block {
    /// Seals a batch of transactions on top of `previous_hash`.
    pub fn seal(transactions: Vec<Transaction>, previous_hash: String) -> Self {
        let block_hash = Self::compute_hash(&transactions, &previous_hash);
        Self {
            block_hash,
            transactions,
            previous_hash,
        }
    }

    /// Computes the self-hash for an ordered batch and its predecessor hash.
    pub fn compute_hash(transactions: &[Transaction], previous_hash: &str) -> String {
        let mut hasher = Sha256::new();
        for tx in transactions {
            hasher.update(tx.hash.as_bytes());
        }
        hasher.update(previous_hash.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Recomputes the self-hash from the stored fields and compares it
    /// against the stored value.
    pub fn verify(&self) -> bool {
        Self::compute_hash(&self.transactions, &self.previous_hash) == self.block_hash
    }

    /// Returns true if this block carries the genesis parent sentinel.
    pub fn is_genesis(&self) -> bool {
        self.previous_hash == GENESIS_PARENT_HASH
    }
}
