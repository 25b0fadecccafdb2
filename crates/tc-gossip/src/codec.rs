//! # Wire Codec
//!
//! Fixed binary encoding of a [`Transaction`]: bincode, one record per
//! connection. The encoding self-delimits; there is no extra framing.
//!
//! A size guard bounds what the listener will buffer from one connection.
//! A well-formed record is two short strings, so the limit is generous.

use shared_types::Transaction;

use crate::error::{GossipError, Result};

/// Upper bound on one wire message, enforced on both encode and decode.
pub const MAX_WIRE_BYTES: usize = 64 * 1024;

/// Encodes one transaction for the wire.
pub fn encode_transaction(transaction: &Transaction) -> Result<Vec<u8>> {
    let bytes = bincode::serialize(transaction).map_err(GossipError::Encode)?;
    if bytes.len() > MAX_WIRE_BYTES {
        return Err(GossipError::Oversized {
            size: bytes.len(),
            limit: MAX_WIRE_BYTES,
        });
    }
    Ok(bytes)
}

/// Decodes one transaction from a complete wire payload.
pub fn decode_transaction(bytes: &[u8]) -> Result<Transaction> {
    if bytes.len() > MAX_WIRE_BYTES {
        return Err(GossipError::Oversized {
            size: bytes.len(),
            limit: MAX_WIRE_BYTES,
        });
    }
    bincode::deserialize(bytes).map_err(GossipError::Decode)
}
