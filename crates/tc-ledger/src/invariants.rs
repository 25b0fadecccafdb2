//! Ledger chain invariants.

use shared_types::{Block, GENESIS_PARENT_HASH};

/// Why a ledger failed verification.
#[derive(Debug, PartialEq, Eq)]
pub enum ChainViolation {
    /// Block 0 does not carry the empty-string parent sentinel.
    GenesisParentNotEmpty,
    /// A block's stored self-hash does not match its recomputed value.
    SelfHashMismatch {
        /// Index of the offending block.
        index: usize,
    },
    /// A block's stored previous-hash does not match its predecessor's
    /// self-hash.
    BrokenLink {
        /// Index of the offending block.
        index: usize,
    },
}

/// Every block's self-hash must be reproducible from its stored fields.
pub fn invariant_self_hashes(ledger: &[Block]) -> Result<(), ChainViolation> {
    for (index, block) in ledger.iter().enumerate() {
        if !block.verify() {
            return Err(ChainViolation::SelfHashMismatch { index });
        }
    }
    Ok(())
}

/// Every non-genesis block must link to the self-hash of the block before
/// it; block 0 must carry the genesis sentinel.
pub fn invariant_linkage(ledger: &[Block]) -> Result<(), ChainViolation> {
    for (index, block) in ledger.iter().enumerate() {
        if index == 0 {
            if block.previous_hash != GENESIS_PARENT_HASH {
                return Err(ChainViolation::GenesisParentNotEmpty);
            }
        } else if block.previous_hash != ledger[index - 1].block_hash {
            return Err(ChainViolation::BrokenLink { index });
        }
    }
    Ok(())
}

/// Checks all chain invariants over a ledger snapshot.
pub fn verify_chain(ledger: &[Block]) -> Result<(), ChainViolation> {
    invariant_self_hashes(ledger)?;
    invariant_linkage(ledger)?;
    Ok(())
}
