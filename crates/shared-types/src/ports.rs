//! # Port Traits
//!
//! The seam between the gossip channel and the block assembler. Both local
//! ingestion and inbound network connections converge on a
//! [`TransactionSink`]; the assembler is its only production implementation.

use crate::entities::Transaction;

/// Outcome of offering a transaction to the assembler.
///
/// A rejection is a signal, not an error: once the ledger has produced its
/// terminal block, every further submission is dropped on the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The transaction entered the pending buffer (and possibly sealed a
    /// block).
    Accepted,
    /// The ledger is closed to further block production; the transaction
    /// was discarded.
    RejectedLedgerClosed,
}

impl SubmitOutcome {
    /// Returns true if the transaction was taken into the pending buffer.
    pub fn is_accepted(self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Consumer of derived transactions.
///
/// Implementations must be safe to share across tasks; `submit` is called
/// concurrently from local ingestion and from inbound connection handlers.
pub trait TransactionSink: Send + Sync {
    /// Offers one transaction. Consumes it either way: accepted into the
    /// pending buffer or explicitly discarded.
    fn submit(&self, transaction: Transaction) -> SubmitOutcome;
}
