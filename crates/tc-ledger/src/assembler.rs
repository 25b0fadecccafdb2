//! # Block Assembler
//!
//! The sole owner and mutator of the ledger and the pending buffer.
//!
//! ## Thread Safety
//!
//! The assembler is shared across tasks via `Arc`. Ledger and buffer state
//! live behind a single `parking_lot::Mutex`, held only for the duration of
//! one `submit` (or snapshot) call.
//!
//! ## Single-Block Lifetime
//!
//! Once the first block seals, the ledger is marked closed and every later
//! submission is rejected with [`SubmitOutcome::RejectedLedgerClosed`] while
//! ingestion keeps running. The closed flag is never reset; see DESIGN.md
//! for the decision record.

use parking_lot::Mutex;
use tracing::info;

use shared_types::{Block, SubmitOutcome, Transaction, TransactionSink, GENESIS_PARENT_HASH};

use crate::config::LedgerConfig;

/// Point-in-time view of the assembler, taken under its lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerStatus {
    /// Number of sealed blocks.
    pub blocks: usize,
    /// Number of transactions waiting in the pending buffer.
    pub pending: usize,
    /// Whether the ledger is closed to further block production.
    pub closed: bool,
}

/// Mutable state guarded by the assembler's lock.
#[derive(Debug, Default)]
struct AssemblerState {
    ledger: Vec<Block>,
    pending: Vec<Transaction>,
    closed: bool,
}

/// Accumulates transactions and seals them into hash-chained blocks.
#[derive(Debug)]
pub struct BlockAssembler {
    config: LedgerConfig,
    state: Mutex<AssemblerState>,
}

impl BlockAssembler {
    /// Creates an empty assembler.
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            state: Mutex::new(AssemblerState::default()),
        }
    }

    /// Creates an assembler with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(LedgerConfig::default())
    }

    /// Offers a transaction to the pending buffer.
    ///
    /// Rejected (not an error) once the ledger has sealed its terminal
    /// block. Otherwise the transaction is appended; when the buffer reaches
    /// the quota, a block is sealed over the buffered transactions in order,
    /// chained to the previous block's hash (empty-string sentinel on an
    /// empty ledger), the buffer is cleared, and the ledger closes.
    pub fn submit(&self, transaction: Transaction) -> SubmitOutcome {
        let mut state = self.state.lock();

        if state.closed {
            return SubmitOutcome::RejectedLedgerClosed;
        }

        state.pending.push(transaction);

        if state.pending.len() == self.config.quota {
            let previous_hash = state
                .ledger
                .last()
                .map(|block| block.block_hash.clone())
                .unwrap_or_else(|| GENESIS_PARENT_HASH.to_string());

            let transactions = std::mem::take(&mut state.pending);
            let block = Block::seal(transactions, previous_hash);

            info!(
                block_hash = %block.block_hash,
                transactions = block.transactions.len(),
                height = state.ledger.len(),
                "sealed new block"
            );

            state.ledger.push(block);
            state.closed = true;
        }

        SubmitOutcome::Accepted
    }

    /// Returns true once the terminal block has been sealed.
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Copies the ledger out under the lock, for reporting and tests.
    pub fn ledger(&self) -> Vec<Block> {
        self.state.lock().ledger.clone()
    }

    /// Number of transactions currently in the pending buffer.
    pub fn pending_len(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// Snapshot of counts and the closed flag.
    pub fn status(&self) -> AssemblerStatus {
        let state = self.state.lock();
        AssemblerStatus {
            blocks: state.ledger.len(),
            pending: state.pending.len(),
            closed: state.closed,
        }
    }
}

impl TransactionSink for BlockAssembler {
    fn submit(&self, transaction: Transaction) -> SubmitOutcome {
        BlockAssembler::submit(self, transaction)
    }
}
