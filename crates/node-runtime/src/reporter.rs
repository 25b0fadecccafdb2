//! # Periodic Ledger Reporter
//!
//! Renders the ledger for the operator on a fixed interval. Takes a
//! snapshot under the assembler's lock and logs it; read-only, no effect
//! on pipeline state.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::info;

use tc_ledger::BlockAssembler;

/// Logs the ledger every `interval` until the owning task is dropped.
pub async fn run_reporter(assembler: Arc<BlockAssembler>, interval: Duration) {
    loop {
        sleep(interval).await;

        let status = assembler.status();
        info!(
            blocks = status.blocks,
            pending = status.pending,
            closed = status.closed,
            "--- ledger ---"
        );
        for (index, block) in assembler.ledger().iter().enumerate() {
            info!(
                index,
                hash = %block.block_hash,
                transactions = block.transactions.len(),
                "block"
            );
        }
    }
}
