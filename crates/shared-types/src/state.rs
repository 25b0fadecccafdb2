//! # Node Lifecycle States

/// Lifecycle states of one node's run, in transition order.
///
/// `StoppedEarlyByClosedLedger` is a valid early exit from ingestion, not a
/// failure: it means another submission sealed the terminal block while this
/// node still had files left to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Created, nothing running yet.
    Idle,
    /// Inbound gossip listener is up; waiting out the warm-up delay.
    Listening,
    /// Deriving and submitting transactions from the local file share.
    Ingesting,
    /// Ingestion ended before its file share was exhausted because the
    /// ledger sealed its terminal block.
    StoppedEarlyByClosedLedger,
    /// Run complete.
    Done,
}

impl NodeState {
    /// Returns true for either terminal-ingestion state.
    pub fn is_terminal(self) -> bool {
        matches!(self, NodeState::Done)
    }
}
