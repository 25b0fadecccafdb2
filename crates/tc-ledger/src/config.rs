//! Configuration for block assembly

/// Runtime configuration for the block assembler.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Number of pending transactions required to seal a block.
    pub quota: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self { quota: 3 }
    }
}
