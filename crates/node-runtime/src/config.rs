//! # Node Configuration
//!
//! Unified configuration for the runtime, with per-field environment
//! overrides applied on top of the defaults. Unparsable override values are
//! logged and ignored rather than fatal; only structural problems (empty
//! registry, out-of-range node index, zero quota) abort startup.

use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

use tc_ledger::LedgerConfig;

/// Startup misconfiguration. The only fatal error class in the system.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No node index argument was given.
    #[error("missing node index argument (expected the node's 1-based index)")]
    MissingNodeIndex,

    /// The node index argument is not a number.
    #[error("node index {value:?} is not a number")]
    NodeIndexNotANumber {
        /// The rejected argument.
        value: String,
    },

    /// The node index does not fit the registry.
    #[error("node index {index} out of range for a cluster of {cluster}")]
    NodeIndexOutOfRange {
        /// The rejected 1-based index.
        index: usize,
        /// Registry size.
        cluster: usize,
    },

    /// The registry has no entries.
    #[error("node registry is empty")]
    EmptyRegistry,

    /// A quota of zero can never seal a block.
    #[error("block quota must be at least 1")]
    ZeroQuota,
}

/// Complete node configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    /// Cluster and transport configuration.
    pub network: NetworkConfig,
    /// Local file ingestion configuration.
    pub ingest: IngestConfig,
    /// Block assembly configuration.
    pub ledger: LedgerConfig,
}

impl NodeConfig {
    /// Applies `TC_*` environment overrides on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(registry) = std::env::var("TC_REGISTRY") {
            let entries: Vec<String> = registry
                .split(',')
                .map(|entry| entry.trim().to_string())
                .filter(|entry| !entry.is_empty())
                .collect();
            if entries.is_empty() {
                warn!("TC_REGISTRY is set but empty, keeping defaults");
            } else {
                self.network.registry = entries;
            }
        }
        override_u64("TC_CONNECT_TIMEOUT_SECS", &mut self.network.connect_timeout_secs);
        if let Ok(dir) = std::env::var("TC_DATA_DIR") {
            self.ingest.data_dir = PathBuf::from(dir);
        }
        override_u32("TC_MAX_FILE_INDEX", &mut self.ingest.max_file_index);
        override_u64("TC_TARGET_TXS", &mut self.ingest.target_transactions);
        override_u64("TC_WARMUP_SECS", &mut self.ingest.warmup_secs);
        override_u64("TC_REPORT_INTERVAL_SECS", &mut self.ingest.report_interval_secs);
        override_u64("TC_SHUTDOWN_LINGER_SECS", &mut self.ingest.shutdown_linger_secs);
        override_usize("TC_BLOCK_QUOTA", &mut self.ledger.quota);
    }

    /// Validates the configuration against the operator-supplied 1-based
    /// node index.
    pub fn validate(&self, node_index: usize) -> Result<(), ConfigError> {
        if self.network.registry.is_empty() {
            return Err(ConfigError::EmptyRegistry);
        }
        if node_index == 0 || node_index > self.network.registry.len() {
            return Err(ConfigError::NodeIndexOutOfRange {
                index: node_index,
                cluster: self.network.registry.len(),
            });
        }
        if self.ledger.quota == 0 {
            return Err(ConfigError::ZeroQuota);
        }
        Ok(())
    }
}

fn override_u64(name: &str, slot: &mut u64) {
    if let Ok(value) = std::env::var(name) {
        match value.parse() {
            Ok(parsed) => *slot = parsed,
            Err(_) => warn!(%name, %value, "ignoring unparsable override"),
        }
    }
}

fn override_u32(name: &str, slot: &mut u32) {
    if let Ok(value) = std::env::var(name) {
        match value.parse() {
            Ok(parsed) => *slot = parsed,
            Err(_) => warn!(%name, %value, "ignoring unparsable override"),
        }
    }
}

fn override_usize(name: &str, slot: &mut usize) {
    if let Ok(value) = std::env::var(name) {
        match value.parse() {
            Ok(parsed) => *slot = parsed,
            Err(_) => warn!(%name, %value, "ignoring unparsable override"),
        }
    }
}

/// Cluster and transport configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Peer addresses, one per node, in cluster order. The node's own
    /// entry doubles as its listen address.
    pub registry: Vec<String>,
    /// Deadline for each outbound connect and write, in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            registry: vec![
                "127.0.0.1:2010".to_string(),
                "127.0.0.1:2020".to_string(),
                "127.0.0.1:2030".to_string(),
                "127.0.0.1:2040".to_string(),
            ],
            connect_timeout_secs: 5,
        }
    }
}

/// Local file ingestion configuration.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Directory holding the numeric input files (`<index>.txt`).
    pub data_dir: PathBuf,
    /// Highest file index in the corpus; a node reads every
    /// cluster-size-th file starting at its own index.
    pub max_file_index: u32,
    /// Transactions this node derives before its run counts as finished.
    pub target_transactions: u64,
    /// Delay before ingestion starts, giving peer listeners time to bind.
    pub warmup_secs: u64,
    /// Interval between ledger reports.
    pub report_interval_secs: u64,
    /// How long the process lingers after completion so late inbound
    /// gossip can still land.
    pub shutdown_linger_secs: u64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./random_numbers_files"),
            max_file_index: 1000,
            target_transactions: 1000,
            warmup_secs: 30,
            report_interval_secs: 10,
            shutdown_linger_secs: 10,
        }
    }
}
