//! # Tally-Chain Node Runtime
//!
//! Orchestrates one node of the cluster.
//!
//! ## Pipeline
//!
//! ```text
//! file ──→ [Deriver] ──transaction──→ [BlockAssembler]
//!                         │
//!                         └──────────→ [GossipSender] ──TCP──→ peers
//!
//! peers ──TCP──→ [GossipListener] ──→ [BlockAssembler]
//! ```
//!
//! ## Lifecycle
//!
//! 1. Bind and spawn the inbound gossip listener
//! 2. Wait out the warm-up delay so peer listeners come up
//! 3. Ingest the node's file share: derive, submit locally, broadcast
//! 4. Signal completion through a one-shot channel
//!
//! The periodic reporter runs alongside, rendering the ledger on an
//! interval; it reads under the assembler's lock and never mutates state.

pub mod config;
pub mod coordinator;
pub mod reporter;

pub use config::{ConfigError, IngestConfig, NetworkConfig, NodeConfig};
pub use coordinator::NodeCoordinator;
pub use reporter::run_reporter;
