//! # Tally-Chain Node
//!
//! Entry point for one node of the cluster.
//!
//! ```text
//! tally-node <node-index>
//! ```
//!
//! The single positional argument is the node's 1-based index into the
//! registry. Startup misconfiguration is the only fatal error; everything
//! after startup degrades per-file, per-peer, or per-connection.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::time::sleep;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use node_runtime::{run_reporter, ConfigError, NodeConfig, NodeCoordinator};

/// Parses the node's 1-based index from the command line.
fn parse_node_index() -> Result<usize, ConfigError> {
    let value = std::env::args()
        .nth(1)
        .ok_or(ConfigError::MissingNodeIndex)?;
    value
        .parse()
        .map_err(|_| ConfigError::NodeIndexNotANumber { value })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let node_index = parse_node_index().context("usage: tally-node <node-index>")?;
    let mut config = NodeConfig::default();
    config.apply_env_overrides();

    let linger = Duration::from_secs(config.ingest.shutdown_linger_secs);
    let report_interval = Duration::from_secs(config.ingest.report_interval_secs);

    info!(node = node_index, cluster = config.network.registry.len(), "starting node");

    let coordinator = NodeCoordinator::new(config, node_index)?;
    tokio::spawn(run_reporter(coordinator.assembler(), report_interval));

    coordinator.run().await?;

    // Stay up briefly so gossip still in flight from peers can land.
    sleep(linger).await;

    let status = coordinator.assembler().status();
    info!(
        blocks = status.blocks,
        derived = coordinator.derived_count(),
        "node finished"
    );
    Ok(())
}
