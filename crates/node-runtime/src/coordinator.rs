//! # Node Coordinator
//!
//! Owns one node's lifecycle: start the inbound listener, wait out the
//! warm-up delay, ingest the node's file share, signal completion.
//!
//! ## File Share
//!
//! The corpus is split deterministically across the cluster by interleaving:
//! a node takes every cluster-size-th file index starting at its own 1-based
//! index. Node 2 of 4 reads files 2, 6, 10, ...
//!
//! ## Completion
//!
//! The ingestion task runs to one of three ends: the completion counter
//! reached its target, the file share ran out, or the ledger sealed its
//! terminal block (early stop). Either way it satisfies a one-shot channel
//! the coordinator awaits; nothing busy-waits.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::{oneshot, watch};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use shared_types::NodeState;
use tc_deriver::derive_transaction;
use tc_gossip::{GossipListener, GossipSender, NodeRegistry};
use tc_ledger::BlockAssembler;

use crate::config::NodeConfig;

/// File indices belonging to one node: every `stride`-th index from
/// `start_index` up to `max_file_index`.
fn file_schedule(start_index: u32, stride: u32, max_file_index: u32) -> impl Iterator<Item = u32> {
    (start_index..=max_file_index).step_by(stride as usize)
}

/// How one ingestion run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IngestOutcome {
    /// The completion counter reached its target.
    TargetReached,
    /// Every file in this node's share has been processed.
    ShareExhausted,
    /// The ledger sealed its terminal block while files remained.
    LedgerClosed,
}

/// Orchestrates one node's run.
pub struct NodeCoordinator {
    node_index: usize,
    config: NodeConfig,
    registry: Arc<NodeRegistry>,
    assembler: Arc<BlockAssembler>,
    sender: GossipSender,
    derived: Arc<AtomicU64>,
    state: watch::Sender<NodeState>,
}

impl NodeCoordinator {
    /// Builds a coordinator for the node at the operator-supplied 1-based
    /// `node_index`.
    pub fn new(config: NodeConfig, node_index: usize) -> Result<Self> {
        config.validate(node_index)?;

        let registry = Arc::new(NodeRegistry::parse(&config.network.registry)?);
        let assembler = Arc::new(BlockAssembler::new(config.ledger.clone()));
        let sender = GossipSender::new(
            Arc::clone(&registry),
            node_index - 1,
            Duration::from_secs(config.network.connect_timeout_secs),
        );

        Ok(Self {
            node_index,
            config,
            registry,
            assembler,
            sender,
            derived: Arc::new(AtomicU64::new(0)),
            state: watch::channel(NodeState::Idle).0,
        })
    }

    /// The assembler this node converges on, for the reporter and tests.
    pub fn assembler(&self) -> Arc<BlockAssembler> {
        Arc::clone(&self.assembler)
    }

    /// Transactions this node has derived and submitted so far. Loose
    /// read; the counter is monotonic and only ingestion writes it.
    pub fn derived_count(&self) -> u64 {
        self.derived.load(Ordering::Relaxed)
    }

    /// Watch handle over the node's lifecycle state.
    pub fn subscribe_state(&self) -> watch::Receiver<NodeState> {
        self.state.subscribe()
    }

    fn transition(&self, state: NodeState) {
        info!(?state, node = self.node_index, "state transition");
        self.state.send_replace(state);
    }

    /// Runs the node to completion.
    pub async fn run(&self) -> Result<()> {
        let self_slot = self.node_index - 1;
        let listen_addr = self
            .registry
            .addr(self_slot)
            .context("own registry entry missing")?;

        let listener = GossipListener::bind(listen_addr).await?;
        tokio::spawn(listener.run(self.assembler()));
        self.transition(NodeState::Listening);

        sleep(Duration::from_secs(self.config.ingest.warmup_secs)).await;
        self.transition(NodeState::Ingesting);

        let (done_tx, done_rx) = oneshot::channel();
        let share = IngestShare {
            assembler: self.assembler(),
            sender: self.sender.clone(),
            derived: Arc::clone(&self.derived),
            data_dir: self.config.ingest.data_dir.clone(),
            start_index: self.node_index as u32,
            stride: self.registry.len() as u32,
            max_file_index: self.config.ingest.max_file_index,
            target: self.config.ingest.target_transactions,
        };
        tokio::spawn(async move {
            let outcome = share.run().await;
            let _ = done_tx.send(outcome);
        });

        let outcome = done_rx
            .await
            .context("ingestion task dropped its completion signal")?;

        match outcome {
            IngestOutcome::TargetReached => {
                info!(derived = self.derived_count(), "completion target reached");
            }
            IngestOutcome::ShareExhausted => {
                info!(
                    derived = self.derived_count(),
                    target = self.config.ingest.target_transactions,
                    "file share exhausted before reaching target"
                );
            }
            IngestOutcome::LedgerClosed => {
                self.transition(NodeState::StoppedEarlyByClosedLedger);
            }
        }

        self.transition(NodeState::Done);
        Ok(())
    }
}

/// One node's ingestion pass over its file share.
struct IngestShare {
    assembler: Arc<BlockAssembler>,
    sender: GossipSender,
    derived: Arc<AtomicU64>,
    data_dir: PathBuf,
    start_index: u32,
    stride: u32,
    max_file_index: u32,
    target: u64,
}

impl IngestShare {
    /// Derives, broadcasts, and locally submits one transaction per file.
    ///
    /// A file that fails to derive is logged and skipped; ingestion moves
    /// on to the next file. File reads are synchronous; the corpus files
    /// are small line-delimited integers.
    async fn run(self) -> IngestOutcome {
        for file_index in file_schedule(self.start_index, self.stride, self.max_file_index) {
            if self.assembler.is_closed() {
                return IngestOutcome::LedgerClosed;
            }
            if self.derived.load(Ordering::Relaxed) >= self.target {
                return IngestOutcome::TargetReached;
            }

            let path = self.data_dir.join(format!("{file_index}.txt"));
            debug!(file = %path.display(), "processing");

            match derive_transaction(&path) {
                Ok(transaction) => {
                    self.sender.broadcast(&transaction);
                    self.assembler.submit(transaction);
                    self.derived.fetch_add(1, Ordering::Relaxed);
                }
                Err(error) => warn!(%error, "skipping file"),
            }
        }

        if self.derived.load(Ordering::Relaxed) >= self.target {
            IngestOutcome::TargetReached
        } else {
            IngestOutcome::ShareExhausted
        }
    }
}
