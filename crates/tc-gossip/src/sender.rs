//! # Outbound Gossip
//!
//! Fire-and-forget broadcast of a freshly derived transaction to every peer
//! in the registry other than this node.
//!
//! Each peer's send runs as its own spawned task owning the peer address and
//! the encoded payload, so sends share no mutable state and one slow or dead
//! peer never delays the others. A failed send is logged and skipped; there
//! are no retries and no delivery guarantee.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, warn};

use shared_types::Transaction;

use crate::codec;
use crate::error::{GossipError, Result};
use crate::registry::NodeRegistry;

/// Broadcasts transactions to the rest of the cluster.
#[derive(Debug, Clone)]
pub struct GossipSender {
    registry: Arc<NodeRegistry>,
    self_index: usize,
    deadline: Duration,
}

impl GossipSender {
    /// Creates a sender for the node at `self_index` (0-based) in the
    /// registry. `deadline` bounds each peer's connect and write.
    pub fn new(registry: Arc<NodeRegistry>, self_index: usize, deadline: Duration) -> Self {
        Self {
            registry,
            self_index,
            deadline,
        }
    }

    /// Dispatches one send task per peer and returns immediately.
    ///
    /// Must be called from within a tokio runtime. Encoding failure drops
    /// the broadcast entirely (nothing valid to put on the wire); per-peer
    /// failures are logged inside the tasks.
    pub fn broadcast(&self, transaction: &Transaction) {
        let payload = match codec::encode_transaction(transaction) {
            Ok(payload) => payload,
            Err(error) => {
                warn!(%error, hash = %transaction.hash, "dropping broadcast");
                return;
            }
        };

        for addr in self.registry.peers_excluding(self.self_index) {
            let payload = payload.clone();
            let deadline = self.deadline;
            tokio::spawn(async move {
                match send_payload(addr, &payload, deadline).await {
                    Ok(()) => debug!(peer = %addr, "transaction sent"),
                    Err(error) => warn!(peer = %addr, %error, "send failed, peer skipped"),
                }
            });
        }
    }
}

/// Sends one already-encoded payload to one peer: connect, write, close.
async fn send_payload(addr: SocketAddr, payload: &[u8], deadline: Duration) -> Result<()> {
    let mut stream = timeout(deadline, TcpStream::connect(addr))
        .await
        .map_err(|_| GossipError::Timeout { addr, deadline })?
        .map_err(|source| GossipError::Connect { addr, source })?;

    timeout(deadline, stream.write_all(payload))
        .await
        .map_err(|_| GossipError::Timeout { addr, deadline })?
        .map_err(|source| GossipError::Write { addr, source })?;

    // Close the write half so the peer's read-to-EOF completes promptly.
    timeout(deadline, stream.shutdown())
        .await
        .map_err(|_| GossipError::Timeout { addr, deadline })?
        .map_err(|source| GossipError::Write { addr, source })?;

    Ok(())
}

/// Sends one transaction to one peer over a fresh connection.
pub async fn send_transaction(
    addr: SocketAddr,
    transaction: &Transaction,
    deadline: Duration,
) -> Result<()> {
    let payload = codec::encode_transaction(transaction)?;
    send_payload(addr, &payload, deadline).await
}
