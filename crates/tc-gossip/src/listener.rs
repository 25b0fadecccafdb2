//! # Inbound Gossip
//!
//! A persistent listener bound to this node's registry address. Each
//! accepted connection gets its own task that reads the connection to EOF,
//! decodes exactly one transaction, forwards it to the
//! [`TransactionSink`], and closes.
//!
//! Failures never stop the listener: an accept error is logged and the loop
//! continues; a read or decode error drops that one connection.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::AsyncReadExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

use shared_types::{SubmitOutcome, TransactionSink};

use crate::codec::{self, MAX_WIRE_BYTES};
use crate::error::{GossipError, Result};

/// Accepts inbound gossip connections indefinitely.
#[derive(Debug)]
pub struct GossipListener {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl GossipListener {
    /// Binds the listener.
    ///
    /// # Errors
    ///
    /// [`GossipError::Bind`] if the address is unavailable.
    pub async fn bind(addr: SocketAddr) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| GossipError::Bind { addr, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| GossipError::Bind { addr, source })?;
        Ok(Self {
            listener,
            local_addr,
        })
    }

    /// The bound address. Differs from the requested one when binding
    /// port 0 (ephemeral ports, used by tests).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accept loop. Runs until the owning task is dropped; there is no
    /// graceful shutdown path, process exit tears the listener down.
    pub async fn run<S>(self, sink: Arc<S>)
    where
        S: TransactionSink + 'static,
    {
        info!(addr = %self.local_addr, "gossip listener up");
        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    let sink = Arc::clone(&sink);
                    tokio::spawn(async move {
                        if let Err(error) = handle_connection(stream, sink.as_ref()).await {
                            warn!(%peer, %error, "dropping inbound connection");
                        }
                    });
                }
                Err(error) => {
                    warn!(%error, "accept failed, listener continues");
                }
            }
        }
    }
}

/// Reads one connection to EOF, decodes one transaction, submits it.
async fn handle_connection<S>(mut stream: TcpStream, sink: &S) -> Result<()>
where
    S: TransactionSink + ?Sized,
{
    let mut payload = Vec::new();
    // One extra byte so an oversized payload is detected rather than
    // silently truncated to the limit.
    let mut bounded = (&mut stream).take(MAX_WIRE_BYTES as u64 + 1);
    bounded
        .read_to_end(&mut payload)
        .await
        .map_err(GossipError::Read)?;

    let transaction = codec::decode_transaction(&payload)?;
    let hash = transaction.hash.clone();

    match sink.submit(transaction) {
        SubmitOutcome::Accepted => debug!(%hash, "inbound transaction accepted"),
        SubmitOutcome::RejectedLedgerClosed => {
            debug!(%hash, "inbound transaction rejected, ledger closed");
        }
    }

    Ok(())
}
