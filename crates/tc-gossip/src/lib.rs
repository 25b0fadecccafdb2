//! # Peer Gossip Channel
//!
//! Best-effort, at-most-once transaction broadcast across a fixed cluster.
//!
//! ## Architecture Role
//!
//! ```text
//! [Deriver] ──transaction──→ [GossipSender] ──one TCP conn per peer──→ cluster
//!
//! cluster ──TCP conn──→ [GossipListener] ──decode──→ [TransactionSink]
//! ```
//!
//! ## Wire Protocol
//!
//! One bincode-encoded [`shared_types::Transaction`] per TCP connection; the
//! sender closes the connection after writing, the receiver reads to EOF and
//! decodes exactly one record. No framing, no authentication, no versioning.
//!
//! ## Delivery Semantics
//!
//! Fire-and-forget. Each peer's send is an independent spawned task; a
//! failed connect or write is logged and skipped, never retried, and never
//! aborts the sends to other peers.

pub mod codec;
pub mod error;
pub mod listener;
pub mod registry;
pub mod sender;

pub use codec::{decode_transaction, encode_transaction, MAX_WIRE_BYTES};
pub use error::{GossipError, Result};
pub use listener::GossipListener;
pub use registry::NodeRegistry;
pub use sender::{send_transaction, GossipSender};
