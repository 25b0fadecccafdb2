//! Error types for the gossip channel

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

/// Result type alias for gossip operations
pub type Result<T> = std::result::Result<T, GossipError>;

/// Errors that can occur on the gossip channel.
///
/// All of them are non-fatal to the node: outbound errors skip one peer,
/// inbound errors drop one connection. Only [`GossipError::Bind`] surfaces
/// at startup.
#[derive(Debug, Error)]
pub enum GossipError {
    /// The inbound listener could not bind its registry address.
    #[error("failed to bind listener on {addr}: {source}")]
    Bind {
        /// Address this node tried to listen on.
        addr: SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Connecting to a peer failed.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        /// Peer address.
        addr: SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A connect or write did not complete within the configured deadline.
    #[error("timed out after {deadline:?} talking to {addr}")]
    Timeout {
        /// Peer address.
        addr: SocketAddr,
        /// The deadline that expired.
        deadline: Duration,
    },

    /// Writing the encoded transaction to a peer failed.
    #[error("failed to write to {addr}: {source}")]
    Write {
        /// Peer address.
        addr: SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading an inbound connection failed.
    #[error("failed to read inbound connection: {0}")]
    Read(#[source] std::io::Error),

    /// A transaction could not be encoded for the wire.
    #[error("failed to encode transaction: {0}")]
    Encode(#[source] bincode::Error),

    /// An inbound payload could not be decoded as a transaction.
    #[error("failed to decode transaction: {0}")]
    Decode(#[source] bincode::Error),

    /// A payload exceeds the wire size limit.
    #[error("message of {size} bytes exceeds the {limit}-byte wire limit")]
    Oversized {
        /// Observed payload size.
        size: usize,
        /// The enforced limit.
        limit: usize,
    },

    /// A registry entry is not a valid socket address.
    #[error("invalid registry address {entry:?}: {source}")]
    InvalidAddress {
        /// The rejected registry entry.
        entry: String,
        /// Underlying parse error.
        #[source]
        source: std::net::AddrParseError,
    },
}
