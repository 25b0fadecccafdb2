//! # Shared Types Crate
//!
//! This crate contains the domain entities and port traits shared across
//! subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Immutable Values**: `Transaction` and `Block` are plain values; a
//!   `Block` is never mutated after it is sealed.
//! - **Ports over Concretions**: The gossip listener hands transactions to a
//!   [`TransactionSink`], not to a concrete assembler.

pub mod entities;
pub mod ports;
pub mod state;

pub use entities::{Block, Transaction, GENESIS_PARENT_HASH};
pub use ports::{SubmitOutcome, TransactionSink};
pub use state::NodeState;
