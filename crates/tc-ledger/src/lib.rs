//! # Block Assembler Subsystem
//!
//! Accumulates transactions into a bounded pending buffer and, on reaching a
//! quota, seals them into a hash-chained block appended to the process-local
//! ledger.
//!
//! ## Architecture Role
//!
//! ```text
//! [local ingestion] ──submit──→ [BlockAssembler] ←──submit── [gossip listener]
//!                                      │
//!                                      ↓ quota reached
//!                               seal Block → Ledger
//! ```
//!
//! The assembler is the single convergence point and sole mutator of the
//! ledger and the pending buffer. All mutation happens under one exclusive
//! lock held for the duration of a `submit` call.

pub mod assembler;
pub mod config;
pub mod invariants;

pub use assembler::{AssemblerStatus, BlockAssembler};
pub use config::LedgerConfig;
pub use invariants::{verify_chain, ChainViolation};
