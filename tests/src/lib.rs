//! # Tally-Chain Test Suite
//!
//! Unified test crate for cross-subsystem behavior.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── gossip.rs     # Sender/listener pairs over loopback TCP
//!     └── cluster.rs    # End-to-end in-process cluster runs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tc-tests
//! cargo test -p tc-tests integration::gossip
//! ```

#![allow(dead_code)]

pub mod integration;
