//! # Node Registry
//!
//! The static list of peer addresses known to every node. Built once at
//! process start from configuration and never mutated afterwards; every
//! task reads it through a shared reference.

use std::net::SocketAddr;

use crate::error::{GossipError, Result};

/// Fixed mapping from peer index to network address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRegistry {
    addrs: Vec<SocketAddr>,
}

impl NodeRegistry {
    /// Builds a registry from already-resolved addresses.
    pub fn from_addrs(addrs: Vec<SocketAddr>) -> Self {
        Self { addrs }
    }

    /// Parses a registry from configuration strings.
    ///
    /// # Errors
    ///
    /// [`GossipError::InvalidAddress`] on the first entry that is not a
    /// valid `host:port` socket address.
    pub fn parse(entries: &[String]) -> Result<Self> {
        let addrs = entries
            .iter()
            .map(|entry| {
                entry.parse().map_err(|source| GossipError::InvalidAddress {
                    entry: entry.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { addrs })
    }

    /// Cluster size.
    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    /// Returns true for an empty registry.
    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    /// Address of the node at `index` (0-based), if in range.
    pub fn addr(&self, index: usize) -> Option<SocketAddr> {
        self.addrs.get(index).copied()
    }

    /// Addresses of every node other than `self_index`, in registry order.
    pub fn peers_excluding(&self, self_index: usize) -> Vec<SocketAddr> {
        self.addrs
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != self_index)
            .map(|(_, addr)| *addr)
            .collect()
    }
}
