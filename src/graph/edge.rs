//! Weighted edge between two nodes
//!
//! Orientation matters only in directed graphs; in undirected graphs the
//! stored `source`/`target` simply record the order the caller first used.

use serde::{Deserialize, Serialize};

/// A weighted edge in the network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<N> {
    /// Source node (edge goes FROM this node when directed)
    pub source: N,

    /// Target node (edge goes TO this node when directed)
    pub target: N,

    /// Numeric weight; storage accepts any value, path algorithms reject
    /// negative or NaN weights
    pub weight: f64,
}

impl<N: PartialEq> Edge<N> {
    pub fn new(source: N, target: N, weight: f64) -> Self {
        Edge { source, target, weight }
    }

    /// Check if this edge goes FROM a specific node
    pub fn starts_from(&self, node: &N) -> bool {
        self.source == *node
    }

    /// Check if this edge goes TO a specific node
    pub fn ends_at(&self, node: &N) -> bool {
        self.target == *node
    }

    /// Check if either endpoint is `node`
    pub fn touches(&self, node: &N) -> bool {
        self.starts_from(node) || self.ends_at(node)
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl<N: Clone> Edge<N> {
    /// `(source, target, weight)` triple
    pub fn to_triple(&self) -> (N, N, f64) {
        (self.source.clone(), self.target.clone(), self.weight)
    }
}
