//! Core type definitions for the network graph

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Requirements on a caller-supplied node identifier.
///
/// Identifiers must be unique within a graph. `Ord` drives deterministic
/// tie-breaking in traversal; `Debug` renders identifiers in errors and logs.
pub trait NodeKey: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> NodeKey for T {}

/// Ready-made numeric node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

/// Lookup key of an edge inside the store.
///
/// Undirected edges are keyed by their endpoints in ascending order so that
/// `(u, v)` and `(v, u)` address the same edge.
pub(crate) fn edge_key<N: NodeKey>(directed: bool, u: &N, v: &N) -> (N, N) {
    if directed || u <= v {
        (u.clone(), v.clone())
    } else {
        (v.clone(), u.clone())
    }
}
