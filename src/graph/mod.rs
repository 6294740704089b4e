//! Weighted graph store
//!
//! This module implements the network data model:
//! - Caller-supplied node identifiers with an optional property payload
//! - Weighted edges, directed or undirected per graph, without multi-edges
//! - Insertion-ordered node and edge sets with per-node adjacency indices

pub mod config;
pub mod edge;
pub mod node;
pub mod property;
pub mod store;
pub mod types;

// Re-export main types
pub use config::GraphConfig;
pub use edge::Edge;
pub use node::Node;
pub use property::{PropertyMap, PropertyValue};
pub use store::{Graph, GraphError, GraphResult};
pub use types::{NodeId, NodeKey};
