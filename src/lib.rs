//! ccnetwork
//!
//! A weighted graph engine for the "network" core concept of spatial
//! information: nodes, weighted edges, connectivity, shortest paths, degree,
//! distance and breadth-first reachability.
//!
//! # Architecture
//!
//! - [`graph`]: the store. Owns nodes, edges and adjacency indices; all
//!   mutation goes through it.
//! - [`algo`]: the traversal engine. Stateless queries that snapshot the
//!   store into a dense view and run algorithms from
//!   `ccnetwork-graph-algorithms`. It never mutates the store.
//! - [`network`]: the [`NetworkOps`] capability trait.
//!
//! The store has no internal locking. Share it between threads behind a
//! read-write lock: traversal queries take the read side, mutations the write
//! side.
//!
//! Diagnostics are emitted through `tracing`; install a subscriber in the
//! consuming application to see them.
//!
//! ## Example Usage
//!
//! ```rust
//! use ccnetwork::algo::{breadth_first, distance, shortest_path};
//! use ccnetwork::graph::Graph;
//!
//! let mut g = Graph::new(false);
//! for city in ["A", "B", "C", "D"] {
//!     g.add_node(city).unwrap();
//! }
//! g.add_edge("A", "B", 1.0).unwrap();
//! g.add_edge("B", "C", 2.0).unwrap();
//! g.add_edge("A", "C", 4.0).unwrap();
//! g.add_edge("C", "D", 1.0).unwrap();
//!
//! assert_eq!(shortest_path(&g, &"A", &"D").unwrap(), vec!["A", "B", "C", "D"]);
//! assert_eq!(distance(&g, &"A", &"D").unwrap(), Some(4.0));
//! assert_eq!(breadth_first(&g, &"A", 1).unwrap().len(), 2);
//! assert_eq!(g.degree(&"A").unwrap(), 2);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod network;

// Re-export main types for convenience
pub use algo::{breadth_first, connected, distance, shortest_path, PathResult};
pub use graph::{
    Edge, Graph, GraphConfig, GraphError, GraphResult, Node, NodeId, NodeKey, PropertyMap,
    PropertyValue,
};
pub use network::NetworkOps;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
