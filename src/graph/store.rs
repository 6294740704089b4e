//! In-memory graph storage implementation
//!
//! Nodes and edges live in insertion-ordered maps; each node entry carries
//! its own adjacency sets so degree and neighbor queries never scan the edge
//! set.

use super::config::GraphConfig;
use super::edge::Edge;
use super::node::Node;
use super::property::{PropertyMap, PropertyValue};
use super::types::{edge_key, NodeId, NodeKey};
use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
///
/// Node identifiers are rendered with their `Debug` representation so the
/// error type stays independent of the identifier type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    UnknownNode(String),

    #[error("Edge {from} -> {to} not found")]
    UnknownEdge { from: String, to: String },

    #[error("Invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Property '{key}' not found on node {node}")]
    UnknownProperty { node: String, key: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl GraphError {
    pub(crate) fn unknown_node<N: fmt::Debug>(node: &N) -> Self {
        GraphError::UnknownNode(format!("{:?}", node))
    }

    pub(crate) fn unknown_edge<N: fmt::Debug>(source: &N, target: &N) -> Self {
        GraphError::UnknownEdge {
            from: format!("{:?}", source),
            to: format!("{:?}", target),
        }
    }

    pub(crate) fn invalid_weight<N: fmt::Debug>(edge: &Edge<N>) -> Self {
        GraphError::InvalidWeight {
            from: format!("{:?}", edge.source),
            to: format!("{:?}", edge.target),
            weight: edge.weight,
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory weighted graph
///
/// - nodes: N -> Node (insertion order preserved, adjacency inside each entry)
/// - edges: (N, N) -> Edge (insertion order preserved; undirected keys are
///   stored with their endpoints in ascending order)
///
/// Directedness is fixed at construction. The store has no internal locking:
/// callers sharing a graph across threads wrap it in a read-write lock, with
/// traversal queries as readers and mutations as the single writer.
#[derive(Debug, Clone)]
pub struct Graph<N = NodeId> {
    config: GraphConfig,
    nodes: IndexMap<N, Node<N>>,
    edges: IndexMap<(N, N), Edge<N>>,
}

impl<N: NodeKey> Graph<N> {
    /// Create an empty graph
    pub fn new(directed: bool) -> Self {
        let config = if directed {
            GraphConfig::directed()
        } else {
            GraphConfig::undirected()
        };
        Self::empty(config)
    }

    /// Create an empty graph with explicit settings, validating them first
    pub fn with_config(config: GraphConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    fn empty(config: GraphConfig) -> Self {
        Graph {
            config,
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    /// Create a graph holding the given nodes and no edges
    pub fn from_nodes<I>(directed: bool, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let mut graph = Self::new(directed);
        for node in nodes {
            graph.insert_node(node, PropertyMap::new());
        }
        graph
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Insert a node, or merge properties into an existing one.
    /// Returns whether the node is new.
    fn insert_node(&mut self, id: N, properties: PropertyMap) -> bool {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.properties.extend(properties);
            return false;
        }
        debug!("Added node {:?}", id);
        self.nodes
            .insert(id.clone(), Node::new_with_properties(id, properties));
        true
    }

    /// Add a node. Adding a node that is already present is a no-op.
    pub fn add_node(&mut self, id: N) -> GraphResult<()> {
        self.insert_node(id, PropertyMap::new());
        Ok(())
    }

    /// Add a node with a property payload.
    ///
    /// If the node exists its properties are merged key by key, with the new
    /// values winning.
    pub fn add_node_with_properties(&mut self, id: N, properties: PropertyMap) -> GraphResult<()> {
        self.insert_node(id, properties);
        Ok(())
    }

    /// Add an edge, or overwrite the weight of an existing one.
    ///
    /// Both endpoints must already exist; missing nodes are never created.
    /// An overwritten edge keeps its position in `edges()` and its original
    /// orientation.
    pub fn add_edge(&mut self, u: N, v: N, weight: f64) -> GraphResult<()> {
        if !self.nodes.contains_key(&u) {
            return Err(GraphError::unknown_node(&u));
        }
        if !self.nodes.contains_key(&v) {
            return Err(GraphError::unknown_node(&v));
        }

        let key = edge_key(self.config.directed, &u, &v);
        if let Some(edge) = self.edges.get_mut(&key) {
            debug!(
                "Replaced weight of edge {:?} -> {:?}: {} -> {}",
                edge.source, edge.target, edge.weight, weight
            );
            edge.weight = weight;
            return Ok(());
        }

        self.link(&u, &v);
        debug!("Added edge {:?} -> {:?} ({})", u, v, weight);
        self.edges.insert(key, Edge::new(u, v, weight));
        Ok(())
    }

    /// Add an edge carrying the configured default weight
    pub fn add_unweighted_edge(&mut self, u: N, v: N) -> GraphResult<()> {
        let weight = self.config.default_weight;
        self.add_edge(u, v, weight)
    }

    fn link(&mut self, u: &N, v: &N) {
        let directed = self.config.directed;
        if let Some(node) = self.nodes.get_mut(u) {
            node.outgoing.insert(v.clone());
        }
        if let Some(node) = self.nodes.get_mut(v) {
            if directed {
                node.incoming.insert(u.clone());
            } else {
                node.outgoing.insert(u.clone());
            }
        }
    }

    fn unlink(&mut self, u: &N, v: &N) {
        let directed = self.config.directed;
        if let Some(node) = self.nodes.get_mut(u) {
            node.outgoing.remove(v);
        }
        if let Some(node) = self.nodes.get_mut(v) {
            if directed {
                node.incoming.remove(u);
            } else {
                node.outgoing.remove(u);
            }
        }
    }

    /// Remove a node and every edge touching it
    pub fn remove_node(&mut self, id: &N) -> GraphResult<()> {
        let node = self
            .nodes
            .shift_remove(id)
            .ok_or_else(|| GraphError::unknown_node(id))?;

        for other in node.outgoing.iter().chain(node.incoming.iter()) {
            if let Some(entry) = self.nodes.get_mut(other) {
                entry.outgoing.remove(id);
                entry.incoming.remove(id);
            }
        }

        let before = self.edges.len();
        self.edges.retain(|_, edge| !edge.touches(id));
        debug!(
            "Removed node {:?} and {} incident edges",
            id,
            before - self.edges.len()
        );
        Ok(())
    }

    /// Remove the edge between `u` and `v` (`u -> v` when directed)
    pub fn remove_edge(&mut self, u: &N, v: &N) -> GraphResult<()> {
        let key = edge_key(self.config.directed, u, v);
        let edge = self
            .edges
            .shift_remove(&key)
            .ok_or_else(|| GraphError::unknown_edge(u, v))?;

        self.unlink(&edge.source, &edge.target);
        debug!("Removed edge {:?} -> {:?}", edge.source, edge.target);
        Ok(())
    }

    /// Snapshot of all node identifiers in insertion order
    pub fn nodes(&self) -> Vec<N> {
        self.nodes.keys().cloned().collect()
    }

    /// Snapshot of all edges as `(source, target, weight)` in insertion order
    pub fn edges(&self) -> Vec<(N, N, f64)> {
        self.edges.values().map(Edge::to_triple).collect()
    }

    /// Borrowed edges in insertion order
    pub fn all_edges(&self) -> Vec<&Edge<N>> {
        self.edges.values().collect()
    }

    pub fn node(&self, id: &N) -> Option<&Node<N>> {
        self.nodes.get(id)
    }

    pub fn contains_node(&self, id: &N) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn contains_edge(&self, u: &N, v: &N) -> bool {
        self.edges
            .contains_key(&edge_key(self.config.directed, u, v))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn require_node(&self, id: &N) -> GraphResult<&Node<N>> {
        self.nodes.get(id).ok_or_else(|| GraphError::unknown_node(id))
    }

    /// Weight of the edge between `u` and `v`
    pub fn edge_weight(&self, u: &N, v: &N) -> GraphResult<f64> {
        self.require_node(u)?;
        self.require_node(v)?;
        self.edges
            .get(&edge_key(self.config.directed, u, v))
            .map(|edge| edge.weight)
            .ok_or_else(|| GraphError::unknown_edge(u, v))
    }

    /// Number of distinct edges touching the node (undirected) or its
    /// out-degree (directed). A self-loop counts once.
    pub fn degree(&self, id: &N) -> GraphResult<usize> {
        self.out_degree(id)
    }

    pub fn out_degree(&self, id: &N) -> GraphResult<usize> {
        Ok(self.require_node(id)?.outgoing.len())
    }

    /// In-degree (directed); equal to `degree` for undirected graphs
    pub fn in_degree(&self, id: &N) -> GraphResult<usize> {
        let node = self.require_node(id)?;
        if self.config.directed {
            Ok(node.incoming.len())
        } else {
            Ok(node.outgoing.len())
        }
    }

    /// Successors (directed) or adjacent nodes (undirected), ascending
    pub fn neighbors(&self, id: &N) -> GraphResult<Vec<N>> {
        Ok(self.require_node(id)?.neighbors().cloned().collect())
    }

    /// Set a property on an existing node, returning the previous value
    pub fn set_node_property(
        &mut self,
        id: &N,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> GraphResult<Option<PropertyValue>> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::unknown_node(id))?;
        Ok(node.set_property(key, value))
    }

    /// Typed property lookup; fails if the node or the key is missing
    pub fn node_property(&self, id: &N, key: &str) -> GraphResult<&PropertyValue> {
        self.require_node(id)?
            .get_property(key)
            .ok_or_else(|| GraphError::UnknownProperty {
                node: format!("{:?}", id),
                key: key.to_string(),
            })
    }

    pub fn remove_node_property(&mut self, id: &N, key: &str) -> GraphResult<Option<PropertyValue>> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::unknown_node(id))?;
        Ok(node.remove_property(key))
    }
}

impl<N: NodeKey> Default for Graph<N> {
    fn default() -> Self {
        Self::empty(GraphConfig::default())
    }
}
