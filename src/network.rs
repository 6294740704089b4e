//! `NetworkOps`: the network capability interface
//!
//! The operations of the core "network" concept, expressed as a trait so
//! code can be written against any backend. [`Graph`] is the in-memory
//! adjacency-list implementation.

use crate::algo;
use crate::graph::{Graph, GraphResult, NodeKey};
use std::collections::BTreeSet;

pub trait NetworkOps {
    /// Node identifier type
    type Node: NodeKey;

    /// Copy of the nodes in insertion order
    fn nodes(&self) -> Vec<Self::Node>;

    /// `(source, target, weight)` triples in insertion order
    fn edges(&self) -> Vec<(Self::Node, Self::Node, f64)>;

    fn add_node(&mut self, n: Self::Node) -> GraphResult<()>;

    fn add_edge(&mut self, u: Self::Node, v: Self::Node, weight: f64) -> GraphResult<()>;

    /// Whether `v` can be reached from `u`
    fn connected(&self, u: &Self::Node, v: &Self::Node) -> GraphResult<bool>;

    fn shortest_path(&self, source: &Self::Node, target: &Self::Node) -> GraphResult<Vec<Self::Node>>;

    fn degree(&self, n: &Self::Node) -> GraphResult<usize>;

    fn distance(&self, source: &Self::Node, target: &Self::Node) -> GraphResult<Option<f64>>;

    /// All nodes within `max_distance` hops of `node`
    fn breadth_first(&self, node: &Self::Node, max_distance: i64) -> GraphResult<BTreeSet<Self::Node>>;
}

impl<N: NodeKey> NetworkOps for Graph<N> {
    type Node = N;

    fn nodes(&self) -> Vec<N> {
        Graph::nodes(self)
    }

    fn edges(&self) -> Vec<(N, N, f64)> {
        Graph::edges(self)
    }

    fn add_node(&mut self, n: N) -> GraphResult<()> {
        Graph::add_node(self, n)
    }

    fn add_edge(&mut self, u: N, v: N, weight: f64) -> GraphResult<()> {
        Graph::add_edge(self, u, v, weight)
    }

    fn connected(&self, u: &N, v: &N) -> GraphResult<bool> {
        algo::connected(self, u, v)
    }

    fn shortest_path(&self, source: &N, target: &N) -> GraphResult<Vec<N>> {
        algo::shortest_path(self, source, target)
    }

    fn degree(&self, n: &N) -> GraphResult<usize> {
        Graph::degree(self, n)
    }

    fn distance(&self, source: &N, target: &N) -> GraphResult<Option<f64>> {
        algo::distance(self, source, target)
    }

    fn breadth_first(&self, node: &N, max_distance: i64) -> GraphResult<BTreeSet<N>> {
        algo::breadth_first(self, node, max_distance)
    }
}
