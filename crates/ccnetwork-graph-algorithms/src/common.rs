//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of the graph topology for algorithm execution.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A dense, integer-indexed snapshot of a graph in Compressed Sparse Row (CSR) format.
///
/// Indices are assigned by the caller. The traversal and pathfinding algorithms
/// break ties by ascending index, so callers that want identifier-ordered
/// determinism should assign indices in identifier order.
///
/// Undirected graphs are stored as symmetric arcs: an edge `u - v` appears in
/// the rows of both `u` and `v` (a self-loop appears once).
#[derive(Debug, Clone)]
pub struct GraphView<N> {
    /// Number of nodes
    pub node_count: usize,
    /// Whether arcs are one-way
    pub directed: bool,
    /// Mapping from dense index (0..N) back to the caller's node identifier
    pub index_to_node: Vec<N>,
    /// Mapping from node identifier to dense index
    pub node_to_index: FxHashMap<N, usize>,

    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices, ascending within each row
    pub out_targets: Vec<usize>,

    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices, ascending within each row
    pub in_sources: Vec<usize>,

    /// Edge weights, aligned with `out_targets`
    pub weights: Vec<f64>,
}

impl<N: Clone + Eq + Hash> GraphView<N> {
    /// Build a view from per-node arc lists of `(target_index, weight)`.
    ///
    /// Rows are sorted by target index; arcs must not repeat within a row.
    pub fn from_adjacency_list(
        directed: bool,
        index_to_node: Vec<N>,
        outgoing: Vec<Vec<(usize, f64)>>,
    ) -> Self {
        let node_count = index_to_node.len();
        debug_assert_eq!(outgoing.len(), node_count);

        let mut node_to_index =
            FxHashMap::with_capacity_and_hasher(node_count, Default::default());
        for (idx, node) in index_to_node.iter().enumerate() {
            node_to_index.insert(node.clone(), idx);
        }

        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut weights = Vec::new();
        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); node_count];

        out_offsets.push(0);
        for (u, mut row) in outgoing.into_iter().enumerate() {
            row.sort_by_key(|&(v, _)| v);
            for (v, w) in row {
                out_targets.push(v);
                weights.push(w);
                incoming[v].push(u);
            }
            out_offsets.push(out_targets.len());
        }

        // Sources are visited in ascending order above, so rows are already sorted
        let mut in_offsets = Vec::with_capacity(node_count + 1);
        let mut in_sources = Vec::with_capacity(out_targets.len());
        in_offsets.push(0);
        for sources in incoming {
            in_sources.extend(sources);
            in_offsets.push(in_sources.len());
        }

        GraphView {
            node_count,
            directed,
            index_to_node,
            node_to_index,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
            weights,
        }
    }

    /// Dense index of a node identifier
    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.node_to_index.get(node).copied()
    }
}

impl<N> GraphView<N> {
    /// Node identifier at a dense index
    pub fn node(&self, idx: usize) -> &N {
        &self.index_to_node[idx]
    }

    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// Get weights for outgoing arcs of a node, aligned with `successors`
    pub fn weights(&self, idx: usize) -> &[f64] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.weights[start..end]
    }

    /// Number of stored arcs (an undirected edge between distinct nodes counts twice)
    pub fn arc_count(&self) -> usize {
        self.out_targets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_layout() {
        // 1 -> 3 (2.0), 1 -> 2 (1.0), 2 -> 3 (4.0)
        let view = GraphView::from_adjacency_list(
            true,
            vec![1u64, 2, 3],
            vec![vec![(2, 2.0), (1, 1.0)], vec![(2, 4.0)], vec![]],
        );

        assert_eq!(view.node_count, 3);
        assert_eq!(view.successors(0), &[1, 2]);
        assert_eq!(view.weights(0), &[1.0, 2.0]);
        assert_eq!(view.predecessors(2), &[0, 1]);
        assert_eq!(view.out_degree(0), 2);
        assert_eq!(view.in_degree(0), 0);
        assert_eq!(view.arc_count(), 3);
        assert_eq!(view.index_of(&3), Some(2));
        assert_eq!(view.index_of(&9), None);
        assert_eq!(*view.node(1), 2);
    }

    #[test]
    fn test_undirected_rows_are_symmetric() {
        let view = GraphView::from_adjacency_list(
            false,
            vec!["a", "b"],
            vec![vec![(1, 1.0)], vec![(0, 1.0)]],
        );

        assert_eq!(view.successors(0), &[1]);
        assert_eq!(view.successors(1), &[0]);
        assert_eq!(view.predecessors(0), &[1]);
    }
}
