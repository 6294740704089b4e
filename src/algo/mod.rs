//! Traversal engine
//!
//! Stateless queries over a [`Graph`]. Algorithms are implemented in the
//! `ccnetwork-graph-algorithms` crate; this module snapshots the store into a
//! [`GraphView`], validates arguments and maps results back to the caller's
//! node identifiers. Every call builds a fresh view; nothing is cached between
//! calls.

pub mod connectivity;
pub mod pathfinding;

use crate::graph::{Graph, GraphError, GraphResult, NodeKey};
use ccnetwork_graph_algorithms::GraphView;
use rustc_hash::FxHashMap;
use tracing::warn;

pub use connectivity::{breadth_first, connected};
pub use pathfinding::{distance, shortest_path, shortest_path_with_cost};

// Re-export algorithm types
pub use ccnetwork_graph_algorithms::PathResult;

/// Build a GraphView from the store for algorithm execution
///
/// Dense indices follow ascending node identifier order, which is what makes
/// the algorithms' lowest-index tie-breaking equal to lowest-identifier
/// tie-breaking. Undirected edges become a pair of arcs (one for self-loops).
pub fn build_view<N: NodeKey>(graph: &Graph<N>) -> GraphView<N> {
    // 1. Collect and order nodes
    let mut index_to_node = graph.nodes();
    index_to_node.sort();

    // 2. Build index mappings
    let mut node_to_index: FxHashMap<&N, usize> =
        FxHashMap::with_capacity_and_hasher(index_to_node.len(), Default::default());
    for (idx, node_id) in index_to_node.iter().enumerate() {
        node_to_index.insert(node_id, idx);
    }

    // 3. Build adjacency lists
    let directed = graph.is_directed();
    let mut outgoing: Vec<Vec<(usize, f64)>> = vec![Vec::new(); index_to_node.len()];
    for edge in graph.all_edges() {
        let (Some(&u), Some(&v)) = (
            node_to_index.get(&edge.source),
            node_to_index.get(&edge.target),
        ) else {
            continue;
        };
        outgoing[u].push((v, edge.weight));
        if !directed && !edge.is_self_loop() {
            outgoing[v].push((u, edge.weight));
        }
    }
    drop(node_to_index);

    GraphView::from_adjacency_list(directed, index_to_node, outgoing)
}

/// Build a view for weighted algorithms, rejecting negative or NaN weights.
///
/// The whole edge set is checked, not just the part reachable from the source.
pub fn build_weighted_view<N: NodeKey>(graph: &Graph<N>) -> GraphResult<GraphView<N>> {
    if let Some(edge) = graph
        .all_edges()
        .into_iter()
        .find(|edge| edge.weight < 0.0 || edge.weight.is_nan())
    {
        warn!(
            "Rejecting weighted query: edge {:?} -> {:?} has weight {}",
            edge.source, edge.target, edge.weight
        );
        return Err(GraphError::invalid_weight(edge));
    }
    Ok(build_view(graph))
}

pub(crate) fn require_node<N: NodeKey>(graph: &Graph<N>, id: &N) -> GraphResult<()> {
    if graph.contains_node(id) {
        Ok(())
    } else {
        Err(GraphError::unknown_node(id))
    }
}
