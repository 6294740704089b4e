//! Weight-agnostic traversal: reachability and breadth-first neighborhoods

use super::{build_view, require_node};
use crate::graph::{Graph, GraphError, GraphResult, NodeKey};
use ccnetwork_graph_algorithms::{is_reachable, neighborhood};
use std::collections::BTreeSet;
use tracing::trace;

/// Whether `v` can be reached from `u` following edges (respecting direction).
///
/// A node is always connected to itself. Edge weights are ignored, so graphs
/// holding negative weights are fine here.
pub fn connected<N: NodeKey>(graph: &Graph<N>, u: &N, v: &N) -> GraphResult<bool> {
    require_node(graph, u)?;
    require_node(graph, v)?;
    if u == v {
        return Ok(true);
    }

    let view = build_view(graph);
    let reachable = is_reachable(&view, u, v);
    trace!("connected({:?}, {:?}) = {}", u, v, reachable);
    Ok(reachable)
}

/// Nodes within `max_distance` hops of `node`, counting hops and ignoring weights.
///
/// This is the union of the BFS frontiers at distances `1..=max_distance`.
/// `node` itself is only part of the result when a cycle leads back to it
/// within `max_distance` hops; in undirected graphs that cycle must be simple,
/// so stepping to a neighbor and straight back does not count.
pub fn breadth_first<N: NodeKey>(
    graph: &Graph<N>,
    node: &N,
    max_distance: i64,
) -> GraphResult<BTreeSet<N>> {
    if max_distance < 0 {
        return Err(GraphError::InvalidArgument(format!(
            "max_distance must be non-negative, got {}",
            max_distance
        )));
    }
    require_node(graph, node)?;
    if max_distance == 0 {
        return Ok(BTreeSet::new());
    }

    let depth = usize::try_from(max_distance).unwrap_or(usize::MAX);
    let view = build_view(graph);
    let found: BTreeSet<N> = neighborhood(&view, node, depth).into_iter().collect();
    trace!(
        "breadth_first({:?}, {}) reached {} nodes",
        node,
        max_distance,
        found.len()
    );
    Ok(found)
}
