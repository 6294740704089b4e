//! Weighted shortest paths
//!
//! Dijkstra over a validated view. Any negative or NaN weight in the graph
//! fails the query with `InvalidWeight`.

use super::{build_weighted_view, require_node};
use crate::graph::{Graph, GraphResult, NodeKey};
use ccnetwork_graph_algorithms::{dijkstra, PathResult};
use tracing::trace;

/// Shortest path with its total cost, or `None` if `target` is unreachable.
///
/// Among equal-cost paths, the one found first when exploring in ascending
/// node identifier order is returned, regardless of insertion order.
pub fn shortest_path_with_cost<N: NodeKey>(
    graph: &Graph<N>,
    source: &N,
    target: &N,
) -> GraphResult<Option<PathResult<N>>> {
    require_node(graph, source)?;
    require_node(graph, target)?;

    let view = build_weighted_view(graph)?;
    let result = dijkstra(&view, source, target);
    trace!(
        "shortest_path({:?}, {:?}) cost = {:?}",
        source,
        target,
        result.as_ref().map(|r| r.cost)
    );
    Ok(result)
}

/// Nodes from `source` to `target` inclusive along a minimum-weight path.
///
/// Returns an empty vector when no path exists.
pub fn shortest_path<N: NodeKey>(graph: &Graph<N>, source: &N, target: &N) -> GraphResult<Vec<N>> {
    Ok(shortest_path_with_cost(graph, source, target)?
        .map(|result| result.path)
        .unwrap_or_default())
}

/// Total weight of the shortest path; `None` when `target` is unreachable
pub fn distance<N: NodeKey>(graph: &Graph<N>, source: &N, target: &N) -> GraphResult<Option<f64>> {
    Ok(shortest_path_with_cost(graph, source, target)?.map(|result| result.cost))
}
