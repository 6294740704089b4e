//! Pathfinding algorithms
//!
//! Dijkstra's algorithm with deterministic tie-breaking.

use super::common::GraphView;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult<N> {
    pub source: N,
    pub target: N,
    /// Nodes from source to target inclusive
    pub path: Vec<N>,
    /// Sum of the weights along `path`
    pub cost: f64,
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node_idx: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for min-heap; equal costs settle the lower index first
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's Algorithm (Weighted Shortest Path)
///
/// Weights must be non-negative and not NaN; callers validate them before
/// building the view.
///
/// Ties are broken deterministically: nodes are settled in (cost, index)
/// order, successors are relaxed in ascending index order, and a tentative
/// distance is only replaced by a strictly smaller one. Among equal-cost
/// paths the one discovered first under that exploration order wins.
///
/// Reachability is tracked apart from cost, so a path whose total is `+inf`
/// (an infinite weight, or finite weights whose sum overflows) is still
/// returned, with `cost == f64::INFINITY`.
///
/// Returns `None` if either node is unknown or `target` is unreachable.
pub fn dijkstra<N: Clone + Eq + Hash>(
    view: &GraphView<N>,
    source: &N,
    target: &N,
) -> Option<PathResult<N>> {
    let source_idx = view.index_of(source)?;
    let target_idx = view.index_of(target)?;

    let mut dist: Vec<Option<f64>> = vec![None; view.node_count];
    let mut parent: Vec<Option<usize>> = vec![None; view.node_count];
    let mut heap = BinaryHeap::new();

    dist[source_idx] = Some(0.0);
    heap.push(State { cost: 0.0, node_idx: source_idx });

    while let Some(State { cost, node_idx }) = heap.pop() {
        if node_idx == target_idx {
            // Reconstruct path
            let mut path = Vec::new();
            let mut curr = Some(target_idx);
            while let Some(idx) = curr {
                path.push(view.index_to_node[idx].clone());
                curr = parent[idx];
            }
            path.reverse();
            return Some(PathResult {
                source: source.clone(),
                target: target.clone(),
                path,
                cost,
            });
        }

        if dist[node_idx].is_some_and(|best| cost > best) {
            continue;
        }

        let successors = view.successors(node_idx);
        let weights = view.weights(node_idx);

        for (&next_idx, &weight) in successors.iter().zip(weights) {
            debug_assert!(weight >= 0.0, "negative weight reached dijkstra");

            let next_cost = cost + weight;
            if dist[next_idx].map_or(true, |best| next_cost < best) {
                dist[next_idx] = Some(next_cost);
                parent[next_idx] = Some(node_idx);
                heap.push(State { cost: next_cost, node_idx: next_idx });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dijkstra() {
        // 1->2 (10.0), 2->3 (5.0), 1->3 (50.0)
        let view = GraphView::from_adjacency_list(
            true,
            vec![1u64, 2, 3],
            vec![vec![(1, 10.0), (2, 50.0)], vec![(2, 5.0)], vec![]],
        );

        let result = dijkstra(&view, &1, &3).unwrap();
        assert_eq!(result.path, vec![1, 2, 3]);
        assert_eq!(result.cost, 15.0);
    }

    #[test]
    fn test_dijkstra_source_is_target() {
        let view = GraphView::from_adjacency_list(true, vec![7u64], vec![vec![]]);
        let result = dijkstra(&view, &7, &7).unwrap();
        assert_eq!(result.path, vec![7]);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_dijkstra_unreachable() {
        // 1 -> 2, 3 isolated; 2 cannot reach 1 against the arc
        let view = GraphView::from_adjacency_list(
            true,
            vec![1u64, 2, 3],
            vec![vec![(1, 1.0)], vec![], vec![]],
        );
        assert!(dijkstra(&view, &1, &3).is_none());
        assert!(dijkstra(&view, &2, &1).is_none());
        assert!(dijkstra(&view, &1, &99).is_none());
    }

    #[test]
    fn test_equal_cost_paths_prefer_lower_index() {
        // Diamond: 0 -> {1, 2} -> 3, all weight 1. Row order given reversed.
        let view = GraphView::from_adjacency_list(
            true,
            vec![10u64, 20, 30, 40],
            vec![vec![(2, 1.0), (1, 1.0)], vec![(3, 1.0)], vec![(3, 1.0)], vec![]],
        );

        let result = dijkstra(&view, &10, &40).unwrap();
        assert_eq!(result.path, vec![10, 20, 40]);
        assert_eq!(result.cost, 2.0);
    }

    #[test]
    fn test_zero_weight_edges() {
        let view = GraphView::from_adjacency_list(
            true,
            vec![1u64, 2, 3],
            vec![vec![(1, 0.0), (2, 1.0)], vec![(2, 0.0)], vec![]],
        );
        let result = dijkstra(&view, &1, &3).unwrap();
        assert_eq!(result.path, vec![1, 2, 3]);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_infinite_weight_path_is_still_found() {
        let view = GraphView::from_adjacency_list(
            false,
            vec![1u64, 2],
            vec![vec![(1, f64::INFINITY)], vec![(0, f64::INFINITY)]],
        );
        let result = dijkstra(&view, &1, &2).unwrap();
        assert_eq!(result.path, vec![1, 2]);
        assert_eq!(result.cost, f64::INFINITY);
    }

    #[test]
    fn test_overflowing_cost_path_is_still_found() {
        // 1 -> 2 -> 3 with f64::MAX on both arcs sums to +inf
        let view = GraphView::from_adjacency_list(
            true,
            vec![1u64, 2, 3],
            vec![vec![(1, f64::MAX)], vec![(2, f64::MAX)], vec![]],
        );
        let result = dijkstra(&view, &1, &3).unwrap();
        assert_eq!(result.path, vec![1, 2, 3]);
        assert!(result.cost.is_infinite());
    }

    #[test]
    fn test_finite_route_beats_infinite_one() {
        // 1 -> 3 directly at +inf, or 1 -> 2 -> 3 at 2.0
        let view = GraphView::from_adjacency_list(
            true,
            vec![1u64, 2, 3],
            vec![vec![(1, 1.0), (2, f64::INFINITY)], vec![(2, 1.0)], vec![]],
        );
        let result = dijkstra(&view, &1, &3).unwrap();
        assert_eq!(result.path, vec![1, 2, 3]);
        assert_eq!(result.cost, 2.0);
    }
}
