//! Breadth-first traversal algorithms
//!
//! Reachability, hop-bounded neighborhoods and shortest cycles through a vertex.
//! All of them ignore edge weights.

use super::common::GraphView;
use std::collections::VecDeque;
use std::hash::Hash;

/// Breadth-first tree rooted at a single node.
struct BfsTree {
    /// Hop distance from the root, `None` if unreached
    dist: Vec<Option<usize>>,
    /// Index of the depth-1 ancestor of each reached node (the root maps to itself)
    branch: Vec<usize>,
}

fn bfs_tree<N>(view: &GraphView<N>, root: usize) -> BfsTree {
    let mut dist = vec![None; view.node_count];
    let mut branch = vec![root; view.node_count];
    let mut queue = VecDeque::new();

    dist[root] = Some(0);
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        let depth = dist[current].unwrap_or(0);

        for &next in view.successors(current) {
            if dist[next].is_none() {
                dist[next] = Some(depth + 1);
                branch[next] = if current == root { next } else { branch[current] };
                queue.push_back(next);
            }
        }
    }

    BfsTree { dist, branch }
}

/// Whether `target` can be reached from `source` following arcs.
///
/// A node always reaches itself. Unknown nodes are unreachable.
pub fn is_reachable<N: Clone + Eq + Hash>(view: &GraphView<N>, source: &N, target: &N) -> bool {
    let (Some(source_idx), Some(target_idx)) = (view.index_of(source), view.index_of(target))
    else {
        return false;
    };
    if source_idx == target_idx {
        return true;
    }

    let mut visited = vec![false; view.node_count];
    let mut queue = VecDeque::new();
    visited[source_idx] = true;
    queue.push_back(source_idx);

    while let Some(current) = queue.pop_front() {
        for &next in view.successors(current) {
            if next == target_idx {
                return true;
            }
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    false
}

/// Length in hops of the shortest cycle passing through `root`.
///
/// Directed views look for a directed cycle. Undirected views look for a
/// simple cycle, so traversing an edge and immediately returning over it does
/// not count. A self-loop is a cycle of length 1.
fn cycle_length<N>(view: &GraphView<N>, root: usize, tree: &BfsTree) -> Option<usize> {
    if view.successors(root).contains(&root) {
        return Some(1);
    }

    if view.directed {
        return view
            .predecessors(root)
            .iter()
            .filter_map(|&p| tree.dist[p].map(|d| d + 1))
            .min();
    }

    // Two tree paths from different depth-1 branches are vertex-disjoint apart
    // from the root, so any arc joining them closes a simple cycle.
    let mut best: Option<usize> = None;
    for x in 0..view.node_count {
        let Some(dx) = tree.dist[x] else { continue };
        if x == root {
            continue;
        }
        for &y in view.successors(x) {
            if y <= x || y == root || tree.branch[x] == tree.branch[y] {
                continue;
            }
            if let Some(dy) = tree.dist[y] {
                let len = dx + dy + 1;
                best = Some(best.map_or(len, |b| b.min(len)));
            }
        }
    }
    best
}

/// Nodes within `max_depth` hops of `source`, in ascending index order.
///
/// The union of BFS frontiers at depths `1..=max_depth`. `source` itself is
/// included only when a cycle of at most `max_depth` hops leads back to it.
/// Returns an empty vector for `max_depth == 0` or an unknown source.
pub fn neighborhood<N: Clone + Eq + Hash>(
    view: &GraphView<N>,
    source: &N,
    max_depth: usize,
) -> Vec<N> {
    let Some(root) = view.index_of(source) else {
        return Vec::new();
    };
    if max_depth == 0 {
        return Vec::new();
    }

    let tree = bfs_tree(view, root);
    let returns_to_root = cycle_length(view, root, &tree).is_some_and(|len| len <= max_depth);

    (0..view.node_count)
        .filter(|&idx| match tree.dist[idx] {
            Some(0) => returns_to_root,
            Some(d) => d <= max_depth,
            None => false,
        })
        .map(|idx| view.index_to_node[idx].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected(nodes: Vec<u64>, edges: &[(usize, usize)]) -> GraphView<u64> {
        let mut outgoing = vec![Vec::new(); nodes.len()];
        for &(u, v) in edges {
            outgoing[u].push((v, 1.0));
            if u != v {
                outgoing[v].push((u, 1.0));
            }
        }
        GraphView::from_adjacency_list(false, nodes, outgoing)
    }

    fn cycle_through(view: &GraphView<u64>, root: usize) -> Option<usize> {
        cycle_length(view, root, &bfs_tree(view, root))
    }

    fn directed(nodes: Vec<u64>, edges: &[(usize, usize)]) -> GraphView<u64> {
        let mut outgoing = vec![Vec::new(); nodes.len()];
        for &(u, v) in edges {
            outgoing[u].push((v, 1.0));
        }
        GraphView::from_adjacency_list(true, nodes, outgoing)
    }

    #[test]
    fn test_reachability_respects_direction() {
        // 1 -> 2 -> 3, 4 isolated
        let view = directed(vec![1, 2, 3, 4], &[(0, 1), (1, 2)]);

        assert!(is_reachable(&view, &1, &3));
        assert!(!is_reachable(&view, &3, &1));
        assert!(!is_reachable(&view, &1, &4));
        assert!(is_reachable(&view, &4, &4));
        assert!(!is_reachable(&view, &1, &99));
    }

    #[test]
    fn test_bfs_tree_depths_and_branches() {
        // 1 - 2 - 3, 1 - 4, 5 isolated
        let view = undirected(vec![1, 2, 3, 4, 5], &[(0, 1), (1, 2), (0, 3)]);
        let tree = bfs_tree(&view, 0);
        assert_eq!(tree.dist, vec![Some(0), Some(1), Some(2), Some(1), None]);
        assert_eq!(tree.branch[2], 1);
        assert_eq!(tree.branch[3], 3);
        assert!(neighborhood(&view, &42, 3).is_empty());
    }

    #[test]
    fn test_undirected_back_and_forth_is_not_a_cycle() {
        // Path 1 - 2 - 3
        let view = undirected(vec![1, 2, 3], &[(0, 1), (1, 2)]);
        assert_eq!(cycle_through(&view, 0), None);
        assert_eq!(neighborhood(&view, &1, 5), vec![2, 3]);
    }

    #[test]
    fn test_undirected_triangle_cycle() {
        // Triangle 1 - 2 - 3 - 1 with a tail 3 - 4
        let view = undirected(vec![1, 2, 3, 4], &[(0, 1), (1, 2), (2, 0), (2, 3)]);
        assert_eq!(cycle_through(&view, 0), Some(3));
        assert_eq!(cycle_through(&view, 3), None);

        assert_eq!(neighborhood(&view, &1, 2), vec![2, 3, 4]);
        assert_eq!(neighborhood(&view, &1, 3), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_cycle_found_away_from_root() {
        // 1 - 2, 1 - 3, 2 - 4, 3 - 4: square through 1 of length 4
        let view = undirected(vec![1, 2, 3, 4], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert_eq!(cycle_through(&view, 0), Some(4));
    }

    #[test]
    fn test_directed_cycle() {
        // 1 -> 2 -> 1
        let view = directed(vec![1, 2], &[(0, 1), (1, 0)]);
        assert_eq!(cycle_through(&view, 0), Some(2));
        assert_eq!(neighborhood(&view, &1, 1), vec![2]);
        assert_eq!(neighborhood(&view, &1, 2), vec![1, 2]);
    }

    #[test]
    fn test_self_loop() {
        let view = directed(vec![1, 2], &[(0, 0), (0, 1)]);
        assert_eq!(cycle_through(&view, 0), Some(1));
        assert_eq!(neighborhood(&view, &1, 1), vec![1, 2]);

        let view = undirected(vec![1], &[(0, 0)]);
        assert_eq!(cycle_through(&view, 0), Some(1));
    }

    #[test]
    fn test_zero_depth_is_empty() {
        let view = undirected(vec![1, 2], &[(0, 1)]);
        assert!(neighborhood(&view, &1, 0).is_empty());
    }
}
