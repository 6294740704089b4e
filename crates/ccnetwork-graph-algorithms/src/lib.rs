pub mod common;
pub mod pathfinding;
pub mod traversal;

pub use common::GraphView;
pub use pathfinding::{dijkstra, PathResult};
pub use traversal::{is_reachable, neighborhood};
