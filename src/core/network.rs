//! Built-in sample road network
//!
//! Forty houses laid out in five irregular rows of eight, joined by
//! horizontal, vertical and diagonal roads.

use super::error::InvalidEdgeError;
use super::graph::{Graph, RawEdge};

/// Number of houses in the sample network (ids `0..40`)
pub const SAMPLE_HOUSES: usize = 40;

#[rustfmt::skip]
const HORIZONTAL: [RawEdge; 35] = [
    (0, 1, 4), (1, 2, 2), (2, 3, 5), (3, 4, 1), (4, 5, 3), (5, 6, 4), (6, 7, 2),
    (8, 9, 3), (9, 10, 5), (10, 11, 1), (11, 12, 4), (12, 13, 3), (13, 14, 2), (14, 15, 5),
    (16, 17, 2), (17, 18, 4), (18, 19, 5), (19, 20, 1), (20, 21, 3), (21, 22, 5), (22, 23, 4),
    (24, 25, 2), (25, 26, 5), (26, 27, 2), (27, 28, 4), (28, 29, 1), (29, 30, 3), (30, 31, 5),
    (32, 33, 1), (33, 34, 3), (34, 35, 2), (35, 36, 5), (36, 37, 4), (37, 38, 1), (38, 39, 2),
];

#[rustfmt::skip]
const VERTICAL: [RawEdge; 32] = [
    (0, 8, 3), (1, 9, 5), (2, 10, 2), (3, 11, 4), (4, 12, 1), (5, 13, 3), (6, 14, 2), (7, 15, 5),
    (8, 16, 4), (9, 17, 1), (10, 18, 3), (11, 19, 5), (12, 20, 2), (13, 21, 4), (14, 22, 5), (15, 23, 1),
    (16, 24, 3), (17, 25, 2), (18, 26, 5), (19, 27, 1), (20, 28, 4), (21, 29, 2), (22, 30, 5), (23, 31, 3),
    (24, 32, 1), (25, 33, 4), (26, 34, 2), (27, 35, 5), (28, 36, 3), (29, 37, 1), (30, 38, 4), (31, 39, 2),
];

#[rustfmt::skip]
const DIAGONAL: [RawEdge; 16] = [
    (0, 9, 3), (1, 10, 2), (2, 11, 4), (8, 17, 3), (9, 18, 5), (10, 19, 2),
    (16, 25, 3), (17, 26, 4), (18, 27, 2), (24, 33, 5), (25, 34, 1), (26, 35, 4),
    (27, 36, 3), (28, 37, 2), (29, 38, 5), (30, 39, 1),
];

/// All sample roads, horizontal first, then vertical, then diagonal
pub fn sample_edges() -> Vec<RawEdge> {
    HORIZONTAL
        .iter()
        .chain(VERTICAL.iter())
        .chain(DIAGONAL.iter())
        .copied()
        .collect()
}

/// Build the sample network
pub fn sample_graph() -> Result<Graph, InvalidEdgeError> {
    Graph::build_with_bound(SAMPLE_HOUSES, &sample_edges())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dijkstra::shortest_path;

    #[test]
    fn test_sample_network_shape() {
        let graph = sample_graph().unwrap();
        assert_eq!(graph.node_count(), SAMPLE_HOUSES);
        assert_eq!(graph.node_bound(), SAMPLE_HOUSES);
        assert_eq!(graph.edge_count(), 83);
    }

    #[test]
    fn test_sample_network_is_connected() {
        let graph = sample_graph().unwrap();
        for house in 1..SAMPLE_HOUSES {
            assert!(shortest_path(&graph, 0, house).is_ok(), "house {house} unreachable");
        }
    }

    #[test]
    fn test_diagonal_shortcut_is_used() {
        // 0 -> 9 directly (3) beats 0 -> 1 -> 9 (9) and 0 -> 8 -> 9 (6)
        let graph = sample_graph().unwrap();
        let path = shortest_path(&graph, 0, 9).unwrap();
        assert_eq!(path.nodes, vec![0, 9]);
        assert_eq!(path.cost, 3);
    }
}
