//! Single-source shortest paths over the road graph
//!
//! Plain Dijkstra with a binary min-heap and lazy deletion: improved
//! distances are pushed again and stale heap entries are skipped on pop.
//! All search state lives in the call and is dropped on return.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::trace;

use super::error::NotFoundError;
use super::graph::{Graph, NodeId};

/// Distance sentinel for nodes the search never reached
const UNREACHED: u64 = u64::MAX;

/// Node sequence from start to end plus its total weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    pub nodes: Vec<NodeId>,
    pub cost: u64,
}

/// Result of one single-source search: distances and predecessors for every node
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeId,
    dist: Vec<u64>,
    prev: Vec<Option<NodeId>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Shortest distance from the source, `None` when unreachable
    pub fn distance(&self, node: NodeId) -> Option<u64> {
        if node == self.source {
            return Some(0);
        }
        match self.dist.get(node) {
            Some(&d) if d != UNREACHED => Some(d),
            _ => None,
        }
    }

    /// Reconstruct the path to `end` by walking predecessors back to the source
    pub fn path_to(&self, end: NodeId) -> Result<ShortestPath, NotFoundError> {
        let not_found = NotFoundError {
            from: self.source,
            to: end,
        };
        let cost = self.distance(end).ok_or(not_found)?;
        if end == self.source {
            return Ok(ShortestPath {
                nodes: vec![end],
                cost,
            });
        }

        let mut nodes = vec![end];
        let mut at = end;
        while let Some(p) = self.prev[at] {
            nodes.push(p);
            at = p;
        }
        nodes.reverse();

        if nodes.first() != Some(&self.source) {
            return Err(not_found);
        }

        Ok(ShortestPath { nodes, cost })
    }
}

/// Run Dijkstra from `start` until the queue is exhausted.
///
/// A `start` outside the graph yields a tree where only `start` itself is
/// reachable. Search state never grows past the graph's node bound.
pub fn shortest_path_tree(graph: &Graph, start: NodeId) -> ShortestPathTree {
    let n = graph.node_bound();
    let mut dist = vec![UNREACHED; n];
    let mut prev: Vec<Option<NodeId>> = vec![None; n];

    if start >= n {
        trace!("Dijkstra from {}: outside the graph, nothing to settle", start);
        return ShortestPathTree {
            source: start,
            dist,
            prev,
        };
    }

    let mut heap = BinaryHeap::new();

    dist[start] = 0;
    heap.push(Reverse((0u64, start)));

    let mut settled = 0usize;
    while let Some(Reverse((d, node))) = heap.pop() {
        // Stale entry: a shorter distance was recorded after this push
        if d > dist[node] {
            continue;
        }
        settled += 1;

        for edge in graph.neighbors(node) {
            let candidate = d + u64::from(edge.weight);
            if candidate < dist[edge.to] {
                dist[edge.to] = candidate;
                prev[edge.to] = Some(node);
                heap.push(Reverse((candidate, edge.to)));
            }
        }
    }

    trace!("Dijkstra from {}: {} pops settled", start, settled);

    ShortestPathTree {
        source: start,
        dist,
        prev,
    }
}

/// Shortest path from `start` to `end`.
///
/// `start == end` yields the single-node path. An unreachable `end` is a
/// `NotFoundError`, never a partial path.
pub fn shortest_path(graph: &Graph, start: NodeId, end: NodeId) -> Result<ShortestPath, NotFoundError> {
    if start == end {
        return Ok(ShortestPath {
            nodes: vec![start],
            cost: 0,
        });
    }
    shortest_path_tree(graph, start).path_to(end)
}
