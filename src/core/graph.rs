//! Road network graph
//!
//! Houses are dense integer ids; roads are symmetric weighted edges. Both
//! directions are stored so a search never has to look an edge up backwards.
//! The graph is built once and never mutated afterwards.

use log::debug;
use serde::Serialize;

use super::error::InvalidEdgeError;

/// House identifier (0-based, dense)
pub type NodeId = usize;

/// Raw road definition as supplied by the caller: `(a, b, weight)`
pub type RawEdge = (i64, i64, i64);

/// Largest id space a graph may span; adjacency is allocated densely up to the bound
pub const MAX_NODE_BOUND: usize = 1 << 24;

/// One direction of a road, stored in the adjacency list of its source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub to: NodeId,
    pub weight: u32,
}

/// Immutable adjacency-list graph
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    seen: Vec<bool>,
    node_count: usize,
    edge_count: usize,
}

impl Graph {
    /// Build a graph from a static edge list.
    ///
    /// Fails if any weight is not strictly positive or any id is negative.
    /// The id space covers every node mentioned by an edge.
    pub fn build(edges: &[RawEdge]) -> Result<Self, InvalidEdgeError> {
        Self::build_with_bound(0, edges)
    }

    /// Build a graph whose id space spans at least `node_bound` nodes.
    ///
    /// Nodes below the bound that no edge touches exist but are isolated
    /// (a house with no road).
    ///
    /// Fails with `TooManyNodes` when `node_bound` or any edge id would push
    /// the id space past [`MAX_NODE_BOUND`].
    pub fn build_with_bound(node_bound: usize, edges: &[RawEdge]) -> Result<Self, InvalidEdgeError> {
        if node_bound > MAX_NODE_BOUND {
            return Err(InvalidEdgeError::TooManyNodes {
                requested: node_bound as u64,
                limit: MAX_NODE_BOUND,
            });
        }

        let mut validated = Vec::with_capacity(edges.len());
        let mut bound = node_bound;

        for &(a, b, weight) in edges {
            let (from, to, weight) = validate_edge(a, b, weight)?;
            bound = bound.max(from + 1).max(to + 1);
            validated.push((from, to, weight));
        }

        let mut adjacency = vec![Vec::new(); bound];
        let mut seen = vec![false; bound];

        for &(from, to, weight) in &validated {
            adjacency[from].push(Edge { to, weight });
            adjacency[to].push(Edge { to: from, weight });
            seen[from] = true;
            seen[to] = true;
        }

        let node_count = seen.iter().filter(|&&s| s).count();

        debug!(
            "Built road graph: {} nodes, {} roads, {} node slots",
            node_count,
            validated.len(),
            bound
        );

        Ok(Self {
            adjacency,
            seen,
            node_count,
            edge_count: validated.len(),
        })
    }

    /// Roads leaving `node`, in insertion order. Empty for isolated or unknown nodes.
    pub fn neighbors(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct nodes touched by at least one edge
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Size of the id space; valid node ids are `0..node_bound()`
    pub fn node_bound(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected roads loaded
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether `node` appears in at least one edge
    pub fn contains(&self, node: NodeId) -> bool {
        self.seen.get(node).copied().unwrap_or(false)
    }

    /// Weight of the lightest road between `a` and `b`, if any
    pub fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<u32> {
        self.neighbors(a)
            .iter()
            .filter(|e| e.to == b)
            .map(|e| e.weight)
            .min()
    }

    /// Total weight of a node sequence, or `None` if some hop is not a road
    pub fn path_cost(&self, nodes: &[NodeId]) -> Option<u64> {
        nodes
            .windows(2)
            .map(|w| self.edge_weight(w[0], w[1]).map(u64::from))
            .sum()
    }
}

fn validate_edge(a: i64, b: i64, weight: i64) -> Result<(NodeId, NodeId, u32), InvalidEdgeError> {
    if a < 0 || b < 0 {
        return Err(InvalidEdgeError::NegativeNode { a, b });
    }
    if weight <= 0 {
        return Err(InvalidEdgeError::NonPositiveWeight { a, b, weight });
    }
    let w = u32::try_from(weight).map_err(|_| InvalidEdgeError::WeightOverflow { a, b, weight })?;
    // Ids are non-negative here, so the widening is lossless
    let largest = a.max(b) as u64;
    if largest >= MAX_NODE_BOUND as u64 {
        return Err(InvalidEdgeError::TooManyNodes {
            requested: largest + 1,
            limit: MAX_NODE_BOUND,
        });
    }
    Ok((a as NodeId, b as NodeId, w))
}
