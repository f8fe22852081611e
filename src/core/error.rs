//! Error types for the carpool routing core
//!
//! Three layers: malformed graph input, a single unreachable pair, and the
//! request-level error handed back to the caller of `route()`.

use thiserror::Error;

use super::graph::NodeId;

/// Rejected edge definition. Fatal at load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidEdgeError {
    /// Dijkstra is undefined for zero or negative weights
    #[error("edge ({a}, {b}) has non-positive weight {weight}")]
    NonPositiveWeight { a: i64, b: i64, weight: i64 },

    #[error("edge ({a}, {b}) references a negative node id")]
    NegativeNode { a: i64, b: i64 },

    #[error("edge ({a}, {b}) weight {weight} does not fit in 32 bits")]
    WeightOverflow { a: i64, b: i64, weight: i64 },

    #[error("node id space of {requested} exceeds the limit of {limit} houses")]
    TooManyNodes { requested: u64, limit: usize },
}

/// No path exists between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no path from node {from} to node {to}")]
pub struct NotFoundError {
    pub from: NodeId,
    pub to: NodeId,
}

/// Request-level failure surfaced to the caller of `route()`.
///
/// The core never reports a partial route as success; every true failure is
/// one of these variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    #[error("route cannot be completed: {0}")]
    Unreachable(#[from] NotFoundError),

    #[error("invalid routing request: {0}")]
    InvalidInput(String),

    #[error("node {node} is out of range (graph has {bound} node slots)")]
    NodeOutOfRange { node: NodeId, bound: usize },
}

/// Convenience result type for routing requests
pub type Result<T> = std::result::Result<T, RoutingError>;
