//! # Carpool-route Library
//!
//! A small waypoint routing engine for fixed road networks: load a weighted
//! undirected graph of houses, route from a start to an end through a set of
//! waypoints, and classify every hop as forward or return so a renderer can
//! draw out-and-back trips as two separated lines.
//!
//! ## Features
//!
//! - **Dijkstra shortest paths**: binary heap with lazy deletion
//! - **Two waypoint policies**: click order, or greedy nearest-neighbour
//! - **Typed failures**: malformed graphs, unreachable pairs and bad requests
//!   are distinct error types, never an empty route
//! - **Renderer-agnostic classification**: forward/return lines and arrowhead
//!   placement, independent from route composition
//!
//! ## Basic Usage
//!
//! ```rust
//! use carpool_route::{classify, load_graph, route, Direction, RoutePolicy};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = load_graph(&[(0, 1, 4), (1, 2, 2), (0, 2, 10)])?;
//!
//! let trip = route(&graph, 0, 0, &[2], RoutePolicy::FixedOrder)?;
//! assert_eq!(trip.nodes, vec![0, 1, 2, 1, 0]);
//! assert_eq!(trip.cost, 12);
//!
//! let segments = classify(&trip);
//! assert_eq!(segments[0].direction, Direction::Forward);
//! assert_eq!(segments[3].direction, Direction::Return);
//! # Ok(())
//! # }
//! ```

// Routing core
pub mod core;

pub use crate::core::classify::classify_path;
pub use crate::core::error::{InvalidEdgeError, NotFoundError, RoutingError};
pub use crate::core::network::{sample_edges, sample_graph, SAMPLE_HOUSES};
pub use crate::core::{
    shortest_path, shortest_path_tree, ClassifiedSegment, Direction, Edge, Graph, NodeId, RawEdge,
    ReturnAware, Route, RoutePolicy, SegmentClassifier, ShortestPath, ShortestPathTree, Uniform,
    MAX_NODE_BOUND,
};

/// Build the routing graph from a static edge list
///
/// Each edge is `(a, b, weight)`; roads are symmetric. Called once at startup.
///
/// # Examples
/// ```rust
/// let graph = carpool_route::load_graph(&[(0, 1, 4), (1, 2, 2)]).unwrap();
/// assert_eq!(graph.node_count(), 3);
///
/// // Zero weights are rejected
/// assert!(carpool_route::load_graph(&[(0, 1, 0)]).is_err());
/// ```
pub fn load_graph(edges: &[RawEdge]) -> Result<Graph, InvalidEdgeError> {
    Graph::build(edges)
}

/// Compose a route from `start` to `end` through `waypoints`
///
/// Called on every selection change. The returned route always starts at
/// `start` and ends at `end`; anything else is a [`RoutingError`].
///
/// # Examples
/// ```rust
/// use carpool_route::{load_graph, route, RoutePolicy};
///
/// let graph = load_graph(&[(0, 1, 1), (1, 2, 1), (2, 3, 1)]).unwrap();
/// let trip = route(&graph, 0, 3, &[2], RoutePolicy::NearestNeighbour).unwrap();
/// assert_eq!(trip.nodes, vec![0, 1, 2, 3]);
/// ```
pub fn route(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
    waypoints: &[NodeId],
    policy: RoutePolicy,
) -> Result<Route, RoutingError> {
    crate::core::compose_route(graph, start, end, waypoints, policy)
}

/// Classify every hop of a route for rendering
///
/// A hop is [`Direction::Return`] when its reverse was driven earlier in the
/// same route; the arrowhead flag marks hops that touch a required stop.
pub fn classify(route: &Route) -> Vec<ClassifiedSegment> {
    crate::core::classify::classify(route)
}
