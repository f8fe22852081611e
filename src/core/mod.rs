//! Core routing modules for carpool-route
//!
//! Leaves first: graph model, shortest-path engine, route composer, and the
//! forward/return classifier consumed by renderers.

pub mod error;
pub mod graph;
pub mod dijkstra;
pub mod compose;
pub mod classify;
pub mod network;

// Re-export main types for internal use
pub use graph::{Edge, Graph, NodeId, RawEdge, MAX_NODE_BOUND};
pub use dijkstra::{shortest_path, shortest_path_tree, ShortestPath, ShortestPathTree};
pub use compose::{compose_route, Route, RoutePolicy};
pub use classify::{ClassifiedSegment, Direction, ReturnAware, SegmentClassifier, Uniform};
