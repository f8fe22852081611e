//! Multi-stop route composition
//!
//! Chains pairwise shortest paths into one route through the requested
//! waypoints. Two ordering policies are supported; pick one per session.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::dijkstra::{shortest_path, shortest_path_tree};
use super::error::{NotFoundError, Result, RoutingError};
use super::graph::{Graph, NodeId};

/// How intermediate waypoints are ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoutePolicy {
    /// Visit waypoints in the order given (click order)
    #[default]
    FixedOrder,
    /// Always drive to the closest unvisited waypoint next.
    ///
    /// Greedy approximation; the resulting order is not guaranteed optimal.
    NearestNeighbour,
}

/// A composed route from start to end
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Full node sequence; consecutive nodes are joined by a road
    pub nodes: Vec<NodeId>,
    /// Sum of road weights along `nodes`
    pub cost: u64,
    /// Required stops (start, kept waypoints, end) in request order
    pub stops: Vec<NodeId>,
    /// Waypoints the fixed-order policy could not reach and left out
    pub skipped: Vec<NodeId>,
}

impl Route {
    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn end(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Number of hops (segments) in the route
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn is_stop(&self, node: NodeId) -> bool {
        self.stops.contains(&node)
    }
}

/// Accumulates segments, dropping the joint node each new segment repeats
struct RouteBuilder {
    nodes: Vec<NodeId>,
    cost: u64,
}

impl RouteBuilder {
    fn new(start: NodeId) -> Self {
        Self {
            nodes: vec![start],
            cost: 0,
        }
    }

    fn extend(&mut self, segment: &[NodeId], cost: u64) {
        self.nodes.extend_from_slice(&segment[1..]);
        self.cost += cost;
    }

    fn last(&self) -> NodeId {
        // Never empty: seeded with the start node
        self.nodes[self.nodes.len() - 1]
    }
}

/// Compose a route from `start` to `end` through `waypoints`.
///
/// Waypoints equal to `start` or `end` are ignored. `start` and `end` must lie
/// below the graph's node bound; a waypoint beyond it is a house with no road
/// and is handled by the policy like any other unreachable waypoint.
pub fn compose_route(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
    waypoints: &[NodeId],
    policy: RoutePolicy,
) -> Result<Route> {
    let bound = graph.node_bound();
    for node in [start, end] {
        if node >= bound {
            return Err(RoutingError::NodeOutOfRange { node, bound });
        }
    }

    let waypoints: Vec<NodeId> = waypoints
        .iter()
        .copied()
        .filter(|&w| w != start && w != end)
        .collect();

    if start == end && waypoints.is_empty() {
        return Err(RoutingError::InvalidInput(
            "start and end are the same node and no waypoints were given".to_string(),
        ));
    }

    debug!(
        "Composing {:?} route {} -> {} through {} waypoint(s)",
        policy,
        start,
        end,
        waypoints.len()
    );

    match policy {
        RoutePolicy::FixedOrder => compose_fixed(graph, start, end, waypoints),
        RoutePolicy::NearestNeighbour => compose_nearest(graph, start, end, waypoints),
    }
}

/// Visit `[start, waypoints.., end]` in order.
///
/// An unreachable waypoint is skipped and the next leg starts from the last
/// node actually reached. The final leg to `end` must succeed.
fn compose_fixed(graph: &Graph, start: NodeId, end: NodeId, waypoints: Vec<NodeId>) -> Result<Route> {
    let mut builder = RouteBuilder::new(start);
    let mut stops = vec![start];
    let mut skipped = Vec::new();

    for waypoint in waypoints {
        match shortest_path(graph, builder.last(), waypoint) {
            Ok(segment) => {
                builder.extend(&segment.nodes, segment.cost);
                stops.push(waypoint);
            }
            Err(err) => {
                warn!("Skipping unreachable waypoint {}: {}", waypoint, err);
                skipped.push(waypoint);
            }
        }
    }

    let last_leg = shortest_path(graph, builder.last(), end)?;
    builder.extend(&last_leg.nodes, last_leg.cost);
    stops.push(end);

    Ok(Route {
        nodes: builder.nodes,
        cost: builder.cost,
        stops,
        skipped,
    })
}

/// Greedy nearest-neighbour ordering, then on to `end`.
///
/// One single-source search per step picks the closest unvisited waypoint.
/// If none of the remaining waypoints is reachable the request fails.
fn compose_nearest(graph: &Graph, start: NodeId, end: NodeId, waypoints: Vec<NodeId>) -> Result<Route> {
    let mut builder = RouteBuilder::new(start);
    let mut stops = vec![start];
    let mut remaining = waypoints;

    while !remaining.is_empty() {
        let tree = shortest_path_tree(graph, builder.last());

        // Earliest-listed waypoint wins distance ties
        let best = remaining
            .iter()
            .enumerate()
            .filter_map(|(i, &w)| tree.distance(w).map(|d| (d, i)))
            .min();

        let Some((_, index)) = best else {
            // Report the first candidate as the blocking pair
            return Err(RoutingError::Unreachable(NotFoundError {
                from: builder.last(),
                to: remaining[0],
            }));
        };

        let next = remaining.remove(index);
        let segment = tree.path_to(next)?;
        builder.extend(&segment.nodes, segment.cost);
        stops.push(next);
        // A waypoint listed twice is satisfied by the first visit
        remaining.retain(|&w| w != next);
    }

    let last_leg = shortest_path(graph, builder.last(), end)?;
    builder.extend(&last_leg.nodes, last_leg.cost);
    stops.push(end);

    Ok(Route {
        nodes: builder.nodes,
        cost: builder.cost,
        stops,
        skipped: Vec::new(),
    })
}
