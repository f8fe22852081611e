//! Forward/return classification of route hops
//!
//! When a route drives the same road in both directions, the renderer draws
//! two offset lines in different colours. This module decides which line each
//! hop belongs to and whether it ends at a real stop (and so gets an arrowhead).

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::compose::Route;
use super::graph::NodeId;

/// Which of the two parallel lines a hop is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Return,
}

/// One hop of a route, ready for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassifiedSegment {
    pub source: NodeId,
    pub destination: NodeId,
    pub direction: Direction,
    /// An arrowhead goes on this hop (its stop-side end is a required stop)
    pub is_arrow_endpoint: bool,
}

/// Strategy for turning a node sequence into rendered segments.
///
/// Classification is independent from composition so that different
/// renderers can reclassify the same route.
pub trait SegmentClassifier {
    fn classify_path(&self, nodes: &[NodeId], stops: &[NodeId]) -> Vec<ClassifiedSegment>;

    fn classify_route(&self, route: &Route) -> Vec<ClassifiedSegment> {
        self.classify_path(&route.nodes, &route.stops)
    }
}

/// Marks a hop `Return` when its reverse was driven earlier in the route.
///
/// Only the hop's own directed key is recorded, never its reverse, so a road
/// driven twice the same way with no return in between stays `Forward`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnAware;

impl SegmentClassifier for ReturnAware {
    fn classify_path(&self, nodes: &[NodeId], stops: &[NodeId]) -> Vec<ClassifiedSegment> {
        let mut seen: FxHashSet<(NodeId, NodeId)> = FxHashSet::default();
        let mut segments = Vec::with_capacity(nodes.len().saturating_sub(1));

        for hop in nodes.windows(2) {
            let (source, destination) = (hop[0], hop[1]);

            let segment = if seen.contains(&(destination, source)) {
                ClassifiedSegment {
                    source,
                    destination,
                    direction: Direction::Return,
                    is_arrow_endpoint: stops.contains(&source),
                }
            } else {
                ClassifiedSegment {
                    source,
                    destination,
                    direction: Direction::Forward,
                    is_arrow_endpoint: stops.contains(&destination),
                }
            };

            seen.insert((source, destination));
            segments.push(segment);
        }

        segments
    }
}

/// Every hop on the forward line; no return-line distinction
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl SegmentClassifier for Uniform {
    fn classify_path(&self, nodes: &[NodeId], stops: &[NodeId]) -> Vec<ClassifiedSegment> {
        nodes
            .windows(2)
            .map(|hop| ClassifiedSegment {
                source: hop[0],
                destination: hop[1],
                direction: Direction::Forward,
                is_arrow_endpoint: stops.contains(&hop[1]),
            })
            .collect()
    }
}

/// Classify a composed route with the default return-aware rule
pub fn classify(route: &Route) -> Vec<ClassifiedSegment> {
    ReturnAware.classify_route(route)
}

/// Classify a bare node sequence against a set of required stops
pub fn classify_path(nodes: &[NodeId], stops: &[NodeId]) -> Vec<ClassifiedSegment> {
    ReturnAware.classify_path(nodes, stops)
}
