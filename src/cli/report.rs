//! Output rendering for the command-line interface
//!
//! Stands in for the graphical renderer: classified segments are printed as a
//! plain-text listing or as JSON for other tools.

use carpool_route::{ClassifiedSegment, Direction, NodeId, Route, RoutePolicy, ShortestPath};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Waypoint ordering policy as spelled on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Visit waypoints in the order given
    #[default]
    Fixed,
    /// Greedy nearest-neighbour ordering
    Nearest,
}

impl From<PolicyArg> for RoutePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Fixed => RoutePolicy::FixedOrder,
            PolicyArg::Nearest => RoutePolicy::NearestNeighbour,
        }
    }
}

/// Everything a renderer needs for one routing request
#[derive(Debug, Serialize)]
pub struct RouteReport {
    pub policy: RoutePolicy,
    pub route: Route,
    pub segments: Vec<ClassifiedSegment>,
}

impl RouteReport {
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Route: {}", join_nodes(&self.route.nodes));
        let _ = writeln!(out, "Stops: {}", join_nodes(&self.route.stops));
        let _ = writeln!(out, "Total weight: {}", self.route.cost);
        if !self.route.skipped.is_empty() {
            let _ = writeln!(out, "Skipped (unreachable): {}", join_nodes(&self.route.skipped));
        }
        let _ = writeln!(out, "Segments:");
        for segment in &self.segments {
            let _ = writeln!(out, "  {}", format_segment(segment));
        }
        out
    }
}

/// Single shortest-path lookup result
#[derive(Debug, Serialize)]
pub struct PathReport {
    pub from: NodeId,
    pub to: NodeId,
    pub nodes: Vec<NodeId>,
    pub cost: u64,
}

impl PathReport {
    pub fn new(from: NodeId, to: NodeId, path: ShortestPath) -> Self {
        Self {
            from,
            to,
            nodes: path.nodes,
            cost: path.cost,
        }
    }

    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(format!(
                "Path {} -> {}: {} (weight {})\n",
                self.from,
                self.to,
                join_nodes(&self.nodes),
                self.cost
            )),
        }
    }
}

fn join_nodes(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn format_segment(segment: &ClassifiedSegment) -> String {
    let direction = match segment.direction {
        Direction::Forward => "forward",
        Direction::Return => "return ",
    };
    let arrow = if segment.is_arrow_endpoint { "  [arrow]" } else { "" };
    format!(
        "{:>3} -> {:<3} {}{}",
        segment.source, segment.destination, direction, arrow
    )
}
