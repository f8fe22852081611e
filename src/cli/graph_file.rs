//! Graph input for the command-line interface
//!
//! The core takes edges as in-memory literals; the CLI reads them from a JSON
//! document or falls back to the built-in sample network.

use anyhow::{Context, Result};
use carpool_route::{sample_graph, Graph, RawEdge};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk graph description
///
/// ```json
/// { "nodes": 40, "edges": [[0, 1, 4], [1, 2, 2]] }
/// ```
#[derive(Debug, Deserialize)]
pub struct GraphFile {
    /// Declared house count; ids below it are valid even without roads
    #[serde(default)]
    pub nodes: Option<usize>,
    pub edges: Vec<RawEdge>,
}

impl GraphFile {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Graph file is not a valid edge list document")
    }

    pub fn into_graph(self) -> Result<Graph> {
        let graph = Graph::build_with_bound(self.nodes.unwrap_or(0), &self.edges)
            .context("Graph file contains an invalid road")?;
        Ok(graph)
    }
}

/// Load the graph from `path`, or the sample network when no path is given
pub fn load_graph_source(path: Option<&Path>) -> Result<Graph> {
    match path {
        Some(path) => {
            debug!("Loading graph from {}", path.display());
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read graph file {}", path.display()))?;
            GraphFile::parse(&text)?.into_graph()
        }
        None => {
            debug!("Using built-in sample network");
            sample_graph().context("Built-in sample network is invalid")
        }
    }
}
