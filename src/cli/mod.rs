//! CLI-specific utilities for carpool-route
//!
//! This module contains code specific to the command-line interface,
//! separate from the routing core.

pub mod graph_file;
pub mod report;

pub use graph_file::load_graph_source;
pub use report::{OutputFormat, PathReport, PolicyArg, RouteReport};
