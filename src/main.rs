//! # Carpool-route CLI
//!
//! Command-line front end for the carpool-route library.
//! Routes through the built-in 40-house sample network or a JSON edge list and
//! prints the classified segments a renderer would draw.

use anyhow::{bail, Context, Result};
use carpool_route::{classify, route, shortest_path, Graph, NodeId, RoutePolicy};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

mod cli;

use cli::{load_graph_source, OutputFormat, PathReport, PolicyArg, RouteReport};

/// Command-line interface for carpool-route
#[derive(Parser)]
#[command(name = "carpool-route")]
#[command(about = "Waypoint routing over a small road network")]
#[command(long_about = "Plans carpool routes between houses:
  carpool-route route --start 0 --end 39             # Direct shortest route
  carpool-route route -s 0 -e 39 --via 12 --via 5    # Through waypoints, in click order
  carpool-route route -s 0 -e 39 --via 12 --via 5 --policy nearest
  carpool-route path --from 0 --to 2                 # Single shortest path
  carpool-route info --graph roads.json              # Summarise a custom network

Without --graph the built-in 40-house sample network is used.")]
#[command(version = env!("CARPOOL_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON graph file with an "edges" list of [a, b, weight] and optional "nodes" count
    #[arg(short, long, global = true)]
    graph: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Route from start to end through waypoints and classify each hop
    Route {
        /// Start house
        #[arg(short, long)]
        start: NodeId,
        /// End house
        #[arg(short, long)]
        end: NodeId,
        /// Intermediate house (repeatable, order matters for the fixed policy)
        #[arg(long = "via")]
        waypoints: Vec<NodeId>,
        /// Waypoint ordering policy
        #[arg(short, long, value_enum, default_value_t = PolicyArg::Fixed)]
        policy: PolicyArg,
    },
    /// Shortest path between two houses
    Path {
        #[arg(long)]
        from: NodeId,
        #[arg(long)]
        to: NodeId,
    },
    /// Print a summary of the road network
    Info,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    match run(cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let graph = load_graph_source(cli.graph.as_deref())?;
    info!(
        "Road network ready: {} houses, {} roads",
        graph.node_count(),
        graph.edge_count()
    );

    match cli.command {
        Commands::Route {
            start,
            end,
            waypoints,
            policy,
        } => run_route(&graph, start, end, &waypoints, policy, cli.format),
        Commands::Path { from, to } => run_path(&graph, from, to, cli.format),
        Commands::Info => Ok(describe_graph(&graph)),
    }
}

fn run_route(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
    waypoints: &[NodeId],
    policy: PolicyArg,
    format: OutputFormat,
) -> Result<String> {
    let policy: RoutePolicy = policy.into();
    let route = route(graph, start, end, waypoints, policy)
        .with_context(|| format!("Could not route from {start} to {end}"))?;
    let segments = classify(&route);

    RouteReport {
        policy,
        route,
        segments,
    }
    .render(format)
}

fn run_path(graph: &Graph, from: NodeId, to: NodeId, format: OutputFormat) -> Result<String> {
    let bound = graph.node_bound();
    if from >= bound || to >= bound {
        bail!("House ids must be below {bound}");
    }
    let path = shortest_path(graph, from, to)?;
    PathReport::new(from, to, path).render(format)
}

fn describe_graph(graph: &Graph) -> String {
    let isolated = (0..graph.node_bound()).filter(|&n| !graph.contains(n)).count();
    format!(
        "Houses: {}\nRoads: {}\nIsolated houses: {}\n",
        graph.node_bound(),
        graph.edge_count(),
        isolated
    )
}
