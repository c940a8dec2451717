//! CLI entry point for the `adjm` command-line tool.

use std::process;

use clap::{Args, Parser, Subcommand};

use adj_matrix::cli::commands;
use adj_matrix::types::Edge;
use adj_matrix::{Graph, GraphError, GraphResult};

#[derive(Parser)]
#[command(
    name = "adjm",
    about = "adjm — build a simple graph from an edge list and render it"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GraphArgs {
    /// Number of nodes (at least 1)
    #[arg(long, short)]
    nodes: usize,
    /// Build a directed graph
    #[arg(long, short)]
    directed: bool,
    /// Edge to add, as U-V (repeatable)
    #[arg(long = "edge", short = 'e')]
    edges: Vec<String>,
    /// Edge to remove after all additions, as U-V (repeatable)
    #[arg(long = "remove", short = 'r')]
    removals: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency matrix
    Matrix(GraphArgs),
    /// Print the DOT description
    Dot(GraphArgs),
    /// Print node and edge statistics
    Stats(GraphArgs),
}

fn parse_pairs(raw: &[String]) -> Vec<Edge> {
    raw.iter()
        .map(|s| match commands::parse_edge_pair(s) {
            Some(edge) => edge,
            None => {
                eprintln!("Invalid edge: {} (expected U-V)", s);
                process::exit(3);
            }
        })
        .collect()
}

fn run(
    args: &GraphArgs,
    json: bool,
    render: fn(&Graph, bool) -> GraphResult<()>,
) -> GraphResult<()> {
    let add = parse_pairs(&args.edges);
    let remove = parse_pairs(&args.removals);
    let graph = commands::build_graph(args.nodes, args.directed, &add, &remove)?;
    render(&graph, json)
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Matrix(args) => run(&args, json, commands::cmd_matrix),
        Commands::Dot(args) => run(&args, json, commands::cmd_dot),
        Commands::Stats(args) => run(&args, json, commands::cmd_stats),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::EmptyGraph => 3,
            GraphError::Allocation { .. } => 5,
        };
        process::exit(code);
    }
}
