//! CLI entry point for the `lgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use labgraph::cli::commands;
use labgraph::{DirectedGraph, GraphError, GraphKind, GraphMut, ReverseGraph, UndirectedGraph};

#[derive(Parser)]
#[command(
    name = "lgraph",
    about = "lgraph — inspect and edit graphs stored in the labgraph text format"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Graph variant used to load files: directed, undirected, or reverse
    #[arg(long, default_value = "directed")]
    kind: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display statistics about a graph file
    Info {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Rewrite a graph file with freshly numbered ids
    Normalize {
        /// Path to the graph file
        file: PathBuf,
        /// Write here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Compare two graph files by node label (exit status 1 when they differ)
    Compare {
        /// First graph file
        left: PathBuf,
        /// Second graph file
        right: PathBuf,
    },
    /// Add a node with a new label
    AddNode {
        /// Path to the graph file
        file: PathBuf,
        /// Label of the new node
        label: String,
    },
    /// Remove a node and all its edges
    RemoveNode {
        /// Path to the graph file
        file: PathBuf,
        /// Label of the node to remove
        label: String,
    },
    /// Add an edge between two labeled nodes
    AddEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Label of the tail node
        tail: String,
        /// Label of the head node
        head: String,
    },
    /// Remove an edge between two labeled nodes
    RemoveEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Label of the tail node
        tail: String,
        /// Label of the head node
        head: String,
    },
}

/// Run one command against graph variant `G`, returning the exit status.
fn run<G>(command: Commands, json: bool) -> labgraph::GraphResult<i32>
where
    G: GraphMut<Value = String> + Default,
{
    match command {
        Commands::Info { file } => commands::cmd_info::<G>(&file, json)?,
        Commands::Normalize { file, output } => {
            commands::cmd_normalize::<G>(&file, output.as_deref())?
        }
        Commands::Compare { left, right } => {
            let equal = commands::cmd_compare::<G>(&left, &right, json)?;
            return Ok(if equal { 0 } else { 1 });
        }
        Commands::AddNode { file, label } => commands::cmd_add_node::<G>(&file, &label, json)?,
        Commands::RemoveNode { file, label } => {
            commands::cmd_remove_node::<G>(&file, &label, json)?
        }
        Commands::AddEdge { file, tail, head } => {
            commands::cmd_add_edge::<G>(&file, &tail, &head, json)?
        }
        Commands::RemoveEdge { file, tail, head } => {
            commands::cmd_remove_edge::<G>(&file, &tail, &head, json)?
        }
    }
    Ok(0)
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let kind = match GraphKind::from_name(&cli.kind) {
        Some(kind) => kind,
        None => {
            eprintln!("Invalid graph kind: {}", cli.kind);
            process::exit(2);
        }
    };
    log::debug!("loading graphs as {}", kind);

    let result = match kind {
        GraphKind::Directed => run::<DirectedGraph<String>>(cli.command, json),
        GraphKind::Undirected => run::<UndirectedGraph<String>>(cli.command, json),
        GraphKind::Reverse => run::<ReverseGraph<String>>(cli.command, json),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match &e {
                GraphError::Io(_) => 5,
                GraphError::MalformedInput { .. } | GraphError::UnwritableValue(_) => 2,
                GraphError::AmbiguousLabels
                | GraphError::LabelExists(_)
                | GraphError::LabelNotFound(_) => 3,
                GraphError::DuplicateEdge { .. }
                | GraphError::Loop(_)
                | GraphError::EdgeNotFound { .. }
                | GraphError::NodeNotFound(_) => 4,
            };
            process::exit(code);
        }
    }
}
