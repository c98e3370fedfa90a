//! CLI entry point for the `dsk` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use dskit::cli::commands;

#[derive(Parser)]
#[command(
    name = "dsk",
    about = "dskit CLI: BFS shortest paths and min-priority queues"
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

#[derive(Subcommand)]
enum Commands {
    /// Shortest paths from a source vertex
    Paths {
        /// Path to a JSON edge-list file
        file: PathBuf,
        /// Source vertex
        #[arg(long)]
        source: String,
        /// Print the shortest path to this vertex
        #[arg(long)]
        target: Option<String>,
    },
    /// Display vertex and edge counts of an edge-list file
    Info {
        /// Path to a JSON edge-list file
        file: PathBuf,
    },
    /// Print keys in ascending order using a min-priority queue
    Sort {
        /// Keys: numbers, or any other word as a string key
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Paths {
            file,
            source,
            target,
        } => commands::cmd_paths(&file, &source, target.as_deref(), json),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Sort { keys } => commands::cmd_sort(&keys, json),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
