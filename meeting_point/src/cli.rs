use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "meeting-point",
    about = "Cheapest meeting location for a set of branches",
    version
)]
pub struct Cli {
    /// Log each algorithm phase to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Read a problem and print the meeting point.
    Solve {
        /// Problem file; stdin when omitted.
        input: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Fail on a negative cycle instead of truncating relaxation.
        #[arg(long)]
        strict: bool,
        /// Also print the route from each branch to the meeting point.
        #[arg(long)]
        paths: bool,
        /// Dump the parsed graph to stderr before solving.
        #[arg(long = "show-graph")]
        show_graph: bool,
    },
    /// Read a problem and print its adjacency lists.
    ShowGraph {
        input: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
