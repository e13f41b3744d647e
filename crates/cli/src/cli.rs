//! Command-line arguments.

use clap::{Parser, Subcommand};

/// Step-by-step visualizations of classic algorithms
#[derive(Parser, Debug)]
#[command(name = "algoviz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Pause after each step, in milliseconds
    #[arg(long, global = true, env = "ALGOVIZ_DELAY_MS", default_value_t = 500)]
    pub delay_ms: u64,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results only, without the individual steps
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Open a chart window to replay the steps after each run
    #[arg(long, global = true)]
    pub plot: bool,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Bubble sort comma-separated integers
    Sort {
        /// Numbers to sort, e.g. "5,2,8,1,9"
        #[arg(allow_hyphen_values = true)]
        numbers: String,
    },

    /// Binary search comma-separated integers (sorted first)
    Search {
        /// Numbers to search, e.g. "5,2,8,1,9"
        #[arg(allow_hyphen_values = true)]
        numbers: String,

        /// Number to look for
        #[arg(allow_hyphen_values = true)]
        target: i64,
    },

    /// Shortest distances from a start node with Dijkstra's algorithm
    Dijkstra {
        /// Adjacency list, e.g. "A:B,4;C,2 B:C,1;D,5 C:D,3"
        graph: String,

        /// Node to measure distances from
        start: String,
    },

    /// Solve a 0/1 knapsack problem
    Knapsack {
        /// Item weights, e.g. "1,3,4,5"
        #[arg(long)]
        weights: String,

        /// Item values, e.g. "1,4,5,7"
        #[arg(long)]
        values: String,

        /// Knapsack capacity
        #[arg(long)]
        capacity: usize,
    },

    /// Interactive menu (the default)
    Menu,
}
