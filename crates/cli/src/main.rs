//! algoviz - step-by-step visualizations of classic algorithms.
//!
//! Runs bubble sort, binary search, Dijkstra's shortest paths, or a 0/1
//! knapsack in the terminal, printing every step as it happens. Without a
//! subcommand, an interactive menu asks for the algorithm and its input.

mod cli;
mod demos;
mod input;
mod logging;
mod menu;

use std::{io, process::ExitCode};

use anyhow::Context;
use clap::Parser;

use algoviz_algorithms::graph::WeightedGraph;
use algoviz_observers::Pace;

use cli::{Cli, Command};
use demos::{Session, Settings};
use menu::Menu;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    let settings = Settings {
        pace: Pace::from_millis(cli.delay_ms).context("invalid --delay-ms")?,
        color: !cli.no_color,
        quiet: cli.quiet,
        plot: cli.plot,
    };
    tracing::debug!(?settings, command = ?cli.command, "starting");

    let mut session = Session::new(io::stdout().lock(), settings);

    match cli.command.unwrap_or(Command::Menu) {
        Command::Sort { numbers } => {
            let numbers: Vec<i64> = input::parse_sequence(&numbers).context("invalid numbers")?;
            session.sort(&numbers)?;
        }
        Command::Search { numbers, target } => {
            let numbers: Vec<i64> = input::parse_sequence(&numbers).context("invalid numbers")?;
            session.search(&numbers, target)?;
        }
        Command::Dijkstra { graph, start } => {
            let graph: WeightedGraph = graph.parse().context("invalid graph")?;
            session.dijkstra(&graph, &start)?;
        }
        Command::Knapsack {
            weights,
            values,
            capacity,
        } => {
            let (weights, values) =
                input::parse_items(&weights, &values).context("invalid knapsack items")?;
            let capacity = input::check_capacity(capacity).context("invalid --capacity")?;
            session.knapsack(&weights, &values, capacity)?;
        }
        Command::Menu => {
            session = Menu::new(io::stdin().lock(), session).run()?;
        }
    }

    drop(session.finish()?);
    Ok(())
}
