//! One demonstration per algorithm.
//!
//! A [`Session`] owns the terminal output and the run settings. Each
//! demonstration prints an introduction, runs its algorithm with the terminal
//! observer (paced, unless the session is quiet), and prints the result and
//! the elapsed time.

use std::{io::Write, time::Instant};

use anyhow::Context;

use algoviz_algorithms::{
    dynamic::knapsack,
    graph::{WeightedGraph, dijkstra},
    searching::binary,
    sorting::bubble,
};
use algoviz_observers::{ChartObserver, Pace, Paced, TerminalObserver, terminal::Config};

/// Run settings shared by every demonstration.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub pace: Pace,
    pub color: bool,
    pub quiet: bool,
    pub plot: bool,
}

pub struct Session<W: Write> {
    terminal: TerminalObserver<W>,
    settings: Settings,
}

impl<W: Write> Session<W> {
    pub fn new(out: W, settings: Settings) -> Self {
        if settings.plot && !cfg!(feature = "plot") {
            tracing::warn!("built without the `plot` feature, ignoring --plot");
        }
        Self {
            terminal: TerminalObserver::new(out, Config::new().color(settings.color)),
            settings,
        }
    }

    pub fn terminal(&mut self) -> &mut TerminalObserver<W> {
        &mut self.terminal
    }

    /// Flushes and returns the output writer.
    pub fn finish(self) -> anyhow::Result<W> {
        self.terminal.finish().context("failed to write output")
    }

    pub fn sort(&mut self, numbers: &[i64]) -> anyhow::Result<()> {
        let out = &mut self.terminal;
        out.heading("\n=== BUBBLE SORT DEMONSTRATION ===")?;
        out.plain("Bubble Sort compares adjacent elements and swaps them if they're in wrong order.")?;
        out.sequence("\nOriginal array", numbers)?;
        self.announce("\nSorting process:")?;

        let mut sorted = numbers.to_vec();
        let start = Instant::now();
        let solution = bubble::sort(&mut sorted, self.observer());
        let elapsed = start.elapsed();
        self.check_steps()?;
        tracing::info!(
            len = numbers.len(),
            comparisons = solution.comparisons,
            swaps = solution.swaps,
            "sorted"
        );

        self.terminal.sorted(&sorted, &solution)?;
        self.terminal.elapsed(elapsed)?;

        self.replay("Bubble sort", |chart| {
            bubble::sort(&mut numbers.to_vec(), chart);
        })
    }

    /// Sorts `numbers` and searches the result for `target`.
    pub fn search(&mut self, numbers: &[i64], target: i64) -> anyhow::Result<()> {
        let mut sorted = numbers.to_vec();
        sorted.sort_unstable();

        let out = &mut self.terminal;
        out.heading("\n=== BINARY SEARCH DEMONSTRATION ===")?;
        out.plain(
            "Binary Search finds an element in a sorted array by repeatedly dividing the search space.",
        )?;
        out.sequence("\nSorted array", &sorted)?;
        out.plain(format!("Target: {target}"))?;
        self.announce("\nSearch process:")?;

        let start = Instant::now();
        let solution = binary::search(&sorted, &target, self.observer());
        let elapsed = start.elapsed();
        self.check_steps()?;
        tracing::info!(len = sorted.len(), probes = solution.probes, index = ?solution.index, "searched");

        self.terminal.search_result(&target, &solution)?;
        self.terminal.elapsed(elapsed)?;

        self.replay("Binary search", |chart| {
            binary::search(&sorted, &target, chart);
        })
    }

    pub fn dijkstra(&mut self, graph: &WeightedGraph, start_node: &str) -> anyhow::Result<()> {
        let out = &mut self.terminal;
        out.heading("\n=== DIJKSTRA'S ALGORITHM DEMONSTRATION ===")?;
        out.plain("Dijkstra finds the shortest path from a start node to all other nodes.")?;
        out.plain(format!("\nGraph: {graph}"))?;
        out.plain(format!("Start node: {start_node}"))?;
        if !graph.contains(start_node) {
            out.failure(format!("{start_node} is not in the graph; every other node is unreachable."))?;
        }
        self.announce("\nFinding shortest paths:")?;

        let start = Instant::now();
        let solution = dijkstra::solve(graph, start_node, self.observer());
        let elapsed = start.elapsed();
        self.check_steps()?;
        tracing::info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            finalized = solution.finalized.len(),
            "shortest paths found"
        );

        self.terminal.distances(start_node, &solution.distances)?;
        self.terminal.elapsed(elapsed)?;

        self.replay("Dijkstra", |chart| {
            dijkstra::solve(graph, start_node, chart);
        })
    }

    /// Runs a knapsack problem. `weights` and `values` must be the same length.
    pub fn knapsack(
        &mut self,
        weights: &[usize],
        values: &[u64],
        capacity: usize,
    ) -> anyhow::Result<()> {
        let out = &mut self.terminal;
        out.heading("\n=== 0/1 KNAPSACK DEMONSTRATION ===")?;
        out.plain("Knapsack problem: maximize value while staying within weight capacity.")?;
        out.sequence("\nWeights", weights)?;
        out.sequence("Values", values)?;
        out.plain(format!("Capacity: {capacity}"))?;
        self.announce("\nBuilding solution table:")?;

        let start = Instant::now();
        let solution = knapsack::solve(weights, values, capacity, self.observer());
        let elapsed = start.elapsed();
        self.check_steps()?;
        tracing::info!(
            items = weights.len(),
            capacity,
            best_value = solution.best_value,
            "knapsack solved"
        );

        self.terminal.knapsack_result(&solution)?;
        self.terminal.elapsed(elapsed)?;

        self.replay("0/1 knapsack", |chart| {
            knapsack::solve(weights, values, capacity, chart);
        })
    }

    /// The observer for a run: the paced terminal, or none when quiet.
    fn observer(&mut self) -> Option<Paced<&mut TerminalObserver<W>>> {
        (!self.settings.quiet).then(|| Paced::new(&mut self.terminal, self.settings.pace))
    }

    /// Prints the heading of the step listing, unless steps are hidden.
    fn announce(&mut self, text: &str) -> anyhow::Result<()> {
        if !self.settings.quiet {
            self.terminal.success(text)?;
        }
        Ok(())
    }

    /// Surfaces a write error that stopped the last run.
    fn check_steps(&mut self) -> anyhow::Result<()> {
        match self.terminal.take_error() {
            Some(error) => Err(error).context("failed to write step output"),
            None => Ok(()),
        }
    }

    /// Records the run again as chart frames and shows them, if requested.
    #[cfg(feature = "plot")]
    fn replay(&self, title: &str, record: impl FnOnce(&mut ChartObserver)) -> anyhow::Result<()> {
        if !self.settings.plot {
            return Ok(());
        }
        let mut chart = ChartObserver::new();
        record(&mut chart);
        tracing::debug!(frames = chart.frames().len(), "opening chart window");
        chart
            .show(title)
            .map_err(|error| anyhow::anyhow!("failed to open the chart window: {error}"))
    }

    #[cfg(not(feature = "plot"))]
    #[allow(clippy::unused_self, clippy::unnecessary_wraps)]
    fn replay(&self, _title: &str, _record: impl FnOnce(&mut ChartObserver)) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(quiet: bool) -> Session<Vec<u8>> {
        Session::new(
            Vec::new(),
            Settings {
                pace: Pace::none(),
                color: false,
                quiet,
                plot: false,
            },
        )
    }

    fn output(session: Session<Vec<u8>>) -> String {
        String::from_utf8(session.finish().expect("output")).expect("utf-8")
    }

    #[test]
    fn sort_prints_original_steps_and_result() {
        let mut session = session(false);
        session.sort(&[5, 2, 8, 1, 9]).unwrap();

        let text = output(session);
        assert!(text.contains("Original array: [5, 2, 8, 1, 9]"));
        assert!(text.contains("Comparing 5 and 2"));
        assert!(text.contains("Final sorted array: [1, 2, 5, 8, 9]"));
        assert!(text.contains("Time taken:"));
    }

    #[test]
    fn quiet_session_skips_steps() {
        let mut session = session(true);
        session.sort(&[2, 1]).unwrap();

        let text = output(session);
        assert!(!text.contains("Comparing"));
        assert!(!text.contains("Sorting process:"));
        assert!(text.contains("Final sorted array: [1, 2]"));
    }

    #[test]
    fn search_sorts_input_first() {
        let mut session = session(true);
        session.search(&[9, 1, 8, 2, 5], 8).unwrap();

        let text = output(session);
        assert!(text.contains("Sorted array: [1, 2, 5, 8, 9]"));
        assert!(text.contains("Found 8 at index 3!"));
    }

    #[test]
    fn dijkstra_warns_about_unknown_start() {
        let graph: WeightedGraph = "A:B,1".parse().unwrap();
        let mut session = session(true);
        session.dijkstra(&graph, "Z").unwrap();

        let text = output(session);
        assert!(text.contains("Z is not in the graph"));
        assert!(text.contains("A: ∞ (unreachable)"));
        assert!(text.contains("Z: 0"));
    }

    #[test]
    fn knapsack_reports_best_value() {
        let mut session = session(false);
        session.knapsack(&[1, 3, 4, 5], &[1, 4, 5, 7], 7).unwrap();

        let text = output(session);
        assert!(text.contains("Filling dp[4][7]"));
        assert!(text.contains("Maximum value: 9"));
        assert!(text.contains("Selected items: [1, 2]"));
    }
}
