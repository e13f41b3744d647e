//! Colored terminal rendering.
//!
//! [`TerminalObserver`] prints each step of any algorithm to a writer, with
//! the elements the step is about highlighted in color. It also prints the
//! final results, so a driver can use one value for the whole session.
//!
//! Output is plain text when color is disabled in the [`Config`], or when
//! `colored` is told not to colorize (e.g. `NO_COLOR` is set).

use std::{
    fmt::Display,
    io::{self, Write},
    time::Duration,
};

use algoviz_algorithms::{
    dynamic::knapsack,
    graph::{DistanceTable, dijkstra},
    searching::binary,
    sorting::bubble,
};
use algoviz_core::Observer;
use colored::{Color, Colorize};

use crate::traits::{CanStopEarly, StepLabel};

/// Configuration for a [`TerminalObserver`].
///
/// Construct with [`Config::new`] and chain builder methods as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    color: bool,
}

impl Config {
    /// Creates a config with defaults: color enabled.
    #[must_use]
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Enables or disables ANSI colors.
    #[must_use]
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Returns `text`, colored if colors are enabled.
    fn paint(&self, text: impl Display, color: Color) -> String {
        if self.color {
            text.to_string().color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders an event as one or more lines of terminal output.
///
/// Implemented for the events of every algorithm in `algoviz-algorithms`.
pub trait Render {
    /// Writes this event to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    fn render(&self, out: &mut dyn Write, config: &Config) -> io::Result<()>;
}

impl<T: Display> Render for bubble::Event<'_, T> {
    fn render(&self, out: &mut dyn Write, config: &Config) -> io::Result<()> {
        writeln!(out, "{}", config.paint(self.label(), Color::BrightYellow))?;
        let line = sequence_line(self.sequence, config, Color::BrightRed, |i| {
            i == self.left || i == self.right
        });
        writeln!(out, "{line}")
    }
}

impl<T: Display> Render for binary::Event<'_, T> {
    fn render(&self, out: &mut dyn Write, config: &Config) -> io::Result<()> {
        writeln!(out, "{}", config.paint(self.label(), Color::BrightYellow))?;
        let range = self.range();
        let line = sequence_line(self.sequence, config, Color::BrightRed, |i| {
            range.contains(&i)
        });
        writeln!(out, "{line}")?;
        let line = sequence_line(self.sequence, config, Color::BrightGreen, |i| i == self.mid);
        writeln!(out, "{line}")
    }
}

impl Render for dijkstra::Event {
    fn render(&self, out: &mut dyn Write, config: &Config) -> io::Result<()> {
        writeln!(out, "{}", config.paint(self.label(), Color::BrightYellow))?;
        let visited = format!("Visited: {{{}}}", self.visited.join(", "));
        writeln!(out, "{}", config.paint(visited, Color::BrightGreen))?;
        let distances = format!("Distances: {}", self.distances);
        writeln!(out, "{}", config.paint(distances, Color::BrightBlue))
    }
}

impl Render for knapsack::Event {
    fn render(&self, out: &mut dyn Write, config: &Config) -> io::Result<()> {
        writeln!(out, "{}", config.paint(self.label(), Color::BrightYellow))?;
        for (i, row) in self.table.rows().iter().enumerate() {
            let line = sequence_line(row, config, Color::BrightGreen, |j| {
                i == self.item || j == self.capacity
            });
            writeln!(out, "{line}")?;
        }
        writeln!(out)
    }
}

/// Joins `items` with spaces, coloring the ones selected by `highlight`.
fn sequence_line<T: Display>(
    items: &[T],
    config: &Config,
    color: Color,
    highlight: impl Fn(usize) -> bool,
) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if highlight(i) {
                config.paint(item, color)
            } else {
                item.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats `items` as `[a, b, c]`.
fn list<T: Display>(items: &[T]) -> String {
    let items: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// An observer that prints every step to a writer.
///
/// A write failure does not panic: the error is stored, the observer asks the
/// algorithm to stop early, and [`take_error`](TerminalObserver::take_error)
/// or [`finish`](TerminalObserver::finish) hands the error back to the caller.
///
/// Pass `&mut TerminalObserver` to an algorithm to keep using the observer
/// (e.g. to print the result) once the run is over.
#[derive(Debug)]
pub struct TerminalObserver<W> {
    out: W,
    config: Config,
    steps: usize,
    error: Option<io::Error>,
}

impl<W: Write> TerminalObserver<W> {
    /// Creates an observer writing to `out`.
    pub fn new(out: W, config: Config) -> Self {
        Self {
            out,
            config,
            steps: 0,
            error: None,
        }
    }

    /// Returns the number of steps rendered so far.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Takes the stored write error, if a step failed to render.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Flushes and returns the writer.
    ///
    /// # Errors
    ///
    /// Returns the stored write error, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    /// Prints a banner line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn heading(&mut self, text: impl Display) -> io::Result<()> {
        self.colored_line(text, Color::BrightMagenta)
    }

    /// Prints an informational line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn info(&mut self, text: impl Display) -> io::Result<()> {
        self.colored_line(text, Color::BrightBlue)
    }

    /// Prints a line announcing a successful outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn success(&mut self, text: impl Display) -> io::Result<()> {
        self.colored_line(text, Color::BrightGreen)
    }

    /// Prints a line announcing a failure or a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn failure(&mut self, text: impl Display) -> io::Result<()> {
        self.colored_line(text, Color::BrightRed)
    }

    /// Prints an uncolored line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn plain(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Prints `text: ` without a newline and flushes, ready for user input.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or flushing fails.
    pub fn prompt(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.out, "{text}: ")?;
        self.out.flush()
    }

    /// Prints a sequence as `label: [a, b, c]`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn sequence<T: Display>(&mut self, label: &str, items: &[T]) -> io::Result<()> {
        writeln!(self.out, "{label}: {}", list(items))
    }

    /// Prints the outcome of a bubble sort.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn sorted<T: Display>(
        &mut self,
        items: &[T],
        solution: &bubble::Solution,
    ) -> io::Result<()> {
        match solution.status {
            bubble::Status::Complete => {
                self.success(format!("Final sorted array: {}", list(items)))
            }
            bubble::Status::StoppedByObserver => {
                self.failure(format!("Sorting stopped early: {}", list(items)))
            }
        }
    }

    /// Prints the outcome of a binary search.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn search_result<T: Display>(
        &mut self,
        target: &T,
        solution: &binary::Solution,
    ) -> io::Result<()> {
        match (solution.status, solution.index) {
            (_, Some(index)) => self.success(format!("Found {target} at index {index}!")),
            (binary::Status::Complete, None) => {
                self.failure(format!("{target} not found in array."))
            }
            (binary::Status::StoppedByObserver, None) => {
                self.failure(format!("Search for {target} stopped early."))
            }
        }
    }

    /// Prints the shortest distances from `start`, one node per line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn distances(&mut self, start: &str, distances: &DistanceTable) -> io::Result<()> {
        self.success(format!("\nShortest distances from {start}:"))?;
        for (node, distance) in distances.iter() {
            match distance.finite() {
                Some(length) => writeln!(self.out, "{node}: {length}")?,
                None => writeln!(self.out, "{node}: ∞ (unreachable)")?,
            }
        }
        Ok(())
    }

    /// Prints the outcome of a knapsack run.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn knapsack_result(&mut self, solution: &knapsack::Solution) -> io::Result<()> {
        match solution.status {
            knapsack::Status::Complete => {
                self.success(format!("Maximum value: {}", solution.best_value))?;
                self.info(format!("Selected items: {}", list(&solution.selected)))
            }
            knapsack::Status::StoppedByObserver => self.failure(format!(
                "Stopped early, best value so far: {}",
                solution.best_value
            )),
        }
    }

    /// Prints how long a run took.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn elapsed(&mut self, elapsed: Duration) -> io::Result<()> {
        let text = format!("⏱️  Time taken: {:.4} seconds", elapsed.as_secs_f64());
        self.colored_line(text, Color::BrightCyan)
    }

    fn colored_line(&mut self, text: impl Display, color: Color) -> io::Result<()> {
        let line = self.config.paint(text, color);
        writeln!(self.out, "{line}")
    }

    fn render_step<E: Render, A: CanStopEarly>(&mut self, event: &E) -> Option<A> {
        if self.error.is_some() {
            return Some(A::stop_early());
        }
        match event.render(&mut self.out, &self.config) {
            Ok(()) => {
                self.steps += 1;
                None
            }
            Err(error) => {
                tracing::warn!(%error, steps = self.steps, "terminal output failed, stopping run");
                self.error = Some(error);
                Some(A::stop_early())
            }
        }
    }
}

impl<W, E, A> Observer<E, A> for TerminalObserver<W>
where
    W: Write,
    E: Render,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.render_step(event)
    }
}

/// Allows `&mut TerminalObserver<W>` to be passed to algorithms that take an
/// observer by value, so the observer can print results after the run.
impl<W, E, A> Observer<E, A> for &mut TerminalObserver<W>
where
    W: Write,
    E: Render,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).render_step(event)
    }
}
