//! The interactive menu.
//!
//! Reads choices and inputs line by line, re-prompting on invalid input.
//! End of input at any prompt ends the session with a goodbye.

use std::{
    fmt::Display,
    io::{BufRead, Write},
    str::FromStr,
};

use algoviz_algorithms::graph::WeightedGraph;

use crate::{
    demos::Session,
    input::{self, InputError},
};

const RULE: &str = "==================================================";

pub struct Menu<R, W: Write> {
    input: R,
    session: Session<W>,
}

/// A menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Sorting,
    Searching,
    Graph,
    Dynamic,
    Exit,
}

impl Choice {
    fn parse(text: &str) -> Option<Self> {
        match text.parse::<u8>().ok()? {
            1 => Some(Self::Sorting),
            2 => Some(Self::Searching),
            3 => Some(Self::Graph),
            4 => Some(Self::Dynamic),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, session: Session<W>) -> Self {
        Self { input, session }
    }

    /// Runs the menu until the user exits or input ends.
    ///
    /// A failing demonstration is reported and the menu is shown again.
    /// Only failures to read input or write output end the loop early.
    pub fn run(mut self) -> anyhow::Result<Session<W>> {
        let out = self.session.terminal();
        out.heading("Welcome to Algorithm Visualizer!")?;
        out.info("Learn algorithms through step-by-step visualizations.")?;

        loop {
            self.show_choices()?;
            let Some(line) = self.ask("Choose algorithm to learn (1-5)")? else {
                return self.goodbye();
            };

            let outcome = match Choice::parse(&line) {
                Some(Choice::Sorting) => self.sorting(),
                Some(Choice::Searching) => self.searching(),
                Some(Choice::Graph) => self.graph(),
                Some(Choice::Dynamic) => self.dynamic(),
                Some(Choice::Exit) => {
                    self.session
                        .terminal()
                        .heading("\nThank you for learning with us! 🚀")?;
                    return Ok(self.session);
                }
                None => {
                    self.session.terminal().failure("Please choose 1-5.")?;
                    continue;
                }
            };

            match outcome {
                Ok(Some(())) => {}
                Ok(None) => return self.goodbye(),
                Err(error) => {
                    tracing::debug!(error = format!("{error:#}"), "demonstration failed");
                    let out = self.session.terminal();
                    out.failure(format!("Error: {error:#}"))?;
                    out.plain("Please try again.")?;
                }
            }
        }
    }

    fn show_choices(&mut self) -> anyhow::Result<()> {
        let out = self.session.terminal();
        out.info(format!("\n{RULE}"))?;
        out.heading("    ALGORITHM VISUALIZER")?;
        out.info(RULE)?;
        out.plain("\nChoose an algorithm category:")?;
        out.plain("1. Sorting Algorithms")?;
        out.plain("2. Search Algorithms")?;
        out.plain("3. Graph Algorithms")?;
        out.plain("4. Dynamic Programming")?;
        out.plain("5. Exit")?;
        out.info(RULE)?;
        Ok(())
    }

    // Each demonstration returns `Ok(None)` when input ends mid-way.

    fn sorting(&mut self) -> anyhow::Result<Option<()>> {
        let Some(numbers) = self.numbers("Numbers")? else {
            return Ok(None);
        };
        self.session.sort(&numbers)?;
        Ok(Some(()))
    }

    fn searching(&mut self) -> anyhow::Result<Option<()>> {
        let Some(numbers) = self.numbers("Numbers")? else {
            return Ok(None);
        };
        let Some(target) = self.parsed("Enter number to search for", "integer")? else {
            return Ok(None);
        };
        self.session.search(&numbers, target)?;
        Ok(Some(()))
    }

    fn graph(&mut self) -> anyhow::Result<Option<()>> {
        let out = self.session.terminal();
        out.plain(
            "\nEnter graph as adjacency list (format: node1:neighbor1,weight1;neighbor2,weight2)",
        )?;
        out.plain("Example: A:B,4;C,2; B:C,1;D,5; C:D,3")?;

        let graph = loop {
            let Some(line) = self.ask("Graph")? else {
                return Ok(None);
            };
            match line.parse::<WeightedGraph>() {
                Ok(graph) => break graph,
                Err(error) => self
                    .session
                    .terminal()
                    .failure(format!("Please enter a valid graph format ({error})."))?,
            }
        };
        let Some(start) = self.ask("Enter start node")? else {
            return Ok(None);
        };

        self.session.dijkstra(&graph, &start)?;
        Ok(Some(()))
    }

    fn dynamic(&mut self) -> anyhow::Result<Option<()>> {
        self.session.terminal().plain("\nEnter knapsack data:")?;
        let Some(weights) = self.numbers("Weights")? else {
            return Ok(None);
        };
        let Some(values) = self.numbers("Values")? else {
            return Ok(None);
        };
        if weights.len() != values.len() {
            return Err(InputError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            }
            .into());
        }
        let capacity = loop {
            let Some(capacity) = self.parsed("Enter knapsack capacity", "non-negative integer")?
            else {
                return Ok(None);
            };
            match input::check_capacity(capacity) {
                Ok(capacity) => break capacity,
                Err(error) => self
                    .session
                    .terminal()
                    .plain(format!("Please enter a smaller capacity ({error})."))?,
            }
        };

        self.session.knapsack(&weights, &values, capacity)?;
        Ok(Some(()))
    }

    /// Asks for comma-separated numbers until a valid list is entered.
    fn numbers<T: FromStr>(&mut self, prompt: &str) -> anyhow::Result<Option<Vec<T>>> {
        self.session
            .terminal()
            .plain("\nEnter numbers separated by commas (e.g., 5,2,8,1,9):")?;
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match input::parse_sequence(&line) {
                Ok(numbers) => return Ok(Some(numbers)),
                Err(InputError::Empty) => {
                    self.session.terminal().plain("Please enter some numbers.")?;
                }
                Err(error) => self.session.terminal().plain(format!(
                    "Please enter valid integers separated by commas ({error})."
                ))?,
            }
        }
    }

    /// Asks until the answer parses as `T`.
    fn parsed<T: FromStr>(
        &mut self,
        prompt: &str,
        kind: &str,
    ) -> anyhow::Result<Option<T>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match line.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self
                    .session
                    .terminal()
                    .plain(format!("Please enter a valid {kind}."))?,
            }
        }
    }

    /// Prompts until a non-blank line is entered. Returns `None` at end of input.
    fn ask(&mut self, prompt: impl Display) -> anyhow::Result<Option<String>> {
        loop {
            self.session.terminal().prompt(&prompt)?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if !line.is_empty() {
                return Ok(Some(line.to_owned()));
            }
            self.session.terminal().plain("Please enter a valid value.")?;
        }
    }

    fn goodbye(mut self) -> anyhow::Result<Session<W>> {
        self.session.terminal().failure("\nGoodbye! 👋")?;
        Ok(self.session)
    }
}

#[cfg(test)]
mod tests {
    use algoviz_observers::Pace;

    use super::*;
    use crate::demos::Settings;

    fn run(input: &str) -> String {
        let session = Session::new(
            Vec::new(),
            Settings {
                pace: Pace::none(),
                color: false,
                quiet: true,
                plot: false,
            },
        );
        let session = Menu::new(input.as_bytes(), session).run().expect("menu runs");
        String::from_utf8(session.finish().expect("output")).expect("utf-8")
    }

    #[test]
    fn exits_on_choice_five() {
        let text = run("5\n");
        assert!(text.starts_with("Welcome to Algorithm Visualizer!"));
        assert!(text.contains("1. Sorting Algorithms"));
        assert!(text.ends_with("Thank you for learning with us! 🚀\n"));
    }

    #[test]
    fn says_goodbye_at_end_of_input() {
        let text = run("");
        assert!(text.ends_with("Goodbye! 👋\n"));
    }

    #[test]
    fn reprompts_on_invalid_choice() {
        let text = run("9\nabc\n\n5\n");
        assert_eq!(text.matches("Please choose 1-5.").count(), 2);
        assert!(text.contains("Please enter a valid value."));
    }

    #[test]
    fn runs_a_sort_then_returns_to_the_menu() {
        let text = run("1\n5,x\n5,2,8,1,9\n5\n");
        assert!(text.contains("Please enter valid integers separated by commas"));
        assert!(text.contains("Final sorted array: [1, 2, 5, 8, 9]"));
        assert_eq!(text.matches("ALGORITHM VISUALIZER").count(), 2);
    }

    #[test]
    fn searches_with_reprompted_target() {
        let text = run("2\n9,1,8\nnine\n8\n5\n");
        assert!(text.contains("Please enter a valid integer."));
        assert!(text.contains("Found 8 at index 1!"));
    }

    #[test]
    fn runs_dijkstra_after_a_bad_graph() {
        let text = run("3\nA:B\nA:B,4;C,2; B:C,1;D,5; C:D,3\nA\n5\n");
        assert!(text.contains("Please enter a valid graph format"));
        assert!(text.contains("Shortest distances from A:"));
        assert!(text.contains("D: 5"));
    }

    #[test]
    fn mismatched_knapsack_lists_are_reported() {
        let text = run("4\n1,2\n3\n5\n");
        assert!(text.contains("Error: got 2 weights but 1 values"));
        assert!(text.contains("Please try again."));
        assert!(text.ends_with("Thank you for learning with us! 🚀\n"));
    }

    #[test]
    fn reprompts_for_oversized_capacity() {
        let text = run("4\n1,3,4,5\n1,4,5,7\n18446744073709551615\n7\n5\n");
        assert!(text.contains(
            "Please enter a smaller capacity (capacity 18446744073709551615 exceeds the limit of 9999)."
        ));
        assert!(text.contains("Maximum value: 9"));
        assert!(text.ends_with("Thank you for learning with us! 🚀\n"));
    }

    #[test]
    fn runs_knapsack() {
        let text = run("4\n1,3,4,5\n1,4,5,7\n7\n5\n");
        assert!(text.contains("Maximum value: 9"));
    }

    #[test]
    fn input_ending_mid_demonstration_says_goodbye() {
        let text = run("1\n");
        assert!(text.ends_with("Goodbye! 👋\n"));
    }
}
