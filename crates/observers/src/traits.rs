//! Capability traits for cross-algorithm observers.
//!
//! These traits abstract over algorithm-specific event and action types, so
//! one observer type can watch any of the algorithms.
//!
//! # Event traits
//!
//! - [`StepLabel`]: a one-line description of the step
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can cancel a run
//!
//! # Example
//!
//! ```rust
//! use algoviz_core::Observer;
//! use algoviz_observers::traits::{CanStopEarly, StepLabel};
//!
//! /// Prints each step and stops after a fixed number of them.
//! struct FirstSteps {
//!     remaining: usize,
//! }
//!
//! impl<E: StepLabel, A: CanStopEarly> Observer<E, A> for FirstSteps {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         println!("{}", event.label());
//!         self.remaining = self.remaining.saturating_sub(1);
//!         (self.remaining == 0).then(A::stop_early)
//!     }
//! }
//! ```

use std::fmt::Display;

use algoviz_algorithms::{
    dynamic::knapsack,
    graph::dijkstra,
    searching::binary,
    sorting::bubble,
};

/// An event that can describe its step in one line.
pub trait StepLabel {
    /// Returns a short human-readable description of the step.
    fn label(&self) -> String;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the algorithm early.
    fn stop_early() -> Self;
}

// --- StepLabel impls ---

impl<T: Display> StepLabel for bubble::Event<'_, T> {
    fn label(&self) -> String {
        let (left, right) = self.pair();
        if self.swapped {
            // The pair was compared in the opposite order before the swap.
            format!("Comparing {right} and {left}")
        } else {
            format!("Comparing {left} and {right}")
        }
    }
}

impl<T: Display> StepLabel for binary::Event<'_, T> {
    fn label(&self) -> String {
        format!(
            "Searching range [{}:{}], mid={}, value={}",
            self.left,
            self.right,
            self.mid,
            self.value()
        )
    }
}

impl StepLabel for dijkstra::Event {
    fn label(&self) -> String {
        format!("Current node: {}", self.current)
    }
}

impl StepLabel for knapsack::Event {
    fn label(&self) -> String {
        format!("Filling dp[{}][{}]", self.item, self.capacity)
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for bubble::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for binary::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for dijkstra::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for knapsack::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
