//! Reusable observers for the algoviz algorithms.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across all four algorithms in `algoviz-algorithms`.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-algorithm observers
//!   ([`StepLabel`], [`CanStopEarly`])
//! - [`terminal`]: Colored step-by-step terminal output
//! - [`pace`]: A wrapper that sleeps after each step to animate a run
//! - [`chart`]: Bar-chart frames of each step
//!
//! # Features
//!
//! - `plot`: Enables [`ChartObserver::show`] for stepping through recorded
//!   frames in an egui window. This feature adds dependencies on `eframe`
//!   and `egui_plot`.
//!
//! [`Observer`]: algoviz_core::Observer
//! [`StepLabel`]: traits::StepLabel
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod chart;
pub mod pace;
pub mod terminal;
pub mod traits;

pub use chart::ChartObserver;
pub use pace::{Pace, PaceError, Paced};
pub use terminal::TerminalObserver;
