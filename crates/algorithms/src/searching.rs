//! Search algorithms over sorted sequences.
//!
//! # Algorithms
//!
//! - [`binary`]: iterative bisection with inclusive bounds

pub mod binary;
