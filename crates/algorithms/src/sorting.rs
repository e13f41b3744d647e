//! Sorting algorithms that report every comparison.
//!
//! # Algorithms
//!
//! - [`bubble`]: adjacent-pair exchange sort without the sorted-pass early exit

pub mod bubble;
