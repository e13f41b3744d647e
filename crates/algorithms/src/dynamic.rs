//! Dynamic programming algorithms that report every table cell.
//!
//! # Algorithms
//!
//! - [`knapsack`]: bottom-up 0/1 knapsack over the full item × capacity table

pub mod knapsack;
