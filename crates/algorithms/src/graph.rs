//! Weighted graphs and shortest paths.
//!
//! - [`WeightedGraph`]: directed graph keyed by string node ids with
//!   non-negative integer edge weights, parseable from adjacency-list text
//! - [`Distance`] and [`DistanceTable`]: tentative or final distances, with an
//!   explicit unreachable state instead of a floating-point infinity
//! - [`dijkstra`]: single-source shortest paths, one event per finalized node

mod distance;
mod weighted_graph;

pub mod dijkstra;

pub use distance::{Distance, DistanceTable};
pub use weighted_graph::{Edge, ParseGraphError, WeightedGraph};
