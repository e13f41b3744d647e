//! Step-instrumented textbook algorithms.
//!
//! Each algorithm accepts an [`Observer`] and calls it synchronously at fixed
//! points in its loop, passing an event that describes the state at that
//! moment. Observers render, record or pace the run; returning a `StopEarly`
//! action cancels it.
//!
//! # Algorithms
//!
//! - [`sorting::bubble`]: bubble sort, one event per compared pair
//! - [`searching::binary`]: binary search, one event per probe
//! - [`graph::dijkstra`]: shortest paths, one event per finalized node
//! - [`dynamic::knapsack`]: 0/1 knapsack table, one event per filled cell
//!
//! The algorithms are the textbook versions on purpose. Preconditions such as
//! sortedness for binary search are documented on each function and are not
//! checked at runtime.
//!
//! [`Observer`]: algoviz_core::Observer

pub mod dynamic;
pub mod graph;
pub mod searching;
pub mod sorting;
