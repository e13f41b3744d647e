//! Core traits for the algoviz workspace.
//!
//! Every algorithm in `algoviz-algorithms` is written against a single seam:
//!
//! - [`Observer`]: receives a step event at each instrumentation point and
//!   optionally returns a control action
//!
//! Terminal renderers, chart recorders and pacing wrappers in `algoviz-observers` all
//! implement this trait, which keeps algorithm correctness independent of how
//! (or whether) the steps are presented.

mod observer;

pub use observer::Observer;
