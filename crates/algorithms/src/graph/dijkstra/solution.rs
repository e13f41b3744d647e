use crate::graph::DistanceTable;

/// Indicates how Dijkstra's algorithm terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The frontier was exhausted; every distance is final.
    Complete,

    /// Stopped early due to an observer action; only finalized nodes are final.
    StoppedByObserver,
}

/// The result of a shortest-path run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// How the run terminated.
    pub status: Status,

    /// Distance from the start to every node; unreachable nodes stay
    /// [`Distance::Unreachable`](crate::graph::Distance::Unreachable).
    pub distances: DistanceTable,

    /// Finalized nodes in finalization order.
    pub finalized: Vec<String>,
}
