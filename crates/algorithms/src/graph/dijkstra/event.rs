use crate::graph::{Distance, DistanceTable};

/// Event emitted by Dijkstra's algorithm each time a node is finalized.
///
/// The event is emitted before the node's outgoing edges are relaxed. All
/// fields are independent copies of the solver state, so an observer can keep
/// the event after the call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Tentative distances at the moment of finalization.
    pub distances: DistanceTable,

    /// Finalized nodes in finalization order, ending with `current`.
    pub visited: Vec<String>,

    /// The node that was just finalized.
    pub current: String,
}

impl Event {
    /// Returns the (now final) distance of the current node.
    #[must_use]
    pub fn current_distance(&self) -> Distance {
        self.distances
            .get(&self.current)
            .unwrap_or(Distance::Unreachable)
    }

    /// Returns `true` if `node` has been finalized.
    #[must_use]
    pub fn is_visited(&self, node: &str) -> bool {
        self.visited.iter().any(|visited| visited == node)
    }
}
