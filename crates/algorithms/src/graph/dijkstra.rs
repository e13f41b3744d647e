//! Dijkstra's single-source shortest paths.
//!
//! # Algorithm
//!
//! Every node starts unreachable except the start node, at distance 0. The
//! solver repeatedly pops the closest entry from a min-ordered frontier. If
//! that node is already finalized the entry is stale and is discarded;
//! otherwise the node is finalized and each outgoing edge is relaxed: when
//! `distance[current] + weight < distance[neighbor]` the neighbor's distance
//! is lowered and a new frontier entry is pushed. The run ends when the
//! frontier is empty.
//!
//! Weights are `u64`, so the non-negative weight requirement holds by
//! construction. A path whose length would overflow `u64` is never relaxed,
//! so a node reachable only through such paths stays unreachable.
//!
//! # Unknown start node
//!
//! A start node that is not in the graph is treated as an extra isolated
//! node: it is finalized at distance 0, appears last in the distance table,
//! and every graph node stays unreachable.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per finalized node, immediately after
//! finalization and before relaxing its edges. Among frontier entries with
//! equal distances, the pop order is an implementation detail. Observers can
//! return [`Action::StopEarly`] to halt; the solution then holds the
//! distances known at that point.

mod action;
mod event;
mod frontier;
mod solution;

pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status};

use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use algoviz_core::Observer;

use crate::graph::{Distance, DistanceTable, WeightedGraph};

use frontier::Frontier;

/// Computes shortest distances from `start` to every node of `graph`.
///
/// See the [module docs](self) for the handling of unknown start nodes and
/// event timing.
pub fn solve<Obs>(graph: &WeightedGraph, start: &str, mut observer: Obs) -> Solution
where
    Obs: Observer<Event, Action>,
{
    let extended;
    let (graph, source) = match graph.index_of(start) {
        Some(source) => (graph, source),
        None => {
            tracing::debug!(start, "start node is not in the graph, treating it as isolated");
            let mut owned = graph.clone();
            let source = owned.ensure_node(start);
            extended = owned;
            (&extended, source)
        }
    };
    let inner = graph.inner();

    let mut state = State::new(inner.node_count());
    state.distances[source.index()] = Distance::Finite(0);

    let mut frontier = Frontier::default();
    frontier.push(0, source);
    let mut stale = 0_usize;

    while let Some((cost, node)) = frontier.pop() {
        if state.visited[node.index()] {
            stale += 1;
            tracing::trace!(node = %inner[node], cost, "discarding stale frontier entry");
            continue;
        }
        state.visited[node.index()] = true;
        state.order.push(node);

        if observer.is_active() {
            let event = Event {
                distances: state.table(inner),
                visited: state.finalized(inner),
                current: inner[node].clone(),
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                tracing::debug!(
                    finalized = state.order.len(),
                    "shortest paths stopped by observer"
                );
                return state.into_solution(inner, Status::StoppedByObserver);
            }
        }

        for edge in inner.edges(node) {
            let neighbor = edge.target();
            let Some(length) = cost.checked_add(*edge.weight()) else {
                tracing::trace!(
                    from = %inner[node],
                    to = %inner[neighbor],
                    "path length overflows u64, edge skipped"
                );
                continue;
            };
            if Distance::Finite(length) < state.distances[neighbor.index()] {
                state.distances[neighbor.index()] = Distance::Finite(length);
                frontier.push(length, neighbor);
            }
        }
    }

    tracing::debug!(
        nodes = inner.node_count(),
        finalized = state.order.len(),
        stale,
        "shortest paths complete"
    );
    state.into_solution(inner, Status::Complete)
}

/// Computes shortest distances without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
pub fn solve_unobserved(graph: &WeightedGraph, start: &str) -> Solution {
    solve(graph, start, ())
}

/// Solver state indexed by node index.
struct State {
    distances: Vec<Distance>,
    visited: Vec<bool>,
    order: Vec<NodeIndex>,
}

impl State {
    fn new(node_count: usize) -> Self {
        Self {
            distances: vec![Distance::Unreachable; node_count],
            visited: vec![false; node_count],
            order: Vec::new(),
        }
    }

    /// Copies the distances into a table keyed by node id.
    fn table(&self, graph: &DiGraph<String, u64>) -> DistanceTable {
        DistanceTable::new(
            graph
                .node_indices()
                .map(|index| (graph[index].clone(), self.distances[index.index()]))
                .collect(),
        )
    }

    /// Copies the finalized node ids in finalization order.
    fn finalized(&self, graph: &DiGraph<String, u64>) -> Vec<String> {
        self.order
            .iter()
            .map(|&index| graph[index].clone())
            .collect()
    }

    fn into_solution(self, graph: &DiGraph<String, u64>, status: Status) -> Solution {
        Solution {
            status,
            distances: self.table(graph),
            finalized: self.finalized(graph),
        }
    }
}
