use std::{cmp::Reverse, collections::BinaryHeap};

use petgraph::graph::NodeIndex;

/// Min-ordered queue of `(tentative distance, node)` entries.
///
/// Entries are never updated in place. Lowering a node's distance pushes a
/// new entry, and the solver discards entries for already finalized nodes
/// when they are popped. Ties on distance pop the lower node index first.
#[derive(Debug, Default)]
pub(super) struct Frontier {
    heap: BinaryHeap<Reverse<(u64, NodeIndex)>>,
}

impl Frontier {
    pub(super) fn push(&mut self, distance: u64, node: NodeIndex) {
        self.heap.push(Reverse((distance, node)));
    }

    pub(super) fn pop(&mut self) -> Option<(u64, NodeIndex)> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }
}
