use super::Table;

/// Event emitted by the knapsack solver after each table cell is filled.
///
/// `table` is a deep copy taken right after `dp[item][capacity]` was written,
/// so observers can keep it for deferred rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Snapshot of the whole table.
    pub table: Table,

    /// Row just filled (1-based item count).
    pub item: usize,

    /// Column just filled (capacity in `0..=capacity`).
    pub capacity: usize,

    /// Whether taking item `item - 1` beat leaving it out for this cell.
    pub took_item: bool,
}

impl Event {
    /// Returns the value written to the cell that triggered this event.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.table.get(self.item, self.capacity)
    }
}
