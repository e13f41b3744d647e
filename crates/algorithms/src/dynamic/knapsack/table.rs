/// The `(items + 1) × (capacity + 1)` table of best values.
///
/// `get(i, w)` is the best value achievable with the first `i` items and a
/// capacity of `w`. Row 0 and unfilled cells hold 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<u64>>,
}

impl Table {
    /// Creates a zeroed table.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` or `items` is `usize::MAX`.
    pub(super) fn new(items: usize, capacity: usize) -> Self {
        let columns = capacity
            .checked_add(1)
            .expect("knapsack capacity must be less than usize::MAX");
        let rows = items
            .checked_add(1)
            .expect("knapsack item count must be less than usize::MAX");
        Self {
            rows: vec![vec![0; columns]; rows],
        }
    }

    /// Returns the value at row `item`, column `capacity`.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside the table.
    #[must_use]
    pub fn get(&self, item: usize, capacity: usize) -> u64 {
        self.rows[item][capacity]
    }

    pub(super) fn set(&mut self, item: usize, capacity: usize, value: u64) {
        self.rows[item][capacity] = value;
    }

    /// Returns the rows, from row 0 (no items) to row `items`.
    #[must_use]
    pub fn rows(&self) -> &[Vec<u64>] {
        &self.rows
    }

    /// Returns the number of items the table was built for.
    #[must_use]
    pub fn items(&self) -> usize {
        self.rows.len() - 1
    }

    /// Returns the largest capacity column.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.rows[0].len() - 1
    }
}
