//! Bottom-up 0/1 knapsack.
//!
//! # Algorithm
//!
//! Fill a `(items + 1) × (capacity + 1)` [`Table`] row by row, where row `i`
//! considers the first `i` items:
//!
//! ```text
//! dp[i][w] = dp[i-1][w]                                           if weights[i-1] > w
//! dp[i][w] = max(dp[i-1][w], values[i-1] + dp[i-1][w - weights[i-1]])  otherwise
//! ```
//!
//! The answer is `dp[items][capacity]`. The full table is kept (rather than a
//! single rolling row) so every snapshot shows the complete computation.
//!
//! # Preconditions
//!
//! `weights` and `values` describe the same items and should have the same
//! length. This is not checked up front; see [`solve`] for what happens when
//! they differ.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per cell, right after it is written, for a
//! total of `items * (capacity + 1)` events. Each event carries a deep copy of
//! the table. Observers can return [`Action::StopEarly`] to halt.

mod action;
mod event;
mod solution;
mod table;

pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status};
pub use table::Table;

use algoviz_core::Observer;

/// Computes the best total value of items fitting in `capacity`.
///
/// See the [module docs](self) for the recurrence and event timing.
///
/// # Panics
///
/// Panics if `values` is shorter than `weights`. Extra values are ignored.
///
/// Panics if `capacity` is `usize::MAX`, since the table needs a column for
/// every capacity from 0 to `capacity`. Capacities close to that limit fail
/// on allocation instead, so callers taking capacities from users should cap
/// them well below it.
pub fn solve<Obs>(weights: &[usize], values: &[u64], capacity: usize, mut observer: Obs) -> Solution
where
    Obs: Observer<Event, Action>,
{
    let items = weights.len();
    let mut table = Table::new(items, capacity);

    for item in 1..=items {
        let weight = weights[item - 1];
        let value = values[item - 1];

        for w in 0..=capacity {
            let skip = table.get(item - 1, w);
            let (best, took_item) = if weight > w {
                (skip, false)
            } else {
                let take = value.saturating_add(table.get(item - 1, w - weight));
                if take > skip { (take, true) } else { (skip, false) }
            };
            table.set(item, w, best);

            if !observer.is_active() {
                continue;
            }

            let event = Event {
                table: table.clone(),
                item,
                capacity: w,
                took_item,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                tracing::debug!(item, capacity = w, "knapsack stopped by observer");
                return Solution {
                    status: Status::StoppedByObserver,
                    best_value: table.get(item - 1, capacity),
                    selected: Vec::new(),
                    table,
                };
            }
        }
    }

    let best_value = table.get(items, capacity);
    let selected = selected_items(&table, weights);
    tracing::debug!(
        items,
        capacity,
        cells = items * (capacity + 1),
        best_value,
        "knapsack complete"
    );

    Solution {
        status: Status::Complete,
        best_value,
        selected,
        table,
    }
}

/// Computes the best total value without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Panics
///
/// Panics if `values` is shorter than `weights`, or if `capacity` is
/// `usize::MAX`.
pub fn solve_unobserved(weights: &[usize], values: &[u64], capacity: usize) -> Solution {
    solve(weights, values, capacity, ())
}

/// Walks a finished table back from the bottom-right cell.
///
/// An item was taken wherever its row differs from the row above.
fn selected_items(table: &Table, weights: &[usize]) -> Vec<usize> {
    let mut selected = Vec::new();
    let mut w = table.capacity();

    for item in (1..=table.items()).rev() {
        if table.get(item, w) != table.get(item - 1, w) {
            selected.push(item - 1);
            w -= weights[item - 1];
        }
    }

    selected.reverse();
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_textbook_example() {
        let solution = solve_unobserved(&[1, 3, 4, 5], &[1, 4, 5, 7], 7);

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.best_value, 9);
        assert_eq!(solution.selected, [1, 2]);
        assert_eq!(solution.table.get(4, 7), 9);
    }

    #[test]
    fn emits_one_event_per_cell_in_row_major_order() {
        let mut cells = Vec::new();

        solve(&[1, 2], &[3, 4], 2, |event: &Event| {
            cells.push((event.item, event.capacity));
            None
        });

        assert_eq!(cells, [(1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn event_table_reflects_only_filled_cells() {
        let mut events = Vec::new();

        solve(&[1, 1], &[5, 6], 1, |event: &Event| {
            events.push(event.clone());
            None
        });

        // After dp[1][1] is written, row 2 is still untouched.
        let after_first_row = &events[1];
        assert_eq!(after_first_row.value(), 5);
        assert!(after_first_row.took_item);
        assert_eq!(after_first_row.table.rows()[2], [0, 0]);

        let last = events.last().expect("events");
        assert_eq!(last.table.rows()[2], [0, 6]);
    }

    #[test]
    fn item_heavier_than_capacity_is_never_taken() {
        let solution = solve_unobserved(&[10], &[100], 5);

        assert_eq!(solution.best_value, 0);
        assert!(solution.selected.is_empty());
    }

    #[test]
    fn zero_capacity_and_no_items() {
        let mut events = 0;
        let solution = solve(&[1, 2], &[1, 2], 0, |_: &Event| {
            events += 1;
            None
        });
        assert_eq!(solution.best_value, 0);
        assert_eq!(events, 2);

        let solution = solve_unobserved(&[], &[], 4);
        assert_eq!(solution.best_value, 0);
        assert_eq!(solution.table.rows().len(), 1);
    }

    #[test]
    fn extra_values_are_ignored() {
        let solution = solve_unobserved(&[2], &[3, 99], 2);
        assert_eq!(solution.best_value, 3);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn short_values_panic() {
        solve_unobserved(&[1, 2], &[3], 2);
    }

    #[test]
    #[should_panic(expected = "knapsack capacity must be less than usize::MAX")]
    fn unbounded_capacity_panics_before_filling() {
        solve_unobserved(&[1], &[1], usize::MAX);
    }

    #[test]
    fn observer_can_stop_early() {
        let solution = solve(&[1, 3, 4, 5], &[1, 4, 5, 7], 7, |event: &Event| {
            (event.item == 3 && event.capacity == 0).then_some(Action::StopEarly)
        });

        assert_eq!(solution.status, Status::StoppedByObserver);
        // Rows 1 and 2 are complete: items 0 and 1 fit together for 5.
        assert_eq!(solution.best_value, 5);
        assert!(solution.selected.is_empty());
    }
}
