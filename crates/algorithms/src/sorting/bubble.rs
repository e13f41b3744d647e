//! Bubble sort.
//!
//! # Algorithm
//!
//! For each pass `i` in `0..n`, compare the adjacent pairs `(j, j + 1)` for
//! `j` in `0..n - i - 1` and swap any pair that is out of order. After pass
//! `i` the largest `i + 1` elements sit in their final positions.
//!
//! There is no early exit when a pass makes no swaps: a sequence of length
//! `n` always costs exactly `n * (n - 1) / 2` comparisons.
//!
//! # Observer Events
//!
//! The sort emits one [`Event`] per compared pair, after the swap decision,
//! whether or not a swap happened. Observers can return
//! [`Action::StopEarly`] to abandon the sort with the sequence partially
//! sorted.

mod action;
mod event;
mod solution;

pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status};

use algoviz_core::Observer;

/// Sorts `sequence` in place in ascending order.
///
/// Empty and single-element sequences are valid and produce no events.
/// See the [module docs](self) for event timing.
pub fn sort<T, Obs>(sequence: &mut [T], mut observer: Obs) -> Solution
where
    T: PartialOrd,
    Obs: for<'a> Observer<Event<'a, T>, Action>,
{
    let n = sequence.len();
    let mut comparisons = 0;
    let mut swaps = 0;

    for pass in 0..n {
        for left in 0..n - pass - 1 {
            let right = left + 1;
            let swapped = sequence[left] > sequence[right];
            if swapped {
                sequence.swap(left, right);
                swaps += 1;
            }
            comparisons += 1;

            if !observer.is_active() {
                continue;
            }

            let event = Event {
                sequence: &*sequence,
                left,
                right,
                swapped,
                pass,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                tracing::debug!(comparisons, swaps, "bubble sort stopped by observer");
                return Solution {
                    status: Status::StoppedByObserver,
                    comparisons,
                    swaps,
                };
            }
        }
    }

    tracing::debug!(len = n, comparisons, swaps, "bubble sort complete");
    Solution {
        status: Status::Complete,
        comparisons,
        swaps,
    }
}

/// Sorts `sequence` in place without observer support.
///
/// This is a convenience wrapper around [`sort`] that uses a no-op observer.
pub fn sort_unobserved<T: PartialOrd>(sequence: &mut [T]) -> Solution {
    sort(sequence, ())
}
