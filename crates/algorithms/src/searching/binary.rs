//! Binary search.
//!
//! # Algorithm
//!
//! Keep an inclusive range `[left, right]`, probe `mid = (left + right) / 2`
//! (rounded down), and discard the half that cannot contain the target. The
//! search ends when the probe matches or the range is empty.
//!
//! # Preconditions
//!
//! The sequence must be sorted ascending. This is not checked: an unsorted
//! sequence gives a wrong answer, never a panic.
//!
//! # Observer Events
//!
//! The search emits one [`Event`] per probe, before `sequence[mid]` is
//! compared with the target. A sequence of length `n` costs at most
//! `ceil(log2(n)) + 1` probes. Observers can return [`Action::StopEarly`] to
//! abandon the search, in which case the target is reported as not found.

mod action;
mod event;
mod solution;

pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status};

use std::cmp::Ordering;

use algoviz_core::Observer;

/// Searches a sorted `sequence` for `target`.
///
/// See the [module docs](self) for preconditions and event timing.
pub fn search<T, Obs>(sequence: &[T], target: &T, mut observer: Obs) -> Solution
where
    T: Ord,
    Obs: for<'a> Observer<Event<'a, T>, Action>,
{
    let mut probes = 0;
    let mut left = 0;
    let Some(mut right) = sequence.len().checked_sub(1) else {
        return Solution {
            status: Status::Complete,
            index: None,
            probes,
        };
    };

    while left <= right {
        let mid = left + (right - left) / 2;
        probes += 1;

        if observer.is_active() {
            let event = Event {
                sequence,
                left,
                right,
                mid,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                tracing::debug!(probes, "binary search stopped by observer");
                return Solution {
                    status: Status::StoppedByObserver,
                    index: None,
                    probes,
                };
            }
        }

        match sequence[mid].cmp(target) {
            Ordering::Equal => {
                tracing::debug!(probes, index = mid, "binary search found target");
                return Solution {
                    status: Status::Complete,
                    index: Some(mid),
                    probes,
                };
            }
            Ordering::Less => left = mid + 1,
            Ordering::Greater => match mid.checked_sub(1) {
                Some(next) => right = next,
                None => break,
            },
        }
    }

    tracing::debug!(probes, "binary search exhausted range");
    Solution {
        status: Status::Complete,
        index: None,
        probes,
    }
}

/// Searches a sorted `sequence` for `target` without observer support.
///
/// This is a convenience wrapper around [`search`] that uses a no-op observer.
pub fn search_unobserved<T: Ord>(sequence: &[T], target: &T) -> Solution {
    search(sequence, target, ())
}
