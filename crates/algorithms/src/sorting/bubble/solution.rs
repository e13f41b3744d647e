/// Indicates how bubble sort terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every pass ran to completion; the sequence is sorted.
    Complete,

    /// Stopped early due to an observer action; the sequence may be unsorted.
    StoppedByObserver,
}

/// The result of a bubble sort run.
///
/// The sorted elements live in the slice that was passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    /// How the sort terminated.
    pub status: Status,

    /// Number of adjacent pairs compared.
    pub comparisons: usize,

    /// Number of swaps performed.
    pub swaps: usize,
}
