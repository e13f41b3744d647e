/// Indicates how binary search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The search ran until the target was found or the range was empty.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    /// How the search terminated.
    pub status: Status,

    /// Index of a matching element, or `None` if the target was not found.
    ///
    /// With duplicates this is whichever match bisection reaches first, not
    /// necessarily the lowest one.
    pub index: Option<usize>,

    /// Number of probes (and events) made.
    pub probes: usize,
}

impl Solution {
    /// Returns the index as a signed position, using `-1` for not found.
    #[must_use]
    pub fn position(&self) -> isize {
        self.index
            .and_then(|index| isize::try_from(index).ok())
            .unwrap_or(-1)
    }
}
