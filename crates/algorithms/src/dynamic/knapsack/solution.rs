use super::Table;

/// Indicates how the knapsack solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every cell was filled.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a knapsack run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// How the run terminated.
    pub status: Status,

    /// The maximum achievable value, `dp[items][capacity]`.
    ///
    /// When stopped early this is the best value using the items whose rows
    /// were fully filled.
    pub best_value: u64,

    /// Indices of the items in one optimal selection, ascending.
    ///
    /// Empty when stopped early.
    pub selected: Vec<usize>,

    /// The table as it stood when the run ended.
    pub table: Table,
}
