/// Control actions supported by the knapsack solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop filling the table and return what has been computed so far.
    StopEarly,
}
