/// Control actions supported by Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and return the distances known so far.
    StopEarly,
}
