/// Control actions supported by binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop searching and report the target as not found.
    StopEarly,
}
