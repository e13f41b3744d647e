/// Control actions supported by bubble sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop sorting and leave the sequence as it is.
    StopEarly,
}
