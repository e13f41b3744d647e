/// Event emitted by bubble sort after each compared pair.
///
/// The event is emitted whether or not the pair was swapped. `sequence` is the
/// state after the swap decision, borrowed for the duration of the observer
/// call; copy it (e.g. with `to_vec`) to keep it.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, T> {
    /// The sequence after the swap decision for this pair.
    pub sequence: &'a [T],

    /// Index of the left element of the compared pair.
    pub left: usize,

    /// Index of the right element of the compared pair (`left + 1`).
    pub right: usize,

    /// Whether the pair was out of order and has been swapped.
    pub swapped: bool,

    /// The outer pass this comparison belongs to, starting at 0.
    pub pass: usize,
}

impl<T> Event<'_, T> {
    /// Returns the compared pair as it stands after the swap decision.
    #[must_use]
    pub fn pair(&self) -> (&T, &T) {
        (&self.sequence[self.left], &self.sequence[self.right])
    }
}
