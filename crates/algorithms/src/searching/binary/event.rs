/// Event emitted by binary search before each probe.
///
/// `left` and `right` are the inclusive bounds of the remaining range and
/// `mid` is the index about to be compared with the target.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, T> {
    /// The sequence being searched.
    pub sequence: &'a [T],

    /// Inclusive lower bound of the remaining range.
    pub left: usize,

    /// Inclusive upper bound of the remaining range.
    pub right: usize,

    /// Index about to be probed.
    pub mid: usize,
}

impl<T> Event<'_, T> {
    /// Returns the value at `mid`.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.sequence[self.mid]
    }

    /// Returns the indices of the remaining range.
    #[must_use]
    pub fn range(&self) -> std::ops::RangeInclusive<usize> {
        self.left..=self.right
    }
}
