/// Receives step events from an algorithm and optionally steers it.
///
/// An algorithm calls [`observe`](Observer::observe) synchronously at each of
/// its instrumentation points and blocks until it returns. Returning
/// `Some(action)` asks the algorithm to act on it; every algorithm in this
/// workspace accepts a `StopEarly` action, which is the only way to cancel a
/// run from the outside.
///
/// # Absent observers
///
/// Pass `()` to run an algorithm silently. `()` reports
/// [`is_active`](Observer::is_active) as `false`, so algorithms skip building
/// snapshot payloads altogether. `Option<O>` forwards to `O` when present and
/// behaves like `()` when `None`.
///
/// # Closures
///
/// Any `FnMut(&E) -> Option<A>` is an observer:
///
/// ```rust
/// use algoviz_core::Observer;
///
/// let mut seen = Vec::new();
/// let mut observer = |event: &u32| -> Option<()> {
///     seen.push(*event);
///     None
/// };
///
/// observer.observe(&1);
/// observer.observe(&2);
/// assert_eq!(seen, [1, 2]);
/// ```
pub trait Observer<E, A> {
    /// Handles a single event and optionally returns an action.
    fn observe(&mut self, event: &E) -> Option<A>;

    /// Returns `false` if this observer ignores every event.
    ///
    /// Algorithms check this before constructing an event, which lets silent
    /// runs skip the snapshot copies that some events carry.
    fn is_active(&self) -> bool {
        true
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }

    fn is_active(&self) -> bool {
        false
    }
}

impl<E, A, O> Observer<E, A> for Option<O>
where
    O: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.as_mut().and_then(|observer| observer.observe(event))
    }

    fn is_active(&self) -> bool {
        self.as_ref().is_some_and(Observer::is_active)
    }
}
