//! Animation pacing.
//!
//! Algorithms block while their observer runs, so sleeping inside an observer
//! is all it takes to animate a run. [`Paced`] adds that sleep to any
//! observer.

use std::{thread, time::Duration};

use algoviz_core::Observer;
use thiserror::Error;

/// Delay inserted after each observed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pace {
    delay: Duration,
}

/// Errors that can occur when validating a [`Pace`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PaceError {
    #[error("step delay of {0:?} exceeds the limit of {max:?}", max = Pace::MAX_DELAY)]
    TooLong(Duration),
}

impl Pace {
    /// Longest accepted delay per step.
    pub const MAX_DELAY: Duration = Duration::from_secs(10);

    /// Creates a pace with a validated delay.
    ///
    /// # Errors
    ///
    /// Returns an error if `delay` exceeds [`Pace::MAX_DELAY`].
    pub fn new(delay: Duration) -> Result<Self, PaceError> {
        if delay > Self::MAX_DELAY {
            return Err(PaceError::TooLong(delay));
        }
        Ok(Self { delay })
    }

    /// Creates a pace from a delay in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the delay exceeds [`Pace::MAX_DELAY`].
    pub fn from_millis(millis: u64) -> Result<Self, PaceError> {
        Self::new(Duration::from_millis(millis))
    }

    /// A pace that never sleeps.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns the pause inserted after each step.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Wraps an observer and sleeps after each event it lets through.
///
/// No sleep happens after an event that stops the run.
#[derive(Debug)]
pub struct Paced<O> {
    inner: O,
    pace: Pace,
}

impl<O> Paced<O> {
    /// Wraps `inner`, pausing for `pace` after each step it lets through.
    pub fn new(inner: O, pace: Pace) -> Self {
        Self { inner, pace }
    }

    /// Returns the wrapped observer.
    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<E, A, O> Observer<E, A> for Paced<O>
where
    O: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let action = self.inner.observe(event);
        if action.is_none() && !self.pace.delay.is_zero() {
            thread::sleep(self.pace.delay);
        }
        action
    }

    fn is_active(&self) -> bool {
        self.inner.is_active()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn rejects_delays_over_the_limit() {
        assert!(Pace::from_millis(10_000).is_ok());
        assert_eq!(
            Pace::from_millis(10_001),
            Err(PaceError::TooLong(Duration::from_millis(10_001)))
        );
    }

    #[test]
    fn none_has_zero_delay() {
        assert!(Pace::none().delay().is_zero());
    }

    #[test]
    fn forwards_events_and_actions() {
        let mut seen = Vec::new();
        let mut paced = Paced::new(
            |event: &u32| -> Option<&'static str> {
                seen.push(*event);
                (*event == 2).then_some("stop")
            },
            Pace::none(),
        );

        assert_eq!(paced.observe(&1), None);
        assert_eq!(paced.observe(&2), Some("stop"));
        drop(paced);
        assert_eq!(seen, [1, 2]);
    }

    #[test]
    fn sleeps_between_steps() {
        let mut paced = Paced::new(|_: &u32| -> Option<()> { None }, Pace::from_millis(5).unwrap());

        let start = Instant::now();
        paced.observe(&1);
        paced.observe(&2);

        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn inherits_activity_of_inner_observer() {
        let paced = Paced::new((), Pace::none());
        assert!(!Observer::<u32, ()>::is_active(&paced));
    }
}
