//! Trailing debounce, independent of any event loop
//!
//! The caller owns the clock: [`Debouncer::push`] records a value together
//! with the time it arrived, and [`Debouncer::poll`] hands the value back
//! once no newer value arrived for the quiet period.

use std::time::{Duration, Instant};

/// Trailing debouncer
///
/// Each settled value is emitted exactly once. A value that settles on the
/// same thing that was emitted last is swallowed.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
    last_fired: Option<T>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    /// Create a debouncer with the given quiet period
    #[must_use]
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            last_fired: None,
        }
    }

    /// Record a new value, cancelling and replacing any pending one
    pub fn push(&mut self, value: T, now: Instant) {
        if self.pending.is_none() && self.last_fired.as_ref() == Some(&value) {
            return;
        }
        self.pending = Some((value, now + self.quiet));
    }

    /// Emit the pending value if its quiet period has elapsed at `now`
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => self.fire(),
            _ => None,
        }
    }

    /// Emit the pending value immediately, regardless of the deadline
    pub fn flush(&mut self) -> Option<T> {
        self.fire()
    }

    /// When the pending value will settle, if there is one
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// True if a value is waiting for its quiet period
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Quiet period
    #[must_use]
    pub const fn quiet(&self) -> Duration {
        self.quiet
    }

    fn fire(&mut self) -> Option<T> {
        let (value, _) = self.pending.take()?;
        if self.last_fired.as_ref() == Some(&value) {
            return None;
        }
        self.last_fired = Some(value.clone());
        Some(value)
    }
}
