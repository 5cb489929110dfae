use std::time::{Duration, Instant};

/// A temporary visual state that reverts after a delay.
///
/// The effect lives inside the view state that shows it. Dropping that state, or
/// calling [`TimedEffect::cancel`], cancels the pending revert, so an expired
/// effect can never touch a slide the user has since left.
#[derive(Debug, Clone, Default)]
pub struct TimedEffect<T> {
    active: Option<(T, Instant)>,
}

impl<T> TimedEffect<T> {
    pub fn start(&mut self, value: T, duration: Duration) {
        self.start_at(value, Instant::now() + duration);
    }

    pub fn start_at(&mut self, value: T, deadline: Instant) {
        self.active = Some((value, deadline));
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// The active value, if its deadline has not passed at `now`.
    /// Expired values are cleared.
    pub fn current_at(&mut self, now: Instant) -> Option<&T> {
        if self.active.as_ref().is_some_and(|(_, deadline)| now >= *deadline) {
            self.active = None;
        }
        self.active.as_ref().map(|(value, _)| value)
    }

    pub fn current(&mut self) -> Option<&T> {
        self.current_at(Instant::now())
    }

    /// Time until the revert, for scheduling a repaint.
    pub fn remaining_at(&self, now: Instant) -> Option<Duration> {
        self.active
            .as_ref()
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }
}
