//! Gravity clock - a cancellable periodic deadline owned by the host
//!
//! The clock never calls back into anything. The host loop asks it how long it
//! may block ([`GravityClock::time_until_due`]) and whether a tick is due
//! ([`GravityClock::poll`]). Time is always passed in, so the clock is fully
//! deterministic under test.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct GravityClock {
    interval: Option<Duration>,
    next_due: Option<Instant>,
}

impl GravityClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking every `interval`, first tick one interval after `now`.
    pub fn arm(&mut self, interval: Duration, now: Instant) {
        self.interval = Some(interval);
        self.next_due = Some(now + interval);
    }

    /// Stop ticking. Nothing is pending afterwards.
    pub fn disarm(&mut self) {
        self.interval = None;
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Bring the clock in line with the interval the game asks for.
    ///
    /// `None` disarms. A new interval (re)arms from `now`. An unchanged
    /// interval keeps the current schedule so ticks are not postponed by
    /// unrelated stimuli.
    pub fn sync(&mut self, requested: Option<Duration>, now: Instant) {
        match requested {
            None => self.disarm(),
            Some(interval) if self.interval == Some(interval) => {}
            Some(interval) => self.arm(interval, now),
        }
    }

    /// Whether a tick is due at `now`. Yields at most one tick per call and
    /// schedules the next one a full interval after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match (self.interval, self.next_due) {
            (Some(interval), Some(due)) if now >= due => {
                self.next_due = Some(now + interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, or `None` when disarmed
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }
}
