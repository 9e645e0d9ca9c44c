// SPDX-License-Identifier: MPL-2.0
//! Virtual-time [`Timer`] implementation.
//!
//! The timeline never sleeps. Time only moves when the host calls
//! [`Timeline::advance_to`] (or [`drive`](super::drive)), which makes banner
//! lifecycles fully deterministic in tests and lets the iced overlay map
//! frame ticks onto timer expiries.

use crate::application::port::{Timer, TimerToken};
use crate::banner::BannerId;
use crate::coordinator::Event;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: Duration,
    token: TimerToken,
    banner: BannerId,
}

/// Cancelable one-shot timers on a virtual clock.
#[derive(Debug, Default)]
pub struct Timeline {
    now: Duration,
    next_token: u64,
    pending: Vec<Scheduled>,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers that have not fired or been cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_scheduled(&self, token: TimerToken) -> bool {
        self.pending.iter().any(|s| s.token == token)
    }

    /// Due time of the earliest pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|s| s.due).min()
    }

    /// Fires every timer due at or before `now`, in due order.
    ///
    /// Timers due at the same instant fire in scheduling order. The clock
    /// never moves backwards.
    pub fn advance_to(&mut self, now: Duration) -> Vec<(Duration, Event)> {
        let mut fired = Vec::new();
        while let Some(entry) = self.pop_due(now) {
            fired.push(entry);
        }
        self.set_now(now);
        fired
    }

    /// Removes and returns the earliest timer due at or before `limit`.
    pub(crate) fn pop_due(&mut self, limit: Duration) -> Option<(Duration, Event)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= limit)
            .min_by_key(|(_, s)| (s.due, s.token))
            .map(|(index, _)| index)?;
        let scheduled = self.pending.remove(index);
        self.set_now(scheduled.due);
        Some((scheduled.due, Event::TimerExpired(scheduled.banner)))
    }

    pub(crate) fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl Timer for Timeline {
    fn schedule(&mut self, banner: BannerId, delay: Duration) -> TimerToken {
        let token = TimerToken::new(self.next_token);
        self.next_token += 1;
        let due = self.now.checked_add(delay).unwrap_or(Duration::MAX);
        self.pending.push(Scheduled { due, token, banner });
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|s| s.token != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order() {
        let mut timeline = Timeline::new();
        let late = BannerId::new();
        let early = BannerId::new();
        timeline.schedule(late, Duration::from_secs(3));
        timeline.schedule(early, Duration::from_secs(1));

        let fired = timeline.advance_to(Duration::from_secs(5));
        assert_eq!(
            fired,
            vec![
                (Duration::from_secs(1), Event::TimerExpired(early)),
                (Duration::from_secs(3), Event::TimerExpired(late)),
            ]
        );
        assert_eq!(timeline.now(), Duration::from_secs(5));
        assert_eq!(timeline.pending_count(), 0);
    }

    #[test]
    fn nothing_fires_before_due() {
        let mut timeline = Timeline::new();
        let token = timeline.schedule(BannerId::new(), Duration::from_millis(500));

        assert!(timeline.advance_to(Duration::from_millis(499)).is_empty());
        assert!(timeline.is_scheduled(token));
        assert_eq!(timeline.advance_to(Duration::from_millis(500)).len(), 1);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timeline = Timeline::new();
        let token = timeline.schedule(BannerId::new(), Duration::from_secs(1));
        timeline.cancel(token);

        assert!(!timeline.is_scheduled(token));
        assert!(timeline.advance_to(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn cancel_unknown_token_is_ignored() {
        let mut timeline = Timeline::new();
        timeline.schedule(BannerId::new(), Duration::from_secs(1));
        timeline.cancel(TimerToken::new(999));
        assert_eq!(timeline.pending_count(), 1);
    }

    #[test]
    fn delay_is_relative_to_current_time() {
        let mut timeline = Timeline::new();
        timeline.advance_to(Duration::from_secs(10));
        timeline.schedule(BannerId::new(), Duration::from_secs(2));
        assert_eq!(timeline.next_due(), Some(Duration::from_secs(12)));
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut timeline = Timeline::new();
        timeline.advance_to(Duration::from_secs(4));
        timeline.advance_to(Duration::from_secs(1));
        assert_eq!(timeline.now(), Duration::from_secs(4));
    }

    #[test]
    fn same_instant_fires_in_schedule_order() {
        let mut timeline = Timeline::new();
        let first = BannerId::new();
        let second = BannerId::new();
        timeline.schedule(first, Duration::from_secs(1));
        timeline.schedule(second, Duration::from_secs(1));

        let banners: Vec<_> = timeline
            .advance_to(Duration::from_secs(1))
            .into_iter()
            .map(|(_, event)| event.banner())
            .collect();
        assert_eq!(banners, vec![first, second]);
    }
}
