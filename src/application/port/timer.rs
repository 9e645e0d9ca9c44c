// SPDX-License-Identifier: MPL-2.0
//! Timer port definition.
//!
//! Timers drive auto-hide. Expiry is reported by posting
//! [`Event::TimerExpired`](crate::coordinator::Event::TimerExpired) for the
//! banner passed to [`Timer::schedule`].

use crate::banner::BannerId;
use std::time::Duration;

/// Handle for cancelling a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// One-shot, cancelable timers.
pub trait Timer {
    /// Schedules an expiry for `banner` after `delay`.
    fn schedule(&mut self, banner: BannerId, delay: Duration) -> TimerToken;

    /// Cancels a pending timer. Unknown or already fired tokens are ignored.
    fn cancel(&mut self, token: TimerToken);
}
