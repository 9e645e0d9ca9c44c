// SPDX-License-Identifier: MPL-2.0
//! Real-time [`Timer`] backed by tokio tasks.
//!
//! Each scheduled timer is a task that sleeps and then posts
//! [`Event::TimerExpired`] to an unbounded channel. The host reads the
//! channel and forwards every event to
//! [`Coordinator::handle`](crate::coordinator::Coordinator::handle).

use crate::application::port::{Timer, TimerToken};
use crate::banner::BannerId;
use crate::coordinator::Event;
use std::collections::HashMap;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Auto-hide timers running on a tokio runtime.
#[derive(Debug)]
pub struct TokioTimer {
    runtime: Handle,
    sender: UnboundedSender<Event>,
    tasks: HashMap<TimerToken, JoinHandle<()>>,
    next_token: u64,
}

impl TokioTimer {
    /// Creates a timer that spawns on `runtime` and posts to `sender`.
    #[must_use]
    pub fn new(runtime: Handle, sender: UnboundedSender<Event>) -> Self {
        Self {
            runtime,
            sender,
            tasks: HashMap::new(),
            next_token: 0,
        }
    }

    /// Creates a timer on `runtime` together with the receiving end of its
    /// event channel.
    #[must_use]
    pub fn channel(runtime: Handle) -> (Self, UnboundedReceiver<Event>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(runtime, sender), receiver)
    }

    /// Number of timers that have neither fired nor been cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl Timer for TokioTimer {
    fn schedule(&mut self, banner: BannerId, delay: Duration) -> TimerToken {
        self.tasks.retain(|_, task| !task.is_finished());

        let token = TimerToken::new(self.next_token);
        self.next_token += 1;

        let sender = self.sender.clone();
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if sender.send(Event::TimerExpired(banner)).is_err() {
                tracing::trace!(%banner, "timer fired after receiver closed");
            }
        });
        self.tasks.insert(token, task);
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some(task) = self.tasks.remove(&token) {
            task.abort();
        }
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
