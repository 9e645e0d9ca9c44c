// SPDX-License-Identifier: MPL-2.0
//! Virtual-clock driver.
//!
//! Merges the completions of a [`Scene`] and the expiries of a [`Timeline`]
//! into one ordered stream and dispatches them into the coordinator.

use super::{Scene, Timeline};
use crate::coordinator::{Coordinator, Event};
use std::time::Duration;

/// Which clock produced the next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Scene,
    Timeline,
}

/// Advances both clocks to `now`, dispatching every due event in order.
///
/// Events are handled one at a time, with both clocks set to the event's due
/// time, so animations and timers started by a handler are scheduled
/// relative to the moment that caused them and are picked up in the same
/// pass when they fall due before `now`. At equal due times animation
/// completions go first.
///
/// Returns the dispatched events with their due time.
pub fn drive(
    coordinator: &mut Coordinator<Scene, Timeline>,
    now: Duration,
) -> Vec<(Duration, Event)> {
    let mut dispatched = Vec::new();
    loop {
        let scene_due = coordinator.renderer().next_due().filter(|due| *due <= now);
        let timer_due = coordinator.timer().next_due().filter(|due| *due <= now);

        let source = match (scene_due, timer_due) {
            (Some(scene), Some(timer)) if timer < scene => Source::Timeline,
            (Some(_), _) => Source::Scene,
            (None, Some(_)) => Source::Timeline,
            (None, None) => break,
        };

        let next = match source {
            Source::Scene => coordinator.renderer_mut().pop_due(now),
            Source::Timeline => coordinator.timer_mut().pop_due(now),
        };
        let Some((at, event)) = next else {
            break;
        };

        coordinator.renderer_mut().set_now(at);
        coordinator.timer_mut().set_now(at);
        tracing::trace!(?at, ?event, "dispatching");
        coordinator.handle(event);
        dispatched.push((at, event));
    }

    coordinator.renderer_mut().set_now(now);
    coordinator.timer_mut().set_now(now);
    dispatched
}
