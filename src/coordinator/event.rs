// SPDX-License-Identifier: MPL-2.0
//! Events flowing into and out of the coordinator.

use crate::application::port::{AnimationId, SurfaceId};
use crate::banner::BannerId;

/// Inbound events posted by collaborators and the host.
///
/// Every asynchronous continuation (animation completion, timer expiry,
/// tap) re-enters the coordinator through [`Coordinator::handle`] as one
/// of these.
///
/// [`Coordinator::handle`]: super::Coordinator::handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The entrance animation of a banner completed.
    ShowFinished(BannerId),
    /// The exit animation of a banner completed.
    HideFinished(BannerId),
    /// A re-flow animation completed.
    RepositionFinished {
        banner: BannerId,
        animation: AnimationId,
    },
    /// The auto-hide timer of a banner fired.
    TimerExpired(BannerId),
    /// The user tapped a banner.
    Tapped(BannerId),
}

impl Event {
    /// Returns the banner the event targets.
    #[must_use]
    pub fn banner(&self) -> BannerId {
        match *self {
            Event::ShowFinished(banner)
            | Event::HideFinished(banner)
            | Event::TimerExpired(banner)
            | Event::Tapped(banner)
            | Event::RepositionFinished { banner, .. } => banner,
        }
    }
}

/// Outbound lifecycle notifications, drained with
/// [`Coordinator::drain_lifecycle`](super::Coordinator::drain_lifecycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    WillShow { banner: BannerId, surface: SurfaceId },
    DidShow { banner: BannerId, surface: SurfaceId },
    WillHide { banner: BannerId, surface: SurfaceId },
    DidHide { banner: BannerId, surface: SurfaceId },
}

impl LifecycleEvent {
    #[must_use]
    pub fn banner(&self) -> BannerId {
        match *self {
            LifecycleEvent::WillShow { banner, .. }
            | LifecycleEvent::DidShow { banner, .. }
            | LifecycleEvent::WillHide { banner, .. }
            | LifecycleEvent::DidHide { banner, .. } => banner,
        }
    }
}
