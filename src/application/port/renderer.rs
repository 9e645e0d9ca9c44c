// SPDX-License-Identifier: MPL-2.0
//! Rendering port definition.
//!
//! This module defines the [`BannerRenderer`] trait. A renderer draws
//! banners and animates them between frames; it reports each finished
//! animation back to the coordinator through
//! [`Animation::completion_event`].

use crate::banner::{BannerContent, BannerId};
use crate::coordinator::Event;
use iced_core::Rectangle;
use std::time::Duration;

/// Identifies one animation request.
///
/// Reposition completions carry it so that superseded re-flows can be
/// recognised and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

impl AnimationId {
    /// Creates a new unique animation ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AnimationId {
    fn default() -> Self {
        Self::new()
    }
}

/// What an animation does to a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Entrance: slide in and fade to the banner opacity.
    Show,
    /// Exit: slide out and fade to transparent.
    Hide,
    /// Re-flow: slide to a new slot, opacity untouched.
    Reposition,
}

/// A single frame/opacity transition requested by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub id: AnimationId,
    pub kind: AnimationKind,
    pub from: Rectangle,
    pub to: Rectangle,
    /// `None` leaves the current opacity alone.
    pub opacity: Option<(f32, f32)>,
    pub duration: Duration,
}

impl Animation {
    /// Returns the event the renderer posts when this animation finishes.
    #[must_use]
    pub fn completion_event(&self, banner: BannerId) -> Event {
        match self.kind {
            AnimationKind::Show => Event::ShowFinished(banner),
            AnimationKind::Hide => Event::HideFinished(banner),
            AnimationKind::Reposition => Event::RepositionFinished {
                banner,
                animation: self.id,
            },
        }
    }
}

/// Draws banners and runs their animations.
pub trait BannerRenderer {
    /// Returns the height a banner with `content` needs at `width`.
    fn measure(&mut self, content: &BannerContent, width: f32) -> f32;

    /// Starts an animation for `banner`.
    ///
    /// `Show` and `Hide` replace both the frame and opacity tracks. A
    /// `Reposition` retargets the frame only; a pending `Show`/`Hide`
    /// completion must still be reported.
    ///
    /// The content is passed on every call so stateless renderers can draw
    /// without keeping their own copy.
    fn animate(&mut self, banner: BannerId, content: &BannerContent, animation: &Animation);

    /// Releases the drawable for a banner that has left its stack.
    fn remove(&mut self, banner: BannerId);

    /// Frame the banner is drawn at right now, if the renderer samples one.
    ///
    /// Used to start an exit from mid re-flow. Renderers that return `None`
    /// get the exit started from the re-flow target.
    fn current_frame(&self, _banner: BannerId) -> Option<Rectangle> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced_core::{Point, Size};

    fn animation(kind: AnimationKind) -> Animation {
        let frame = Rectangle::new(Point::ORIGIN, Size::new(320.0, 44.0));
        Animation {
            id: AnimationId::new(),
            kind,
            from: frame,
            to: frame,
            opacity: None,
            duration: Duration::from_millis(250),
        }
    }

    #[test]
    fn completion_event_matches_kind() {
        let banner = BannerId::new();
        assert_eq!(
            animation(AnimationKind::Show).completion_event(banner),
            Event::ShowFinished(banner)
        );
        assert_eq!(
            animation(AnimationKind::Hide).completion_event(banner),
            Event::HideFinished(banner)
        );
        let reposition = animation(AnimationKind::Reposition);
        assert_eq!(
            reposition.completion_event(banner),
            Event::RepositionFinished {
                banner,
                animation: reposition.id
            }
        );
    }

    #[test]
    fn animation_ids_are_unique() {
        assert_ne!(AnimationId::new(), AnimationId::new());
    }
}
