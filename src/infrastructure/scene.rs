// SPDX-License-Identifier: MPL-2.0
//! Animation-tracking [`BannerRenderer`] on a virtual clock.
//!
//! The scene keeps, per banner, a frame track and an opacity track and
//! samples them at its current time. Completions are queued with their due
//! time and handed back by [`Scene::advance_to`] so the host can feed them
//! into the coordinator.
//!
//! A `Reposition` issued while an entrance or exit is still running
//! translates that animation by the re-flow delta and keeps its completion.

use crate::application::port::{Animation, AnimationKind, BannerRenderer};
use crate::banner::{BannerContent, BannerId};
use crate::coordinator::Event;
use iced_core::Rectangle;
use std::collections::HashMap;
use std::time::Duration;

/// Banner height without a subtitle.
pub const DEFAULT_TITLE_HEIGHT: f32 = 52.0;

/// Extra height taken by a subtitle line.
pub const DEFAULT_SUBTITLE_HEIGHT: f32 = 20.0;

/// How the scene sizes banners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub title_height: f32,
    pub subtitle_height: f32,
}

impl Metrics {
    /// Every banner gets the same height.
    #[must_use]
    pub fn fixed(height: f32) -> Self {
        Self {
            title_height: height,
            subtitle_height: 0.0,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            title_height: DEFAULT_TITLE_HEIGHT,
            subtitle_height: DEFAULT_SUBTITLE_HEIGHT,
        }
    }
}

/// Sampled appearance of a banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub frame: Rectangle,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy)]
struct Track<V> {
    from: V,
    to: V,
    start: Duration,
    duration: Duration,
}

impl<V: Copy> Track<V> {
    fn fixed(value: V, at: Duration) -> Self {
        Self {
            from: value,
            to: value,
            start: at,
            duration: Duration::ZERO,
        }
    }

    fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

impl Track<f32> {
    fn sample(&self, now: Duration) -> f32 {
        lerp(self.from, self.to, self.progress(now))
    }
}

impl Track<Rectangle> {
    fn sample(&self, now: Duration) -> Rectangle {
        let t = self.progress(now);
        Rectangle {
            x: lerp(self.from.x, self.to.x, t),
            y: lerp(self.from.y, self.to.y, t),
            width: lerp(self.from.width, self.to.width, t),
            height: lerp(self.from.height, self.to.height, t),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Completion {
    due: Duration,
    seq: u64,
    event: Event,
}

#[derive(Debug)]
struct Entry {
    frame: Track<Rectangle>,
    opacity: Track<f32>,
    /// Pending `Show`/`Hide` completion.
    transition: Option<Completion>,
    /// Pending `Reposition` completion.
    reposition: Option<Completion>,
}

impl Entry {
    fn completions(&self) -> impl Iterator<Item = &Completion> {
        self.transition.iter().chain(self.reposition.iter())
    }
}

/// Virtual-time banner renderer.
#[derive(Debug, Default)]
pub struct Scene {
    now: Duration,
    seq: u64,
    metrics: Metrics,
    entries: HashMap<BannerId, Entry>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_metrics(metrics: Metrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn contains(&self, banner: BannerId) -> bool {
        self.entries.contains_key(&banner)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appearance of a banner at the current time.
    #[must_use]
    pub fn visual(&self, banner: BannerId) -> Option<Visual> {
        self.entries.get(&banner).map(|entry| Visual {
            frame: entry.frame.sample(self.now),
            opacity: entry.opacity.sample(self.now),
        })
    }

    /// Returns true while any track is still moving or a completion is queued.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.entries.values().any(|entry| {
            entry.completions().next().is_some()
                || entry.frame.progress(self.now) < 1.0
                || entry.opacity.progress(self.now) < 1.0
        })
    }

    /// Due time of the earliest queued completion.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.entries
            .values()
            .flat_map(Entry::completions)
            .map(|c| c.due)
            .min()
    }

    /// Reports every completion due at or before `now`, in due order.
    pub fn advance_to(&mut self, now: Duration) -> Vec<(Duration, Event)> {
        let mut finished = Vec::new();
        while let Some(entry) = self.pop_due(now) {
            finished.push(entry);
        }
        self.set_now(now);
        finished
    }

    /// Removes and returns the earliest completion due at or before `limit`.
    pub(crate) fn pop_due(&mut self, limit: Duration) -> Option<(Duration, Event)> {
        let (banner, due, seq) = self
            .entries
            .iter()
            .flat_map(|(id, entry)| entry.completions().map(move |c| (*id, c.due, c.seq)))
            .filter(|(_, due, _)| *due <= limit)
            .min_by_key(|(_, due, seq)| (*due, *seq))?;

        let entry = self.entries.get_mut(&banner)?;
        let slot = if entry.transition.is_some_and(|c| c.seq == seq) {
            &mut entry.transition
        } else {
            &mut entry.reposition
        };
        let completion = slot.take()?;
        self.set_now(due);
        Some((due, completion.event))
    }

    pub(crate) fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    fn completion(&mut self, due: Duration, event: Event) -> Completion {
        self.seq += 1;
        Completion {
            due,
            seq: self.seq,
            event,
        }
    }
}

impl BannerRenderer for Scene {
    fn measure(&mut self, content: &BannerContent, _width: f32) -> f32 {
        match content.subtitle {
            Some(_) => self.metrics.title_height + self.metrics.subtitle_height,
            None => self.metrics.title_height,
        }
    }

    fn animate(&mut self, banner: BannerId, _content: &BannerContent, animation: &Animation) {
        let now = self.now;
        let due = now.checked_add(animation.duration).unwrap_or(Duration::MAX);
        let completion = self.completion(due, animation.completion_event(banner));

        match animation.kind {
            AnimationKind::Show | AnimationKind::Hide => {
                let current = self.visual(banner);
                let (opacity_from, opacity_to) = animation
                    .opacity
                    .unwrap_or_else(|| {
                        let value = current.map_or(1.0, |v| v.opacity);
                        (value, value)
                    });
                self.entries.insert(
                    banner,
                    Entry {
                        frame: Track {
                            from: animation.from,
                            to: animation.to,
                            start: now,
                            duration: animation.duration,
                        },
                        opacity: Track {
                            from: opacity_from,
                            to: opacity_to,
                            start: now,
                            duration: animation.duration,
                        },
                        transition: Some(completion),
                        reposition: None,
                    },
                );
            }
            AnimationKind::Reposition => {
                let entry = self.entries.entry(banner).or_insert_with(|| Entry {
                    frame: Track::fixed(animation.from, now),
                    opacity: Track::fixed(1.0, now),
                    transition: None,
                    reposition: None,
                });
                if entry.transition.is_some() {
                    let dx = animation.to.x - animation.from.x;
                    let dy = animation.to.y - animation.from.y;
                    for frame in [&mut entry.frame.from, &mut entry.frame.to] {
                        frame.x += dx;
                        frame.y += dy;
                    }
                } else {
                    entry.frame = Track {
                        from: entry.frame.sample(now),
                        to: animation.to,
                        start: now,
                        duration: animation.duration,
                    };
                }
                entry.reposition = Some(completion);
            }
        }
    }

    fn remove(&mut self, banner: BannerId) {
        self.entries.remove(&banner);
    }

    fn current_frame(&self, banner: BannerId) -> Option<Rectangle> {
        self.visual(banner).map(|visual| visual.frame)
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
