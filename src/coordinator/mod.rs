// SPDX-License-Identifier: MPL-2.0
//! Banner lifecycle and stacking coordinator.
//!
//! The [`Coordinator`] owns every active banner, grouped by host surface and
//! anchor position. It exposes the show/hide API, keeps each stack's slots
//! contiguous, and re-flows siblings whenever a banner enters or leaves.
//!
//! # Stacking
//!
//! A stack lists its banners in insertion order; a banner's slot is its
//! index. The newest banner rests against the anchor and older ones are
//! pushed outward: a banner's distance from the anchor is the summed height
//! of the siblings shown after it.
//!
//! - `show` appends, then pushes every existing sibling forward by the new
//!   banner's height while the newcomer slides in.
//! - When a hide animation completes, the banner is removed and the siblings
//!   shown before it (the ones farther from the anchor) slide back by its
//!   height.
//!
//! # Events
//!
//! Nothing calls back into the coordinator. Renderers, timers and the host
//! post [`Event`]s to [`Coordinator::handle`]; lifecycle notifications are
//! queued and read with [`Coordinator::drain_lifecycle`].
//!
//! # Errors
//!
//! Banners are a best-effort affordance: stale handles, empty stacks and
//! out-of-range settings are absorbed and logged, never returned.

mod event;
mod layout;
mod settings;

pub use event::{Event, LifecycleEvent};
pub use settings::Settings;

use crate::application::port::{
    Animation, AnimationId, AnimationKind, BannerRenderer, HostSurface, SurfaceId, Timer,
};
use crate::banner::{
    Banner, BannerId, BannerRequest, BannerState, BannerStyle, Position, TapResponse,
};
use crate::config::Config;
use crate::domain::banner::{AnimationDuration, AutoHide, BannerOpacity};
use crate::error::BannerError;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Direction of a re-flow relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reflow {
    Forward,
    Backward,
}

impl Reflow {
    fn state(self) -> BannerState {
        match self {
            Reflow::Forward => BannerState::MovingForward,
            Reflow::Backward => BannerState::MovingBackward,
        }
    }
}

/// Stacks of one host surface.
struct SurfaceEntry {
    host: Weak<dyn HostSurface>,
    stacks: BTreeMap<Position, Vec<BannerId>>,
}

impl SurfaceEntry {
    fn is_live(&self) -> bool {
        self.host.strong_count() > 0
    }
}

/// Tracks active banners and drives their lifecycle.
pub struct Coordinator<R, T> {
    renderer: R,
    timer: T,
    settings: Settings,
    surfaces: BTreeMap<SurfaceId, SurfaceEntry>,
    banners: HashMap<BannerId, Banner>,
    lifecycle: VecDeque<LifecycleEvent>,
}

impl<R: BannerRenderer, T: Timer> Coordinator<R, T> {
    /// Creates a coordinator with default settings.
    pub fn new(renderer: R, timer: T) -> Self {
        Self::with_settings(renderer, timer, Settings::default())
    }

    /// Creates a coordinator with explicit settings.
    pub fn with_settings(renderer: R, timer: T, settings: Settings) -> Self {
        Self {
            renderer,
            timer,
            settings,
            surfaces: BTreeMap::new(),
            banners: HashMap::new(),
            lifecycle: VecDeque::new(),
        }
    }

    // =========================================================================
    // Show / hide
    // =========================================================================

    /// Shows a banner built from a style, anchor and title.
    pub fn show_banner<S>(
        &mut self,
        surface: &Rc<S>,
        style: BannerStyle,
        position: Position,
        title: impl Into<String>,
    ) -> BannerId
    where
        S: HostSurface + 'static,
    {
        self.show(surface, BannerRequest::new(style, position, title))
    }

    /// Shows a banner and returns its handle immediately.
    ///
    /// The banner is appended to the `(surface, position)` stack, existing
    /// siblings slide one banner height away from the anchor, and the
    /// entrance animation starts. [`LifecycleEvent::WillShow`] is queued
    /// before the animation begins; [`LifecycleEvent::DidShow`] follows once
    /// [`Event::ShowFinished`] arrives.
    pub fn show<S>(&mut self, surface: &Rc<S>, request: BannerRequest) -> BannerId
    where
        S: HostSurface + 'static,
    {
        let surface_id = surface.id();
        let bounds = surface.bounds();
        let weak: Weak<S> = Rc::downgrade(surface);
        let host: Weak<dyn HostSurface> = weak;
        self.purge_dead_surfaces();

        let mut banner = Banner::new(surface_id, request, &self.settings, 0.0);
        banner.height = self.renderer.measure(banner.content(), bounds.width).max(0.0);
        let id = banner.id();
        let position = banner.position();
        let height = banner.height;
        let duration = banner.show_duration();

        let entry = self
            .surfaces
            .entry(surface_id)
            .or_insert_with(|| SurfaceEntry {
                host: host.clone(),
                stacks: BTreeMap::new(),
            });
        entry.host = host;
        let stack = entry.stacks.entry(position).or_default();
        let siblings = stack.clone();
        banner.slot = stack.len();
        stack.push(id);

        tracing::debug!(
            banner = %id,
            surface = surface_id.value(),
            ?position,
            slot = banner.slot,
            "showing banner"
        );

        let host: &dyn HostSurface = &**surface;
        for sibling in siblings {
            self.reflow(host, sibling, height, duration, Reflow::Forward);
        }

        self.lifecycle.push_back(LifecycleEvent::WillShow {
            banner: id,
            surface: surface_id,
        });

        let frame = frame_of(host, &banner);
        let animation = Animation {
            id: AnimationId::new(),
            kind: AnimationKind::Show,
            from: layout::offstage_frame(position, frame),
            to: frame,
            opacity: Some((0.0, banner.opacity().value())),
            duration: duration.as_duration(),
        };
        self.renderer.animate(id, banner.content(), &animation);
        self.banners.insert(id, banner);
        id
    }

    /// Hides a banner.
    ///
    /// Untracked handles and banners already leaving are ignored. A banner
    /// still entering finishes its entrance first and then hides.
    pub fn hide(&mut self, banner: BannerId) {
        self.purge_dead_surfaces();
        if let Err(err) = self.try_hide(banner) {
            tracing::debug!(%err, "hide ignored");
        }
    }

    /// Hides every tracked banner on every surface.
    ///
    /// Only banners tracked when the call starts are affected.
    pub fn hide_all(&mut self) {
        self.purge_dead_surfaces();
        let snapshot: Vec<BannerId> = self
            .surfaces
            .values()
            .flat_map(|entry| entry.stacks.values().flatten().copied())
            .collect();
        for banner in snapshot {
            self.hide(banner);
        }
    }

    /// Hides every tracked banner on one surface.
    pub fn hide_all_in_surface(&mut self, surface: SurfaceId) {
        self.purge_dead_surfaces();
        for banner in self.banners_in_surface(surface) {
            self.hide(banner);
        }
    }

    /// Re-lays out a surface's banners after its geometry changed.
    ///
    /// Frames jump to their new location without animation and banner
    /// states are left untouched.
    pub fn refresh_layout(&mut self, surface: SurfaceId) {
        self.purge_dead_surfaces();
        let Some(host) = self.host(surface) else {
            return;
        };
        for id in self.banners_in_surface(surface) {
            if let Some(banner) = self.banners.get_mut(&id) {
                if banner.state().is_leaving() {
                    continue;
                }
                let frame = frame_of(host.as_ref(), banner);
                let animation = Animation {
                    id: AnimationId::new(),
                    kind: AnimationKind::Reposition,
                    from: frame,
                    to: frame,
                    opacity: None,
                    duration: Duration::ZERO,
                };
                banner.reposition = Some(animation.id);
                self.renderer.animate(id, banner.content(), &animation);
            }
        }
    }

    // =========================================================================
    // Event dispatch
    // =========================================================================

    /// Applies an event posted by a collaborator or the host.
    pub fn handle(&mut self, event: Event) {
        self.purge_dead_surfaces();
        let result = match event {
            Event::ShowFinished(banner) => self.on_show_finished(banner),
            Event::HideFinished(banner) => self.on_hide_finished(banner),
            Event::RepositionFinished { banner, animation } => {
                self.on_reposition_finished(banner, animation)
            }
            Event::TimerExpired(banner) => self.on_timer_expired(banner),
            Event::Tapped(banner) => self.on_tapped(banner),
        };
        if let Err(err) = result {
            tracing::trace!(%err, ?event, "event ignored");
        }
    }

    fn on_show_finished(&mut self, id: BannerId) -> Result<(), BannerError> {
        let banner = self
            .banners
            .get_mut(&id)
            .ok_or(BannerError::InvalidHandle(id))?;
        if banner.state() != BannerState::Showing {
            return Err(BannerError::UnexpectedState {
                banner: id,
                state: banner.state(),
            });
        }

        banner.transition(BannerState::Visible);
        let surface = banner.surface();
        self.lifecycle.push_back(LifecycleEvent::DidShow {
            banner: id,
            surface,
        });

        if banner.hide_requested {
            return self.begin_hide(id);
        }
        if let AutoHide::After(delay) = banner.auto_hide() {
            banner.timer = Some(self.timer.schedule(id, delay));
        }
        Ok(())
    }

    fn on_hide_finished(&mut self, id: BannerId) -> Result<(), BannerError> {
        let banner = self
            .banners
            .get_mut(&id)
            .ok_or(BannerError::InvalidHandle(id))?;
        if banner.state() != BannerState::Hiding {
            return Err(BannerError::UnexpectedState {
                banner: id,
                state: banner.state(),
            });
        }
        banner.transition(BannerState::Hidden);

        let surface = banner.surface();
        let position = banner.position();
        let height = banner.height;
        let duration = banner.hide_duration();

        let older = self.remove_from_stack(surface, position, id);
        self.banners.remove(&id);
        self.renderer.remove(id);
        tracing::debug!(banner = %id, surface = surface.value(), ?position, "banner hidden");

        if let Some(host) = self.host(surface) {
            for sibling in older {
                self.reflow(host.as_ref(), sibling, -height, duration, Reflow::Backward);
            }
        }

        self.lifecycle.push_back(LifecycleEvent::DidHide {
            banner: id,
            surface,
        });
        Ok(())
    }

    fn on_reposition_finished(
        &mut self,
        id: BannerId,
        animation: AnimationId,
    ) -> Result<(), BannerError> {
        let banner = self
            .banners
            .get_mut(&id)
            .ok_or(BannerError::InvalidHandle(id))?;
        if banner.reposition != Some(animation) {
            return Err(BannerError::StaleAnimation(id));
        }
        banner.reposition = None;
        if matches!(
            banner.state(),
            BannerState::MovingForward | BannerState::MovingBackward
        ) {
            banner.transition(BannerState::Visible);
        }
        Ok(())
    }

    fn on_timer_expired(&mut self, id: BannerId) -> Result<(), BannerError> {
        let banner = self
            .banners
            .get_mut(&id)
            .ok_or(BannerError::InvalidHandle(id))?;
        if banner.timer.take().is_none() || !banner.state().is_visible() {
            return Err(BannerError::UnexpectedState {
                banner: id,
                state: banner.state(),
            });
        }
        tracing::debug!(banner = %id, "auto-hide timer expired");
        self.begin_hide(id)
    }

    fn on_tapped(&mut self, id: BannerId) -> Result<(), BannerError> {
        let banner = self
            .banners
            .get_mut(&id)
            .ok_or(BannerError::InvalidHandle(id))?;
        if !banner.state().is_visible() {
            return Err(BannerError::UnexpectedState {
                banner: id,
                state: banner.state(),
            });
        }

        let response = match banner.take_tap_handler() {
            Some(mut handler) => {
                let response = handler(&*banner);
                banner.restore_tap_handler(handler);
                response
            }
            None => TapResponse::Keep,
        };

        if banner.allow_tap_to_dismiss() || response == TapResponse::Dismiss {
            self.begin_hide(id)
        } else {
            Ok(())
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the banners tracked on a surface in the order they were shown,
    /// across every anchor. Unknown and dropped surfaces yield an empty list.
    #[must_use]
    pub fn banners_in_surface(&self, surface: SurfaceId) -> Vec<BannerId> {
        let mut banners: Vec<BannerId> = self
            .live_entry(surface)
            .map(|entry| entry.stacks.values().flatten().copied().collect())
            .unwrap_or_default();
        // Ids are allocated in creation order.
        banners.sort_unstable();
        banners
    }

    /// Returns one stack in insertion order (slot 0 first).
    #[must_use]
    pub fn stack(&self, surface: SurfaceId, position: Position) -> &[BannerId] {
        self.live_entry(surface)
            .and_then(|entry| entry.stacks.get(&position))
            .map_or(&[], Vec::as_slice)
    }

    /// Returns a tracked banner. Banners of a dropped surface are not.
    #[must_use]
    pub fn banner(&self, id: BannerId) -> Option<&Banner> {
        self.banners
            .get(&id)
            .filter(|banner| self.live_entry(banner.surface()).is_some())
    }

    #[must_use]
    pub fn is_tracked(&self, id: BannerId) -> bool {
        self.banner(id).is_some()
    }

    #[must_use]
    pub fn banner_count(&self) -> usize {
        self.surfaces
            .values()
            .filter(|entry| entry.is_live())
            .map(|entry| entry.stacks.values().map(Vec::len).sum::<usize>())
            .sum()
    }

    /// Returns true while any banner is tracked.
    #[must_use]
    pub fn has_banners(&self) -> bool {
        self.banner_count() > 0
    }

    /// Takes the queued lifecycle notifications, oldest first.
    pub fn drain_lifecycle(&mut self) -> Vec<LifecycleEvent> {
        self.lifecycle.drain(..).collect()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    // =========================================================================
    // Settings
    // =========================================================================

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replaces every setting with the values from a loaded configuration.
    pub fn apply_config(&mut self, config: &Config) {
        self.settings = Settings::from(config);
    }

    /// Sets the global auto-hide delay; `<= 0` disables auto-hide.
    pub fn set_seconds_to_show(&mut self, secs: f64) {
        self.settings.auto_hide = AutoHide::from_secs(secs);
    }

    pub fn set_show_animation_duration(&mut self, secs: f64) {
        warn_if_out_of_range(
            "show_animation_duration",
            secs,
            AnimationDuration::is_in_range(secs),
        );
        self.settings.show_animation = AnimationDuration::from_secs(secs);
    }

    pub fn set_hide_animation_duration(&mut self, secs: f64) {
        warn_if_out_of_range(
            "hide_animation_duration",
            secs,
            AnimationDuration::is_in_range(secs),
        );
        self.settings.hide_animation = AnimationDuration::from_secs(secs);
    }

    /// Sets the banner opacity, clamped to `[0, 1]`.
    pub fn set_banner_opacity(&mut self, opacity: f32) {
        warn_if_out_of_range(
            "banner_opacity",
            f64::from(opacity),
            BannerOpacity::is_in_range(opacity),
        );
        self.settings.opacity = BannerOpacity::new(opacity);
    }

    pub fn set_allow_tap_to_dismiss(&mut self, allow: bool) {
        self.settings.allow_tap_to_dismiss = allow;
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn try_hide(&mut self, id: BannerId) -> Result<(), BannerError> {
        let banner = self
            .banners
            .get_mut(&id)
            .ok_or(BannerError::InvalidHandle(id))?;
        match banner.state() {
            BannerState::Showing => {
                banner.hide_requested = true;
                Ok(())
            }
            BannerState::Hiding | BannerState::Hidden => Err(BannerError::AlreadyHiding(id)),
            BannerState::Visible | BannerState::MovingForward | BannerState::MovingBackward => {
                self.begin_hide(id)
            }
        }
    }

    /// Starts the exit animation of a visible banner.
    fn begin_hide(&mut self, id: BannerId) -> Result<(), BannerError> {
        let surface = self
            .banners
            .get(&id)
            .map(Banner::surface)
            .ok_or(BannerError::InvalidHandle(id))?;
        let Some(host) = self.host(surface) else {
            return Err(BannerError::NoActiveStack { surface });
        };
        let banner = self
            .banners
            .get_mut(&id)
            .ok_or(BannerError::InvalidHandle(id))?;

        let moving = matches!(
            banner.state(),
            BannerState::MovingForward | BannerState::MovingBackward
        );
        banner.transition(BannerState::Hiding);
        banner.reposition = None;
        if let Some(token) = banner.timer.take() {
            self.timer.cancel(token);
        }
        self.lifecycle.push_back(LifecycleEvent::WillHide {
            banner: id,
            surface,
        });

        // A banner caught mid re-flow leaves from where it is drawn.
        let resting = frame_of(host.as_ref(), banner);
        let frame = if moving {
            self.renderer.current_frame(id).unwrap_or(resting)
        } else {
            resting
        };
        let animation = Animation {
            id: AnimationId::new(),
            kind: AnimationKind::Hide,
            from: frame,
            to: layout::offstage_frame(banner.position(), frame),
            opacity: Some((banner.opacity().value(), 0.0)),
            duration: banner.hide_duration().as_duration(),
        };
        tracing::debug!(banner = %id, "hiding banner");
        self.renderer.animate(id, banner.content(), &animation);
        Ok(())
    }

    /// Moves one sibling by `delta` along its anchor axis.
    fn reflow(
        &mut self,
        host: &dyn HostSurface,
        id: BannerId,
        delta: f32,
        duration: AnimationDuration,
        direction: Reflow,
    ) {
        let Some(banner) = self.banners.get_mut(&id) else {
            return;
        };
        let from = frame_of(host, banner);
        banner.offset = (banner.offset + delta).max(0.0);
        let to = frame_of(host, banner);

        // Entering and leaving banners move without changing state.
        let next = direction.state();
        if banner.state().is_visible() && banner.state() != next {
            banner.transition(next);
        }

        let animation = Animation {
            id: AnimationId::new(),
            kind: AnimationKind::Reposition,
            from,
            to,
            opacity: None,
            duration: duration.as_duration(),
        };
        banner.reposition = Some(animation.id);
        self.renderer.animate(id, banner.content(), &animation);
    }

    /// Removes a banner from its stack, renumbering the remaining slots.
    ///
    /// Returns the siblings that were shown before it.
    fn remove_from_stack(
        &mut self,
        surface: SurfaceId,
        position: Position,
        id: BannerId,
    ) -> Vec<BannerId> {
        let Some(entry) = self.surfaces.get_mut(&surface) else {
            return Vec::new();
        };
        let Some(stack) = entry.stacks.get_mut(&position) else {
            return Vec::new();
        };
        let Some(index) = stack.iter().position(|b| *b == id) else {
            return Vec::new();
        };

        stack.remove(index);
        let older = stack[..index].to_vec();
        for (slot, sibling) in stack.iter().enumerate().skip(index) {
            if let Some(banner) = self.banners.get_mut(sibling) {
                banner.slot = slot;
            }
        }

        if stack.is_empty() {
            entry.stacks.remove(&position);
        }
        if entry.stacks.is_empty() {
            self.surfaces.remove(&surface);
        }
        older
    }

    /// Upgrades the host of a surface, dropping its stacks if it is gone.
    fn host(&mut self, surface: SurfaceId) -> Option<Rc<dyn HostSurface>> {
        let host = self.surfaces.get(&surface)?.host.upgrade();
        if host.is_none() {
            self.purge_surface(surface);
        }
        host
    }

    fn live_entry(&self, surface: SurfaceId) -> Option<&SurfaceEntry> {
        self.surfaces.get(&surface).filter(|entry| entry.is_live())
    }

    /// Purges every surface whose host was dropped.
    fn purge_dead_surfaces(&mut self) {
        let dead: Vec<SurfaceId> = self
            .surfaces
            .iter()
            .filter(|(_, entry)| !entry.is_live())
            .map(|(id, _)| *id)
            .collect();
        for surface in dead {
            self.purge_surface(surface);
        }
    }

    /// Releases every banner of a surface whose host was dropped.
    fn purge_surface(&mut self, surface: SurfaceId) {
        let Some(entry) = self.surfaces.remove(&surface) else {
            return;
        };
        let released: Vec<BannerId> = entry.stacks.into_values().flatten().collect();
        tracing::debug!(
            surface = surface.value(),
            banners = released.len(),
            "host surface dropped, releasing banners"
        );
        for id in released {
            if let Some(mut banner) = self.banners.remove(&id) {
                if let Some(token) = banner.timer.take() {
                    self.timer.cancel(token);
                }
            }
            self.renderer.remove(id);
        }
    }
}

impl<R, T> std::fmt::Debug for Coordinator<R, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("settings", &self.settings)
            .field("surfaces", &self.surfaces.len())
            .field("banners", &self.banners.len())
            .finish_non_exhaustive()
    }
}

fn frame_of(host: &dyn HostSurface, banner: &Banner) -> iced_core::Rectangle {
    layout::slot_frame(
        host.bounds(),
        host.nav_bar_bottom(),
        banner.position(),
        banner.offset,
        banner.height,
    )
}

fn warn_if_out_of_range(field: &'static str, value: f64, in_range: bool) {
    if !in_range {
        let err = BannerError::ConfigurationOutOfRange { field, value };
        tracing::warn!(%err, "clamping setting");
    }
}
