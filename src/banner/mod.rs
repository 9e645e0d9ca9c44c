// SPDX-License-Identifier: MPL-2.0
//! Alert banner records.
//!
//! A [`Banner`] is one visual unit tracked by the
//! [`Coordinator`](crate::coordinator::Coordinator). Callers never hold a
//! `Banner` directly; they receive a [`BannerId`] handle from `show` and use
//! it to query or dismiss the banner later.
//!
//! # Components
//!
//! - [`style`] - `BannerStyle` background/icon pairs and presets
//! - [`state`] - `BannerState` lifecycle and transition table

pub mod state;
pub mod style;

pub use state::BannerState;
pub use style::{BannerIcon, BannerStyle};

use crate::application::port::{AnimationId, SurfaceId, TimerToken};
use crate::coordinator::Settings;
use crate::domain::banner::{AnimationDuration, AutoHide, BannerOpacity};
use std::fmt;

/// Opaque handle to a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BannerId(u64);

impl BannerId {
    /// Creates a new unique banner ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for BannerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "banner#{}", self.0)
    }
}

/// Edge or region a stack of banners grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Position {
    /// Top edge of the host surface.
    #[default]
    Top,
    /// Bottom edge of the host surface.
    Bottom,
    /// Just below the host's navigation bar.
    UnderNavBar,
}

/// What the tap handler wants done with the tapped banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapResponse {
    /// Leave the banner on screen.
    Keep,
    /// Hide the banner.
    Dismiss,
}

/// Custom reaction to a tap on a banner.
pub type TapHandler = Box<dyn FnMut(&Banner) -> TapResponse>;

/// The text and style a renderer needs to draw a banner.
#[derive(Debug, Clone, PartialEq)]
pub struct BannerContent {
    pub style: BannerStyle,
    pub title: String,
    pub subtitle: Option<String>,
}

/// Parameters of a `show` call.
///
/// # Example
///
/// ```
/// use alert_banners::banner::{BannerRequest, BannerStyle, Position, TapResponse};
///
/// let request = BannerRequest::new(BannerStyle::success(), Position::Top, "Saved")
///     .subtitle("3 files written")
///     .hide_after(5.0)
///     .on_tap(|_banner| TapResponse::Dismiss);
/// assert_eq!(request.title(), "Saved");
/// ```
pub struct BannerRequest {
    style: BannerStyle,
    position: Position,
    title: String,
    subtitle: Option<String>,
    hide_after: Option<f64>,
    tap_handler: Option<TapHandler>,
    allow_tap_to_dismiss: Option<bool>,
}

impl BannerRequest {
    pub fn new(style: BannerStyle, position: Position, title: impl Into<String>) -> Self {
        Self {
            style,
            position,
            title: title.into(),
            subtitle: None,
            hide_after: None,
            tap_handler: None,
            allow_tap_to_dismiss: None,
        }
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Overrides the global auto-hide delay for this banner.
    ///
    /// A value `<= 0` keeps the banner on screen until it is hidden.
    #[must_use]
    pub fn hide_after(mut self, secs: f64) -> Self {
        self.hide_after = Some(secs);
        self
    }

    /// Installs a tap handler.
    ///
    /// Supplying a handler turns tap-to-dismiss off for this banner unless
    /// [`allow_tap_to_dismiss`](Self::allow_tap_to_dismiss) re-enables it.
    #[must_use]
    pub fn on_tap<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&Banner) -> TapResponse + 'static,
    {
        self.tap_handler = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn allow_tap_to_dismiss(mut self, allow: bool) -> Self {
        self.allow_tap_to_dismiss = Some(allow);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }
}

impl fmt::Debug for BannerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BannerRequest")
            .field("style", &self.style)
            .field("position", &self.position)
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("hide_after", &self.hide_after)
            .field("has_tap_handler", &self.tap_handler.is_some())
            .field("allow_tap_to_dismiss", &self.allow_tap_to_dismiss)
            .finish()
    }
}

/// A banner tracked by the coordinator.
pub struct Banner {
    id: BannerId,
    surface: SurfaceId,
    position: Position,
    content: BannerContent,
    auto_hide: AutoHide,
    allow_tap_to_dismiss: bool,
    tap_handler: Option<TapHandler>,
    show_duration: AnimationDuration,
    hide_duration: AnimationDuration,
    opacity: BannerOpacity,
    state: BannerState,
    pub(crate) slot: usize,
    pub(crate) height: f32,
    pub(crate) offset: f32,
    pub(crate) timer: Option<TimerToken>,
    pub(crate) reposition: Option<AnimationId>,
    pub(crate) hide_requested: bool,
}

impl Banner {
    pub(crate) fn new(
        surface: SurfaceId,
        request: BannerRequest,
        defaults: &Settings,
        height: f32,
    ) -> Self {
        let BannerRequest {
            style,
            position,
            title,
            subtitle,
            hide_after,
            tap_handler,
            allow_tap_to_dismiss,
        } = request;

        // A tap handler replaces the default dismissal unless re-enabled.
        let allow_tap_to_dismiss = allow_tap_to_dismiss
            .unwrap_or(tap_handler.is_none() && defaults.allow_tap_to_dismiss);

        Self {
            id: BannerId::new(),
            surface,
            position,
            content: BannerContent {
                style,
                title,
                subtitle,
            },
            auto_hide: hide_after.map_or(defaults.auto_hide, AutoHide::from_secs),
            allow_tap_to_dismiss,
            tap_handler,
            show_duration: defaults.show_animation,
            hide_duration: defaults.hide_animation,
            opacity: defaults.opacity,
            state: BannerState::Showing,
            slot: 0,
            height,
            offset: 0.0,
            timer: None,
            reposition: None,
            hide_requested: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> BannerId {
        self.id
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn content(&self) -> &BannerContent {
        &self.content
    }

    #[must_use]
    pub fn style(&self) -> &BannerStyle {
        &self.content.style
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.content.title
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.content.subtitle.as_deref()
    }

    /// Effective auto-hide policy (per-banner override or global default).
    #[must_use]
    pub fn auto_hide(&self) -> AutoHide {
        self.auto_hide
    }

    #[must_use]
    pub fn allow_tap_to_dismiss(&self) -> bool {
        self.allow_tap_to_dismiss
    }

    #[must_use]
    pub fn has_tap_handler(&self) -> bool {
        self.tap_handler.is_some()
    }

    #[must_use]
    pub fn show_duration(&self) -> AnimationDuration {
        self.show_duration
    }

    #[must_use]
    pub fn hide_duration(&self) -> AnimationDuration {
        self.hide_duration
    }

    #[must_use]
    pub fn opacity(&self) -> BannerOpacity {
        self.opacity
    }

    #[must_use]
    pub fn state(&self) -> BannerState {
        self.state
    }

    /// Index within the banner's stack (0 = oldest).
    #[must_use]
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Measured height of the banner.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Target distance from the anchor edge.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Returns true while an auto-hide timer is pending.
    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Moves to `next` if the transition table allows it.
    pub(crate) fn transition(&mut self, next: BannerState) -> bool {
        let allowed = self.state.can_transition_to(next);
        debug_assert!(
            allowed,
            "illegal banner transition {:?} -> {:?}",
            self.state, next
        );
        if allowed {
            self.state = next;
        } else {
            tracing::warn!(
                banner = %self.id,
                from = ?self.state,
                to = ?next,
                "illegal transition ignored"
            );
        }
        allowed
    }

    pub(crate) fn take_tap_handler(&mut self) -> Option<TapHandler> {
        self.tap_handler.take()
    }

    pub(crate) fn restore_tap_handler(&mut self, handler: TapHandler) {
        self.tap_handler = Some(handler);
    }
}

impl fmt::Debug for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Banner")
            .field("id", &self.id)
            .field("surface", &self.surface)
            .field("position", &self.position)
            .field("title", &self.content.title)
            .field("state", &self.state)
            .field("slot", &self.slot)
            .field("offset", &self.offset)
            .field("auto_hide", &self.auto_hide)
            .field("allow_tap_to_dismiss", &self.allow_tap_to_dismiss)
            .finish_non_exhaustive()
    }
}
