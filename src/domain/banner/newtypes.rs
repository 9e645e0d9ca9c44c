// SPDX-License-Identifier: MPL-2.0
//! Banner newtypes.
//!
//! This module provides type-safe wrappers for banner timing and
//! appearance values, ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Opacity Bounds
// =============================================================================

/// Banner opacity bounds (0.0 to 1.0).
pub mod opacity_bounds {
    /// Fully transparent.
    pub const MIN: f32 = 0.0;
    /// Fully opaque.
    pub const MAX: f32 = 1.0;
    /// Default banner opacity.
    pub const DEFAULT: f32 = 0.93;
}

// =============================================================================
// BannerOpacity
// =============================================================================

/// Banner surface opacity, guaranteed to be within valid range (0.0–1.0).
///
/// # Example
///
/// ```
/// use alert_banners::domain::banner::BannerOpacity;
///
/// assert_eq!(BannerOpacity::new(0.5).value(), 0.5);
/// assert_eq!(BannerOpacity::new(1.7).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerOpacity(f32);

impl BannerOpacity {
    /// Creates a new opacity, clamping to the valid range.
    ///
    /// `NaN` falls back to the default opacity.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(opacity_bounds::MIN, opacity_bounds::MAX))
    }

    /// Returns whether `value` is accepted without clamping.
    #[must_use]
    pub fn is_in_range(value: f32) -> bool {
        (opacity_bounds::MIN..=opacity_bounds::MAX).contains(&value)
    }

    /// Returns the opacity as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for BannerOpacity {
    fn default() -> Self {
        Self(opacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Auto-hide Bounds
// =============================================================================

/// Auto-hide defaults.
pub mod auto_hide_bounds {
    /// Default time a banner stays visible before hiding itself (seconds).
    pub const DEFAULT_SECS: f64 = 3.5;
}

// =============================================================================
// AutoHide
// =============================================================================

/// How long a banner stays visible before hiding itself.
///
/// Any non-positive (or non-finite) number of seconds disables auto-hide,
/// leaving the banner on screen until it is hidden explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoHide {
    /// The banner never hides itself.
    Disabled,
    /// The banner hides itself after being fully visible for this long.
    After(Duration),
}

impl AutoHide {
    /// Creates an auto-hide policy from a number of seconds.
    #[must_use]
    pub fn from_secs(secs: f64) -> Self {
        if secs > 0.0 {
            Duration::try_from_secs_f64(secs).map_or(Self::Disabled, Self::After)
        } else {
            Self::Disabled
        }
    }

    /// Returns the delay, or `None` when auto-hide is disabled.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            Self::Disabled => None,
            Self::After(delay) => Some(delay),
        }
    }

    /// Returns the delay in seconds, `0.0` when disabled.
    #[must_use]
    pub fn as_secs(self) -> f64 {
        self.duration().map_or(0.0, |delay| delay.as_secs_f64())
    }

    /// Returns true if the banner hides itself.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::After(_))
    }
}

impl Default for AutoHide {
    fn default() -> Self {
        Self::from_secs(auto_hide_bounds::DEFAULT_SECS)
    }
}

// =============================================================================
// Animation Bounds
// =============================================================================

/// Animation duration bounds (seconds).
pub mod animation_bounds {
    /// Shortest animation (instant).
    pub const MIN_SECS: f64 = 0.0;
    /// Longest accepted animation.
    pub const MAX_SECS: f64 = 60.0;
    /// Default entrance duration.
    pub const DEFAULT_SHOW_SECS: f64 = 0.25;
    /// Default exit duration.
    pub const DEFAULT_HIDE_SECS: f64 = 0.2;
}

// =============================================================================
// AnimationDuration
// =============================================================================

/// Length of an entrance, exit or re-flow animation (0–60 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct AnimationDuration(Duration);

impl AnimationDuration {
    /// Creates a duration from seconds, clamping to the valid range.
    ///
    /// `NaN` is treated as an instant animation.
    #[must_use]
    pub fn from_secs(secs: f64) -> Self {
        let secs = if secs.is_nan() {
            animation_bounds::MIN_SECS
        } else {
            secs.clamp(animation_bounds::MIN_SECS, animation_bounds::MAX_SECS)
        };
        Self(Duration::from_secs_f64(secs))
    }

    /// Returns whether `secs` is accepted without clamping.
    #[must_use]
    pub fn is_in_range(secs: f64) -> bool {
        (animation_bounds::MIN_SECS..=animation_bounds::MAX_SECS).contains(&secs)
    }

    /// Default entrance duration.
    #[must_use]
    pub fn default_show() -> Self {
        Self::from_secs(animation_bounds::DEFAULT_SHOW_SECS)
    }

    /// Default exit duration.
    #[must_use]
    pub fn default_hide() -> Self {
        Self::from_secs(animation_bounds::DEFAULT_HIDE_SECS)
    }

    /// Returns the duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Returns the duration in seconds.
    #[must_use]
    pub fn as_secs(self) -> f64 {
        self.0.as_secs_f64()
    }

    /// Returns true if the animation completes immediately.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_clamps_to_valid_range() {
        assert_eq!(BannerOpacity::new(-0.2).value(), opacity_bounds::MIN);
        assert_eq!(BannerOpacity::new(1.2).value(), opacity_bounds::MAX);
        assert_eq!(BannerOpacity::new(0.5).value(), 0.5);
    }

    #[test]
    fn opacity_nan_falls_back_to_default() {
        assert_eq!(BannerOpacity::new(f32::NAN), BannerOpacity::default());
    }

    #[test]
    fn opacity_range_check_matches_clamp() {
        assert!(BannerOpacity::is_in_range(0.0));
        assert!(BannerOpacity::is_in_range(1.0));
        assert!(!BannerOpacity::is_in_range(1.01));
        assert!(!BannerOpacity::is_in_range(f32::NAN));
    }

    #[test]
    fn default_opacity_is_expected_value() {
        assert_eq!(BannerOpacity::default().value(), 0.93);
    }

    #[test]
    fn non_positive_auto_hide_is_disabled() {
        assert_eq!(AutoHide::from_secs(0.0), AutoHide::Disabled);
        assert_eq!(AutoHide::from_secs(-1.0), AutoHide::Disabled);
        assert_eq!(AutoHide::from_secs(f64::NAN), AutoHide::Disabled);
        assert_eq!(AutoHide::from_secs(f64::INFINITY), AutoHide::Disabled);
    }

    #[test]
    fn positive_auto_hide_keeps_delay() {
        let policy = AutoHide::from_secs(1.5);
        assert_eq!(policy.duration(), Some(Duration::from_millis(1500)));
        assert!(policy.is_enabled());
        assert_eq!(policy.as_secs(), 1.5);
    }

    #[test]
    fn default_auto_hide_is_three_and_a_half_seconds() {
        assert_eq!(
            AutoHide::default().duration(),
            Some(Duration::from_millis(3500))
        );
    }

    #[test]
    fn animation_duration_clamps_negative_to_instant() {
        let duration = AnimationDuration::from_secs(-3.0);
        assert!(duration.is_instant());
        assert!(!AnimationDuration::is_in_range(-3.0));
    }

    #[test]
    fn animation_duration_clamps_to_maximum() {
        let duration = AnimationDuration::from_secs(1_000.0);
        assert_eq!(duration.as_secs(), animation_bounds::MAX_SECS);
    }

    #[test]
    fn animation_defaults_match_bounds() {
        assert_eq!(
            AnimationDuration::default_show().as_duration(),
            Duration::from_millis(250)
        );
        assert_eq!(
            AnimationDuration::default_hide().as_duration(),
            Duration::from_millis(200)
        );
    }
}
