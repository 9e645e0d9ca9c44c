// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the defaults
//! written to and read from `banners.toml`.
//!
//! # Categories
//!
//! - **Timing**: Auto-hide delay and animation durations
//! - **Appearance**: Banner opacity
//! - **Behavior**: Tap-to-dismiss

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default time a banner stays visible before hiding (in seconds).
/// A value <= 0 disables auto-hiding.
pub const DEFAULT_SECONDS_TO_SHOW: f64 = 3.5;

/// Default entrance animation duration (in seconds).
pub const DEFAULT_SHOW_ANIMATION_SECS: f64 = 0.25;

/// Default exit animation duration (in seconds).
pub const DEFAULT_HIDE_ANIMATION_SECS: f64 = 0.2;

/// Longest accepted animation duration (in seconds).
pub const MAX_ANIMATION_SECS: f64 = 60.0;

// ==========================================================================
// Appearance Defaults
// ==========================================================================

/// Default banner opacity (0.0 to 1.0).
pub const DEFAULT_BANNER_OPACITY: f32 = 0.93;

/// Minimum banner opacity.
pub const MIN_BANNER_OPACITY: f32 = 0.0;

/// Maximum banner opacity.
pub const MAX_BANNER_OPACITY: f32 = 1.0;

// ==========================================================================
// Behavior Defaults
// ==========================================================================

/// Whether tapping a banner dismisses it by default.
pub const DEFAULT_ALLOW_TAP_TO_DISMISS: bool = true;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::banner::{animation_bounds, auto_hide_bounds, opacity_bounds};

    // Verify domain bounds match config constants
    #[test]
    fn domain_bounds_match_config() {
        assert_eq!(auto_hide_bounds::DEFAULT_SECS, DEFAULT_SECONDS_TO_SHOW);
        assert_eq!(
            animation_bounds::DEFAULT_SHOW_SECS,
            DEFAULT_SHOW_ANIMATION_SECS
        );
        assert_eq!(
            animation_bounds::DEFAULT_HIDE_SECS,
            DEFAULT_HIDE_ANIMATION_SECS
        );
        assert_eq!(animation_bounds::MAX_SECS, MAX_ANIMATION_SECS);
        assert_eq!(opacity_bounds::DEFAULT, DEFAULT_BANNER_OPACITY);
        assert_eq!(opacity_bounds::MIN, MIN_BANNER_OPACITY);
        assert_eq!(opacity_bounds::MAX, MAX_BANNER_OPACITY);
    }

    #[test]
    fn default_opacity_is_within_range() {
        let default = DEFAULT_BANNER_OPACITY;
        assert!(
            (MIN_BANNER_OPACITY..=MAX_BANNER_OPACITY).contains(&default),
            "DEFAULT_BANNER_OPACITY must be within valid range"
        );
    }
}
