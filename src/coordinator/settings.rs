// SPDX-License-Identifier: MPL-2.0
//! Global banner defaults held by the coordinator.

use crate::config::Config;
use crate::domain::banner::{AnimationDuration, AutoHide, BannerOpacity};

/// Defaults applied to banners created from now on.
///
/// Banners copy these values when they are created, so changing a setting
/// never alters a banner that is already on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Global auto-hide policy.
    pub auto_hide: AutoHide,
    /// Entrance and forward re-flow duration.
    pub show_animation: AnimationDuration,
    /// Exit and backward re-flow duration.
    pub hide_animation: AnimationDuration,
    /// Banner surface opacity.
    pub opacity: BannerOpacity,
    /// Whether tapping a banner dismisses it.
    pub allow_tap_to_dismiss: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_hide: AutoHide::default(),
            show_animation: AnimationDuration::default_show(),
            hide_animation: AnimationDuration::default_hide(),
            opacity: BannerOpacity::default(),
            allow_tap_to_dismiss: true,
        }
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        let defaults = Settings::default();
        Self {
            auto_hide: config
                .timing
                .seconds_to_show
                .map_or(defaults.auto_hide, AutoHide::from_secs),
            show_animation: config
                .timing
                .show_animation_secs
                .map_or(defaults.show_animation, AnimationDuration::from_secs),
            hide_animation: config
                .timing
                .hide_animation_secs
                .map_or(defaults.hide_animation, AnimationDuration::from_secs),
            opacity: config
                .appearance
                .opacity
                .map_or(defaults.opacity, BannerOpacity::new),
            allow_tap_to_dismiss: config
                .behavior
                .allow_tap_to_dismiss
                .unwrap_or(defaults.allow_tap_to_dismiss),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppearanceConfig, TimingConfig};
    use std::time::Duration;

    #[test]
    fn default_settings_match_documented_values() {
        let settings = Settings::default();
        assert_eq!(
            settings.auto_hide.duration(),
            Some(Duration::from_millis(3500))
        );
        assert_eq!(settings.show_animation.as_secs(), 0.25);
        assert_eq!(settings.opacity.value(), 0.93);
        assert!(settings.allow_tap_to_dismiss);
    }

    #[test]
    fn default_config_produces_default_settings() {
        assert_eq!(Settings::from(&Config::default()), Settings::default());
    }

    #[test]
    fn config_values_are_clamped() {
        let config = Config {
            timing: TimingConfig {
                seconds_to_show: Some(0.0),
                show_animation_secs: Some(-1.0),
                hide_animation_secs: Some(0.5),
            },
            appearance: AppearanceConfig { opacity: Some(4.0) },
            ..Config::default()
        };
        let settings = Settings::from(&config);
        assert!(!settings.auto_hide.is_enabled());
        assert!(settings.show_animation.is_instant());
        assert_eq!(settings.hide_animation.as_secs(), 0.5);
        assert_eq!(settings.opacity.value(), 1.0);
    }
}
