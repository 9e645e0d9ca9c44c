// SPDX-License-Identifier: MPL-2.0
//! Banner styling value objects.
//!
//! A [`BannerStyle`] pairs a background fill with an optional icon. The
//! four presets match the classic success / failure / notify / alert
//! banners; any other combination is equally valid.

use iced_core::Color;
use std::path::PathBuf;

/// Preset background colors.
pub mod palette {
    use super::Color;

    pub const GREEN: Color = Color::from_rgb(77.0 / 255.0, 175.0 / 255.0, 67.0 / 255.0);
    pub const RED: Color = Color::from_rgb(173.0 / 255.0, 48.0 / 255.0, 48.0 / 255.0);
    pub const BLUE: Color = Color::from_rgb(48.0 / 255.0, 110.0 / 255.0, 173.0 / 255.0);
    pub const YELLOW: Color = Color::from_rgb(211.0 / 255.0, 209.0 / 255.0, 100.0 / 255.0);
}

/// Image shown at the leading edge of a banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerIcon {
    /// Check mark.
    Success,
    /// Cross.
    Failure,
    /// Information mark.
    Info,
    /// Exclamation mark.
    Warning,
    /// Image file supplied by the host application.
    Path(PathBuf),
}

impl BannerIcon {
    /// Returns the asset name of a built-in icon.
    #[must_use]
    pub fn asset_name(&self) -> Option<&'static str> {
        match self {
            BannerIcon::Success => Some("bannerSuccess.png"),
            BannerIcon::Failure => Some("bannerFailure.png"),
            BannerIcon::Info => Some("bannerNotify.png"),
            BannerIcon::Warning => Some("bannerAlert.png"),
            BannerIcon::Path(_) => None,
        }
    }
}

/// Immutable background + icon pair.
#[derive(Debug, Clone, PartialEq)]
pub struct BannerStyle {
    background_color: Color,
    icon: Option<BannerIcon>,
}

impl BannerStyle {
    /// Creates a style from a background color and an optional icon.
    #[must_use]
    pub fn new(background_color: Color, icon: Option<BannerIcon>) -> Self {
        Self {
            background_color,
            icon,
        }
    }

    /// Green banner with a check mark.
    #[must_use]
    pub fn success() -> Self {
        Self::new(palette::GREEN, Some(BannerIcon::Success))
    }

    /// Red banner with a cross.
    #[must_use]
    pub fn failure() -> Self {
        Self::new(palette::RED, Some(BannerIcon::Failure))
    }

    /// Blue informational banner.
    #[must_use]
    pub fn notify() -> Self {
        Self::new(palette::BLUE, Some(BannerIcon::Info))
    }

    /// Yellow warning banner.
    #[must_use]
    pub fn alert() -> Self {
        Self::new(palette::YELLOW, Some(BannerIcon::Warning))
    }

    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    #[must_use]
    pub fn icon(&self) -> Option<&BannerIcon> {
        self.icon.as_ref()
    }
}
