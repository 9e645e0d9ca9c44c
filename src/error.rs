// SPDX-License-Identifier: MPL-2.0
use crate::application::port::SurfaceId;
use crate::banner::{BannerId, BannerState};
use std::fmt;

/// Errors from the fallible edges of the crate (settings I/O).
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Conditions the coordinator absorbs instead of reporting.
///
/// These never reach callers of the show/hide API; they exist so the
/// coordinator can log why a request or event was ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum BannerError {
    /// The handle does not refer to a tracked banner.
    InvalidHandle(BannerId),

    /// The surface has no live host or no banners.
    NoActiveStack { surface: SurfaceId },

    /// A setting was outside its accepted range and was clamped.
    ConfigurationOutOfRange { field: &'static str, value: f64 },

    /// The banner is already leaving the screen.
    AlreadyHiding(BannerId),

    /// An event arrived while the banner was in a state that ignores it.
    UnexpectedState { banner: BannerId, state: BannerState },

    /// A re-flow completion for an animation that was superseded.
    StaleAnimation(BannerId),
}

impl fmt::Display for BannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BannerError::InvalidHandle(banner) => write!(f, "{banner} is not tracked"),
            BannerError::NoActiveStack { surface } => {
                write!(f, "no active stack on surface {}", surface.value())
            }
            BannerError::ConfigurationOutOfRange { field, value } => {
                write!(f, "{field} out of range: {value}")
            }
            BannerError::AlreadyHiding(banner) => write!(f, "{banner} is already hiding"),
            BannerError::UnexpectedState { banner, state } => {
                write!(f, "{banner} ignored event in state {state:?}")
            }
            BannerError::StaleAnimation(banner) => {
                write!(f, "{banner} finished a superseded animation")
            }
        }
    }
}

impl std::error::Error for BannerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn out_of_range_names_the_field() {
        let err = BannerError::ConfigurationOutOfRange {
            field: "banner_opacity",
            value: 1.5,
        };
        assert_eq!(err.to_string(), "banner_opacity out of range: 1.5");
    }

    #[test]
    fn invalid_handle_mentions_banner() {
        let id = BannerId::new();
        let err = BannerError::InvalidHandle(id);
        assert!(err.to_string().contains(&id.to_string()));
    }
}
