// SPDX-License-Identifier: MPL-2.0
//! Banner domain types.
//!
//! Timing and appearance values shared by the coordinator and the
//! persisted configuration, independent of any presentation framework.

pub mod newtypes;

pub use newtypes::{
    animation_bounds, auto_hide_bounds, opacity_bounds, AnimationDuration, AutoHide,
    BannerOpacity,
};
