// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and their validity rules.
//! It has no dependencies on external crates (except `std`) so the
//! bounds can be tested in isolation from the coordinator and the UI.
//!
//! # Modules
//!
//! - [`banner`]: Banner value objects ([`BannerOpacity`](banner::BannerOpacity),
//!   [`AutoHide`](banner::AutoHide), [`AnimationDuration`](banner::AnimationDuration))

pub mod banner;
