// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of banners.
//!
//! - [`overlay`] - Per-surface overlay driving a coordinator from frame ticks
//! - [`banner_view`] - Widget for a single banner strip

pub mod banner_view;
pub mod overlay;

pub use overlay::{Message, Overlay};
