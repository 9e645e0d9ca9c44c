// SPDX-License-Identifier: MPL-2.0
//! `alert_banners` shows short-lived, stacking alert banners over an Iced
//! window.
//!
//! Banners are anchored to the top, the bottom, or just below a navigation
//! bar of a host surface. They slide in, stay for a configurable time, and
//! slide out; siblings on the same anchor make room and close gaps as
//! banners come and go.
//!
//! The [`coordinator::Coordinator`] owns the lifecycle and stacking logic
//! and talks to rendering and timers through the traits in
//! [`application::port`]. [`infrastructure`] provides a virtual-clock scene
//! and timeline plus a tokio timer, and [`ui::Overlay`] wires them into an
//! Iced application.

#![doc(html_root_url = "https://docs.rs/alert_banners/0.1.0")]

pub mod application;
pub mod banner;
pub mod config;
pub mod coordinator;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
