// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`Timeline`]: virtual-time [`Timer`]
//! - [`Scene`]: animation-tracking [`BannerRenderer`] on the same virtual clock
//! - [`drive`]: dispatches both into a [`Coordinator`] in due order
//! - [`TokioTimer`]: real-time [`Timer`] over tokio tasks
//! - [`WindowSurface`]: [`HostSurface`] with settable geometry
//!
//! [`Timer`]: crate::application::port::Timer
//! [`BannerRenderer`]: crate::application::port::BannerRenderer
//! [`HostSurface`]: crate::application::port::HostSurface
//! [`Coordinator`]: crate::coordinator::Coordinator

pub mod driver;
pub mod scene;
pub mod surface;
pub mod timeline;
pub mod tokio_timer;

pub use driver::drive;
pub use scene::{Metrics, Scene, Visual};
pub use surface::WindowSurface;
pub use timeline::Timeline;
pub use tokio_timer::TokioTimer;
