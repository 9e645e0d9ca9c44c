// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the interfaces the coordinator drives. Adapters in
//! [`infrastructure`](crate::infrastructure) implement them, and tests
//! substitute recording doubles.
//!
//! # Available Ports
//!
//! - [`renderer`]: Measuring and animating banner surfaces
//! - [`surface`]: Host surface geometry
//! - [`timer`]: One-shot cancelable timers
//!
//! # Design Notes
//!
//! - Ports never call back into the coordinator. Completions are posted by
//!   the host as [`Event`](crate::coordinator::Event)s, keeping every state
//!   change on one dispatch path
//! - No `async fn`: adapters that need a runtime hide it behind the trait

pub mod renderer;
pub mod surface;
pub mod timer;

pub use renderer::{Animation, AnimationId, AnimationKind, BannerRenderer};
pub use surface::{HostSurface, SurfaceId};
pub use timer::{Timer, TimerToken};
