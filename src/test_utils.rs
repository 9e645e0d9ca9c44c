// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and coordinator fixtures.
//!
//! Float assertions come from the `approx` crate, which handles precision
//! issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use crate::application::port::SurfaceId;
use crate::coordinator::Coordinator;
use crate::infrastructure::{Metrics, Scene, Timeline, WindowSurface};
use iced_core::{Point, Rectangle, Size};
use std::rc::Rc;

/// Height every banner gets in [`coordinator`] fixtures.
pub const BANNER_HEIGHT: f32 = 50.0;

/// A 320x480 surface at the origin.
pub fn surface(id: u64) -> Rc<WindowSurface> {
    Rc::new(WindowSurface::new(
        SurfaceId::new(id),
        Rectangle::new(Point::ORIGIN, Size::new(320.0, 480.0)),
    ))
}

/// Coordinator on the virtual clock with fixed banner heights.
pub fn coordinator() -> Coordinator<Scene, Timeline> {
    Coordinator::new(
        Scene::with_metrics(Metrics::fixed(BANNER_HEIGHT)),
        Timeline::new(),
    )
}
