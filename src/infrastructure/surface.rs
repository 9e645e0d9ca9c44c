// SPDX-License-Identifier: MPL-2.0
//! A [`HostSurface`] backed by interior-mutable geometry.

use crate::application::port::{HostSurface, SurfaceId};
use iced_core::{Rectangle, Size};
use std::cell::Cell;

/// Window-like host surface whose geometry the application updates.
///
/// Keep it in an `Rc` and hand that to the coordinator; after a resize,
/// update the bounds and call
/// [`Coordinator::refresh_layout`](crate::coordinator::Coordinator::refresh_layout).
#[derive(Debug)]
pub struct WindowSurface {
    id: SurfaceId,
    bounds: Cell<Rectangle>,
    nav_bar_bottom: Cell<f32>,
}

impl WindowSurface {
    #[must_use]
    pub fn new(id: SurfaceId, bounds: Rectangle) -> Self {
        Self {
            id,
            bounds: Cell::new(bounds),
            nav_bar_bottom: Cell::new(0.0),
        }
    }

    /// Creates a surface whose navigation bar ends `nav_bar_bottom` below the top.
    #[must_use]
    pub fn with_nav_bar(id: SurfaceId, bounds: Rectangle, nav_bar_bottom: f32) -> Self {
        let surface = Self::new(id, bounds);
        surface.set_nav_bar_bottom(nav_bar_bottom);
        surface
    }

    pub fn set_bounds(&self, bounds: Rectangle) {
        self.bounds.set(bounds);
    }

    /// Resizes the surface, keeping its origin.
    pub fn resize(&self, size: Size) {
        let mut bounds = self.bounds.get();
        bounds.width = size.width;
        bounds.height = size.height;
        self.bounds.set(bounds);
    }

    pub fn set_nav_bar_bottom(&self, bottom: f32) {
        self.nav_bar_bottom.set(bottom.max(0.0));
    }
}

impl HostSurface for WindowSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn bounds(&self) -> Rectangle {
        self.bounds.get()
    }

    fn nav_bar_bottom(&self) -> f32 {
        self.nav_bar_bottom.get()
    }
}
