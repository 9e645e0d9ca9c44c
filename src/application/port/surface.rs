// SPDX-License-Identifier: MPL-2.0
//! Host surface port definition.
//!
//! A host surface is the window, view or layer banners are anchored to.
//! The coordinator only keeps a weak reference to it and asks for its
//! geometry whenever slots are laid out.

use iced_core::Rectangle;

/// Identifies a host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl SurfaceId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Geometry provider for the surface banners are drawn on.
pub trait HostSurface {
    /// Stable identity of this surface.
    fn id(&self) -> SurfaceId;

    /// Area banners are laid out in, in the surface's coordinate space.
    fn bounds(&self) -> Rectangle;

    /// Distance from the top of [`bounds`](Self::bounds) to the bottom of
    /// the navigation bar. Used by the under-navigation-bar anchor.
    fn nav_bar_bottom(&self) -> f32 {
        0.0
    }
}
