// SPDX-License-Identifier: MPL-2.0
//! Application layer - Collaborator interfaces.
//!
//! - [`port`]: Trait definitions the coordinator consumes for rendering,
//!   host geometry and timers
//!
//! # Dependency Rule
//!
//! - The coordinator depends only on these ports
//! - Infrastructure adapters implement them
//! - The Iced overlay plugs the adapters into the coordinator
//!
//! # Example
//!
//! ```ignore
//! use alert_banners::application::port::{BannerRenderer, Timer};
//!
//! struct GpuRenderer { /* ... */ }
//! impl BannerRenderer for GpuRenderer { /* ... */ }
//! ```

pub mod port;
