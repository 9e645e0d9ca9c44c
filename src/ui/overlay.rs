// SPDX-License-Identifier: MPL-2.0
//! Banner overlay for one host surface.
//!
//! The overlay owns a [`Coordinator`] running on the virtual
//! [`Scene`]/[`Timeline`] clock and maps iced frame ticks onto it. Embed it
//! in an application state, forward [`Message`]s to [`Overlay::update`],
//! stack [`Overlay::view`] above the main content and merge
//! [`Overlay::subscription`] into the application's subscriptions.

use super::banner_view;
use crate::application::port::HostSurface;
use crate::banner::{BannerId, BannerRequest};
use crate::config::Config;
use crate::coordinator::{Coordinator, Event, LifecycleEvent, Settings};
use crate::infrastructure::{drive, Scene, Timeline, WindowSurface};
use iced::time::{self, Instant};
use iced::widget::{Container, Stack};
use iced::{Element, Length, Size, Subscription};
use std::rc::Rc;
use std::time::Duration;

/// Frame interval while banners are on screen.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Messages for banner overlay state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Frame tick advancing animations and timers.
    Tick(Instant),
    /// The user tapped a banner.
    Tapped(BannerId),
    /// The host surface was resized.
    Resized(Size),
}

/// Banners drawn over one window.
#[derive(Debug)]
pub struct Overlay {
    coordinator: Coordinator<Scene, Timeline>,
    surface: Rc<WindowSurface>,
    started: Instant,
}

impl Overlay {
    /// Creates an overlay with default settings.
    #[must_use]
    pub fn new(surface: Rc<WindowSurface>) -> Self {
        Self::with_settings(surface, Settings::default())
    }

    #[must_use]
    pub fn with_settings(surface: Rc<WindowSurface>, settings: Settings) -> Self {
        Self {
            coordinator: Coordinator::with_settings(Scene::new(), Timeline::new(), settings),
            surface,
            started: Instant::now(),
        }
    }

    /// Creates an overlay from persisted settings.
    #[must_use]
    pub fn from_config(surface: Rc<WindowSurface>, config: &Config) -> Self {
        Self::with_settings(surface, Settings::from(config))
    }

    /// Shows a banner on this overlay's surface.
    pub fn show(&mut self, request: BannerRequest) -> BannerId {
        self.advance(Instant::now());
        self.coordinator.show(&self.surface, request)
    }

    pub fn hide(&mut self, banner: BannerId) {
        self.advance(Instant::now());
        self.coordinator.hide(banner);
    }

    pub fn hide_all(&mut self) {
        self.advance(Instant::now());
        self.coordinator.hide_all_in_surface(self.surface.id());
    }

    /// Handles an overlay message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(now) => self.advance(now),
            Message::Tapped(banner) => {
                self.advance(Instant::now());
                self.coordinator.handle(Event::Tapped(banner));
            }
            Message::Resized(size) => {
                self.surface.resize(size);
                self.coordinator.refresh_layout(self.surface.id());
            }
        }
    }

    /// Renders every banner of the surface at its current position.
    pub fn view(&self) -> Element<'_, Message> {
        let bounds = self.surface.bounds();
        let scene = self.coordinator.renderer();

        let layers: Vec<Element<'_, Message>> = self
            .coordinator
            .banners_in_surface(self.surface.id())
            .into_iter()
            .filter_map(|id| {
                let banner = self.coordinator.banner(id)?;
                let visual = scene.visual(id)?;
                let strip = banner_view::view(
                    id,
                    banner.content(),
                    visual.frame.width,
                    visual.frame.height,
                    visual.opacity,
                );
                banner_view::positioned(strip, visual.frame, bounds)
            })
            .collect();

        Container::new(Stack::with_children(layers))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Frame ticks while any banner is tracked.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.coordinator.has_banners() {
            time::every(FRAME_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Takes the lifecycle notifications queued since the last call.
    pub fn drain_lifecycle(&mut self) -> Vec<LifecycleEvent> {
        self.coordinator.drain_lifecycle()
    }

    #[must_use]
    pub fn coordinator(&self) -> &Coordinator<Scene, Timeline> {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut Coordinator<Scene, Timeline> {
        &mut self.coordinator
    }

    #[must_use]
    pub fn surface(&self) -> &Rc<WindowSurface> {
        &self.surface
    }

    /// Instant the overlay's virtual clock counts from.
    #[must_use]
    pub fn started(&self) -> Instant {
        self.started
    }

    fn advance(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.started);
        drive(&mut self.coordinator, elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::SurfaceId;
    use crate::banner::{BannerState, BannerStyle, Position};
    use iced::{Point, Rectangle};

    fn overlay() -> Overlay {
        let surface = Rc::new(WindowSurface::new(
            SurfaceId::new(1),
            Rectangle::new(Point::ORIGIN, Size::new(320.0, 480.0)),
        ));
        Overlay::new(surface)
    }

    fn request(title: &str) -> BannerRequest {
        BannerRequest::new(BannerStyle::success(), Position::Top, title)
    }

    #[test]
    fn ticks_run_a_banner_to_completion() {
        let mut overlay = overlay();
        let start = overlay.started();
        let id = overlay.show(request("Saved"));

        overlay.update(Message::Tick(start + Duration::from_millis(400)));
        assert_eq!(
            overlay.coordinator().banner(id).map(|b| b.state()),
            Some(BannerState::Visible)
        );

        overlay.update(Message::Tick(start + Duration::from_secs(10)));
        assert!(!overlay.coordinator().is_tracked(id));
    }

    #[test]
    fn subscription_only_while_banners_exist() {
        let mut overlay = overlay();
        assert!(!overlay.coordinator().has_banners());

        overlay.show(request("Saved"));
        assert!(overlay.coordinator().has_banners());
        let _ = overlay.subscription();
    }

    #[test]
    fn tap_dismisses_visible_banner() {
        let mut overlay = overlay();
        let start = overlay.started();
        let id = overlay.show(request("Saved"));
        overlay.update(Message::Tick(start + Duration::from_millis(400)));

        overlay.update(Message::Tapped(id));
        assert_eq!(
            overlay.coordinator().banner(id).map(|b| b.state()),
            Some(BannerState::Hiding)
        );
    }

    #[test]
    fn lifecycle_is_forwarded() {
        let mut overlay = overlay();
        let id = overlay.show(request("Saved"));
        let events = overlay.drain_lifecycle();
        assert_eq!(events.first().map(LifecycleEvent::banner), Some(id));
    }

    #[test]
    fn resize_updates_surface_bounds() {
        let mut overlay = overlay();
        overlay.update(Message::Resized(Size::new(640.0, 480.0)));
        assert_eq!(overlay.surface().bounds().width, 640.0);
    }

    #[test]
    fn view_renders_with_banners() {
        let mut overlay = overlay();
        let start = overlay.started();
        overlay.show(request("Saved"));
        overlay.update(Message::Tick(start + Duration::from_millis(100)));
        let _ = overlay.view();
    }
}
