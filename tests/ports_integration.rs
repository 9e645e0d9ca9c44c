// SPDX-License-Identifier: MPL-2.0
use alert_banners::application::port::{
    Animation, AnimationKind, BannerRenderer, HostSurface, SurfaceId, Timer, TimerToken,
};
use alert_banners::banner::{BannerContent, BannerId, BannerState, BannerStyle, Position};
use alert_banners::coordinator::{Coordinator, Event};
use alert_banners::infrastructure::{Scene, TokioTimer};
use iced_core::{Point, Rectangle, Size};
use std::rc::Rc;
use std::time::Duration;

/// Records every call instead of drawing.
#[derive(Default)]
struct RecordingRenderer {
    animations: Vec<(BannerId, Animation)>,
    removed: Vec<BannerId>,
}

impl BannerRenderer for RecordingRenderer {
    fn measure(&mut self, _content: &BannerContent, _width: f32) -> f32 {
        30.0
    }

    fn animate(&mut self, banner: BannerId, _content: &BannerContent, animation: &Animation) {
        self.animations.push((banner, *animation));
    }

    fn remove(&mut self, banner: BannerId) {
        self.removed.push(banner);
    }
}

#[derive(Default)]
struct RecordingTimer {
    next: u64,
    scheduled: Vec<(TimerToken, BannerId, Duration)>,
    cancelled: Vec<TimerToken>,
}

impl Timer for RecordingTimer {
    fn schedule(&mut self, banner: BannerId, delay: Duration) -> TimerToken {
        let token = TimerToken::new(self.next);
        self.next += 1;
        self.scheduled.push((token, banner, delay));
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.cancelled.push(token);
    }
}

struct FixedSurface;

impl HostSurface for FixedSurface {
    fn id(&self) -> SurfaceId {
        SurfaceId::new(42)
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::new(0.0, 20.0), Size::new(300.0, 400.0))
    }
}

fn kinds(renderer: &RecordingRenderer, banner: BannerId) -> Vec<AnimationKind> {
    renderer
        .animations
        .iter()
        .filter(|(id, _)| *id == banner)
        .map(|(_, a)| a.kind)
        .collect()
}

#[test]
fn show_requests_entrance_from_offstage() {
    let mut c = Coordinator::new(RecordingRenderer::default(), RecordingTimer::default());
    let host = Rc::new(FixedSurface);
    let id = c.show_banner(&host, BannerStyle::success(), Position::Top, "Saved");

    let (banner, animation) = c.renderer().animations[0];
    assert_eq!(banner, id);
    assert_eq!(animation.kind, AnimationKind::Show);
    assert_eq!(animation.to.y, 20.0);
    assert_eq!(animation.from.y, 20.0 - 30.0);
    assert_eq!(animation.to.width, 300.0);
    assert_eq!(animation.opacity, Some((0.0, 0.93)));
    assert_eq!(animation.duration, Duration::from_millis(250));
    assert!(c.timer().scheduled.is_empty());
}

#[test]
fn bottom_anchor_pushes_older_banners_up() {
    let mut c = Coordinator::new(RecordingRenderer::default(), RecordingTimer::default());
    let host = Rc::new(FixedSurface);
    let older = c.show_banner(&host, BannerStyle::notify(), Position::Bottom, "older");
    c.show_banner(&host, BannerStyle::notify(), Position::Bottom, "newer");

    let (_, reflow) = c
        .renderer()
        .animations
        .iter()
        .find(|(id, a)| *id == older && a.kind == AnimationKind::Reposition)
        .copied()
        .expect("older banner re-flows");
    assert_eq!(reflow.from.y, 420.0 - 30.0);
    assert_eq!(reflow.to.y, 420.0 - 60.0);
    assert_eq!(reflow.opacity, None);
}

#[test]
fn completion_events_drive_timer_and_removal() {
    let mut c = Coordinator::new(RecordingRenderer::default(), RecordingTimer::default());
    let host = Rc::new(FixedSurface);
    let id = c.show_banner(&host, BannerStyle::success(), Position::Top, "Saved");

    c.handle(Event::ShowFinished(id));
    let (_, banner, delay) = c.timer().scheduled[0];
    assert_eq!(banner, id);
    assert_eq!(delay, Duration::from_millis(3500));

    c.handle(Event::TimerExpired(id));
    assert_eq!(
        kinds(c.renderer(), id),
        vec![AnimationKind::Show, AnimationKind::Hide]
    );
    assert_eq!(c.banner(id).map(|b| b.state()), Some(BannerState::Hiding));
    // A fired timer has nothing left to cancel.
    assert!(c.timer().cancelled.is_empty());

    c.handle(Event::HideFinished(id));
    assert_eq!(c.renderer().removed, vec![id]);
    assert!(!c.is_tracked(id));
}

#[test]
fn explicit_hide_cancels_timer_token() {
    let mut c = Coordinator::new(RecordingRenderer::default(), RecordingTimer::default());
    let host = Rc::new(FixedSurface);
    let id = c.show_banner(&host, BannerStyle::success(), Position::Top, "Saved");
    c.handle(Event::ShowFinished(id));
    let (token, _, _) = c.timer().scheduled[0];

    c.hide(id);
    assert_eq!(c.timer().cancelled, vec![token]);

    let hide = c
        .renderer()
        .animations
        .last()
        .map(|(_, a)| *a)
        .expect("hide animation");
    assert_eq!(hide.kind, AnimationKind::Hide);
    assert_eq!(hide.opacity, Some((0.93, 0.0)));
    assert_eq!(hide.duration, Duration::from_millis(200));
}

#[test]
fn late_timer_after_hide_is_ignored() {
    let mut c = Coordinator::new(RecordingRenderer::default(), RecordingTimer::default());
    let host = Rc::new(FixedSurface);
    let id = c.show_banner(&host, BannerStyle::success(), Position::Top, "Saved");
    c.handle(Event::ShowFinished(id));
    c.hide(id);
    let animations = c.renderer().animations.len();

    c.handle(Event::TimerExpired(id));
    assert_eq!(c.renderer().animations.len(), animations);
}

#[tokio::test(start_paused = true)]
async fn tokio_timer_drives_auto_hide() {
    let (timer, mut events) = TokioTimer::channel(tokio::runtime::Handle::current());
    let mut c = Coordinator::new(Scene::new(), timer);
    c.set_seconds_to_show(2.0);
    let host = Rc::new(FixedSurface);
    let id = c.show_banner(&host, BannerStyle::alert(), Position::Top, "Careful");
    c.handle(Event::ShowFinished(id));

    let start = tokio::time::Instant::now();
    let event = events.recv().await.expect("timer fires");
    assert_eq!(event, Event::TimerExpired(id));
    assert!(start.elapsed() >= Duration::from_secs(2));

    c.handle(event);
    assert_eq!(c.banner(id).map(|b| b.state()), Some(BannerState::Hiding));
}
