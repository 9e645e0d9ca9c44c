// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for banner stacking.
//!
//! Measures the performance of:
//! - Showing banners onto a growing stack (forward re-flow)
//! - Hiding the oldest banner of a full stack (backward re-flow)
//! - Running a whole stack through its lifecycle on the virtual clock

use alert_banners::application::port::{HostSurface, SurfaceId};
use alert_banners::banner::{BannerStyle, Position};
use alert_banners::coordinator::Coordinator;
use alert_banners::infrastructure::{drive, Scene, Timeline, WindowSurface};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_core::{Point, Rectangle, Size};
use std::hint::black_box;
use std::rc::Rc;
use std::time::Duration;

const STACK_SIZES: [usize; 3] = [4, 16, 64];

fn surface() -> Rc<WindowSurface> {
    Rc::new(WindowSurface::new(
        SurfaceId::new(1),
        Rectangle::new(Point::ORIGIN, Size::new(1280.0, 800.0)),
    ))
}

fn filled(host: &Rc<WindowSurface>, count: usize) -> Coordinator<Scene, Timeline> {
    let mut coordinator = Coordinator::new(Scene::new(), Timeline::new());
    for i in 0..count {
        coordinator.show_banner(host, BannerStyle::notify(), Position::Top, format!("#{i}"));
    }
    drive(&mut coordinator, Duration::from_millis(250));
    coordinator
}

/// Benchmark showing banners onto a stack.
///
/// Every show re-flows all existing siblings, so cost grows with the stack.
fn bench_show(c: &mut Criterion) {
    let mut group = c.benchmark_group("reflow");
    let host = surface();

    for size in STACK_SIZES {
        group.bench_with_input(BenchmarkId::new("show", size), &size, |b, &size| {
            b.iter(|| {
                let coordinator = filled(&host, size);
                black_box(coordinator.banner_count());
            });
        });
    }

    group.finish();
}

/// Benchmark hiding the oldest banner and settling the backward re-flow.
fn bench_hide_oldest(c: &mut Criterion) {
    let mut group = c.benchmark_group("reflow");
    let host = surface();

    for size in STACK_SIZES {
        group.bench_with_input(BenchmarkId::new("hide_oldest", size), &size, |b, &size| {
            b.iter_batched(
                || filled(&host, size),
                |mut coordinator| {
                    let stack = coordinator.stack(host.id(), Position::Top);
                    if let Some(&oldest) = stack.first() {
                        coordinator.hide(oldest);
                    }
                    drive(&mut coordinator, Duration::from_millis(650));
                    black_box(coordinator.banner_count());
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark a whole stack from first show to last hide.
fn bench_full_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("reflow");
    let host = surface();

    group.bench_function("full_lifecycle_16", |b| {
        b.iter(|| {
            let mut coordinator = filled(&host, 16);
            drive(&mut coordinator, Duration::from_secs(10));
            black_box(coordinator.banner_count());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_show, bench_hide_oldest, bench_full_lifecycle);
criterion_main!(benches);
