// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use understory_navigation::router::NavigationRouter;
use understory_navigation::scene::{Scene, TwinAxis};
use understory_navigation::session::NavSession;
use understory_navigation::types::{
    PointerGesture, Region, RegionFlags, RegionId, StackOrder,
};

const AREA: Rect = Rect::new(0.0, 0.0, 1000.0, 1000.0);

/// A stack of `n` clear overlays over one opaque base, in descending z-order.
fn forwarding_stack(n: u32) -> Vec<Region> {
    let mut out: Vec<Region> = (1..=n)
        .rev()
        .map(|i| {
            #[allow(clippy::cast_possible_wrap, reason = "bench sizes fit in i32")]
            let z = i as i32;
            Region::new(RegionId::from_raw(i), AREA, z).with_flags(RegionFlags::NAVIGABLE)
        })
        .collect();
    out.push(Region::new(RegionId::from_raw(0), AREA, 0));
    out
}

/// Nested insets with twins, every other one without background.
fn nested_scene(n: u32) -> Scene {
    let mut scene = Scene::new();
    for i in 0..n {
        let inset = f64::from(i) * (400.0 / f64::from(n));
        let bounds = AREA.inset(-inset);
        let flags = if i % 2 == 0 {
            RegionFlags::default()
        } else {
            RegionFlags::NAVIGABLE
        };
        #[allow(clippy::cast_possible_wrap, reason = "bench sizes fit in i32")]
        let id = scene.add_region(bounds, i as i32, flags);
        if i % 3 == 0 {
            let _ = scene.add_twin(id, TwinAxis::X);
        }
    }
    scene
}

fn bench_router(c: &mut Criterion) {
    let gesture = PointerGesture::pan_start(Point::new(500.0, 500.0));
    let mut group = c.benchmark_group("router_forwarding_stack");
    for &n in &[4_u32, 64, 1024] {
        let stack = forwarding_stack(n);
        let trusted = NavigationRouter::new();
        group.bench_function(format!("trusted/{n}"), |b| {
            b.iter(|| black_box(trusted.route(black_box(&gesture), black_box(&stack))));
        });

        let mut sorting = NavigationRouter::new();
        sorting.set_stack_order(StackOrder::SortByZ);
        let mut reversed = stack.clone();
        reversed.reverse();
        group.bench_function(format!("sort_by_z/{n}"), |b| {
            b.iter(|| black_box(sorting.route(black_box(&gesture), black_box(&reversed))));
        });
    }
    group.finish();
}

fn bench_scene(c: &mut Criterion) {
    let router = NavigationRouter::new();
    let mut group = c.benchmark_group("scene_nested");
    for &n in &[8_u32, 128] {
        let scene = nested_scene(n);
        let gesture = PointerGesture::zoom(Point::new(500.0, 500.0), 1.1);
        group.bench_function(format!("route/{n}"), |b| {
            b.iter(|| black_box(scene.route(&router, black_box(&gesture))));
        });
        group.bench_function(format!("drag/{n}"), |b| {
            b.iter_batched(
                || (nested_scene(n), NavSession::new()),
                |(mut scene, mut session)| {
                    let at = Point::new(500.0, 500.0);
                    session.handle(&mut scene, &router, &PointerGesture::pan_start(at));
                    for _ in 0..16 {
                        let g = PointerGesture::pan_move(at, Vec2::new(3.0, -2.0));
                        black_box(session.handle(&mut scene, &router, &g));
                    }
                    session.handle(&mut scene, &router, &PointerGesture::pan_end(at));
                    scene
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_router, bench_scene);
criterion_main!(benches);
