// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan/zoom over overlapping plot regions.
//!
//! Builds a figure with overlapping plots, some with a background and some
//! without, a few twins, a pair of plots sharing both axes, and two plots
//! whose capture behavior is overridden. It then routes pans at points across the
//! figure and drags inside one of the shared plots.
//!
//! Set `RUST_LOG=understory_navigation=trace` to see each routing decision.
//!
//! Run:
//! - `cargo run -p understory_demos --example pan_zoom_overlap`

use std::collections::HashMap;

use kurbo::{Point, Rect, Vec2};
use tracing_subscriber::EnvFilter;
use understory_navigation::error::SceneError;
use understory_navigation::router::NavigationRouter;
use understory_navigation::scene::{Scene, TwinAxis};
use understory_navigation::session::NavSession;
use understory_navigation::types::{PointerGesture, RegionFlags, RegionId};

const FIGURE: Rect = Rect::new(0.0, 0.0, 640.0, 480.0);

/// Convert a figure-fraction `(left, bottom, width, height)` box into device pixels.
fn figure_box(left: f64, bottom: f64, width: f64, height: f64) -> Rect {
    Rect::new(
        left * FIGURE.width(),
        (1.0 - bottom - height) * FIGURE.height(),
        (left + width) * FIGURE.width(),
        (1.0 - bottom) * FIGURE.height(),
    )
}

struct Figure {
    scene: Scene,
    labels: HashMap<RegionId, String>,
}

impl Figure {
    fn plot(&mut self, label: &str, bounds: Rect, background: bool, z: i32) -> RegionId {
        let flags = if background {
            RegionFlags::default()
        } else {
            RegionFlags::NAVIGABLE
        };
        let id = self.scene.add_region(bounds, z, flags);
        let txt = format!("{label} ({}patch, z={z})", if background { "" } else { "NO " });
        self.labels.insert(id, txt);
        id
    }

    fn twin(&mut self, parent: RegionId) -> Result<RegionId, SceneError> {
        let id = self.scene.add_twin(parent, TwinAxis::X)?;
        let txt = format!("twin of {}", self.name(parent));
        self.labels.insert(id, txt);
        Ok(id)
    }

    fn name(&self, id: RegionId) -> &str {
        self.labels.get(&id).map_or("?", String::as_str)
    }
}

fn build() -> Result<(Figure, RegionId), SceneError> {
    let mut fig = Figure {
        scene: Scene::new(),
        labels: HashMap::new(),
    };

    let main = fig.plot("grey", figure_box(0.125, 0.11, 0.775, 0.77), true, 0);
    fig.twin(main)?;

    fig.plot("green", figure_box(0.4, 0.5, 0.4, 0.4), true, 0);

    let blue = fig.plot("blue", figure_box(0.5, 0.5, 0.2, 0.2), true, 0);
    fig.twin(blue)?;

    let red = fig.plot("red", figure_box(0.2, 0.25, 0.2, 0.2), false, 0);
    fig.twin(red)?;

    let cyan = fig.plot("cyan", figure_box(0.05, 0.1, 0.55, 0.7), false, 2);
    fig.twin(cyan)?;

    let magenta = fig.plot("magenta", figure_box(0.5, 0.25, 0.2, 0.2), true, 5);
    fig.twin(magenta)?;
    let joined = fig.plot("magenta joined", figure_box(0.8, 0.25, 0.15, 0.15), true, 5);
    fig.scene.share_x(joined, magenta)?;
    fig.scene.share_y(joined, magenta)?;

    let capture = fig.plot("force capture", figure_box(0.05, 0.65, 0.2, 0.2), false, 5);
    fig.scene.set_capture_override(capture, true)?;

    let forward = fig.plot("force forward", figure_box(0.75, 0.65, 0.2, 0.2), true, 5);
    fig.scene.set_capture_override(forward, false)?;

    Ok((fig, magenta))
}

fn main() -> Result<(), SceneError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (mut fig, magenta) = build()?;
    let router = NavigationRouter::new();

    println!("== Scene ({} regions) ==", fig.scene.len());
    for r in fig.scene.regions() {
        let b = r.bounds;
        println!(
            "  {:<34} rect=({:.0},{:.0})-({:.0},{:.0})  capture={}",
            fig.name(r.id),
            b.x0,
            b.y0,
            b.x1,
            b.y1,
            r.capture
        );
    }

    let points = [
        ("grey only", Point::new(540.0, 400.0)),
        ("red frame over cyan frame over grey", Point::new(190.0, 300.0)),
        ("blue over green", Point::new(380.0, 200.0)),
        ("force capture frame", Point::new(100.0, 120.0)),
        ("force forward over grey", Point::new(560.0, 120.0)),
        ("magenta", Point::new(380.0, 300.0)),
        ("outside every plot", Point::new(5.0, 5.0)),
    ];

    for (what, pt) in points {
        let gesture = PointerGesture::pan_start(pt);
        let snapshot = fig.scene.regions_at(pt);
        println!("\n== Pan start @ ({:.0},{:.0}): {what} ==", pt.x, pt.y);
        for step in router.explain(&gesture, &snapshot) {
            println!("  {:<34} {:?}", fig.name(step.region), step.decision);
        }
        let targets = router.route(&gesture, &snapshot);
        let names: Vec<&str> = targets.iter().map(|id| fig.name(*id)).collect();
        tracing::info!(target_count = targets.len(), ?names, "{what}: gesture applied");
    }

    // Drag inside magenta: its twin follows, and the joined plot moves through the shared axes.
    let mut session = NavSession::new();
    let start = Point::new(380.0, 300.0);
    session.handle(&mut fig.scene, &router, &PointerGesture::pan_start(start));
    for _ in 0..4 {
        let g = PointerGesture::pan_move(start, Vec2::new(8.0, -4.0));
        session.handle(&mut fig.scene, &router, &g);
    }
    let moved = session.handle(&mut fig.scene, &router, &PointerGesture::pan_end(start));
    println!("\n== Drag in magenta ==");
    for id in &moved {
        println!("  {:<34} view={:?}", fig.name(*id), fig.scene.view_limits(*id));
    }
    for r in fig.scene.regions().filter(|r| !moved.contains(&r.id)) {
        if fig.scene.view_limits(r.id) == fig.scene.view_limits(magenta) {
            let view = fig.scene.view_limits(r.id);
            println!("  {:<34} view={view:?} (shared)", fig.name(r.id));
        }
    }
    Ok(())
}
