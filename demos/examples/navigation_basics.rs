// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router basics.
//!
//! Feeds hand-built region stacks straight to the router, without a scene,
//! and prints each capture/forward decision.
//!
//! Run:
//! - `cargo run -p understory_demos --example navigation_basics`

use kurbo::{Point, Rect};
use understory_navigation::router::NavigationRouter;
use understory_navigation::types::{
    CaptureOverride, PointerGesture, Region, RegionFlags, RegionId, TwinLink,
};

const AREA: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

fn region(n: u32, z: i32, background: bool) -> Region {
    let flags = if background {
        RegionFlags::default()
    } else {
        RegionFlags::NAVIGABLE
    };
    Region::new(RegionId::from_raw(n), AREA, z).with_flags(flags)
}

fn main() {
    let router = NavigationRouter::new();
    let gesture = PointerGesture::zoom(Point::new(50.0, 50.0), 1.25);

    let cases: Vec<(&str, Vec<Region>)> = vec![
        ("single plot with background", vec![region(1, 0, true)]),
        (
            "clear overlay above a plot",
            vec![region(2, 2, false), region(1, 0, true)],
        ),
        (
            "clear overlay forced to capture, with twin",
            vec![
                region(3, 5, false)
                    .with_capture(CaptureOverride::ForceCapture)
                    .with_twin(TwinLink::HasTwin(RegionId::from_raw(30))),
                region(30, 5, false).with_twin(TwinLink::TwinOf(RegionId::from_raw(3))),
            ],
        ),
        (
            "opaque overlay forced to forward",
            vec![
                region(4, 5, true).with_capture(CaptureOverride::ForceForward),
                region(5, 0, true),
            ],
        ),
        ("nothing under the pointer", Vec::new()),
    ];

    for (what, stack) in cases {
        println!("== {what} ==");
        for step in router.explain(&gesture, &stack) {
            println!("  region={:?}  {:?}", step.region.to_raw(), step.decision);
        }
        let out: Vec<u32> = router
            .route(&gesture, &stack)
            .iter()
            .map(|id| id.to_raw())
            .collect();
        println!("  -> applies to {out:?}\n");
    }
}
