// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_navigation --heading-base-level=0

//! Understory Navigation: deterministic, `no_std` pan/zoom routing for overlapping regions.
//!
//! ## Overview
//!
//! Plots, minimaps and canvases often stack several navigable regions on top of each other.
//! When the user drags or scrolls over the overlap, exactly one of them should usually move.
//! This crate decides which one.
//! It does not render, lay out, or own an event loop.
//!
//! ## Default behavior
//!
//! - Regions with a visible background capture pan/zoom gestures.
//! - Regions without a visible background forward gestures to the region below.
//! - Twin regions always move with their parent, whatever their own flags say.
//!
//! A per-region [`CaptureOverride`](crate::types::CaptureOverride) replaces the default:
//! `true` forces capture, `false` forces forwarding, and `"auto"` restores the default.
//!
//! ## Inputs
//!
//! The [`NavigationRouter`](crate::router::NavigationRouter) takes a [`PointerGesture`](crate::types::PointerGesture)
//! and the [`Region`](crate::types::Region)s under it, in strictly descending z-order.
//! Equal z-order has no defined winner.
//! Hosts that do not keep their own region storage can use a [`Scene`](crate::scene::Scene),
//! which owns regions and twins, exposes the override setter, and builds the snapshot.
//!
//! ## Workflow
//!
//! 1) Build the scene: add regions with [`Scene::add_region`](crate::scene::Scene::add_region)
//!    and twins with [`Scene::add_twin`](crate::scene::Scene::add_twin).
//! 2) Route: [`Scene::route`](crate::scene::Scene::route) snapshots the regions under the
//!    pointer and asks the router for the captor and its twin.
//!    [`NavigationRouter::explain`](crate::router::NavigationRouter::explain) shows every
//!    capture/forward decision along the way.
//! 3) Apply: [`Scene::apply`](crate::scene::Scene::apply) pans or zooms the targets'
//!    [`ViewLimits`](crate::view::ViewLimits), writing shared axes once.
//! 4) Sessions: [`NavSession`](crate::session::NavSession) locks pan targets from
//!    pan-start to pan-end so a drag keeps moving the same regions.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_navigation::router::NavigationRouter;
//! use understory_navigation::scene::Scene;
//! use understory_navigation::types::{PointerGesture, RegionFlags};
//!
//! let mut scene = Scene::new();
//! let plot = scene.add_region(Rect::new(0.0, 0.0, 400.0, 300.0), 0, RegionFlags::default());
//! // A frame without background on top of the plot forwards by default.
//! let frame = scene.add_region(Rect::new(50.0, 50.0, 150.0, 150.0), 2, RegionFlags::NAVIGABLE);
//!
//! let router = NavigationRouter::new();
//! let pan = PointerGesture::pan_start(Point::new(100.0, 100.0));
//! assert_eq!(scene.route(&router, &pan), vec![plot]);
//!
//! scene.set_capture_override(frame, true).unwrap();
//! assert_eq!(scene.route(&router, &pan), vec![frame]);
//! ```
//!
//! ## Features
//!
//! - `std` (default) and `libm` select Kurbo's numeric backend.
//! - `tracing` emits routing decisions at `trace` level and rejected scene requests at `debug` level.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

macro_rules! nav_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

macro_rules! nav_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

pub mod error;
pub mod router;
pub mod scene;
pub mod session;
pub mod types;
pub mod view;
