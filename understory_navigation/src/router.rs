// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router implementation.
//!
//! ## Overview
//!
//! Walks a z-ordered stack of regions under the pointer and decides which
//! regions apply a pan or zoom gesture.
//!
//! ## Target Selection
//!
//! - Keeps regions that are navigable and contain the gesture position.
//! - Walks from the highest z-order down.
//! - [`ForceCapture`](crate::types::CaptureOverride::ForceCapture) captures and stops the walk.
//! - [`ForceForward`](crate::types::CaptureOverride::ForceForward) passes to the next region.
//! - [`UseDefault`](crate::types::CaptureOverride::UseDefault) captures iff the background is visible.
//! - The captor's twin always follows it. Twins met during the walk defer to their parent.
//! - If nothing captures, the gesture is a no-op.
//!
//! ## Ordering
//!
//! The stack must be in strictly descending z-order. Equal z-order has no
//! defined winner. [`StackOrder::SortByZ`] re-sorts and deduplicates as a
//! convenience; see [`NavigationRouter::set_stack_order`].

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use kurbo::Point;

use crate::types::{
    CaptureOverride, CaptureReason, Decision, ForwardReason, PointerGesture, Region, RegionId,
    StackOrder, Step,
};

/// Deterministic pan/zoom router.
///
/// ## Usage
///
/// - Construct with [`NavigationRouter::new`].
/// - Optionally pick a [`StackOrder`] with [`NavigationRouter::set_stack_order`].
/// - Call [`NavigationRouter::route`] once per gesture with the regions under the
///   pointer, or [`NavigationRouter::explain`] to see every decision made.
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_navigation::router::NavigationRouter;
/// use understory_navigation::types::{PointerGesture, Region, RegionFlags, RegionId};
///
/// let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
/// let overlay = Region::new(RegionId::from_raw(2), bounds, 2).with_flags(RegionFlags::NAVIGABLE);
/// let base = Region::new(RegionId::from_raw(1), bounds, 0);
///
/// let router = NavigationRouter::new();
/// let hit = router.route(&PointerGesture::pan_start(Point::new(50.0, 50.0)), &[overlay, base]);
/// assert_eq!(hit, vec![RegionId::from_raw(1)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct NavigationRouter {
    stack_order: StackOrder,
}

impl NavigationRouter {
    /// Create a router that trusts the caller's stack order.
    pub fn new() -> Self {
        Self {
            stack_order: StackOrder::Trusted,
        }
    }

    /// Set how the router treats the order of incoming stacks.
    pub fn set_stack_order(&mut self, order: StackOrder) {
        self.stack_order = order;
    }

    /// Current stack order policy.
    pub fn stack_order(&self) -> StackOrder {
        self.stack_order
    }

    /// Route a gesture and return the regions that apply it.
    ///
    /// The captor comes first, followed by its twin. The result is empty when
    /// no region under the pointer captures.
    pub fn route(&self, gesture: &PointerGesture, stack: &[Region]) -> Vec<RegionId> {
        self.explain(gesture, stack)
            .into_iter()
            .filter(|s| s.decision.applies())
            .map(|s| s.region)
            .collect()
    }

    /// Route a gesture and return every decision made, in walk order.
    ///
    /// Regions outside the pointer or not navigable do not appear. A capture
    /// ends the sequence, followed by a [`Decision::Follow`] for the captor's twin.
    pub fn explain(&self, gesture: &PointerGesture, stack: &[Region]) -> Vec<Step> {
        match self.stack_order {
            StackOrder::Trusted => walk(gesture.position, stack.iter()),
            StackOrder::SortByZ => {
                let mut seen = BTreeSet::new();
                let mut sorted: Vec<&Region> = stack.iter().filter(|r| seen.insert(r.id)).collect();
                sorted.sort_by(|a, b| b.z_index.cmp(&a.z_index));
                walk(gesture.position, sorted.into_iter())
            }
        }
    }
}

fn walk<'a>(pt: Point, stack: impl Iterator<Item = &'a Region>) -> Vec<Step> {
    let mut out = Vec::new();
    for region in stack.filter(|r| r.is_navigable() && r.contains(pt)) {
        let decision = decide(region);
        nav_trace!(region = ?region.id, z = region.z_index, ?decision, "navigation step");
        out.push(Step {
            region: region.id,
            decision,
        });
        if let Decision::Capture(_) = decision {
            if let Some(twin) = region.twin()
                && twin != region.id
            {
                out.push(Step {
                    region: twin,
                    decision: Decision::Follow { parent: region.id },
                });
            }
            return out;
        }
    }
    nav_trace!(visited = out.len(), "no region captured the gesture");
    out
}

fn decide(region: &Region) -> Decision {
    // Twins mirror their parent; their own flags are never consulted.
    if region.twin_parent().is_some() {
        return Decision::Forward(ForwardReason::Twin);
    }
    let forced = region.capture != CaptureOverride::UseDefault;
    match (region.captures(), forced) {
        (true, true) => Decision::Capture(CaptureReason::Forced),
        (true, false) => Decision::Capture(CaptureReason::Background),
        (false, true) => Decision::Forward(ForwardReason::Forced),
        (false, false) => Decision::Forward(ForwardReason::NoBackground),
    }
}
