// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation session: lock pan targets for the duration of a drag.
//!
//! ## Usage
//!
//! 1) Keep one [`NavSession`] per pointer.
//! 2) Feed every gesture through [`NavSession::handle`].
//! 3) Redraw the regions it returns.
//!
//! A pan routes once, on [`PanStart`](crate::types::GestureKind::PanStart).
//! Moves apply to that set even after the pointer leaves the captor, until
//! [`PanEnd`](crate::types::GestureKind::PanEnd). Zoom ticks route afresh each time.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use understory_navigation::router::NavigationRouter;
//! use understory_navigation::scene::Scene;
//! use understory_navigation::session::NavSession;
//! use understory_navigation::types::{PointerGesture, RegionFlags};
//!
//! let mut scene = Scene::new();
//! let plot = scene.add_region(Rect::new(0.0, 0.0, 100.0, 100.0), 0, RegionFlags::default());
//! let router = NavigationRouter::new();
//! let mut session = NavSession::new();
//!
//! let start = Point::new(50.0, 50.0);
//! assert_eq!(session.handle(&mut scene, &router, &PointerGesture::pan_start(start)), vec![plot]);
//! // Dragged outside the plot: the locked target still moves.
//! let outside = Point::new(150.0, 50.0);
//! let drag = PointerGesture::pan_move(outside, Vec2::new(100.0, 0.0));
//! assert_eq!(session.handle(&mut scene, &router, &drag), vec![plot]);
//! assert_eq!(scene.view_limits(plot), Some(Rect::new(-1.0, 0.0, 0.0, 1.0)));
//! ```

use alloc::vec::Vec;

use crate::router::NavigationRouter;
use crate::scene::Scene;
use crate::types::{GestureKind, PointerGesture, RegionId};

/// Per-pointer navigation state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavSession {
    panning: Option<Vec<RegionId>>,
}

impl NavSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self { panning: None }
    }

    /// Returns true between a pan start and its pan end.
    pub fn is_panning(&self) -> bool {
        self.panning.is_some()
    }

    /// Targets locked by the active pan, or an empty slice when idle.
    pub fn locked_targets(&self) -> &[RegionId] {
        self.panning.as_deref().unwrap_or(&[])
    }

    /// Handle one gesture and return the regions it concerns.
    ///
    /// - `PanStart`: routes and locks the targets, replacing any active pan.
    /// - `PanMove`: applies to the locked targets; empty when idle.
    /// - `PanEnd`: releases and returns the locked targets.
    /// - `Zoom`: routes at the gesture position and applies.
    pub fn handle(
        &mut self,
        scene: &mut Scene,
        router: &NavigationRouter,
        gesture: &PointerGesture,
    ) -> Vec<RegionId> {
        match gesture.kind {
            GestureKind::PanStart => {
                let targets = scene.route(router, gesture);
                nav_trace!(?targets, "pan started");
                self.panning = Some(targets.clone());
                targets
            }
            GestureKind::PanMove { .. } => {
                let Some(targets) = &self.panning else {
                    return Vec::new();
                };
                scene.apply(gesture, targets);
                targets.clone()
            }
            GestureKind::PanEnd => {
                let released = self.panning.take().unwrap_or_default();
                nav_trace!(?released, "pan ended");
                released
            }
            GestureKind::Zoom { .. } => {
                let targets = scene.route(router, gesture);
                scene.apply(gesture, &targets);
                targets
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::TwinAxis;
    use crate::types::RegionFlags;
    use alloc::vec;
    use kurbo::{Point, Rect, Vec2};

    const AREA: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    fn scene_with_plot() -> (Scene, RegionId) {
        let mut scene = Scene::new();
        let plot = scene.add_region(AREA, 0, RegionFlags::default());
        (scene, plot)
    }

    #[test]
    fn move_without_pan_is_ignored() {
        let (mut scene, plot) = scene_with_plot();
        let before = scene.view_limits(plot);
        let mut s = NavSession::new();
        let g = PointerGesture::pan_move(Point::new(10.0, 10.0), Vec2::new(5.0, 5.0));
        assert!(s.handle(&mut scene, &NavigationRouter::new(), &g).is_empty());
        assert_eq!(scene.view_limits(plot), before);
    }

    #[test]
    fn pan_locks_until_released() {
        let (mut scene, plot) = scene_with_plot();
        let router = NavigationRouter::new();
        let mut s = NavSession::new();
        s.handle(&mut scene, &router, &PointerGesture::pan_start(Point::new(10.0, 10.0)));
        assert!(s.is_panning());
        assert_eq!(s.locked_targets(), &[plot]);

        let released = s.handle(&mut scene, &router, &PointerGesture::pan_end(Point::ZERO));
        assert_eq!(released, vec![plot]);
        assert!(!s.is_panning());
        assert!(s.locked_targets().is_empty());
    }

    #[test]
    fn pan_started_on_empty_area_moves_nothing() {
        let (mut scene, plot) = scene_with_plot();
        let router = NavigationRouter::new();
        let mut s = NavSession::new();
        let outside = Point::new(500.0, 500.0);
        assert!(
            s.handle(&mut scene, &router, &PointerGesture::pan_start(outside))
                .is_empty()
        );
        assert!(s.is_panning());
        let before = scene.view_limits(plot);
        let g = PointerGesture::pan_move(Point::new(50.0, 50.0), Vec2::new(30.0, 0.0));
        assert!(s.handle(&mut scene, &router, &g).is_empty());
        assert_eq!(scene.view_limits(plot), before);
    }

    #[test]
    fn zoom_routes_each_tick() {
        let mut scene = Scene::new();
        let router = NavigationRouter::new();
        let base = scene.add_region(AREA, 0, RegionFlags::default());
        let inset = scene.add_region(
            Rect::new(50.0, 50.0, 100.0, 100.0),
            1,
            RegionFlags::default(),
        );
        let twin = scene.add_twin(inset, TwinAxis::X).unwrap();
        let mut s = NavSession::new();

        let on_inset = PointerGesture::zoom(Point::new(75.0, 75.0), 2.0);
        assert_eq!(s.handle(&mut scene, &router, &on_inset), vec![inset, twin]);
        let on_base = PointerGesture::zoom(Point::new(10.0, 10.0), 2.0);
        assert_eq!(s.handle(&mut scene, &router, &on_base), vec![base]);
        assert_ne!(scene.view_limits(base), Some(Rect::new(0.0, 0.0, 1.0, 1.0)));
        assert!(!s.is_panning());
    }
}
