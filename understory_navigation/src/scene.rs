// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side region registry: creation, twins, overrides, snapshots, and view updates.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::error::SceneError;
use crate::router::NavigationRouter;
use crate::types::{CaptureOverride, PointerGesture, Region, RegionFlags, RegionId, TwinLink};
use crate::view::ViewLimits;

/// Axis a twin shares with its parent.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TwinAxis {
    /// Share the x range, with an independent y range (`twinx`).
    X,
    /// Share the y range, with an independent x range (`twiny`).
    Y,
}

#[derive(Clone, Debug)]
struct Slot {
    region: Region,
    view: ViewLimits,
    // Shared-axis groups, keyed by the raw id of one member.
    x_group: u32,
    y_group: u32,
}

/// A layered scene of navigable regions.
///
/// The scene owns every [`Region`], keeps twin geometry in sync with the
/// parent, and builds the z-ordered snapshot the
/// [router](crate::router::NavigationRouter) expects.
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_navigation::router::NavigationRouter;
/// use understory_navigation::scene::{Scene, TwinAxis};
/// use understory_navigation::types::{PointerGesture, RegionFlags};
///
/// let mut scene = Scene::new();
/// let base = scene.add_region(Rect::new(0.0, 0.0, 400.0, 300.0), 0, RegionFlags::default());
/// let twin = scene.add_twin(base, TwinAxis::X).unwrap();
///
/// let router = NavigationRouter::new();
/// let hit = scene.route(&router, &PointerGesture::pan_start(Point::new(10.0, 10.0)));
/// assert_eq!(hit, vec![base, twin]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Scene {
    slots: Vec<Slot>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Number of regions, twins included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the scene has no regions.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate regions in insertion order.
    pub fn regions(&self) -> impl Iterator<Item = &Region> + '_ {
        self.slots.iter().map(|s| &s.region)
    }

    /// Add a region and return its identifier.
    pub fn add_region(&mut self, bounds: Rect, z_index: i32, flags: RegionFlags) -> RegionId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "RegionId uses 32-bit indices by design."
        )]
        let id = RegionId(self.slots.len() as u32);
        self.slots.push(Slot {
            region: Region::new(id, bounds, z_index).with_flags(flags),
            view: ViewLimits::default(),
            x_group: id.0,
            y_group: id.0,
        });
        id
    }

    /// Add a twin of `parent` sharing its geometry and one axis.
    ///
    /// The twin has no visible background and starts with the parent's view
    /// limits. It never captures on its own; it moves whenever the parent does.
    pub fn add_twin(&mut self, parent: RegionId, axis: TwinAxis) -> Result<RegionId, SceneError> {
        let p = self.slot(parent)?;
        match p.region.twin {
            TwinLink::HasTwin(_) => return self.reject(SceneError::AlreadyTwinned(parent)),
            TwinLink::TwinOf(_) => return self.reject(SceneError::TwinOfTwin(parent)),
            TwinLink::None => {}
        }
        let (bounds, z_index, view) = (p.region.bounds, p.region.z_index, p.view);
        let twin = self.add_region(bounds, z_index, RegionFlags::NAVIGABLE);
        self.slots[twin.idx()].view = view;
        self.slots[twin.idx()].region.twin = TwinLink::TwinOf(parent);
        self.slots[parent.idx()].region.twin = TwinLink::HasTwin(twin);
        match axis {
            TwinAxis::X => self.share_x(parent, twin)?,
            TwinAxis::Y => self.share_y(parent, twin)?,
        }
        Ok(twin)
    }

    /// Look up a region.
    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.slots.get(id.idx()).map(|s| &s.region)
    }

    /// Set the capture override: `true`, `false`, or `None` for `"auto"`.
    pub fn set_capture_override(
        &mut self,
        id: RegionId,
        capture: impl Into<CaptureOverride>,
    ) -> Result<(), SceneError> {
        self.slot_mut(id)?.region.capture = capture.into();
        Ok(())
    }

    /// Show or hide the region's background.
    pub fn set_background_visible(
        &mut self,
        id: RegionId,
        visible: bool,
    ) -> Result<(), SceneError> {
        self.slot_mut(id)?
            .region
            .flags
            .set(RegionFlags::BACKGROUND_VISIBLE, visible);
        Ok(())
    }

    /// Include or exclude the region from navigation.
    pub fn set_navigable(&mut self, id: RegionId, navigable: bool) -> Result<(), SceneError> {
        self.slot_mut(id)?
            .region
            .flags
            .set(RegionFlags::NAVIGABLE, navigable);
        Ok(())
    }

    /// Move the region (and its twin) to a new z-order.
    pub fn set_z_index(&mut self, id: RegionId, z_index: i32) -> Result<(), SceneError> {
        for member in self.twin_pair(id)? {
            self.slots[member.idx()].region.z_index = z_index;
        }
        Ok(())
    }

    /// Move the region (and its twin) to new device bounds.
    pub fn set_bounds(&mut self, id: RegionId, bounds: Rect) -> Result<(), SceneError> {
        for member in self.twin_pair(id)? {
            self.slots[member.idx()].region.bounds = bounds;
        }
        Ok(())
    }

    /// The data rectangle currently shown by a region.
    pub fn view_limits(&self, id: RegionId) -> Option<Rect> {
        self.slots.get(id.idx()).map(|s| s.view.data())
    }

    /// Replace the data rectangle shown by a region.
    ///
    /// Shared axes are updated across their groups.
    pub fn set_view_limits(&mut self, id: RegionId, data: Rect) -> Result<(), SceneError> {
        let (x_group, y_group) = {
            let s = self.slot(id)?;
            (s.x_group, s.y_group)
        };
        self.write_x(x_group, data);
        self.write_y(y_group, data);
        Ok(())
    }

    /// Share the x range of `a` and `b` (and everything already sharing with them).
    ///
    /// Members of `b`'s group adopt `a`'s current x range.
    pub fn share_x(&mut self, a: RegionId, b: RegionId) -> Result<(), SceneError> {
        let (from, into, data) = self.share_groups(a, b, |s| s.x_group)?;
        for s in &mut self.slots {
            if s.x_group == from {
                s.x_group = into;
            }
        }
        self.write_x(into, data);
        Ok(())
    }

    /// Share the y range of `a` and `b` (and everything already sharing with them).
    ///
    /// Members of `b`'s group adopt `a`'s current y range.
    pub fn share_y(&mut self, a: RegionId, b: RegionId) -> Result<(), SceneError> {
        let (from, into, data) = self.share_groups(a, b, |s| s.y_group)?;
        for s in &mut self.slots {
            if s.y_group == from {
                s.y_group = into;
            }
        }
        self.write_y(into, data);
        Ok(())
    }

    /// Regions containing `pt`, in descending z-order.
    ///
    /// Equal z-order falls back to draw order: later-added regions are on top.
    /// Non-navigable regions are included; the router drops them.
    pub fn regions_at(&self, pt: Point) -> Vec<Region> {
        let mut out: Vec<Region> = self
            .slots
            .iter()
            .rev()
            .filter(|s| s.region.contains(pt))
            .map(|s| s.region.clone())
            .collect();
        out.sort_by(|a, b| b.z_index.cmp(&a.z_index));
        out
    }

    /// Route `gesture` against the regions under its position.
    pub fn route(&self, router: &NavigationRouter, gesture: &PointerGesture) -> Vec<RegionId> {
        router.route(gesture, &self.regions_at(gesture.position))
    }

    /// Apply a pan-move or zoom gesture to `targets`.
    ///
    /// Every target's new limits are computed from the state before the gesture.
    /// A shared range is written once, from the first target in its group, so
    /// a parent and its twin do not move a shared axis twice.
    /// Unknown targets are ignored; pan start/end leave the views untouched.
    pub fn apply(&mut self, gesture: &PointerGesture, targets: &[RegionId]) {
        let updates: Vec<(u32, u32, Rect)> = targets
            .iter()
            .filter_map(|id| {
                let s = self.slots.get(id.idx())?;
                let next = s.view.after(s.region.bounds, gesture)?;
                Some((s.x_group, s.y_group, next.data()))
            })
            .collect();
        let mut written_x: Vec<u32> = Vec::new();
        let mut written_y: Vec<u32> = Vec::new();
        for (x_group, y_group, data) in updates {
            if !written_x.contains(&x_group) {
                self.write_x(x_group, data);
                written_x.push(x_group);
            }
            if !written_y.contains(&y_group) {
                self.write_y(y_group, data);
                written_y.push(y_group);
            }
        }
    }

    fn slot(&self, id: RegionId) -> Result<&Slot, SceneError> {
        match self.slots.get(id.idx()) {
            Some(s) => Ok(s),
            None => self.reject(SceneError::UnknownRegion(id)),
        }
    }

    fn slot_mut(&mut self, id: RegionId) -> Result<&mut Slot, SceneError> {
        if id.idx() >= self.slots.len() {
            return self.reject(SceneError::UnknownRegion(id));
        }
        Ok(&mut self.slots[id.idx()])
    }

    fn reject<T>(&self, err: SceneError) -> Result<T, SceneError> {
        nav_debug!(error = %err, regions = self.slots.len(), "scene rejected request");
        Err(err)
    }

    fn twin_pair(&self, id: RegionId) -> Result<Vec<RegionId>, SceneError> {
        let region = &self.slot(id)?.region;
        let mut out = Vec::with_capacity(2);
        out.push(id);
        match region.twin {
            TwinLink::HasTwin(other) | TwinLink::TwinOf(other) => out.push(other),
            TwinLink::None => {}
        }
        Ok(out)
    }

    fn share_groups(
        &self,
        a: RegionId,
        b: RegionId,
        group: impl Fn(&Slot) -> u32,
    ) -> Result<(u32, u32, Rect), SceneError> {
        if a == b {
            return self.reject(SceneError::SelfShare(a));
        }
        let sa = self.slot(a)?;
        let sb = self.slot(b)?;
        Ok((group(sb), group(sa), sa.view.data()))
    }

    fn write_x(&mut self, group: u32, data: Rect) {
        for s in self.slots.iter_mut().filter(|s| s.x_group == group) {
            let cur = s.view.data();
            s.view = ViewLimits::new(Rect::new(data.x0, cur.y0, data.x1, cur.y1));
        }
    }

    fn write_y(&mut self, group: u32, data: Rect) {
        for s in self.slots.iter_mut().filter(|s| s.y_group == group) {
            let cur = s.view.data();
            s.view = ViewLimits::new(Rect::new(cur.x0, data.y0, cur.x1, data.y1));
        }
    }
}
