// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for navigation routing: region handles, flags, overrides, regions, and gestures.
//!
//! ## Overview
//!
//! These types describe the inputs and outputs of the [`router`](crate::router).
//! A host builds one [`Region`] per overlapping drawable area (usually through a
//! [`Scene`](crate::scene::Scene)) and hands a z-ordered snapshot of them to the
//! router together with a [`PointerGesture`].

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;
use kurbo::{Point, Rect, Vec2};

use crate::error::ParseCaptureOverrideError;

/// Identifier for a region.
///
/// A small, copyable handle. Regions live for the lifetime of their
/// [`Scene`](crate::scene::Scene), so identifiers are never reused.
///
/// Hosts that keep their own region storage and feed the router directly can
/// mint identifiers with [`RegionId::from_raw`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub(crate) u32);

impl RegionId {
    /// Build an identifier from a raw index.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Return the raw index of this identifier.
    pub const fn to_raw(self) -> u32 {
        self.0
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Region flags controlling background visibility and navigation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RegionFlags: u8 {
        /// Region paints an opaque backdrop. Under [`CaptureOverride::UseDefault`]
        /// this is what makes a region capture gestures.
        const BACKGROUND_VISIBLE = 0b0000_0001;
        /// Region takes part in navigation at all. Regions without this flag are
        /// dropped before the routing walk.
        const NAVIGABLE          = 0b0000_0010;
    }
}

impl Default for RegionFlags {
    fn default() -> Self {
        Self::BACKGROUND_VISIBLE | Self::NAVIGABLE
    }
}

/// Per-region override of the capture decision.
///
/// Maps onto the host-facing setting `true | false | "auto"`:
///
/// ```
/// use understory_navigation::types::CaptureOverride;
///
/// assert_eq!(CaptureOverride::from(Some(true)), CaptureOverride::ForceCapture);
/// assert_eq!(CaptureOverride::from(Some(false)), CaptureOverride::ForceForward);
/// assert_eq!(CaptureOverride::from(None), CaptureOverride::UseDefault);
/// assert_eq!("auto".parse::<CaptureOverride>(), Ok(CaptureOverride::UseDefault));
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CaptureOverride {
    /// Always capture, even without a visible background.
    ForceCapture,
    /// Never capture; pass the gesture to the region below.
    ForceForward,
    /// Capture if and only if the background is visible.
    #[default]
    UseDefault,
}

impl CaptureOverride {
    /// Convert from the host setting, where `None` stands for `"auto"`.
    pub const fn from_setting(setting: Option<bool>) -> Self {
        match setting {
            Some(true) => Self::ForceCapture,
            Some(false) => Self::ForceForward,
            None => Self::UseDefault,
        }
    }

    /// Return the host setting, where `None` stands for `"auto"`.
    pub const fn setting(self) -> Option<bool> {
        match self {
            Self::ForceCapture => Some(true),
            Self::ForceForward => Some(false),
            Self::UseDefault => None,
        }
    }
}

impl From<Option<bool>> for CaptureOverride {
    fn from(setting: Option<bool>) -> Self {
        Self::from_setting(setting)
    }
}

impl From<bool> for CaptureOverride {
    fn from(capture: bool) -> Self {
        Self::from_setting(Some(capture))
    }
}

impl fmt::Display for CaptureOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ForceCapture => "true",
            Self::ForceForward => "false",
            Self::UseDefault => "auto",
        })
    }
}

impl FromStr for CaptureOverride {
    type Err = ParseCaptureOverrideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "true" => Ok(Self::ForceCapture),
            "false" => Ok(Self::ForceForward),
            "auto" => Ok(Self::UseDefault),
            other => Err(ParseCaptureOverrideError {
                input: other.to_string(),
            }),
        }
    }
}

/// Non-owning link between a parent region and its twin.
///
/// The link is stored on both ends: the parent carries [`TwinLink::HasTwin`]
/// and the twin carries [`TwinLink::TwinOf`]. It is resolved at routing time.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TwinLink {
    /// No twin relationship.
    #[default]
    None,
    /// This region is a parent; the twin follows every capture it makes.
    HasTwin(RegionId),
    /// This region is the twin of the given parent and never decides for itself.
    TwinOf(RegionId),
}

/// A rectangular navigable area in a layered scene.
///
/// Regions are plain data: the router reads them, the
/// [`Scene`](crate::scene::Scene) owns and mutates them.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    /// Identifier of this region.
    pub id: RegionId,
    /// Device-space bounds.
    pub bounds: Rect,
    /// Stacking order. Higher is drawn on top and evaluated first.
    pub z_index: i32,
    /// Background visibility and navigation flags.
    pub flags: RegionFlags,
    /// Capture override.
    pub capture: CaptureOverride,
    /// Twin relationship, if any.
    pub twin: TwinLink,
}

impl Region {
    /// Create a navigable region with a visible background and default capture behavior.
    pub fn new(id: RegionId, bounds: Rect, z_index: i32) -> Self {
        Self {
            id,
            bounds,
            z_index,
            flags: RegionFlags::default(),
            capture: CaptureOverride::UseDefault,
            twin: TwinLink::None,
        }
    }

    /// Replace the flags.
    #[must_use]
    pub fn with_flags(mut self, flags: RegionFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Replace the capture override.
    #[must_use]
    pub fn with_capture(mut self, capture: impl Into<CaptureOverride>) -> Self {
        self.capture = capture.into();
        self
    }

    /// Replace the twin link.
    #[must_use]
    pub fn with_twin(mut self, twin: TwinLink) -> Self {
        self.twin = twin;
        self
    }

    /// Returns true if the region paints a visible background.
    pub fn background_visible(&self) -> bool {
        self.flags.contains(RegionFlags::BACKGROUND_VISIBLE)
    }

    /// Returns true if the region takes part in navigation.
    pub fn is_navigable(&self) -> bool {
        self.flags.contains(RegionFlags::NAVIGABLE)
    }

    /// Returns true if `pt` lies inside the bounds.
    ///
    /// Bounds are normalized first and, as with [`Rect::contains`], the
    /// minimum edges are inclusive and the maximum edges exclusive.
    pub fn contains(&self, pt: Point) -> bool {
        self.bounds.abs().contains(pt)
    }

    /// Resolve the override against the background flag.
    ///
    /// This is the region's own decision. A twin's decision is never consulted
    /// by the router; see [`TwinLink`].
    pub fn captures(&self) -> bool {
        match self.capture {
            CaptureOverride::ForceCapture => true,
            CaptureOverride::ForceForward => false,
            CaptureOverride::UseDefault => self.background_visible(),
        }
    }

    /// The twin that follows this region, if it is a parent.
    pub fn twin(&self) -> Option<RegionId> {
        match self.twin {
            TwinLink::HasTwin(twin) => Some(twin),
            _ => None,
        }
    }

    /// The parent this region follows, if it is a twin.
    pub fn twin_parent(&self) -> Option<RegionId> {
        match self.twin {
            TwinLink::TwinOf(parent) => Some(parent),
            _ => None,
        }
    }
}

/// What a pointer gesture asks the routed regions to do.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureKind {
    /// Button pressed; begins a pan and selects its targets.
    PanStart,
    /// Pointer dragged by `delta` device pixels since the previous tick.
    PanMove {
        /// Device-space displacement.
        delta: Vec2,
    },
    /// Button released; ends the pan.
    PanEnd,
    /// Zoom about the gesture position. Factors above `1.0` zoom in.
    Zoom {
        /// Scale factor.
        factor: f64,
    },
}

/// A pointer gesture delivered once per interaction tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerGesture {
    /// Device-space pointer position.
    pub position: Point,
    /// Gesture kind and payload.
    pub kind: GestureKind,
}

impl PointerGesture {
    /// A pan-start gesture at `position`.
    pub fn pan_start(position: Point) -> Self {
        Self {
            position,
            kind: GestureKind::PanStart,
        }
    }

    /// A pan-move gesture at `position`, displaced by `delta`.
    pub fn pan_move(position: Point, delta: Vec2) -> Self {
        Self {
            position,
            kind: GestureKind::PanMove { delta },
        }
    }

    /// A pan-end gesture at `position`.
    pub fn pan_end(position: Point) -> Self {
        Self {
            position,
            kind: GestureKind::PanEnd,
        }
    }

    /// A zoom gesture about `position`.
    pub fn zoom(position: Point, factor: f64) -> Self {
        Self {
            position,
            kind: GestureKind::Zoom { factor },
        }
    }
}

/// How the router treats the order of the stack it is given.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum StackOrder {
    /// Trust the caller: the stack is already in strictly descending z-order.
    #[default]
    Trusted,
    /// Stable-sort by descending z-order and drop repeated region ids
    /// (first occurrence wins) before routing.
    ///
    /// Equal z-order keeps the caller's relative order; it is not a tie-break
    /// policy and callers should not rely on it for one.
    SortByZ,
}

/// Why a region captured a gesture.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CaptureReason {
    /// [`CaptureOverride::ForceCapture`].
    Forced,
    /// [`CaptureOverride::UseDefault`] with a visible background.
    Background,
}

/// Why a region forwarded a gesture.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ForwardReason {
    /// [`CaptureOverride::ForceForward`].
    Forced,
    /// [`CaptureOverride::UseDefault`] without a visible background.
    NoBackground,
    /// The region is a twin and defers to its parent.
    Twin,
}

/// Outcome for one region visited while routing.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Decision {
    /// The region captured the gesture; the walk stopped here.
    Capture(CaptureReason),
    /// The region passed the gesture to the region below.
    Forward(ForwardReason),
    /// The region moves because its parent captured.
    Follow {
        /// The capturing parent.
        parent: RegionId,
    },
}

impl Decision {
    /// Returns true if the region applies the gesture.
    pub fn applies(self) -> bool {
        matches!(self, Self::Capture(_) | Self::Follow { .. })
    }
}

/// A single routing step, as produced by
/// [`NavigationRouter::explain`](crate::router::NavigationRouter::explain).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Step {
    /// Region visited.
    pub region: RegionId,
    /// What it did with the gesture.
    pub decision: Decision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_round_trips_host_setting() {
        for setting in [Some(true), Some(false), None] {
            assert_eq!(CaptureOverride::from_setting(setting).setting(), setting);
        }
        assert_eq!(CaptureOverride::from(true), CaptureOverride::ForceCapture);
        assert_eq!(CaptureOverride::default(), CaptureOverride::UseDefault);
    }

    #[test]
    fn override_parses_and_displays() {
        assert_eq!(" true ".parse::<CaptureOverride>(), Ok(CaptureOverride::ForceCapture));
        assert_eq!("false".parse::<CaptureOverride>(), Ok(CaptureOverride::ForceForward));
        let err = "maybe".parse::<CaptureOverride>().unwrap_err();
        assert_eq!(err.input(), "maybe");
        assert_eq!(alloc::format!("{}", CaptureOverride::UseDefault), "auto");
    }

    #[test]
    fn captures_resolves_override_against_background() {
        let id = RegionId::from_raw(0);
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        let opaque = Region::new(id, bounds, 0);
        let clear = opaque.clone().with_flags(RegionFlags::NAVIGABLE);
        assert!(opaque.captures());
        assert!(!clear.captures());
        assert!(clear.clone().with_capture(true).captures());
        assert!(!opaque.with_capture(false).captures());
    }

    #[test]
    fn contains_normalizes_bounds() {
        let r = Region::new(RegionId::from_raw(3), Rect::new(10.0, 10.0, 0.0, 0.0), 0);
        assert!(r.contains(Point::new(5.0, 5.0)));
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
    }

    #[test]
    fn twin_link_accessors() {
        let parent = RegionId::from_raw(1);
        let twin = RegionId::from_raw(2);
        let bounds = Rect::new(0.0, 0.0, 1.0, 1.0);
        let p = Region::new(parent, bounds, 0).with_twin(TwinLink::HasTwin(twin));
        let t = Region::new(twin, bounds, 0).with_twin(TwinLink::TwinOf(parent));
        assert_eq!(p.twin(), Some(twin));
        assert_eq!(p.twin_parent(), None);
        assert_eq!(t.twin_parent(), Some(parent));
        assert_eq!(t.twin(), None);
    }

    #[test]
    fn decision_applies_only_for_capture_and_follow() {
        assert!(Decision::Capture(CaptureReason::Forced).applies());
        assert!(
            Decision::Follow {
                parent: RegionId::from_raw(0)
            }
            .applies()
        );
        assert!(!Decision::Forward(ForwardReason::Twin).applies());
    }
}
