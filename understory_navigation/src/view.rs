// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data-space view limits and the pan/zoom transforms applied to them.
//!
//! A region shows the data inside its [`ViewLimits`]. Device space has `y`
//! growing downward; data space has `y` growing upward, as on a plot.

use kurbo::{Point, Rect, Vec2};

use crate::types::{GestureKind, PointerGesture};

/// The data-space rectangle visible in a region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewLimits {
    data: Rect,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self::new(Rect::new(0.0, 0.0, 1.0, 1.0))
    }
}

impl ViewLimits {
    /// Create limits showing `data`.
    pub const fn new(data: Rect) -> Self {
        Self { data }
    }

    /// The visible data rectangle.
    pub fn data(&self) -> Rect {
        self.data
    }

    /// Map a device-space point inside `device` to data space.
    ///
    /// Returns `None` for degenerate device bounds.
    pub fn device_to_data(&self, device: Rect, pt: Point) -> Option<Point> {
        let device = device.abs();
        if device.width() == 0.0 || device.height() == 0.0 {
            return None;
        }
        let u = (pt.x - device.x0) / device.width();
        let v = (device.y1 - pt.y) / device.height();
        Some(Point::new(
            self.data.x0 + u * self.data.width(),
            self.data.y0 + v * self.data.height(),
        ))
    }

    /// Limits after dragging the content by `delta` device pixels.
    ///
    /// The content follows the pointer, so dragging right reveals data on the left.
    /// Degenerate device bounds leave the limits unchanged.
    #[must_use]
    pub fn panned(&self, device: Rect, delta: Vec2) -> Self {
        let device = device.abs();
        if device.width() == 0.0 || device.height() == 0.0 {
            return *self;
        }
        let dx = -delta.x * self.data.width() / device.width();
        let dy = delta.y * self.data.height() / device.height();
        Self::new(self.data + Vec2::new(dx, dy))
    }

    /// Limits after zooming by `factor` about the device point `anchor`.
    ///
    /// The data under `anchor` stays put. Factors above `1.0` zoom in. Factors
    /// that are not finite and positive leave the limits unchanged.
    #[must_use]
    pub fn zoomed(&self, device: Rect, anchor: Point, factor: f64) -> Self {
        if !(factor.is_finite() && factor > 0.0) {
            return *self;
        }
        let Some(a) = self.device_to_data(device, anchor) else {
            return *self;
        };
        let d = self.data;
        Self::new(Rect::new(
            a.x - (a.x - d.x0) / factor,
            a.y - (a.y - d.y0) / factor,
            a.x + (d.x1 - a.x) / factor,
            a.y + (d.y1 - a.y) / factor,
        ))
    }

    /// Limits after applying `gesture` to a region with device bounds `device`.
    ///
    /// Returns `None` for gestures that do not move the view (pan start/end).
    pub fn after(&self, device: Rect, gesture: &PointerGesture) -> Option<Self> {
        match gesture.kind {
            GestureKind::PanMove { delta } => Some(self.panned(device, delta)),
            GestureKind::Zoom { factor } => Some(self.zoomed(device, gesture.position, factor)),
            GestureKind::PanStart | GestureKind::PanEnd => None,
        }
    }
}
