// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// A pixel position relative to the top-left corner of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned screen rectangle (`x`/`y` is the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn at(origin: ScreenPoint, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Open-interval overlap: rectangles that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &ScreenRect) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }

    pub fn overlaps_x(&self, other: &ScreenRect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    pub fn overlaps_y(&self, other: &ScreenRect) -> bool {
        self.top() < other.bottom() && self.bottom() > other.top()
    }
}

/// The clickable region of the marker that opened a panel, described by its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerFootprint {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl MarkerFootprint {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.x, self.y)
    }

    pub fn rect(&self) -> ScreenRect {
        ScreenRect::new(self.x - self.w / 2.0, self.y - self.h / 2.0, self.w, self.h)
    }
}

/// Where a floating panel wants to open, plus the marker it belongs to (if known).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenAnchor {
    pub x: f64,
    pub y: f64,
    #[serde(default, rename = "markerCenter", skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerFootprint>,
}

impl ScreenAnchor {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, marker: None }
    }

    pub fn with_marker(mut self, marker: MarkerFootprint) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn point(&self) -> ScreenPoint {
        ScreenPoint::new(self.x, self.y)
    }
}
