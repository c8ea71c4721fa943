// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Floating panel placement.
//!
//! Given where a panel would like to open and how big it is, pick an on-screen origin that stays
//! inside the viewport, below the fixed header, and off the marker that opened it.

use crate::config::PanelDimensions;
use crate::model::{MarkerFootprint, ScreenAnchor, ScreenPoint, ScreenRect, Size};

/// Panels the map UI knows how to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    /// Place detail card.
    Detail,
    /// List popup for a cluster badge.
    List,
}

impl PanelKind {
    pub fn size(self, dims: &PanelDimensions) -> Size {
        match self {
            Self::Detail => dims.detail_size(),
            Self::List => dims.list_size(),
        }
    }
}

/// Everything besides the anchor and panel size that placement depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementContext {
    pub viewport: Size,
    pub margin: f64,
    pub header_height: f64,
    pub marker: Option<MarkerFootprint>,
    pub flip_offset: f64,
    pub flip_padding: f64,
    pub gap: f64,
}

impl PlacementContext {
    pub fn new(viewport: Size, dims: &PanelDimensions) -> Self {
        Self {
            viewport,
            margin: dims.margin,
            header_height: dims.header_height,
            marker: None,
            flip_offset: dims.flip_offset,
            flip_padding: dims.flip_padding,
            gap: dims.gap,
        }
    }

    pub fn with_marker(mut self, marker: Option<MarkerFootprint>) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_header_height(mut self, header_height: f64) -> Self {
        self.header_height = header_height;
        self
    }

    fn flip_distance(&self) -> f64 {
        match self.marker {
            Some(marker) => marker.w + self.flip_padding,
            None => self.flip_offset,
        }
    }
}

/// Resolves the top-left corner for a panel of size `panel` that wants to open at `desired`.
///
/// Total for finite input. A panel larger than the free area still gets a position (the
/// left/top clamps win) and may overflow the right or bottom edge.
pub fn clamp_panel(desired: ScreenPoint, panel: Size, ctx: &PlacementContext) -> ScreenPoint {
    let viewport = ctx.viewport;
    let mut x = desired.x;
    let mut y = desired.y;

    if desired.x + panel.width + ctx.margin > viewport.width {
        x = desired.x - panel.width - ctx.flip_distance();
        // An anchor far past the right edge (e.g. after the viewport shrank) still flips short.
        x = x.min(viewport.width - panel.width - ctx.margin);
    }
    x = x.max(ctx.margin);

    if desired.y + panel.height + ctx.margin > viewport.height {
        y = ctx.header_height.max(viewport.height - panel.height - ctx.margin);
    }
    y = y.max(ctx.header_height);

    let clamped = ScreenPoint::new(x, y);
    match ctx.marker {
        Some(marker) => avoid_marker(clamped, panel, &marker, ctx).unwrap_or(clamped),
        None => clamped,
    }
}

/// Moves the panel directly below (preferred) or above the marker when it would cover it.
///
/// Returns `None` when there is no overlap or no room on either side.
fn avoid_marker(
    origin: ScreenPoint,
    panel: Size,
    marker: &MarkerFootprint,
    ctx: &PlacementContext,
) -> Option<ScreenPoint> {
    let marker_box = marker.rect();
    if !ScreenRect::at(origin, panel).intersects(&marker_box) {
        return None;
    }

    let viewport = ctx.viewport;
    let below = marker_box.bottom() + ctx.gap;
    let above = marker_box.top() - panel.height - ctx.gap;
    let y = if below + panel.height + ctx.margin <= viewport.height {
        below
    } else if above >= ctx.header_height {
        above
    } else {
        return None;
    };

    let x = clamp_between(
        marker.x - panel.width / 2.0,
        ctx.margin,
        viewport.width - panel.width - ctx.margin,
    );
    Some(ScreenPoint::new(x, y))
}

// `f64::clamp` panics when `min > max`, which happens for panels wider than the viewport.
fn clamp_between(value: f64, min: f64, max: f64) -> f64 {
    min.max(value.min(max))
}

/// Places a named panel for an anchor coming from a marker click.
pub fn place_panel(
    anchor: &ScreenAnchor,
    kind: PanelKind,
    dims: &PanelDimensions,
    viewport: Size,
) -> ScreenPoint {
    let ctx = PlacementContext::new(viewport, dims).with_marker(anchor.marker);
    clamp_panel(anchor.point(), kind.size(dims), &ctx)
}
