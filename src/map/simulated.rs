// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::MapHandle;
use crate::model::{GeoBounds, LatLng, ScreenPoint, Size};

// Degrees per CSS pixel at zoom level 0; every level doubles it.
const BASE_SCALE: f64 = 1.0e-6;

/// Headless, flat-projection map used by the CLI, tests and benches.
///
/// Higher zoom levels show a wider area, matching the provider's level numbering.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedMap {
    center: Option<LatLng>,
    zoom: u8,
    viewport: Size,
}

impl SimulatedMap {
    pub fn new(center: LatLng, zoom: u8, viewport: Size) -> Self {
        Self { center: Some(center), zoom, viewport }
    }

    /// A map that has not finished initialising: every read returns `None`.
    pub fn unready(viewport: Size) -> Self {
        Self { center: None, zoom: 0, viewport }
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Simulates the user dragging the map.
    pub fn pan_to(&mut self, center: LatLng) {
        self.center = Some(center);
    }

    fn scale(&self) -> f64 {
        BASE_SCALE * 2f64.powi(i32::from(self.zoom))
    }
}

impl MapHandle for SimulatedMap {
    fn bounds(&self) -> Option<GeoBounds> {
        let center = self.center?;
        let half_w = self.viewport.width / 2.0 * self.scale();
        let half_h = self.viewport.height / 2.0 * self.scale();
        Some(GeoBounds::new(
            LatLng::new(center.lat - half_h, center.lng - half_w),
            LatLng::new(center.lat + half_h, center.lng + half_w),
        ))
    }

    fn center(&self) -> Option<LatLng> {
        self.center
    }

    fn set_center(&mut self, center: LatLng) {
        self.center = Some(center);
    }

    fn set_zoom(&mut self, level: u8) {
        self.zoom = level;
    }

    fn project_to_screen(&self, point: LatLng) -> Option<ScreenPoint> {
        let bounds = self.bounds()?;
        let scale = self.scale();
        Some(ScreenPoint::new(
            (point.lng - bounds.southwest.lng) / scale,
            (bounds.northeast.lat - point.lat) / scale,
        ))
    }
}
