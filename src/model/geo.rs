// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Euclidean distance on raw degrees.
    ///
    /// This is not a great-circle distance. It is only meant for "has the map drifted" checks at
    /// city zoom levels, where the distortion does not matter.
    pub fn planar_distance(self, other: LatLng) -> f64 {
        let d_lat = self.lat - other.lat;
        let d_lng = self.lng - other.lng;
        (d_lat * d_lat + d_lng * d_lng).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// The visible map rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub southwest: LatLng,
    pub northeast: LatLng,
}

impl GeoBounds {
    pub const fn new(southwest: LatLng, northeast: LatLng) -> Self {
        Self { southwest, northeast }
    }

    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.southwest.lat
            && point.lat <= self.northeast.lat
            && point.lng >= self.southwest.lng
            && point.lng <= self.northeast.lng
    }

    /// Keyword providers take the rectangle as `sw.lng,sw.lat,ne.lng,ne.lat`.
    pub fn to_rect_param(&self) -> String {
        format!(
            "{},{},{},{}",
            self.southwest.lng, self.southwest.lat, self.northeast.lng, self.northeast.lat
        )
    }
}
