// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::geo::LatLng;
use super::ids::PlaceId;
use super::place::PlaceType;

/// A single pin on the map.
///
/// Markers are immutable once rendered: a refetch replaces the whole list instead of patching
/// entries in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MarkerRecord", into = "MarkerRecord")]
pub struct Marker {
    id: PlaceId,
    name: String,
    place_type: PlaceType,
    position: LatLng,
    grade: Option<u8>,
}

impl Marker {
    pub fn new(
        id: PlaceId,
        name: impl Into<String>,
        place_type: PlaceType,
        position: LatLng,
    ) -> Self {
        Self { id, name: name.into(), place_type, position, grade: None }
    }

    pub fn with_grade(mut self, grade: Option<u8>) -> Self {
        self.grade = grade;
        self
    }

    pub fn id(&self) -> PlaceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn place_type(&self) -> PlaceType {
        self.place_type
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn grade(&self) -> Option<u8> {
        self.grade
    }

    pub fn color(&self) -> &'static str {
        self.place_type.marker_color(self.grade)
    }
}

/// Wire shape of a marker as the backend sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerRecord {
    pub id: PlaceId,
    pub name: String,
    #[serde(rename = "type")]
    pub place_type: PlaceType,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<u8>,
}

impl From<MarkerRecord> for Marker {
    fn from(record: MarkerRecord) -> Self {
        Marker::new(
            record.id,
            record.name,
            record.place_type,
            LatLng::new(record.latitude, record.longitude),
        )
        .with_grade(record.grade)
    }
}

impl From<Marker> for MarkerRecord {
    fn from(marker: Marker) -> Self {
        Self {
            id: marker.id,
            name: marker.name,
            place_type: marker.place_type,
            latitude: marker.position.lat,
            longitude: marker.position.lng,
            grade: marker.grade,
        }
    }
}
