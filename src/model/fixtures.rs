// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::geo::LatLng;
use super::ids::PlaceId;
use super::marker::Marker;
use super::place::PlaceType;

pub(crate) fn marker(id: u64, lat: f64, lng: f64) -> Marker {
    Marker::new(PlaceId::new(id), format!("place-{id}"), PlaceType::Restaurant, LatLng::new(lat, lng))
}

pub(crate) fn typed_marker(id: u64, place_type: PlaceType, grade: Option<u8>) -> Marker {
    Marker::new(
        PlaceId::new(id),
        format!("{}-{id}", place_type.as_str().to_ascii_lowercase()),
        place_type,
        LatLng::new(37.5 + id as f64 * 0.01, 127.0),
    )
    .with_grade(grade)
}

/// Two stacked cafes at city hall plus a lone playground across the river.
pub(crate) fn seoul_markers() -> Vec<Marker> {
    vec![
        Marker::new(PlaceId::new(1), "Cafe A", PlaceType::Restaurant, LatLng::new(37.56650, 126.97800))
            .with_grade(Some(1)),
        Marker::new(PlaceId::new(2), "Cafe B", PlaceType::Restaurant, LatLng::new(37.566501, 126.978002))
            .with_grade(Some(2)),
        Marker::new(PlaceId::new(3), "Riverside Park", PlaceType::KidsPlayground, LatLng::new(37.52800, 126.93400))
            .with_grade(Some(1)),
        Marker::new(PlaceId::new(4), "Secret Bench", PlaceType::MyFootprint, LatLng::new(37.57000, 126.99000)),
    ]
}
