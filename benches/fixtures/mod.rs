// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use placemark::model::{LatLng, Marker, MarkerFootprint, PlaceId, PlaceType, ScreenAnchor};

const TYPES: [PlaceType; 6] = [
    PlaceType::Restaurant,
    PlaceType::KidsPlayground,
    PlaceType::Relaxation,
    PlaceType::MyFootprint,
    PlaceType::RecommendedRestaurant,
    PlaceType::RecommendedSpot,
];

/// `count` markers spread over a Seoul-sized grid. Every `stack_every`-th marker reuses the
/// previous marker's spot (offset below the key precision) so the grouping has real clusters.
pub fn city_markers(count: usize, stack_every: usize) -> Vec<Marker> {
    let side = (count as f64).sqrt().ceil().max(1.0) as usize;
    let mut markers = Vec::with_capacity(count);
    let mut last = LatLng::new(37.45, 126.85);

    for idx in 0..count {
        let position = if stack_every > 0 && idx % stack_every == stack_every - 1 {
            LatLng::new(last.lat + 0.000_001, last.lng)
        } else {
            let row = idx / side;
            let col = idx % side;
            LatLng::new(37.45 + row as f64 * 0.0013, 126.85 + col as f64 * 0.0017)
        };
        last = position;

        let place_type = TYPES[idx % TYPES.len()];
        let grade = Some((idx % 3) as u8 + 1);
        markers.push(
            Marker::new(PlaceId::new(idx as u64 + 1), format!("place_{idx:06}"), place_type, position)
                .with_grade(grade),
        );
    }
    markers
}

/// Anchors sweeping a viewport in a fixed pattern, half of them with a marker footprint.
pub fn anchors(width: f64, height: f64, count: usize) -> Vec<ScreenAnchor> {
    (0..count)
        .map(|idx| {
            let x = (idx * 37 % 101) as f64 / 100.0 * width;
            let y = (idx * 53 % 103) as f64 / 102.0 * height;
            let anchor = ScreenAnchor::new(x + 8.0, y);
            if idx % 2 == 0 {
                anchor.with_marker(MarkerFootprint::new(x - 14.0, y + 22.0, 44.0, 44.0))
            } else {
                anchor
            }
        })
        .collect()
}
