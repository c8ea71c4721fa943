// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use serde::Serialize;
use smol_str::SmolStr;

use super::labels::rank_label;
use super::provider::RawPlace;
use crate::model::LatLng;

/// A labelled, typed search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub label: SmolStr,
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone: String,
    pub position: LatLng,
}

/// Dedupes, coerces, truncates and labels raw provider records, keeping provider order.
///
/// The first record for each exact `(name, x, y)` wins. Records whose coordinates do not parse
/// are dropped.
pub fn build_results(raw: &[RawPlace], max_results: usize) -> Vec<SearchResult> {
    let mut seen = HashSet::with_capacity(raw.len());
    raw.iter()
        .filter(|place| seen.insert(place.dedup_key()))
        .filter_map(|place| match place.position() {
            Some(position) => Some((place, position)),
            None => {
                log::warn!(
                    "dropping search result {:?} with coordinates ({:?}, {:?})",
                    place.place_name,
                    place.x,
                    place.y
                );
                None
            }
        })
        .take(max_results)
        .enumerate()
        .map(|(index, (place, position))| SearchResult {
            label: rank_label(index),
            name: place.place_name.clone(),
            category: place.category_group_name.clone(),
            address: place.address().to_owned(),
            phone: place.phone.clone(),
            position,
        })
        .collect()
}
