// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Coordinate grouping.
//!
//! Markers whose coordinates agree to five decimal places (about 1.1 m at the equator) are drawn
//! as one cluster badge instead of a pile of overlapping pins.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::model::{LatLng, Marker, PlaceId, PlaceType};

const KEY_DECIMALS: usize = 5;

/// Grouping key: latitude and longitude rounded to five decimals, joined with a comma.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CoordinateKey(SmolStr);

impl CoordinateKey {
    pub fn of(position: LatLng) -> Self {
        let lat = format_rounded(position.lat);
        let lng = format_rounded(position.lng);
        Self(smol_str::format_smolstr!("{lat},{lng}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CoordinateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn format_rounded(value: f64) -> String {
    let formatted = match exact_sixty_fourths(value) {
        Some(sixty_fourths) => format_half_up(value, sixty_fourths),
        None => format!("{:.*}", KEY_DECIMALS, value),
    };
    // -0.000001 rounds to "-0.00000"; it is the same spot as +0.000001.
    match formatted.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_owned(),
        _ => formatted,
    }
}

/// `|value| * 64` when that is a whole number.
///
/// Only such values can sit exactly halfway between two keys; `{:.5}` would send those ties to
/// the even digit, while the web client's `toFixed(5)` rounds them away from zero.
fn exact_sixty_fourths(value: f64) -> Option<u128> {
    let scaled = (value * 64.0).abs();
    (scaled.fract() == 0.0 && scaled < 1e15).then_some(scaled as u128)
}

fn format_half_up(value: f64, sixty_fourths: u128) -> String {
    let unit = 10u128.pow(KEY_DECIMALS as u32);
    let units = (sixty_fourths * unit + 32) / 64;
    let sign = if value < 0.0 && units != 0 { "-" } else { "" };
    format!("{sign}{}.{:0width$}", units / unit, units % unit, width = KEY_DECIMALS)
}

/// Markers sharing one [`CoordinateKey`], in input order. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    key: CoordinateKey,
    members: SmallVec<[Marker; 1]>,
}

impl Cluster {
    fn new(key: CoordinateKey, first: Marker) -> Self {
        let mut members = SmallVec::new();
        members.push(first);
        Self { key, members }
    }

    pub fn key(&self) -> &CoordinateKey {
        &self.key
    }

    pub fn members(&self) -> &[Marker] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_group(&self) -> bool {
        self.members.len() > 1
    }

    pub fn first(&self) -> &Marker {
        &self.members[0]
    }

    /// Where the badge is drawn: the first member's exact coordinate.
    pub fn position(&self) -> LatLng {
        self.first().position()
    }
}

/// Insertion-ordered `CoordinateKey -> Cluster` map.
///
/// Iteration follows the order in which each key was first seen, so re-grouping an unchanged
/// marker list yields the same clusters in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateGroups {
    clusters: Vec<Cluster>,
    index: HashMap<CoordinateKey, usize>,
}

impl CoordinateGroups {
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cluster> {
        self.clusters.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CoordinateKey> {
        self.clusters.iter().map(Cluster::key)
    }

    pub fn get(&self, key: &CoordinateKey) -> Option<&Cluster> {
        self.index.get(key).map(|&idx| &self.clusters[idx])
    }

    pub fn cluster_containing(&self, id: PlaceId) -> Option<&Cluster> {
        self.clusters
            .iter()
            .find(|cluster| cluster.members().iter().any(|marker| marker.id() == id))
    }

    /// All markers back in bucket order.
    pub fn flatten(&self) -> Vec<Marker> {
        self.clusters
            .iter()
            .flat_map(|cluster| cluster.members().iter().cloned())
            .collect()
    }

    pub fn into_clusters(self) -> Vec<Cluster> {
        self.clusters
    }

    fn push(&mut self, marker: Marker) {
        let key = CoordinateKey::of(marker.position());
        match self.index.get(&key) {
            Some(&idx) => self.clusters[idx].members.push(marker),
            None => {
                self.index.insert(key.clone(), self.clusters.len());
                self.clusters.push(Cluster::new(key, marker));
            }
        }
    }
}

impl<'a> IntoIterator for &'a CoordinateGroups {
    type Item = &'a Cluster;
    type IntoIter = std::slice::Iter<'a, Cluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}

/// Buckets markers by [`CoordinateKey`].
///
/// Duplicate ids are kept as separate entries; nothing is deduplicated here.
pub fn group_by_coordinate<'a, I>(markers: I) -> CoordinateGroups
where
    I: IntoIterator<Item = &'a Marker>,
{
    let mut groups = CoordinateGroups::default();
    for marker in markers {
        groups.push(marker.clone());
    }
    groups
}

/// Render descriptor for one drawn marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClusterMarker {
    Single {
        id: PlaceId,
        name: String,
        place_type: PlaceType,
        position: LatLng,
        color: &'static str,
    },
    Group {
        key: CoordinateKey,
        position: LatLng,
        count: usize,
        badge: SmolStr,
        members: Vec<PlaceId>,
    },
}

impl ClusterMarker {
    pub fn position(&self) -> LatLng {
        match self {
            Self::Single { position, .. } | Self::Group { position, .. } => *position,
        }
    }
}

impl From<&Cluster> for ClusterMarker {
    fn from(cluster: &Cluster) -> Self {
        if cluster.is_group() {
            let mut buf = itoa::Buffer::new();
            Self::Group {
                key: cluster.key().clone(),
                position: cluster.position(),
                count: cluster.len(),
                badge: SmolStr::new(buf.format(cluster.len())),
                members: cluster.members().iter().map(Marker::id).collect(),
            }
        } else {
            let marker = cluster.first();
            Self::Single {
                id: marker.id(),
                name: marker.name().to_owned(),
                place_type: marker.place_type(),
                position: marker.position(),
                color: marker.color(),
            }
        }
    }
}

/// Groups markers and turns every bucket into a render descriptor.
pub fn cluster_markers<'a, I>(markers: I) -> Vec<ClusterMarker>
where
    I: IntoIterator<Item = &'a Marker>,
{
    group_by_coordinate(markers).iter().map(ClusterMarker::from).collect()
}
