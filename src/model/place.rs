// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Marker colour used when a place has no (valid) grade.
pub const DEFAULT_MARKER_COLOR: &str = "#9CA3AF";

/// Place category. Public categories are visible to everybody; personal ones only to the
/// authenticated owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlaceType {
    Restaurant,
    KidsPlayground,
    Relaxation,
    MyFootprint,
    RecommendedRestaurant,
    RecommendedSpot,
    /// Any category this build does not know about yet.
    #[serde(other)]
    Other,
}

impl PlaceType {
    pub const PUBLIC: [PlaceType; 3] =
        [PlaceType::Restaurant, PlaceType::KidsPlayground, PlaceType::Relaxation];

    pub const PERSONAL: [PlaceType; 3] = [
        PlaceType::MyFootprint,
        PlaceType::RecommendedRestaurant,
        PlaceType::RecommendedSpot,
    ];

    pub fn is_personal(self) -> bool {
        Self::PERSONAL.contains(&self)
    }

    pub fn is_public(self) -> bool {
        Self::PUBLIC.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Restaurant => "RESTAURANT",
            Self::KidsPlayground => "KIDS_PLAYGROUND",
            Self::Relaxation => "RELAXATION",
            Self::MyFootprint => "MY_FOOTPRINT",
            Self::RecommendedRestaurant => "RECOMMENDED_RESTAURANT",
            Self::RecommendedSpot => "RECOMMENDED_SPOT",
            Self::Other => "OTHER",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurants",
            Self::KidsPlayground => "Kids playgrounds",
            Self::Relaxation => "Downtime",
            Self::MyFootprint => "My footprints",
            Self::RecommendedRestaurant => "Recommended restaurants",
            Self::RecommendedSpot => "Recommended spots",
            Self::Other => "Place",
        }
    }

    /// Marker fill colour for a `(category, grade)` pair; grade 1 is the strongest shade.
    pub fn marker_color(self, grade: Option<u8>) -> &'static str {
        let shades: [&'static str; 3] = match self {
            Self::Restaurant => ["#DC2626", "#F87171", "#FCA5A5"],
            Self::KidsPlayground => ["#166534", "#22C55E", "#84CC16"],
            Self::Relaxation => ["#1E3A8A", "#3B82F6", "#7DD3FC"],
            Self::MyFootprint => ["#7E22CE", "#A855F7", "#D8B4FE"],
            Self::RecommendedRestaurant => ["#C2410C", "#F97316", "#FDBA74"],
            Self::RecommendedSpot => ["#0D9488", "#2DD4BF", "#99F6E4"],
            Self::Other => return DEFAULT_MARKER_COLOR,
        };

        match grade {
            Some(grade @ 1..=3) => shades[usize::from(grade - 1)],
            _ => DEFAULT_MARKER_COLOR,
        }
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePlaceTypeError(String);

impl fmt::Display for ParsePlaceTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown place type {:?}", self.0)
    }
}

impl std::error::Error for ParsePlaceTypeError {}

impl FromStr for PlaceType {
    type Err = ParsePlaceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        [Self::PUBLIC, Self::PERSONAL]
            .into_iter()
            .flatten()
            .find(|place_type| place_type.as_str() == normalized)
            .ok_or_else(|| ParsePlaceTypeError(s.to_owned()))
    }
}
