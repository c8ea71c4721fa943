// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Markers (point entities) with their category and grade, plus the geographic and screen
//! geometry the clustering, placement and search components share.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod geo;
pub mod ids;
pub mod marker;
pub mod place;
pub mod screen;

pub use geo::{GeoBounds, LatLng};
pub use ids::{Id, IdError, PlaceId, ToastId};
pub use marker::{Marker, MarkerRecord};
pub use place::{ParsePlaceTypeError, PlaceType, DEFAULT_MARKER_COLOR};
pub use screen::{MarkerFootprint, ScreenAnchor, ScreenPoint, ScreenRect, Size};
