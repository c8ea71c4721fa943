// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The map collaborator.
//!
//! The map SDK itself lives outside this crate. Everything here talks to it through
//! [`MapHandle`], and filters its raw move events through a [`MoveGate`] so that only
//! user-driven pans and zooms reach the area search.

pub mod gate;
pub mod pump;
pub mod simulated;

pub use gate::MoveGate;
pub use pump::{pump_map_events, MapEventSink};
pub use simulated::SimulatedMap;

use crate::model::{GeoBounds, LatLng, ScreenPoint};

/// Read/move access to the live map.
///
/// Reads return `None` until the map has finished initialising; callers treat that as "not
/// ready yet" and do nothing.
pub trait MapHandle {
    fn bounds(&self) -> Option<GeoBounds>;
    fn center(&self) -> Option<LatLng>;
    fn set_center(&mut self, center: LatLng);
    fn set_zoom(&mut self, level: u8);
    fn project_to_screen(&self, point: LatLng) -> Option<ScreenPoint>;
}

/// Raw events the map SDK reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    Click(LatLng),
    DragEnd,
    ZoomChanged,
}

impl MapEvent {
    /// Whether the event can move the viewport.
    pub fn is_move(&self) -> bool {
        matches!(self, Self::DragEnd | Self::ZoomChanged)
    }
}

/// Re-centers and re-zooms the map on behalf of the app (not the user), opening the gate's
/// settle window first so the resulting move events are ignored.
pub fn move_programmatically<M: MapHandle + ?Sized>(
    map: &mut M,
    gate: &mut MoveGate,
    target: LatLng,
    zoom: u8,
    now: tokio::time::Instant,
) {
    gate.begin_programmatic_move(now);
    map.set_center(target);
    map.set_zoom(zoom);
    log::debug!("programmatic map move to {},{} (zoom {zoom})", target.lat, target.lng);
}
