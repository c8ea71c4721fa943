// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Placemark: the engine behind a place-bookmarking map.
//!
//! Co-located pins collapse into cluster badges ([`cluster`]), floating panels are placed so they
//! stay on screen and off the marker that opened them ([`placement`]), and keyword search is
//! scoped to the visible map with drift tracking for "search this area" ([`search`]). The map SDK,
//! the keyword provider and the backend are collaborators behind traits.

pub mod api;
pub mod cluster;
pub mod config;
pub mod filter;
pub mod map;
pub mod model;
pub mod placement;
pub mod search;
pub mod store;
