// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Area search: paged keyword search scoped to the visible map, plus drift tracking that decides
//! when to offer "search this area again".

pub mod controller;
pub mod labels;
pub mod provider;
pub mod results;

pub use controller::{AreaSearch, SearchOutcome, SearchPhase, SearchRequest, SearchUpdate};
pub use labels::rank_label;
pub use provider::{
    fetch_page, KeywordSearchProvider, RawPlace, SearchCallback, SearchOptions, SearchStatus, SortBy,
};
pub use results::{build_results, SearchResult};

#[cfg(test)]
mod tests;
