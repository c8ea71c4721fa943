// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::provider::{fetch_page, KeywordSearchProvider, SearchOptions};
use super::results::{build_results, SearchResult};
use crate::config::SearchConfig;
use crate::map::MapHandle;
use crate::model::LatLng;

/// What the results area of the UI is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
    Results,
    NoResults,
    /// The map drifted away from the last search; offer a re-search.
    StaleResults,
}

/// How a search call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchUpdate {
    /// Blank keyword or the map was not ready. Nothing changed.
    Skipped,
    /// A newer search (or a close) happened while this one was in flight; its outcome was dropped.
    Superseded,
    NoResults,
    Results(usize),
}

/// A search that has been started but not yet answered.
///
/// Holds everything the provider round trip needs, so the controller is free while it runs.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    generation: u64,
    keyword: String,
    options: SearchOptions,
    center: Option<LatLng>,
    max_results: usize,
}

impl SearchRequest {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Fetches page 1, then page 2 only when page 1 came back full.
    pub async fn run<P>(self, provider: &P) -> SearchOutcome
    where
        P: KeywordSearchProvider + ?Sized,
    {
        let mut raw = fetch_page(provider, &self.keyword, &self.options).await;
        if raw.len() >= self.options.size {
            let next = fetch_page(provider, &self.keyword, &self.options.next_page()).await;
            raw.extend(next);
        }
        let results = build_results(&raw, self.max_results);
        log::debug!(
            "search {:?} (generation {}): {} raw, {} kept",
            self.keyword,
            self.generation,
            raw.len(),
            results.len()
        );
        SearchOutcome {
            generation: self.generation,
            keyword: self.keyword,
            center: self.center,
            results,
        }
    }
}

/// A finished provider round trip, waiting to be applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    generation: u64,
    keyword: String,
    center: Option<LatLng>,
    results: Vec<SearchResult>,
}

impl SearchOutcome {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }
}

/// "Search this area" session state.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaSearch {
    config: SearchConfig,
    keyword: String,
    results: Vec<SearchResult>,
    last_center: Option<LatLng>,
    research_available: bool,
    phase: SearchPhase,
    generation: u64,
}

impl AreaSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            keyword: String::new(),
            results: Vec::new(),
            last_center: None,
            research_available: false,
            phase: SearchPhase::Idle,
            generation: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn last_searched_center(&self) -> Option<LatLng> {
        self.last_center
    }

    pub fn research_available(&self) -> bool {
        self.research_available
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Records what the user typed, without searching.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    /// Starts a search scoped to the current viewport.
    ///
    /// Returns `None` for a blank keyword or a map without bounds.
    pub fn begin<M>(&mut self, keyword: &str, map: &M) -> Option<SearchRequest>
    where
        M: MapHandle + ?Sized,
    {
        if keyword.trim().is_empty() {
            return None;
        }
        let Some(rect) = map.bounds() else {
            log::debug!("map not ready; skipping search for {keyword:?}");
            return None;
        };
        let center = map.center();

        self.generation += 1;
        self.phase = SearchPhase::Searching;
        Some(SearchRequest {
            generation: self.generation,
            keyword: keyword.to_owned(),
            options: SearchOptions::first_page(rect, center, self.config.page_size),
            center,
            max_results: self.config.max_results,
        })
    }

    /// Applies a finished search unless a newer one has started since.
    pub fn finish(&mut self, outcome: SearchOutcome) -> SearchUpdate {
        if outcome.generation != self.generation {
            log::debug!(
                "dropping search outcome for {:?}: generation {} superseded by {}",
                outcome.keyword,
                outcome.generation,
                self.generation
            );
            return SearchUpdate::Superseded;
        }

        if let Some(center) = outcome.center {
            self.last_center = Some(center);
        }
        self.keyword = outcome.keyword;
        self.research_available = false;
        self.results = outcome.results;
        if self.results.is_empty() {
            self.phase = SearchPhase::NoResults;
            SearchUpdate::NoResults
        } else {
            self.phase = SearchPhase::Results;
            SearchUpdate::Results(self.results.len())
        }
    }

    pub async fn search<M, P>(&mut self, keyword: &str, map: &M, provider: &P) -> SearchUpdate
    where
        M: MapHandle + ?Sized,
        P: KeywordSearchProvider + ?Sized,
    {
        let Some(request) = self.begin(keyword, map) else {
            return SearchUpdate::Skipped;
        };
        let outcome = request.run(provider).await;
        self.finish(outcome)
    }

    /// Searches again with the retained keyword.
    pub async fn re_search<M, P>(&mut self, map: &M, provider: &P) -> SearchUpdate
    where
        M: MapHandle + ?Sized,
        P: KeywordSearchProvider + ?Sized,
    {
        let keyword = self.keyword.clone();
        self.search(&keyword, map, provider).await
    }

    /// Call after every user-driven pan or zoom has settled. Returns whether a re-search is on
    /// offer afterwards.
    pub fn note_map_moved<M>(&mut self, map: &M) -> bool
    where
        M: MapHandle + ?Sized,
    {
        if self.keyword.is_empty() {
            return false;
        }

        let drifted = match (self.last_center, map.center()) {
            (None, _) => true,
            (Some(last), Some(current)) => current.planar_distance(last) > self.config.research_threshold,
            (Some(_), None) => false,
        };
        if drifted {
            self.research_available = true;
            if self.phase != SearchPhase::Searching {
                self.phase = SearchPhase::StaleResults;
            }
        }
        self.research_available
    }

    /// Hides the re-search affordance without searching.
    pub fn dismiss_research(&mut self) {
        self.research_available = false;
        if self.phase == SearchPhase::StaleResults {
            self.phase = if self.results.is_empty() { SearchPhase::Idle } else { SearchPhase::Results };
        }
    }

    /// Takes the result at `index` and clears the list. The keyword stays for later drift checks.
    pub fn select_result(&mut self, index: usize) -> Option<SearchResult> {
        if index >= self.results.len() {
            return None;
        }
        let chosen = self.results.swap_remove(index);
        self.results.clear();
        if self.phase != SearchPhase::Searching {
            self.phase = SearchPhase::Idle;
        }
        Some(chosen)
    }

    /// Ends the session. Searches still in flight are dropped when they finish.
    pub fn close(&mut self) {
        self.keyword.clear();
        self.results.clear();
        self.last_center = None;
        self.research_available = false;
        self.phase = SearchPhase::Idle;
        self.generation += 1;
    }
}
