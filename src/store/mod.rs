// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Application state.
//!
//! One explicit [`Store`] owns the map handle, the signed-in state, the marker filter, the
//! marker list, the search session, open panels and toasts. Every mutation goes through a method
//! here, so login/logout and the marker filter can never drift apart.

pub mod panels;
pub mod toasts;

pub use panels::{DetailPanel, GroupPanel, NewPlaceDraft, PanelState, PreviewPlace};
pub use toasts::{Toast, ToastKind, ToastQueue};

use tokio::time::Instant;

use crate::api::{self, ApiError, MarkerQuery, MarkerSource};
use crate::cluster::{
    cluster_markers, group_by_coordinate, ClusterMarker, CoordinateGroups, CoordinateKey,
};
use crate::config::PlacemarkConfig;
use crate::filter::MarkerFilter;
use crate::map::{move_programmatically, MapEvent, MapEventSink, MapHandle, MoveGate};
use crate::model::{LatLng, Marker, PlaceId, ScreenAnchor, ScreenPoint, Size, ToastId};
use crate::placement::{clamp_panel, PanelKind, PlacementContext};
use crate::search::{AreaSearch, KeywordSearchProvider, SearchUpdate};

#[derive(Debug)]
pub struct Store<M> {
    config: PlacemarkConfig,
    map: M,
    gate: MoveGate,
    viewport: Size,
    header_height: Option<f64>,
    token: Option<String>,
    filter: MarkerFilter,
    markers: Vec<Marker>,
    search: AreaSearch,
    panels: PanelState,
    toasts: ToastQueue,
}

impl<M: MapHandle> Store<M> {
    pub fn new(config: PlacemarkConfig, map: M, viewport: Size) -> Self {
        Self {
            gate: MoveGate::from_timing(&config.timing),
            search: AreaSearch::new(config.search.clone()),
            config,
            map,
            viewport,
            header_height: None,
            token: None,
            filter: MarkerFilter::default(),
            markers: Vec::new(),
            panels: PanelState::default(),
            toasts: ToastQueue::default(),
        }
    }

    pub fn config(&self) -> &PlacemarkConfig {
        &self.config
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    /// Direct map access for user-driven moves. Programmatic moves go through the store.
    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub fn filter(&self) -> &MarkerFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut MarkerFilter {
        &mut self.filter
    }

    pub fn search(&self) -> &AreaSearch {
        &self.search
    }

    pub fn panels(&self) -> &PanelState {
        &self.panels
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Measured header height; overrides the configured one for panel placement.
    pub fn set_header_height(&mut self, height: f64) {
        self.header_height = Some(height);
    }

    // auth

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.token.as_deref().map(api::authorization_header)
    }

    pub fn login(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
        self.filter.enable_my_footprint();
        log::info!("signed in");
    }

    pub fn logout(&mut self) {
        self.token = None;
        self.filter.disable_personal_types();
        log::info!("signed out");
    }

    /// The backend refused the token. Personal markers disappear, the filter selection stays.
    pub fn auth_expired(&mut self) {
        if self.token.take().is_some() {
            log::warn!("authentication expired");
        }
    }

    // markers

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn set_markers(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn update_marker(&mut self, marker: Marker) -> bool {
        match self.markers.iter_mut().find(|m| m.id() == marker.id()) {
            Some(slot) => {
                *slot = marker;
                true
            }
            None => false,
        }
    }

    pub fn remove_marker(&mut self, id: PlaceId) -> bool {
        let before = self.markers.len();
        self.markers.retain(|m| m.id() != id);
        let removed = self.markers.len() != before;
        if removed {
            self.panels.forget_place(id);
        }
        removed
    }

    pub fn visible_markers(&self) -> Vec<&Marker> {
        self.filter.visible(&self.markers, self.is_authenticated()).collect()
    }

    pub fn clusters(&self) -> CoordinateGroups {
        group_by_coordinate(self.filter.visible(&self.markers, self.is_authenticated()))
    }

    pub fn cluster_markers(&self) -> Vec<ClusterMarker> {
        cluster_markers(self.filter.visible(&self.markers, self.is_authenticated()))
    }

    /// Replaces the marker list from `source`. On failure the previous list stays.
    pub async fn refresh_markers<S>(&mut self, source: &S) -> Result<usize, ApiError>
    where
        S: MarkerSource,
    {
        let query = MarkerQuery::all();
        let token = self.token.clone();
        match source.fetch_markers(&query, token.as_deref()).await {
            Ok(markers) => {
                log::debug!("loaded {} markers", markers.len());
                self.markers = markers;
                Ok(self.markers.len())
            }
            Err(err) => {
                log::error!("failed to load markers: {err}");
                if matches!(err, ApiError::Unauthorized) {
                    self.auth_expired();
                }
                Err(err)
            }
        }
    }

    // panels

    /// Handles a click on a rendered cluster or single marker.
    pub fn click_cluster(&mut self, key: &CoordinateKey, anchor: ScreenAnchor) -> bool {
        let clusters = self.clusters();
        match clusters.get(key) {
            Some(cluster) => {
                self.panels.marker_click(cluster.members(), anchor);
                true
            }
            None => false,
        }
    }

    pub fn select_group_member(&mut self, id: PlaceId) -> bool {
        self.panels.select_group_member(id)
    }

    pub fn close_detail(&mut self) {
        self.panels.close_detail();
    }

    pub fn close_group(&mut self) {
        self.panels.close_group();
    }

    pub fn clear_detail_panels(&mut self) {
        self.panels.clear_detail_panels();
    }

    pub fn clear_panels(&mut self) {
        self.panels.clear_panels();
    }

    /// A plain click closes everything. With `register` (a modifier-click) the clicked spot opens
    /// in the registration preview.
    pub fn map_click(&mut self, register: Option<(LatLng, String)>) {
        self.panels.clear_panels();
        if let Some((position, address)) = register {
            self.panels.open_preview(PreviewPlace { position, name: String::new(), address });
        }
    }

    pub fn close_preview(&mut self) {
        self.panels.close_preview();
    }

    pub fn register_preview(&mut self) -> Option<NewPlaceDraft> {
        self.panels.register_preview().cloned()
    }

    pub fn close_form(&mut self) {
        self.panels.close_form();
    }

    pub fn detail_position(&self) -> Option<ScreenPoint> {
        self.panels.detail().map(|detail| self.resolve_panel(PanelKind::Detail, &detail.anchor))
    }

    pub fn group_position(&self) -> Option<ScreenPoint> {
        self.panels.group().map(|group| self.resolve_panel(PanelKind::List, &group.anchor))
    }

    fn resolve_panel(&self, kind: PanelKind, anchor: &ScreenAnchor) -> ScreenPoint {
        let dims = &self.config.panel;
        let mut ctx = PlacementContext::new(self.viewport, dims).with_marker(anchor.marker);
        if let Some(header_height) = self.header_height {
            ctx = ctx.with_header_height(header_height);
        }
        clamp_panel(anchor.point(), kind.size(dims), &ctx)
    }

    // toasts

    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        self.toasts.push(message, kind, self.config.timing.toast(), Instant::now())
    }

    pub fn dismiss_toast(&mut self, id: ToastId) -> bool {
        self.toasts.dismiss(id)
    }

    /// What the toast area should show right now.
    pub fn visible_toasts(&self) -> Vec<&Toast> {
        self.toasts.active(Instant::now()).collect()
    }

    pub fn prune_toasts(&mut self) -> usize {
        self.toasts.prune(Instant::now())
    }

    // search

    pub async fn run_search<P>(&mut self, keyword: &str, provider: &P) -> SearchUpdate
    where
        P: KeywordSearchProvider + ?Sized,
    {
        let update = self.search.search(keyword, &self.map, provider).await;
        self.after_search(update);
        update
    }

    pub async fn re_search<P>(&mut self, provider: &P) -> SearchUpdate
    where
        P: KeywordSearchProvider + ?Sized,
    {
        let update = self.search.re_search(&self.map, provider).await;
        self.after_search(update);
        update
    }

    fn after_search(&mut self, update: SearchUpdate) {
        match update {
            SearchUpdate::Results(_) => self.panels.clear_panels(),
            SearchUpdate::NoResults => {
                let message = self.config.search.no_results_message.clone();
                let ttl = self.config.timing.search_toast();
                self.toasts.push(message, ToastKind::Info, ttl, Instant::now());
            }
            SearchUpdate::Skipped | SearchUpdate::Superseded => {}
        }
    }

    pub fn set_search_keyword(&mut self, keyword: impl Into<String>) {
        self.search.set_keyword(keyword);
    }

    /// Moves to a search hit and opens it in the registration preview.
    pub fn select_search_result(&mut self, index: usize) -> bool {
        let Some(result) = self.search.select_result(index) else {
            return false;
        };
        move_programmatically(
            &mut self.map,
            &mut self.gate,
            result.position,
            self.config.map.move_zoom,
            Instant::now(),
        );
        self.panels.clear_detail_panels();
        self.panels.open_preview(PreviewPlace {
            position: result.position,
            name: result.name,
            address: result.address,
        });
        true
    }

    pub fn dismiss_research(&mut self) {
        self.search.dismiss_research();
    }

    pub fn close_search(&mut self) {
        self.search.close();
    }

    pub fn note_map_moved(&mut self) -> bool {
        self.search.note_map_moved(&self.map)
    }
}

impl<M: MapHandle> MapEventSink for Store<M> {
    fn handle_map_event(&mut self, event: MapEvent, now: Instant) {
        if let MapEvent::Click(_) = event {
            self.panels.clear_panels();
            return;
        }
        self.gate.on_map_event(event, now);
    }

    fn settle_deadline(&self) -> Option<Instant> {
        self.gate.deadline()
    }

    fn on_settle_due(&mut self, now: Instant) {
        self.toasts.prune(now);
        if self.gate.poll(now) {
            self.note_map_moved();
        }
    }
}
