// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Keyword search provider boundary.
//!
//! Providers answer through a completion callback. [`fetch_page`] turns one such call into a
//! future so the paging logic can be written as straight-line async code.

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::model::{GeoBounds, LatLng};

/// Completion status reported with every page. Only [`SearchStatus::Ok`] counts as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchStatus {
    Ok,
    ZeroResult,
    #[serde(other)]
    Error,
}

impl SearchStatus {
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Accuracy,
    Distance,
}

/// Options for one page request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    pub rect: GeoBounds,
    /// Results are sorted by distance from this point when present.
    pub bias: Option<LatLng>,
    pub sort: SortBy,
    /// One-based.
    pub page: u32,
    pub size: usize,
}

impl SearchOptions {
    pub fn first_page(rect: GeoBounds, bias: Option<LatLng>, size: usize) -> Self {
        let sort = if bias.is_some() { SortBy::Distance } else { SortBy::Accuracy };
        Self { rect, bias, sort, page: 1, size }
    }

    pub fn next_page(&self) -> Self {
        Self { page: self.page + 1, ..self.clone() }
    }

    /// Query parameters for HTTP-backed providers.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("rect", self.rect.to_rect_param()),
            ("size", self.size.to_string()),
            ("page", self.page.to_string()),
        ];
        if let Some(bias) = self.bias {
            pairs.push(("x", bias.lng.to_string()));
            pairs.push(("y", bias.lat.to_string()));
        }
        if self.sort == SortBy::Distance {
            pairs.push(("sort", "distance".to_owned()));
        }
        pairs
    }
}

/// One provider record as it arrives on the wire. Coordinates are numeric strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawPlace {
    pub place_name: String,
    #[serde(default)]
    pub category_group_name: String,
    #[serde(default)]
    pub road_address_name: String,
    #[serde(default)]
    pub address_name: String,
    #[serde(default)]
    pub phone: String,
    /// Longitude.
    pub x: String,
    /// Latitude.
    pub y: String,
}

impl RawPlace {
    /// Decodes a provider page payload, skipping records that do not have the expected shape.
    pub fn decode_page(payload: &serde_json::Value) -> Vec<RawPlace> {
        let Some(items) = payload.as_array() else {
            log::warn!("search payload is not an array; treating it as an empty page");
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| match RawPlace::deserialize(item) {
                Ok(place) => Some(place),
                Err(err) => {
                    log::warn!("skipping malformed search record: {err}");
                    None
                }
            })
            .collect()
    }

    /// Exact-match identity used to drop duplicates across pages.
    pub fn dedup_key(&self) -> (&str, &str, &str) {
        (&self.place_name, &self.x, &self.y)
    }

    pub fn position(&self) -> Option<LatLng> {
        let lng = self.x.trim().parse::<f64>().ok()?;
        let lat = self.y.trim().parse::<f64>().ok()?;
        let position = LatLng::new(lat, lng);
        position.is_finite().then_some(position)
    }

    /// Road address, falling back to the lot address.
    pub fn address(&self) -> &str {
        if self.road_address_name.is_empty() {
            &self.address_name
        } else {
            &self.road_address_name
        }
    }
}

pub type SearchCallback = Box<dyn FnOnce(Vec<RawPlace>, SearchStatus) + Send + 'static>;

/// Callback-style keyword search, e.g. a map SDK's places service.
pub trait KeywordSearchProvider {
    /// Requests one page. `done` must be called at most once; not calling it at all is treated
    /// as an empty page.
    fn keyword_search(&self, keyword: &str, options: &SearchOptions, done: SearchCallback);
}

/// Requests one page and waits for the callback. Failures come back as an empty page.
pub async fn fetch_page<P>(provider: &P, keyword: &str, options: &SearchOptions) -> Vec<RawPlace>
where
    P: KeywordSearchProvider + ?Sized,
{
    let (tx, rx) = oneshot::channel();
    provider.keyword_search(
        keyword,
        options,
        Box::new(move |places, status| {
            let _ = tx.send((places, status));
        }),
    );

    match rx.await {
        Ok((places, SearchStatus::Ok)) => places,
        Ok((_, SearchStatus::ZeroResult)) => Vec::new(),
        Ok((_, status)) => {
            log::warn!("search page {} for {keyword:?} failed: {status:?}", options.page);
            Vec::new()
        }
        Err(_) => {
            log::warn!("search page {} for {keyword:?} was never answered", options.page);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{fetch_page, KeywordSearchProvider, RawPlace, SearchCallback, SearchOptions, SearchStatus};
    use crate::model::{GeoBounds, LatLng};

    fn options() -> SearchOptions {
        let rect = GeoBounds::new(LatLng::new(37.5, 126.9), LatLng::new(37.6, 127.0));
        SearchOptions::first_page(rect, Some(LatLng::new(37.55, 126.95)), 15)
    }

    struct Answer(SearchStatus);

    impl KeywordSearchProvider for Answer {
        fn keyword_search(&self, _keyword: &str, _options: &SearchOptions, done: SearchCallback) {
            let place = RawPlace {
                place_name: "Cafe A".to_owned(),
                x: "126.95".to_owned(),
                y: "37.55".to_owned(),
                ..RawPlace::default()
            };
            done(vec![place], self.0);
        }
    }

    struct Silent;

    impl KeywordSearchProvider for Silent {
        fn keyword_search(&self, _keyword: &str, _options: &SearchOptions, _done: SearchCallback) {}
    }

    #[test]
    fn query_pairs_carry_rect_bias_and_sort() {
        let pairs = options().next_page().query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("rect", "126.9,37.5,127,37.6".to_owned()),
                ("size", "15".to_owned()),
                ("page", "2".to_owned()),
                ("x", "126.95".to_owned()),
                ("y", "37.55".to_owned()),
                ("sort", "distance".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_page_skips_malformed_records() {
        let payload = json!([
            {"place_name": "Cafe A", "x": "126.95", "y": "37.55", "phone": "02-123"},
            {"place_name": "No coordinates"},
            {"place_name": "Cafe B", "x": "126.96", "y": "37.56", "road_address_name": "Sejong-daero 1"}
        ]);
        let places = RawPlace::decode_page(&payload);
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].phone, "02-123");
        assert_eq!(places[1].address(), "Sejong-daero 1");
        assert!(RawPlace::decode_page(&json!({"documents": []})).is_empty());
    }

    #[test]
    fn address_falls_back_to_lot_address() {
        let place = RawPlace { address_name: "Jung-gu 31".to_owned(), ..RawPlace::default() };
        assert_eq!(place.address(), "Jung-gu 31");
    }

    #[test]
    fn non_numeric_coordinates_have_no_position() {
        let place = RawPlace { x: "east".to_owned(), y: "37.5".to_owned(), ..RawPlace::default() };
        assert_eq!(place.position(), None);
        let place = RawPlace { x: " 127.0".to_owned(), y: "37.5".to_owned(), ..RawPlace::default() };
        assert_eq!(place.position(), Some(LatLng::new(37.5, 127.0)));
    }

    #[test]
    fn status_decodes_unknown_values_as_error() {
        let status: SearchStatus = serde_json::from_str("\"OVER_QUOTA\"").expect("status");
        assert_eq!(status, SearchStatus::Error);
        let status: SearchStatus = serde_json::from_str("\"ZERO_RESULT\"").expect("status");
        assert_eq!(status, SearchStatus::ZeroResult);
    }

    #[tokio::test]
    async fn ok_page_is_returned() {
        let places = fetch_page(&Answer(SearchStatus::Ok), "cafe", &options()).await;
        assert_eq!(places.len(), 1);
    }

    #[tokio::test]
    async fn failed_status_becomes_an_empty_page() {
        assert!(fetch_page(&Answer(SearchStatus::Error), "cafe", &options()).await.is_empty());
    }

    #[tokio::test]
    async fn dropped_callback_becomes_an_empty_page() {
        assert!(fetch_page(&Silent, "cafe", &options()).await.is_empty());
    }
}
