// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cell::RefCell;
use std::collections::VecDeque;

use rstest::{fixture, rstest};

use super::{
    AreaSearch, KeywordSearchProvider, RawPlace, SearchCallback, SearchOptions, SearchPhase,
    SearchStatus, SearchUpdate, SortBy,
};
use crate::config::SearchConfig;
use crate::map::{MapHandle, SimulatedMap};
use crate::model::{LatLng, Size};

/// Answers pages from a script, in order, and records every request.
#[derive(Default)]
struct ScriptedProvider {
    pages: RefCell<VecDeque<(Vec<RawPlace>, SearchStatus)>>,
    calls: RefCell<Vec<(String, SearchOptions)>>,
}

impl ScriptedProvider {
    fn with_pages(pages: Vec<Vec<RawPlace>>) -> Self {
        let provider = Self::default();
        for page in pages {
            provider.pages.borrow_mut().push_back((page, SearchStatus::Ok));
        }
        provider
    }

    fn push(&self, page: Vec<RawPlace>, status: SearchStatus) {
        self.pages.borrow_mut().push_back((page, status));
    }

    fn pages_requested(&self) -> Vec<u32> {
        self.calls.borrow().iter().map(|(_, options)| options.page).collect()
    }
}

impl KeywordSearchProvider for ScriptedProvider {
    fn keyword_search(&self, keyword: &str, options: &SearchOptions, done: SearchCallback) {
        self.calls.borrow_mut().push((keyword.to_owned(), options.clone()));
        let (page, status) =
            self.pages.borrow_mut().pop_front().unwrap_or((Vec::new(), SearchStatus::ZeroResult));
        done(page, status);
    }
}

fn raw(name: &str, x: &str, y: &str) -> RawPlace {
    RawPlace {
        place_name: name.to_owned(),
        category_group_name: "Cafe".to_owned(),
        road_address_name: format!("{name} road"),
        x: x.to_owned(),
        y: y.to_owned(),
        ..RawPlace::default()
    }
}

fn full_page(prefix: &str) -> Vec<RawPlace> {
    (0..15)
        .map(|i| raw(&format!("{prefix} {i}"), &format!("127.00{i:02}"), "37.5"))
        .collect()
}

#[fixture]
fn map() -> SimulatedMap {
    SimulatedMap::new(LatLng::new(37.5, 127.0), 3, Size::new(800.0, 600.0))
}

#[fixture]
fn search() -> AreaSearch {
    AreaSearch::new(SearchConfig::default())
}

#[rstest]
#[tokio::test]
async fn first_page_is_scoped_to_the_viewport(map: SimulatedMap, mut search: AreaSearch) {
    let provider = ScriptedProvider::with_pages(vec![vec![raw("Cafe A", "127.0", "37.5")]]);

    let update = search.search("cafe", &map, &provider).await;

    assert_eq!(update, SearchUpdate::Results(1));
    let calls = provider.calls.borrow();
    assert_eq!(calls.len(), 1);
    let (keyword, options) = &calls[0];
    assert_eq!(keyword, "cafe");
    assert_eq!(Some(options.rect), map.bounds());
    assert_eq!(options.bias, Some(LatLng::new(37.5, 127.0)));
    assert_eq!(options.sort, SortBy::Distance);
    assert_eq!((options.page, options.size), (1, 15));
}

#[rstest]
#[tokio::test]
async fn full_first_page_fetches_a_second_and_dedupes(map: SimulatedMap, mut search: AreaSearch) {
    let mut page1 = full_page("Spot");
    page1[3] = RawPlace { phone: "page-1".to_owned(), ..raw("Cafe A", "127.0", "37.5") };
    let page2 = vec![
        RawPlace { phone: "page-2".to_owned(), ..raw("Cafe A", "127.0", "37.5") },
        raw("Cafe Z", "127.1", "37.6"),
    ];
    let provider = ScriptedProvider::with_pages(vec![page1, page2]);

    let update = search.search("cafe", &map, &provider).await;

    assert_eq!(provider.pages_requested(), vec![1, 2]);
    assert_eq!(update, SearchUpdate::Results(15));
    let cafes: Vec<_> = search.results().iter().filter(|r| r.name == "Cafe A").collect();
    assert_eq!(cafes.len(), 1);
    assert_eq!(cafes[0].phone, "page-1");
    assert_eq!(cafes[0].label, "D");
    // 16 unique records, truncated to the configured maximum.
    assert!(search.results().iter().all(|r| r.name != "Cafe Z"));
    assert_eq!(search.results()[14].label, "O");
}

#[rstest]
#[tokio::test]
async fn short_first_page_is_not_followed_up(map: SimulatedMap, mut search: AreaSearch) {
    let page: Vec<_> = full_page("Spot").into_iter().take(14).collect();
    let provider = ScriptedProvider::with_pages(vec![page]);

    search.search("cafe", &map, &provider).await;

    assert_eq!(provider.pages_requested(), vec![1]);
    assert_eq!(search.results().len(), 14);
}

#[rstest]
#[tokio::test]
async fn failed_second_page_keeps_the_first(map: SimulatedMap, mut search: AreaSearch) {
    let provider = ScriptedProvider::with_pages(vec![full_page("Spot")]);
    provider.push(vec![raw("Never", "127.2", "37.2")], SearchStatus::Error);

    let update = search.search("cafe", &map, &provider).await;

    assert_eq!(update, SearchUpdate::Results(15));
    assert!(search.results().iter().all(|r| r.name != "Never"));
}

#[rstest]
#[tokio::test]
async fn empty_response_keeps_keyword_and_center(map: SimulatedMap, mut search: AreaSearch) {
    let provider = ScriptedProvider::default();

    let update = search.search("nothing here", &map, &provider).await;

    assert_eq!(update, SearchUpdate::NoResults);
    assert_eq!(search.phase(), SearchPhase::NoResults);
    assert_eq!(search.keyword(), "nothing here");
    assert_eq!(search.last_searched_center(), Some(LatLng::new(37.5, 127.0)));
    assert!(search.results().is_empty());
}

#[rstest]
#[tokio::test]
async fn blank_keyword_or_unready_map_skips(map: SimulatedMap, mut search: AreaSearch) {
    let provider = ScriptedProvider::default();

    assert_eq!(search.search("   ", &map, &provider).await, SearchUpdate::Skipped);
    let unready = SimulatedMap::unready(Size::new(800.0, 600.0));
    assert_eq!(search.search("cafe", &unready, &provider).await, SearchUpdate::Skipped);

    assert!(provider.calls.borrow().is_empty());
    assert_eq!(search.phase(), SearchPhase::Idle);
}

#[rstest]
#[case::just_beyond(37.5021, true)]
#[case::within(37.5010, false)]
#[tokio::test]
async fn drift_beyond_threshold_offers_research(
    map: SimulatedMap,
    mut search: AreaSearch,
    #[case] lat: f64,
    #[case] expected: bool,
) {
    let mut map = map;
    let provider = ScriptedProvider::with_pages(vec![vec![raw("Cafe A", "127.0", "37.5")]]);
    search.search("cafe", &map, &provider).await;

    map.pan_to(LatLng::new(lat, 127.0));

    assert_eq!(search.note_map_moved(&map), expected);
    assert_eq!(search.research_available(), expected);
    let phase = if expected { SearchPhase::StaleResults } else { SearchPhase::Results };
    assert_eq!(search.phase(), phase);
}

#[rstest]
fn moves_without_keyword_are_ignored(map: SimulatedMap, mut search: AreaSearch) {
    assert!(!search.note_map_moved(&map));
    assert_eq!(search.phase(), SearchPhase::Idle);
}

#[rstest]
fn typed_keyword_without_a_search_offers_research_on_any_move(
    map: SimulatedMap,
    mut search: AreaSearch,
) {
    search.set_keyword("cafe");
    assert!(search.note_map_moved(&map));
}

#[rstest]
#[tokio::test]
async fn re_search_clears_the_flag_once_it_completes(map: SimulatedMap, mut search: AreaSearch) {
    let mut map = map;
    let provider = ScriptedProvider::with_pages(vec![
        vec![raw("Cafe A", "127.0", "37.5")],
        vec![raw("Cafe B", "127.01", "37.51")],
    ]);
    search.search("cafe", &map, &provider).await;
    map.pan_to(LatLng::new(37.51, 127.01));
    assert!(search.note_map_moved(&map));

    let keyword = search.keyword().to_owned();
    let request = search.begin(&keyword, &map).expect("started");
    assert!(search.research_available(), "flag stays up while the search is in flight");
    assert_eq!(search.phase(), SearchPhase::Searching);
    let outcome = request.run(&provider).await;
    assert_eq!(search.finish(outcome), SearchUpdate::Results(1));

    assert!(!search.research_available());
    assert_eq!(search.last_searched_center(), Some(LatLng::new(37.51, 127.01)));
    assert_eq!(search.results()[0].name, "Cafe B");
    assert_eq!(provider.calls.borrow()[1].0, "cafe");

    map.pan_to(LatLng::new(37.5, 127.0));
    assert!(search.note_map_moved(&map));
    let provider = ScriptedProvider::with_pages(vec![vec![raw("Cafe C", "127.0", "37.5")]]);
    assert_eq!(search.re_search(&map, &provider).await, SearchUpdate::Results(1));
    assert!(!search.research_available());
}

#[rstest]
#[tokio::test]
async fn later_search_wins_over_a_late_earlier_answer(map: SimulatedMap, mut search: AreaSearch) {
    let first = search.begin("coffee", &map).expect("first");
    let second = search.begin("tea", &map).expect("second");
    assert!(second.generation() > first.generation());

    let tea = ScriptedProvider::with_pages(vec![vec![raw("Tea House", "127.0", "37.5")]]);
    let coffee = ScriptedProvider::with_pages(vec![vec![raw("Coffee Bar", "127.0", "37.5")]]);
    let second_outcome = second.run(&tea).await;
    let first_outcome = first.run(&coffee).await;

    assert_eq!(search.finish(second_outcome), SearchUpdate::Results(1));
    assert_eq!(search.finish(first_outcome), SearchUpdate::Superseded);
    assert_eq!(search.keyword(), "tea");
    assert_eq!(search.results()[0].name, "Tea House");
}

#[rstest]
#[tokio::test]
async fn close_resets_and_drops_in_flight_answers(map: SimulatedMap, mut search: AreaSearch) {
    let provider = ScriptedProvider::with_pages(vec![
        vec![raw("Cafe A", "127.0", "37.5")],
        vec![raw("Cafe B", "127.0", "37.5")],
    ]);
    search.search("cafe", &map, &provider).await;
    let pending = search.begin("cafe", &map).expect("started");

    search.close();
    assert_eq!(search.phase(), SearchPhase::Idle);
    assert_eq!(search.keyword(), "");
    assert_eq!(search.last_searched_center(), None);
    assert!(search.results().is_empty());

    let outcome = pending.run(&provider).await;
    assert_eq!(search.finish(outcome), SearchUpdate::Superseded);
    assert!(search.results().is_empty());
    assert!(!search.note_map_moved(&map));
}

#[rstest]
#[tokio::test]
async fn selecting_a_result_clears_the_list_but_keeps_the_keyword(
    map: SimulatedMap,
    mut search: AreaSearch,
) {
    let provider = ScriptedProvider::with_pages(vec![vec![
        raw("Cafe A", "127.0", "37.5"),
        raw("Cafe B", "127.01", "37.51"),
    ]]);
    search.search("cafe", &map, &provider).await;

    let chosen = search.select_result(1).expect("result");
    assert_eq!(chosen.name, "Cafe B");
    assert_eq!(chosen.label, "B");
    assert_eq!(chosen.address, "Cafe B road");
    assert!(search.results().is_empty());
    assert_eq!(search.keyword(), "cafe");
    assert_eq!(search.select_result(0), None);

    let mut map = map;
    map.pan_to(LatLng::new(37.51, 127.01));
    assert!(search.note_map_moved(&map));
}

#[rstest]
#[tokio::test]
async fn dismissing_research_returns_to_the_results(map: SimulatedMap, mut search: AreaSearch) {
    let mut map = map;
    let provider = ScriptedProvider::with_pages(vec![vec![raw("Cafe A", "127.0", "37.5")]]);
    search.search("cafe", &map, &provider).await;
    map.pan_to(LatLng::new(37.6, 127.0));
    search.note_map_moved(&map);

    search.dismiss_research();

    assert!(!search.research_available());
    assert_eq!(search.phase(), SearchPhase::Results);
}

#[rstest]
#[tokio::test]
async fn invalid_coordinates_are_dropped_before_labelling(map: SimulatedMap, mut search: AreaSearch) {
    let provider = ScriptedProvider::with_pages(vec![vec![
        raw("Broken", "", "37.5"),
        raw("Cafe A", "127.0", "37.5"),
    ]]);

    search.search("cafe", &map, &provider).await;

    assert_eq!(search.results().len(), 1);
    assert_eq!(search.results()[0].label, "A");
    assert_eq!(search.results()[0].position, LatLng::new(37.5, 127.0));
}

#[rstest]
#[tokio::test]
async fn long_result_lists_get_multi_letter_labels(map: SimulatedMap) {
    let config = SearchConfig { page_size: 30, max_results: 30, ..SearchConfig::default() };
    let mut search = AreaSearch::new(config);
    let page: Vec<_> =
        (0..28).map(|i| raw(&format!("Spot {i}"), &format!("127.{i:03}"), "37.5")).collect();
    let provider = ScriptedProvider::with_pages(vec![page]);

    search.search("spot", &map, &provider).await;

    let labels: Vec<_> = search.results().iter().map(|r| r.label.as_str()).collect();
    assert_eq!(&labels[24..], &["Y", "Z", "AA", "AB"]);
}
