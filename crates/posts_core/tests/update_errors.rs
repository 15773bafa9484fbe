use std::sync::Once;

use posts_core::{update, AppState, Effect, Msg, PageRequest, PaginationConfig, Post, QueryStatus};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(posts_logging::initialize_for_tests);
}

fn posts(ids: std::ops::RangeInclusive<u64>) -> Vec<Post> {
    ids.map(|id| Post::new(id, format!("title {id}"), format!("body {id}")))
        .collect()
}

fn failed_second_page() -> AppState {
    let (state, _) = AppState::init(PaginationConfig {
        page_size: 5,
        total_items: Some(20),
    });
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            page: 1,
            posts: posts(1..=5),
            total_count: None,
        },
    );
    let (state, _) = update(state, Msg::LoadMoreClicked);
    let (state, effects) = update(
        state,
        Msg::PageFailed {
            page: 2,
            message: "network error".to_string(),
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn failed_fetch_surfaces_error() {
    init_logging();
    let state = failed_second_page();
    let view = state.view();
    assert_eq!(view.status, QueryStatus::Error);
    assert_eq!(view.error.as_deref(), Some("network error"));
    assert!(!view.is_loading);
    assert_eq!(view.pages_loaded, 1);
}

#[test]
fn visibility_does_not_refetch_in_error_state() {
    init_logging();
    let state = failed_second_page();
    let watcher = state.view().observed.expect("watcher").watcher;

    let (state, effects) = update(
        state,
        Msg::Intersection {
            watcher,
            is_intersecting: true,
        },
    );
    assert!(effects.is_empty());
    let (_, effects) = update(state, Msg::LoadMoreClicked);
    assert!(effects.is_empty());
}

#[test]
fn retry_requests_the_failed_page() {
    init_logging();
    let state = failed_second_page();
    let (state, effects) = update(state, Msg::RetryClicked);
    assert_eq!(
        effects,
        vec![Effect::FetchPage(PageRequest {
            page: 2,
            page_size: 5
        })]
    );
    let view = state.view();
    assert_eq!(view.status, QueryStatus::Success);
    assert!(view.error.is_none());
    assert!(view.is_fetching_next_page);
}

#[test]
fn retry_outside_error_state_is_noop() {
    init_logging();
    let (state, _) = AppState::init(PaginationConfig::default());
    let (_, effects) = update(state, Msg::RetryClicked);
    assert!(effects.is_empty());
}

#[test]
fn first_page_failure_can_be_retried() {
    init_logging();
    let (state, _) = AppState::init(PaginationConfig::default());
    let (state, _) = update(
        state,
        Msg::PageFailed {
            page: 1,
            message: "http status 500".to_string(),
        },
    );
    assert_eq!(state.view().status, QueryStatus::Error);

    let (state, effects) = update(state, Msg::RetryClicked);
    assert_eq!(
        effects,
        vec![Effect::FetchPage(PageRequest {
            page: 1,
            page_size: 5
        })]
    );
    assert_eq!(state.view().status, QueryStatus::Loading);
}
