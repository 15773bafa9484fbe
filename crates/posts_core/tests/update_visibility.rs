use std::sync::Once;

use posts_core::{
    update, AppState, Effect, Msg, ObservedItem, PageRequest, PaginationConfig, Post,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(posts_logging::initialize_for_tests);
}

fn posts(ids: std::ops::RangeInclusive<u64>) -> Vec<Post> {
    ids.map(|id| Post::new(id, format!("title {id}"), format!("body {id}")))
        .collect()
}

fn loaded(page: u32, batch: Vec<Post>) -> Msg {
    Msg::PageLoaded {
        page,
        posts: batch,
        total_count: None,
    }
}

fn observed(state: &AppState) -> Option<ObservedItem> {
    state.view().observed
}

fn intersect(state: AppState, is_intersecting: bool) -> (AppState, Vec<Effect>) {
    let watcher = observed(&state).expect("watcher attached").watcher;
    update(
        state,
        Msg::Intersection {
            watcher,
            is_intersecting,
        },
    )
}

fn ten_posts_in_pages_of_five() -> AppState {
    let (state, _) = AppState::init(PaginationConfig {
        page_size: 5,
        total_items: Some(10),
    });
    let (state, _) = update(state, loaded(1, posts(1..=5)));
    state
}

#[test]
fn last_post_becoming_visible_loads_next_page() {
    init_logging();
    let state = ten_posts_in_pages_of_five();
    assert_eq!(observed(&state).unwrap().post_id, 5);
    let view = state.view();
    assert!(view.posts.last().unwrap().is_last);
    assert_eq!(view.posts.iter().filter(|p| p.is_last).count(), 1);

    let (state, effects) = intersect(state, true);
    assert_eq!(
        effects,
        vec![Effect::FetchPage(PageRequest {
            page: 2,
            page_size: 5
        })]
    );

    let (state, _) = update(state, loaded(2, posts(6..=10)));
    let view = state.view();
    assert_eq!(
        view.posts.iter().map(|p| p.id).collect::<Vec<_>>(),
        (1..=10).collect::<Vec<_>>()
    );
    assert!(!view.has_next_page);
    assert_eq!(view.observed.unwrap().post_id, 10);

    // The last page is in: a new watcher exists but it no longer loads.
    let (_, effects) = intersect(state, true);
    assert!(effects.is_empty());
}

#[test]
fn repeated_reports_without_transition_trigger_once() {
    init_logging();
    let state = ten_posts_in_pages_of_five();
    let watcher = observed(&state).unwrap().watcher;

    let (state, first) = intersect(state, true);
    assert_eq!(first.len(), 1);
    let (state, second) = update(
        state,
        Msg::Intersection {
            watcher,
            is_intersecting: true,
        },
    );
    assert!(second.is_empty());
    let (_, leaving) = update(
        state,
        Msg::Intersection {
            watcher,
            is_intersecting: false,
        },
    );
    assert!(leaving.is_empty());
}

#[test]
fn watcher_is_not_rebound_while_fetch_is_outstanding() {
    init_logging();
    let state = ten_posts_in_pages_of_five();
    let before = observed(&state).unwrap();

    let (state, _) = intersect(state, true);
    assert!(state.query().is_fetching_next_page());
    let (state, _) = update(state, Msg::FilterChanged("title 3".to_string()));
    assert_eq!(observed(&state), Some(before));

    // Once the page lands the watcher moves to the filtered list's last post.
    let (state, _) = update(state, loaded(2, posts(6..=10)));
    let after = observed(&state).unwrap();
    assert_eq!(after.post_id, 3);
    assert_ne!(after.watcher, before.watcher);
}

#[test]
fn report_from_replaced_watcher_is_ignored() {
    init_logging();
    let state = ten_posts_in_pages_of_five();
    let old = observed(&state).unwrap().watcher;
    let (state, _) = update(state, Msg::FilterChanged("body 2".to_string()));
    assert_eq!(observed(&state).unwrap().post_id, 2);

    let (_, effects) = update(
        state,
        Msg::Intersection {
            watcher: old,
            is_intersecting: true,
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn single_item_list_still_gets_watcher() {
    init_logging();
    let (state, _) = AppState::init(PaginationConfig {
        page_size: 5,
        total_items: Some(10),
    });
    let (state, _) = update(state, loaded(1, posts(1..=1)));
    let view = state.view();
    assert_eq!(view.posts.len(), 1);
    assert!(view.posts[0].is_last);
    assert_eq!(view.observed.unwrap().post_id, 1);
}

#[test]
fn manual_load_and_visibility_share_the_in_flight_guard() {
    init_logging();
    let state = ten_posts_in_pages_of_five();
    let (state, effects) = update(state, Msg::LoadMoreClicked);
    assert_eq!(effects.len(), 1);
    let (_, effects) = intersect(state, true);
    assert!(effects.is_empty());
}

#[test]
fn failed_fetch_rebinds_watcher_on_same_post() {
    init_logging();
    let state = ten_posts_in_pages_of_five();
    let before = observed(&state).unwrap();

    let (state, _) = update(state, Msg::LoadMoreClicked);
    assert_eq!(observed(&state), Some(before));

    let (state, _) = update(
        state,
        Msg::PageFailed {
            page: 2,
            message: "network error".to_string(),
        },
    );
    let after = observed(&state).unwrap();
    assert_eq!(after.post_id, 5);
    assert_ne!(after.watcher, before.watcher);
}

#[test]
fn last_page_rebinds_watcher_without_next_page() {
    init_logging();
    let (state, _) = AppState::init(PaginationConfig {
        page_size: 5,
        total_items: Some(10),
    });
    let (state, _) = update(state, loaded(1, posts(1..=5)));
    // Only post 5 matches, so the last item stays the same across pages.
    let (state, _) = update(state, Msg::FilterChanged("title 5".to_string()));
    let before = observed(&state).unwrap();
    assert_eq!(before.post_id, 5);

    let (state, effects) = intersect(state, true);
    assert_eq!(effects.len(), 1);
    let (state, _) = update(state, loaded(2, posts(6..=10)));
    assert!(!state.query().has_next_page());

    let after = observed(&state).unwrap();
    assert_eq!(after.post_id, 5);
    assert_ne!(after.watcher, before.watcher);
    let (_, effects) = intersect(state, true);
    assert!(effects.is_empty());
}
