use crate::{AppState, Effect, Msg, PageRequest};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every call ends by offering the last filtered post to the visibility
/// loader, the same way a render would re-run a ref callback.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilterChanged(text) => {
            state.set_filter_text(text);
            Vec::new()
        }
        Msg::LoadMoreClicked => fetch(state.request_next_page()),
        Msg::RetryClicked => fetch(state.retry()),
        Msg::BackToTopClicked => vec![Effect::ScrollToTop],
        Msg::Intersection {
            watcher,
            is_intersecting,
        } => {
            if state.on_intersection(watcher, is_intersecting) {
                fetch(state.request_next_page())
            } else {
                Vec::new()
            }
        }
        Msg::PageLoaded {
            page,
            posts,
            total_count,
        } => {
            state.append_page(page, posts, total_count);
            Vec::new()
        }
        Msg::PageFailed { page, message } => {
            state.set_error(page, message);
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    state.bind_last_item();
    (state, effects)
}

fn fetch(request: Option<PageRequest>) -> Vec<Effect> {
    request.map(Effect::FetchPage).into_iter().collect()
}
