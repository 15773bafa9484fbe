//! Posts core: pure pagination state machine and view-model helpers.
mod effect;
mod filter;
mod msg;
mod post;
mod query;
mod state;
mod update;
mod view_model;
mod visibility;

pub use effect::Effect;
pub use filter::{filter_posts, matches_filter};
pub use msg::Msg;
pub use post::{Page, PageIndex, Post, PostId};
pub use query::{PageRequest, PaginationConfig, QueryState, QueryStatus};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, ObservedItem, PostRowView};
pub use visibility::{LoaderDeps, VisibilityLoader, Watcher, WatcherId};
