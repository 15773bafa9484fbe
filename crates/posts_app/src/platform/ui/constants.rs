use std::time::Duration;

pub const TITLE: &str = "My Posts";
pub const FILTER_LABEL: &str = "Filter: ";
pub const FILTER_PLACEHOLDER: &str = "Filter posts";
pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No posts to show.";
pub const LOAD_NEXT_LABEL: &str = "[Ctrl+N] Load next page";
pub const BACK_TO_TOP_LABEL: &str = "[Home] Back to top";
pub const RETRY_LABEL: &str = "[Ctrl+R] Retry";
pub const QUIT_LABEL: &str = "[Esc] Quit";

/// Body lines are indented under the post heading.
pub const BODY_INDENT: &str = "    ";
/// Rows scrolled per mouse wheel step.
pub const WHEEL_STEP: isize = 3;
/// Poll interval of the event loop; an idle interval becomes a tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(75);
