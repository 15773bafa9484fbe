//! Terminal platform: event loop, effect execution and drawing.
mod app;
mod effects;
mod logging;
mod terminal;
mod ui;

pub use app::run_app;
