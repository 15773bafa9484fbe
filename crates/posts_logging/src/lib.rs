#![deny(missing_docs)]
//! Shared logging utilities for the posts workspace.
//!
//! This crate provides the `posts_*` logging macros used by the engine and
//! the app, plus a minimal test initializer for the global logger. The
//! macros forward to the `log` facade so callers never need a direct `log`
//! dependency of their own beyond what the macro expansion requires.

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! posts_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: "posts", $($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! posts_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: "posts", $($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! posts_info {
    ($($arg:tt)*) => {{
        log::info!(target: "posts", $($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! posts_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: "posts", $($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! posts_error {
    ($($arg:tt)*) => {{
        log::error!(target: "posts", $($arg)*);
    }};
}

/// Returns the level used by [`initialize_for_tests`].
///
/// Debug builds log at debug level, release builds at info.
pub fn test_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        test_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
