//! Platform logging initialization for posts_app.
//!
//! Writes logs to `./posts.log` in the current working directory. The
//! terminal belongs to the UI, so nothing is logged to stdout.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

const LOG_FILENAME: &str = "./posts.log";

/// Initialize the file logger. Failure to create the file disables logging.
pub fn initialize(level: LevelFilter) {
    let log_path = PathBuf::from(LOG_FILENAME);
    match File::create(&log_path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, build_config(), file);
        }
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
