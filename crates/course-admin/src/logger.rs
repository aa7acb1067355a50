//! File-based logging using simplelog
//!
//! The terminal belongs to the UI, so logs go to a file:
//! - debug builds: `debug-<timestamp>.log` in the current directory
//! - release builds: the same file name in the cache directory
//!   (`~/.cache/course-admin/` on Linux)

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

fn log_file_path() -> PathBuf {
    let filename = format!("debug-{}.log", chrono::Local::now().format("%Y%m%d-%H%M%S"));

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        course_admin_config::cache_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

/// Level from `RUST_LOG`; debug when unset, info when unrecognised
fn level_from_env(value: Option<&str>) -> LevelFilter {
    match value.map(str::to_lowercase).as_deref() {
        None => LevelFilter::Debug,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        Some("off") => LevelFilter::Off,
        Some(_) => LevelFilter::Info,
    }
}

/// Initialize file-based logging, returning the log file path
pub fn init() -> Result<PathBuf> {
    let log_file = log_file_path();
    let level = level_from_env(std::env::var("RUST_LOG").ok().as_deref());

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c)
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("creating log file {}", log_file.display()))?;
    WriteLogger::init(level, config, file).context("initializing logger")?;

    Ok(log_file)
}
