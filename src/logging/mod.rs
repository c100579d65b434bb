//! Tracing initialization.
//! Builds a subscriber with EnvFilter, supports compact or JSON formats, and optional
//! rotating file logging.
//!
//! Behavior:
//! - Log level is driven by LogLevel (no RUST_LOG override here).
//! - JSON/non-JSON console formatting is selected via the `json` flag.
//! - If a log file is provided and passes safety checks, a non-blocking file layer
//!   is added on top of a size-rotated file.
//!
//! The returned WorkerGuard must be held until exit; dropping it flushes the file.

mod rotate;

pub use rotate::{backup_path, LogFileSpec, RotatingFile, DEFAULT_BACKUPS, DEFAULT_MAX_BYTES};

use anyhow::Result;
use chrono::Local;
use std::fmt as stdfmt;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{path_has_symlink_ancestor, LogLevel};
use crate::output as out;

/// Local timestamp, `YYYY-MM-DD HH:MM:SS`.
pub struct LocalHumanTime;

impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

#[inline]
pub fn to_level_filter(lvl: &LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::INFO,
        LogLevel::Info => LevelFilter::DEBUG,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

#[inline]
fn env_filter_from_level(level_filter: LevelFilter) -> EnvFilter {
    EnvFilter::new(level_filter.to_string().to_ascii_lowercase())
}

/// Open the rotating file and wrap it in a non-blocking writer.
/// Refuses (returning None with a console warning) if any ancestor is a symlink
/// or the file cannot be opened.
fn maybe_open_non_blocking_writer(spec: &LogFileSpec) -> Option<(NonBlocking, WorkerGuard)> {
    let path = &spec.path;
    match path_has_symlink_ancestor(path) {
        Ok(true) => {
            out::print_warn(&format!(
                "Refusing to enable file logging: ancestor of {} is a symlink.",
                path.display()
            ));
            return None;
        }
        Err(e) => {
            out::print_warn(&format!(
                "Error checking log path {} for symlinks: {}",
                path.display(),
                e
            ));
            return None;
        }
        Ok(false) => {}
    }

    match RotatingFile::open(spec.clone()) {
        Ok(file) => Some(tracing_appender::non_blocking(file)),
        Err(e) => {
            out::print_warn(&format!(
                "Failed to open log file {}: {}",
                path.display(),
                e
            ));
            None
        }
    }
}

/// Initialize global tracing. Returns the file appender's WorkerGuard when file
/// logging is active.
pub fn init_tracing(
    lvl: &LogLevel,
    log_file: Option<&LogFileSpec>,
    json: bool,
) -> Result<Option<WorkerGuard>> {
    let env_filter = env_filter_from_level(to_level_filter(lvl));

    let file = log_file.and_then(|spec| {
        let opened = maybe_open_non_blocking_writer(spec);
        if opened.is_none() {
            out::print_warn(&format!(
                "File logging to '{}' is disabled for this run; logs go to the console only.",
                spec.path.display()
            ));
        }
        opened
    });
    let (file_writer, guard) = match file {
        Some((w, g)) => (Some(w), Some(g)),
        None => (None, None),
    };

    // Layers are Option<_> so every branch yields the same subscriber type.
    if json {
        let console = tsfmt::layer()
            .event_format(tsfmt::format().json())
            .with_timer(LocalHumanTime)
            .with_target(true);
        let file_layer = file_writer.map(|w| {
            tsfmt::layer()
                .event_format(tsfmt::format().json())
                .with_timer(LocalHumanTime)
                .with_target(true)
                .with_ansi(false)
                .with_writer(w)
        });
        registry()
            .with(env_filter)
            .with(console)
            .with(file_layer)
            .try_init()?;
    } else {
        let console = tsfmt::layer()
            .without_time()
            .with_target(false)
            .compact();
        let file_layer = file_writer.map(|w| {
            tsfmt::layer()
                .with_timer(LocalHumanTime)
                .with_target(false)
                .with_ansi(false)
                .compact()
                .with_writer(w)
        });
        registry()
            .with(env_filter)
            .with(console)
            .with(file_layer)
            .try_init()?;
    }
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_mapping() {
        assert_eq!(to_level_filter(&LogLevel::Quiet), LevelFilter::ERROR);
        assert_eq!(to_level_filter(&LogLevel::Normal), LevelFilter::INFO);
        assert_eq!(to_level_filter(&LogLevel::Debug), LevelFilter::TRACE);
    }

    #[test]
    fn env_filter_accepts_level_names() {
        let f = env_filter_from_level(LevelFilter::WARN);
        assert_eq!(f.max_level_hint(), Some(LevelFilter::WARN));
    }
}
