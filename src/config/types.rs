//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::paths;
use crate::logging::{LogFileSpec, DEFAULT_BACKUPS, DEFAULT_MAX_BYTES};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Moves, skips and errors (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for the organizer binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Console and file verbosity
    pub log_level: LogLevel,
    /// Log file; None logs to the console only
    pub log_file: Option<PathBuf>,
    /// Rotate the log file once it would exceed this size (0 = never)
    pub log_max_bytes: u64,
    /// Rotated files to keep
    pub log_backups: usize,
    /// If true, report moves but do not modify the filesystem
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Normal,
            log_file: Some(paths::default_log_path()),
            log_max_bytes: DEFAULT_MAX_BYTES,
            log_backups: DEFAULT_BACKUPS,
            dry_run: false,
        }
    }
}

impl Config {
    /// Log file settings, if file logging is enabled.
    pub fn log_file_spec(&self) -> Option<LogFileSpec> {
        self.log_file.as_ref().map(|path| LogFileSpec {
            path: path.clone(),
            max_bytes: self.log_max_bytes,
            backups: self.log_backups,
        })
    }
}
