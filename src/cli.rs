//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Without PATH the binary prompts for the folder interactively.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::{Path, PathBuf};

use crate::config::types::{Config, LogLevel};

/// Sort the files of a folder into category subfolders by extension.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Sort files into category subfolders by extension")]
pub struct Args {
    /// Folder to organize; prompted for when omitted.
    #[arg(value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub path: Option<PathBuf>,

    /// Config file to use instead of FILE_ORGANIZER_CONFIG or the default location.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_parser = parse_log_level, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<LogLevel>,

    /// Write the log to this file instead of the configured one.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Log to the console only.
    #[arg(long, conflicts_with = "log_file")]
    pub no_log_file: bool,

    /// Dry-run: report moves but do not modify the filesystem.
    #[arg(long, help = "Show what would be moved, but do not modify files/directories")]
    pub dry_run: bool,

    /// Emit logs in structured JSON.
    #[arg(long)]
    pub json: bool,

    /// Print the config file location that would be used, then exit.
    #[arg(long)]
    pub print_config: bool,
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    s.parse()
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.clone()
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(file) = &self.log_file {
            cfg.log_file = Some(file.clone());
        }
        if self.no_log_file {
            cfg.log_file = None;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }

    /// PATH argument, cleaned of shell quoting leftovers.
    pub fn source(&self) -> Option<PathBuf> {
        self.path.as_deref().map(sanitize_path)
    }
}

/// Clean a user-supplied folder path.
///
/// Trims surrounding whitespace and quotes (left behind by copy-pasting a quoted
/// path into the prompt or by PowerShell/CMD quoting) and one trailing separator.
pub fn sanitize_str(s: &str) -> PathBuf {
    let trimmed = s.trim();
    let mut inner = if trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
    {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.trim_matches(|c| c == '\'' || c == '"').to_string()
    };

    // keep the separator of a drive root like `C:\`
    if (inner.ends_with('\\') || inner.ends_with('/'))
        && inner.len() > 1
        && !inner[..inner.len() - 1].ends_with(':')
    {
        inner.pop();
    }
    PathBuf::from(inner)
}

/// Like `sanitize_str`, but non-UTF-8 paths are returned untouched.
pub fn sanitize_path(p: &Path) -> PathBuf {
    match p.to_str() {
        Some(s) => sanitize_str(s),
        None => p.to_path_buf(),
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_quotes_and_whitespace() {
        assert_eq!(sanitize_str("  /tmp/in  "), PathBuf::from("/tmp/in"));
        assert_eq!(sanitize_str("\"/tmp/my files\""), PathBuf::from("/tmp/my files"));
        assert_eq!(sanitize_str("'/tmp/in/'"), PathBuf::from("/tmp/in"));
        assert_eq!(sanitize_str("/"), PathBuf::from("/"));
        assert_eq!(sanitize_str("\""), PathBuf::from(""));
    }

    #[test]
    fn drive_root_keeps_its_separator() {
        assert_eq!(sanitize_str("C:\\"), PathBuf::from("C:\\"));
        assert_eq!(sanitize_str("\"D:/\""), PathBuf::from("D:/"));
        assert_eq!(sanitize_str("C:\\inbox\\"), PathBuf::from("C:\\inbox"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_survives_unchanged() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = Path::new(OsStr::from_bytes(b"/tmp/in\xffbox"));
        assert_eq!(sanitize_path(raw), raw.to_path_buf());
        let args = Args::parse_from([OsStr::new("file_organizer"), raw.as_os_str()]);
        assert_eq!(args.source().as_deref(), Some(raw));
    }

    #[test]
    fn overrides_win_over_config() {
        let args = Args::parse_from([
            "file_organizer",
            "/tmp/x",
            "--log-level",
            "quiet",
            "--log-file",
            "/tmp/o.log",
            "--dry-run",
        ]);
        let mut cfg = Config::default();
        args.apply_overrides(&mut cfg);
        assert_eq!(cfg.log_level, LogLevel::Quiet);
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/o.log")));
        assert!(cfg.dry_run);
        assert_eq!(args.source(), Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn debug_flag_beats_log_level() {
        let args = Args::parse_from(["file_organizer", "-d", "--log-level", "quiet"]);
        assert_eq!(args.effective_log_level(), Some(LogLevel::Debug));
        assert_eq!(args.source(), None);
    }

    #[test]
    fn no_log_file_disables_file_logging() {
        let args = Args::parse_from(["file_organizer", "--no-log-file"]);
        let mut cfg = Config::default();
        args.apply_overrides(&mut cfg);
        assert!(cfg.log_file.is_none());
    }

    #[test]
    fn invalid_level_is_rejected() {
        assert!(Args::try_parse_from(["file_organizer", "--log-level", "loud"]).is_err());
    }
}
