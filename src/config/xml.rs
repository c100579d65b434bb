//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a commented template on first run when the default file is missing.
//!
//! Notes:
//! - Unknown XML fields are rejected to surface typos early.
//! - An explicitly named config (`--config` or FILE_ORGANIZER_CONFIG) must exist.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use super::CONFIG_ENV;
use crate::fs_ops::io_error_with_help;
use crate::logging::{DEFAULT_BACKUPS, DEFAULT_MAX_BYTES};
use crate::platform::write_config_secure_new;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    log_max_bytes: Option<String>,
    log_backups: Option<String>,
}

/// Outcome of locating and reading the config file.
#[derive(Debug, Clone)]
pub enum LoadResult {
    /// Parsed from an existing file.
    Loaded { config: Config, path: PathBuf },
    /// No file existed at the default location; a template was written there.
    CreatedTemplate { config: Config, path: PathBuf },
    /// No config location could be determined or the template could not be written.
    Defaults(Config),
}

impl LoadResult {
    pub fn config(&self) -> &Config {
        match self {
            LoadResult::Loaded { config, .. }
            | LoadResult::CreatedTemplate { config, .. }
            | LoadResult::Defaults(config) => config,
        }
    }

    pub fn into_config(self) -> Config {
        match self {
            LoadResult::Loaded { config, .. }
            | LoadResult::CreatedTemplate { config, .. }
            | LoadResult::Defaults(config) => config,
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_field<T: FromStr>(name: &str, raw: Option<&str>) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match non_empty(raw) {
        None => Ok(None),
        Some(s) => s
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("invalid <{name}> value '{s}': {e}")),
    }
}

// Map XmlConfig -> Config; missing or empty fields keep their defaults.
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();
    if let Some(level) = parse_field::<LogLevel>("log_level", parsed.log_level.as_deref())? {
        cfg.log_level = level;
    }
    if let Some(file) = non_empty(parsed.log_file.as_deref()) {
        cfg.log_file = Some(PathBuf::from(file));
    }
    if let Some(max) = parse_field::<u64>("log_max_bytes", parsed.log_max_bytes.as_deref())? {
        cfg.log_max_bytes = max;
    }
    if let Some(n) = parse_field::<usize>("log_backups", parsed.log_backups.as_deref())? {
        cfg.log_backups = n;
    }
    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("config xml '{}'", path.display()))
}

/// Create the default template config file and its parent directory.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        anyhow::bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error_with_help("create config directory", parent))?;
    }

    let content = format!(
        "<!--\n  file_organizer configuration (XML)\n\n    log_level      -> quiet | normal | info | debug\n    log_file       -> path to the log file (empty = default location)\n    log_max_bytes  -> rotate the log file past this size (0 = never)\n    log_backups    -> rotated log files to keep\n\n  CLI flags override these values.\n-->\n<config>\n  <log_level>normal</log_level>\n  <log_file>{}</log_file>\n  <log_max_bytes>{}</log_max_bytes>\n  <log_backups>{}</log_backups>\n</config>\n",
        default_log_path().display(),
        DEFAULT_MAX_BYTES,
        DEFAULT_BACKUPS
    );
    write_config_secure_new(path, content.as_bytes())
        .map_err(io_error_with_help("write template config", path))?;
    debug!("Created template config at {}", path.display());
    Ok(())
}

/// Locate and load the config.
///
/// Order: `explicit` (from `--config`), then FILE_ORGANIZER_CONFIG, then the
/// per-user default. Only the default location gets a template when missing.
pub fn load_or_init(explicit: Option<&Path>) -> Result<LoadResult> {
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
    if let Some(path) = named {
        let config = load_config_from_xml_path(&path)?;
        return Ok(LoadResult::Loaded { config, path });
    }

    let Some(path) = default_config_path() else {
        return Ok(LoadResult::Defaults(Config::default()));
    };
    if path.exists() {
        let config = load_config_from_xml_path(&path)?;
        return Ok(LoadResult::Loaded { config, path });
    }
    match create_template_config(&path) {
        Ok(()) => Ok(LoadResult::CreatedTemplate {
            config: Config::default(),
            path,
        }),
        Err(e) => {
            debug!("Template config not written: {e:#}");
            Ok(LoadResult::Defaults(Config::default()))
        }
    }
}
