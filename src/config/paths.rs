//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log paths and detects symlinked ancestors.

use dirs::{config_dir, data_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{APP_DIR, CONFIG_ENV};

/// Config file location: `$FILE_ORGANIZER_CONFIG` if set, else the per-user default.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(p));
    }
    config_dir().map(|base| base.join(APP_DIR).join("config.xml"))
}

/// Default log file: `<data_dir>/file_organizer/organizer.log`, or
/// `logs/organizer.log` relative to the working directory when no data dir exists.
pub fn default_log_path() -> PathBuf {
    match data_dir() {
        Some(base) => base.join(APP_DIR).join("organizer.log"),
        None => PathBuf::from("logs").join("organizer.log"),
    }
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.as_os_str().is_empty() {
            break;
        }
        match fs::symlink_metadata(anc) {
            Ok(meta) if meta.file_type().is_symlink() => return Ok(true),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        p = anc.parent();
    }
    Ok(false)
}
