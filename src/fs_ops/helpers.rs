//! I/O helper utilities.
//!
//! Turns a bare io::Error into a message carrying the operation, the path and an
//! actionable hint. Used for the detail text of organizer error events.
//!
//! Usage:
//!   let detail = describe_io_error("move file", &dest, &e);
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create dir", dir))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

fn hint_for(e: &io::Error) -> Option<&'static str> {
    let hint = match e.kind() {
        io::ErrorKind::PermissionDenied => "permission denied; check ownership and write permissions.",
        io::ErrorKind::NotFound => "path not found; it may have been removed while organizing.",
        io::ErrorKind::AlreadyExists => "already exists; remove the target or rename the file.",
        io::ErrorKind::StorageFull => "insufficient space on device.",
        io::ErrorKind::ReadOnlyFilesystem => "read-only filesystem; cannot write here.",
        io::ErrorKind::CrossesDevices => "cross-filesystem; atomic rename not possible.",
        io::ErrorKind::ResourceBusy => "resource busy; ensure no other process holds the file.",
        io::ErrorKind::InvalidFilename => "filename or path too long or invalid.",
        io::ErrorKind::NotADirectory => "a path component is not a directory.",
        io::ErrorKind::IsADirectory => "target is a directory.",
        _ => return None,
    };
    Some(hint)
}

/// Human-friendly message with op/path, a hint when one applies, and the OS code.
pub fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    if let Some(hint) = hint_for(e) {
        msg.push_str(" - ");
        msg.push_str(hint);
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {}]", code));
    }
    msg
}

/// Adapter for anyhow::Result code: `.map_err(io_error_with_help(op, path))`.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(describe_io_error(op, path, &e))
}
