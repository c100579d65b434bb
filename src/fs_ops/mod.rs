//! Filesystem operations used by the organizer.
//!
//! The organizer performs all I/O through the `Filesystem` trait so a run can be
//! driven against the real disk (`LocalFs`) or a scripted double in tests.

mod helpers;
mod local;

pub use helpers::{describe_io_error, io_error_with_help};
pub use local::{LocalEntries, LocalFs};

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// One immediate entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirItem {
    pub name: OsString,
    pub path: PathBuf,
    /// Regular file, judged without following symlinks.
    pub is_file: bool,
}

impl DirItem {
    pub fn new(name: impl Into<OsString>, path: impl Into<PathBuf>, is_file: bool) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_file,
        }
    }

    /// Lossy UTF-8 rendering of the name, for classification and messages.
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}

pub trait Filesystem {
    /// Owned listing handle; dropping it releases the underlying directory stream.
    type Entries: Iterator<Item = io::Result<DirItem>>;

    fn read_dir(&self, dir: &Path) -> io::Result<Self::Entries>;

    /// Create `dir` and missing parents; succeed if it already exists.
    fn create_dir_all(&self, dir: &Path) -> io::Result<()>;

    /// True if any entry (including a dangling symlink) exists at `path`.
    fn entry_exists(&self, path: &Path) -> io::Result<bool>;

    /// Move a file to `dest`. `dest` is known to be free when this is called.
    fn move_file(&self, src: &Path, dest: &Path) -> io::Result<()>;
}
