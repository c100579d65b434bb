//! `Filesystem` implementation backed by std::fs.
//! Moves try an atomic rename first; across filesystems they fall back to
//! copy + remove, like a shell `mv`.

use std::fs;
use std::io;
use std::path::Path;

use super::{DirItem, Filesystem};

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

/// Listing adapter over `fs::ReadDir`.
pub struct LocalEntries {
    inner: fs::ReadDir,
}

impl Iterator for LocalEntries {
    type Item = io::Result<DirItem>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next()?;
        Some(entry.and_then(|e| {
            // DirEntry::file_type does not traverse symlinks
            let is_file = e.file_type()?.is_file();
            Ok(DirItem::new(e.file_name(), e.path(), is_file))
        }))
    }
}

impl Filesystem for LocalFs {
    type Entries = LocalEntries;

    fn read_dir(&self, dir: &Path) -> io::Result<LocalEntries> {
        Ok(LocalEntries {
            inner: fs::read_dir(dir)?,
        })
    }

    fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)
    }

    fn entry_exists(&self, path: &Path) -> io::Result<bool> {
        match fs::symlink_metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn move_file(&self, src: &Path, dest: &Path) -> io::Result<()> {
        match fs::rename(src, dest) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => copy_then_remove(src, dest),
            Err(e) => Err(e),
        }
    }
}

/// Copy `src` to `dest`, then remove `src`. On any failure `dest` is removed again,
/// so the file is never left in both places.
fn copy_then_remove(src: &Path, dest: &Path) -> io::Result<()> {
    let result = fs::copy(src, dest).and_then(|_| fs::remove_file(src));
    if result.is_err() {
        let _ = fs::remove_file(dest);
    }
    result
}
