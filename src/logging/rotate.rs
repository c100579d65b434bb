//! Size-based rotating log file.
//!
//! `organizer.log` is rotated before a write would push it past `max_bytes`:
//! `organizer.log.(n-1)` -> `.n`, ..., `organizer.log` -> `.1`; the oldest backup
//! falls off. With `backups == 0` the file is truncated instead.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::platform::open_log_file_secure_append;

pub const DEFAULT_MAX_BYTES: u64 = 1_000_000;
pub const DEFAULT_BACKUPS: usize = 3;

/// Where and how to write the log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileSpec {
    pub path: PathBuf,
    /// Rotation threshold; 0 disables rotation.
    pub max_bytes: u64,
    pub backups: usize,
}

#[derive(Debug)]
pub struct RotatingFile {
    spec: LogFileSpec,
    file: File,
    len: u64,
}

/// `<path>.<n>`
pub fn backup_path(path: &Path, n: usize) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{n}"));
    PathBuf::from(name)
}

impl RotatingFile {
    pub fn open(spec: LogFileSpec) -> io::Result<Self> {
        let file = open_log_file_secure_append(&spec.path)?;
        let len = file.metadata()?.len();
        Ok(Self { spec, file, len })
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        let path = &self.spec.path;
        if self.spec.backups == 0 {
            // append mode keeps writing at the (new) end
            self.file.set_len(0)?;
            self.len = 0;
            return Ok(());
        }

        let oldest = backup_path(path, self.spec.backups);
        match fs::remove_file(&oldest) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e),
            _ => {}
        }
        for n in (1..self.spec.backups).rev() {
            let from = backup_path(path, n);
            if from.exists() {
                fs::rename(&from, backup_path(path, n + 1))?;
            }
        }
        fs::rename(path, backup_path(path, 1))?;
        self.file = open_log_file_secure_append(path)?;
        self.len = 0;
        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let max = self.spec.max_bytes;
        if max > 0 && self.len > 0 && self.len + buf.len() as u64 > max {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.len += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn spec(dir: &Path, max_bytes: u64, backups: usize) -> LogFileSpec {
        LogFileSpec {
            path: dir.join("organizer.log"),
            max_bytes,
            backups,
        }
    }

    #[test]
    fn rotates_when_threshold_would_be_exceeded() {
        let td = tempdir().unwrap();
        let s = spec(td.path(), 10, 2);
        let mut f = RotatingFile::open(s.clone()).unwrap();
        f.write_all(b"12345678\n").unwrap();
        f.write_all(b"abcdefgh\n").unwrap();
        f.flush().unwrap();

        assert_eq!(fs::read(&s.path).unwrap(), b"abcdefgh\n");
        assert_eq!(fs::read(backup_path(&s.path, 1)).unwrap(), b"12345678\n");
    }

    #[test]
    fn keeps_at_most_configured_backups() {
        let td = tempdir().unwrap();
        let s = spec(td.path(), 4, 2);
        let mut f = RotatingFile::open(s.clone()).unwrap();
        for line in [b"one\n", b"two\n", b"thr\n", b"fou\n"] {
            f.write_all(line).unwrap();
        }
        f.flush().unwrap();

        assert_eq!(fs::read(&s.path).unwrap(), b"fou\n");
        assert_eq!(fs::read(backup_path(&s.path, 1)).unwrap(), b"thr\n");
        assert_eq!(fs::read(backup_path(&s.path, 2)).unwrap(), b"two\n");
        assert!(!backup_path(&s.path, 3).exists());
    }

    #[test]
    fn zero_backups_truncates() {
        let td = tempdir().unwrap();
        let s = spec(td.path(), 4, 0);
        let mut f = RotatingFile::open(s.clone()).unwrap();
        f.write_all(b"old\n").unwrap();
        f.write_all(b"new\n").unwrap();
        f.flush().unwrap();
        assert_eq!(fs::read(&s.path).unwrap(), b"new\n");
        assert!(!backup_path(&s.path, 1).exists());
    }

    #[test]
    fn zero_max_bytes_never_rotates() {
        let td = tempdir().unwrap();
        let s = spec(td.path(), 0, 3);
        let mut f = RotatingFile::open(s.clone()).unwrap();
        for _ in 0..50 {
            f.write_all(b"line of text\n").unwrap();
        }
        f.flush().unwrap();
        assert!(!backup_path(&s.path, 1).exists());
    }

    #[test]
    fn reopening_appends_and_counts_existing_size() {
        let td = tempdir().unwrap();
        let s = spec(td.path(), 8, 1);
        fs::write(&s.path, b"1234567").unwrap();
        let mut f = RotatingFile::open(s.clone()).unwrap();
        f.write_all(b"xy").unwrap();
        f.flush().unwrap();
        assert_eq!(fs::read(backup_path(&s.path, 1)).unwrap(), b"1234567");
        assert_eq!(fs::read(&s.path).unwrap(), b"xy");
    }
}
