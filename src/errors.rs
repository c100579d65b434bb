//! Typed error definitions for file_organizer.
//! A run either succeeds or fails on the first unrecoverable I/O error; the
//! destination-exists case is not an error and never shows up here.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Step during which an entry failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    ReadEntry,
    CreateDir,
    CheckDestination,
    Move,
}

impl Op {
    pub fn as_str(self) -> &'static str {
        match self {
            Op::ReadEntry => "read entry",
            Op::CreateDir => "create directory",
            Op::CheckDestination => "check destination",
            Op::Move => "move file",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("Cannot list directory {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("An error occurred at {entry}: {detail}")]
    Entry {
        entry: String,
        op: Op,
        detail: String,
        #[source]
        source: io::Error,
    },
}

impl OrganizeError {
    /// Stable short identifier, suitable for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            OrganizeError::ListDir { .. } => "list_dir",
            OrganizeError::Entry { op, .. } => match op {
                Op::ReadEntry => "read_entry",
                Op::CreateDir => "create_dir",
                Op::CheckDestination => "check_destination",
                Op::Move => "move",
            },
        }
    }

    /// Name of the entry that failed, if the failure was tied to one.
    pub fn entry(&self) -> Option<&str> {
        match self {
            OrganizeError::ListDir { .. } => None,
            OrganizeError::Entry { entry, .. } => Some(entry),
        }
    }

    /// Underlying I/O error kind.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            OrganizeError::ListDir { source, .. } | OrganizeError::Entry { source, .. } => {
                source.kind()
            }
        }
    }
}
