//! Core library for `file_organizer`.
//!
//! Sorts the regular files of one directory into category subfolders
//! (`Images`, `PDFs`, `Documents`, ...) chosen by file extension, reporting every
//! move, skip and failure to an `EventSink`.
//!
//! ```no_run
//! use file_organizer::{organize, MemorySink};
//! use std::path::Path;
//!
//! let mut sink = MemorySink::new();
//! let report = organize(Path::new("/home/me/Downloads"), &mut sink)?;
//! println!("moved {} files", report.moved());
//! # Ok::<(), file_organizer::OrganizeError>(())
//! ```

pub mod category;
pub mod cli;
pub mod config;
pub mod errors;
pub mod events;
pub mod fs_ops;
pub mod logging;
pub mod organizer;
pub mod output;
pub mod platform;

pub use category::{classify, Category};
pub use config::{default_config_path, default_log_path, path_has_symlink_ancestor, Config, LogLevel};
pub use errors::{Op, OrganizeError};
pub use events::{EventLevel, EventSink, MemorySink, TracingSink};
pub use fs_ops::{DirItem, Filesystem, LocalFs};
pub use organizer::{organize, MoveOutcome, OrganizeOptions, OrganizeReport, Organizer};
