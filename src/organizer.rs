//! Directory organizer.
//! Walks the immediate entries of a source directory and moves every regular file
//! into `<source>/<category>/`, reporting each step to an `EventSink`.
//!
//! Policy:
//! - Non-file entries (directories, symlinks, ...) are skipped without an event.
//! - An existing entry at the destination is a conflict: warn and leave both in place.
//! - Any other I/O failure is fatal: emit an error event and stop at that entry.

use std::path::{Path, PathBuf};

use crate::category::{classify, Category};
use crate::errors::{Op, OrganizeError};
use crate::events::EventSink;
use crate::fs_ops::{describe_io_error, DirItem, Filesystem, LocalFs};

/// Knobs for a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrganizeOptions {
    /// Report what would happen without creating directories or moving files.
    pub dry_run: bool,
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(PathBuf),
    SkippedExists(PathBuf),
    WouldMove(PathBuf),
}

/// Per-file outcomes of a successful run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizeReport {
    pub outcomes: Vec<(String, Category, MoveOutcome)>,
}

impl OrganizeReport {
    fn count(&self, pred: impl Fn(&MoveOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, _, o)| pred(o)).count()
    }

    pub fn moved(&self) -> usize {
        self.count(|o| matches!(o, MoveOutcome::Moved(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, MoveOutcome::SkippedExists(_)))
    }

    pub fn would_move(&self) -> usize {
        self.count(|o| matches!(o, MoveOutcome::WouldMove(_)))
    }
}

/// Organizer bound to a filesystem implementation.
#[derive(Debug, Clone)]
pub struct Organizer<F: Filesystem> {
    fs: F,
    options: OrganizeOptions,
}

impl Organizer<LocalFs> {
    /// Organizer over the local disk.
    pub fn local(options: OrganizeOptions) -> Self {
        Self::new(LocalFs, options)
    }
}

impl<F: Filesystem> Organizer<F> {
    pub fn new(fs: F, options: OrganizeOptions) -> Self {
        Self { fs, options }
    }

    /// Organize `source`, which the caller has validated as an existing directory.
    /// Stops at the first unrecoverable error; files handled before it stay moved.
    pub fn run<S: EventSink + ?Sized>(
        &self,
        source: &Path,
        sink: &mut S,
    ) -> Result<OrganizeReport, OrganizeError> {
        let entries = match self.fs.read_dir(source) {
            Ok(entries) => entries,
            Err(e) => {
                let detail = describe_io_error("list directory", source, &e);
                sink.error(&format!(
                    "An error occurred at {}: {}",
                    source.display(),
                    detail
                ));
                return Err(OrganizeError::ListDir {
                    path: source.to_path_buf(),
                    source: e,
                });
            }
        };

        let mut report = OrganizeReport::default();
        for entry in entries {
            let item = match entry {
                Ok(item) => item,
                Err(e) => {
                    return Err(fail(sink, "unknown entry".into(), Op::ReadEntry, source, e));
                }
            };
            if !item.is_file {
                continue;
            }
            let (category, outcome) = self.place(source, &item, sink)?;
            report
                .outcomes
                .push((item.display_name(), category, outcome));
        }
        Ok(report)
    }

    fn place<S: EventSink + ?Sized>(
        &self,
        source: &Path,
        item: &DirItem,
        sink: &mut S,
    ) -> Result<(Category, MoveOutcome), OrganizeError> {
        let name = item.display_name();
        let category = classify(&name);
        let dest_dir = source.join(category.label());
        let dest = dest_dir.join(&item.name);

        if !self.options.dry_run {
            self.fs
                .create_dir_all(&dest_dir)
                .map_err(|e| fail(sink, name.clone(), Op::CreateDir, &dest_dir, e))?;
        }

        let taken = self
            .fs
            .entry_exists(&dest)
            .map_err(|e| fail(sink, name.clone(), Op::CheckDestination, &dest, e))?;
        if taken {
            sink.warn(&format!(
                "File already exists: {} in: {}. Skipping move.",
                name,
                dest.display()
            ));
            return Ok((category, MoveOutcome::SkippedExists(dest)));
        }

        if self.options.dry_run {
            sink.info(&format!("Would move: {} to {}", name, dest.display()));
            return Ok((category, MoveOutcome::WouldMove(dest)));
        }

        self.fs
            .move_file(&item.path, &dest)
            .map_err(|e| fail(sink, name.clone(), Op::Move, &dest, e))?;
        sink.info(&format!("Moved: {} to {}", name, dest.display()));
        Ok((category, MoveOutcome::Moved(dest)))
    }
}

/// Emit the error event for `entry` and build the matching error.
fn fail<S: EventSink + ?Sized>(
    sink: &mut S,
    entry: String,
    op: Op,
    path: &Path,
    source: std::io::Error,
) -> OrganizeError {
    let detail = describe_io_error(op.as_str(), path, &source);
    sink.error(&format!("An error occurred at {}: {}", entry, detail));
    OrganizeError::Entry {
        entry,
        op,
        detail,
        source,
    }
}

/// Organize `source` on the local disk with default options.
pub fn organize<S: EventSink + ?Sized>(
    source: &Path,
    sink: &mut S,
) -> Result<OrganizeReport, OrganizeError> {
    Organizer::local(OrganizeOptions::default()).run(source, sink)
}
