//! Event sink used by the organizer to report what it did.
//!
//! The organizer never talks to a global logger. Callers pass an `EventSink`:
//! the binary uses `TracingSink`, tests and embedders can use `MemorySink`.

use std::fmt;
use tracing::{error, info, warn};

/// Severity of an organizer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for EventLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventLevel::Info => "INFO",
            EventLevel::Warning => "WARNING",
            EventLevel::Error => "ERROR",
        })
    }
}

/// Receiver of leveled, human-readable event records.
pub trait EventSink {
    fn emit(&mut self, level: EventLevel, message: &str);

    fn info(&mut self, message: &str) {
        self.emit(EventLevel::Info, message);
    }

    fn warn(&mut self, message: &str) {
        self.emit(EventLevel::Warning, message);
    }

    fn error(&mut self, message: &str) {
        self.emit(EventLevel::Error, message);
    }
}

/// Forwards events to the installed `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, level: EventLevel, message: &str) {
        match level {
            EventLevel::Info => info!(target: "file_organizer", "{message}"),
            EventLevel::Warning => warn!(target: "file_organizer", "{message}"),
            EventLevel::Error => error!(target: "file_organizer", "{message}"),
        }
    }
}

/// Collects events in memory, in emission order.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    events: Vec<(EventLevel, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[(EventLevel, String)] {
        &self.events
    }

    /// Messages recorded at `level`.
    pub fn messages(&self, level: EventLevel) -> Vec<&str> {
        self.events
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for MemorySink {
    fn emit(&mut self, level: EventLevel, message: &str) {
        self.events.push((level, message.to_string()));
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, level: EventLevel, message: &str) {
        (**self).emit(level, message);
    }
}
