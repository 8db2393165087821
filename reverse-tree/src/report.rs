//! Progress reporting for a build run.

use crate::error::TreeError;
use std::path::PathBuf;

/// Kind of entry named by a tree line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Directory => write!(f, "directory"),
            EntryKind::File => write!(f, "file"),
        }
    }
}

/// An entry that now exists on the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedEntry {
    pub kind: EntryKind,
    /// Absolute path of the entry.
    pub path: PathBuf,
    /// Path relative to the target root's parent, for messages.
    pub display: PathBuf,
}

/// An entry that could not be created. The run continues past it.
#[derive(Debug)]
pub struct EntryFailure {
    pub kind: EntryKind,
    pub path: PathBuf,
    pub error: TreeError,
}

/// Sink receiving one call per processed entry.
pub trait Reporter {
    fn entry_created(&mut self, entry: &CreatedEntry);
    fn entry_failed(&mut self, failure: &EntryFailure);
}

/// Reporter that forwards to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn entry_created(&mut self, entry: &CreatedEntry) {
        tracing::info!(kind = %entry.kind, "Created {}: {}", entry.kind, entry.display.display());
    }

    fn entry_failed(&mut self, failure: &EntryFailure) {
        tracing::warn!(
            kind = %failure.kind,
            "Error creating {}: {}",
            failure.path.display(),
            failure.error
        );
    }
}

/// Reporter that keeps every message, in order.
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    pub lines: Vec<String>,
}

impl Reporter for CollectingReporter {
    fn entry_created(&mut self, entry: &CreatedEntry) {
        self.lines
            .push(format!("Created {}: {}", entry.kind, entry.display.display()));
    }

    fn entry_failed(&mut self, failure: &EntryFailure) {
        self.lines.push(format!(
            "Error creating {}: {}",
            failure.path.display(),
            failure.error
        ));
    }
}
