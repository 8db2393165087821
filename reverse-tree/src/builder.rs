//! Hierarchy builder: turns parsed tree lines into filesystem entries.
//!
//! Lines are consumed strictly in order. A `PathStack` holds the chain of
//! currently open directories; each line truncates the stack to its depth,
//! takes the top as its parent and, when it names a directory, pushes itself.
//!
//! The first entry of a diagram is special. Tree diagrams conventionally start
//! with the project's own directory name, so a leading `app/` becomes the
//! working root (`<target>/app`) instead of being nested below an implicit
//! root. A leading file is created directly in the target, and a leading `.`
//! (as printed by `tree` for the current directory) makes the target itself
//! the working root.

use crate::error::{Result, TreeError};
use crate::filesystem::{relative_to, Filesystem};
use crate::parser::{is_summary_line, parse_line, ParsedLine};
use crate::report::{CreatedEntry, EntryFailure, EntryKind, Reporter};
use std::path::{Component, Path, PathBuf};

/// One open directory on the [`PathStack`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    path: PathBuf,
    /// Set when the entry name failed validation; nothing below it is created.
    rejected: Option<String>,
}

impl Frame {
    fn accepted(path: PathBuf) -> Self {
        Self {
            path,
            rejected: None,
        }
    }
}

/// Ancestor directories of the line being processed, working root first.
///
/// The working root is never popped: truncating to depth 0 or 1 both leave
/// the root as the only frame.
#[derive(Debug, Clone)]
struct PathStack {
    root: Frame,
    frames: Vec<Frame>,
}

impl PathStack {
    fn new(root: PathBuf) -> Self {
        Self {
            root: Frame::accepted(root),
            frames: Vec::new(),
        }
    }

    /// Replace the whole stack with a new working root.
    fn replace_root(&mut self, root: Frame) {
        self.root = root;
        self.frames.clear();
    }

    fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Pop frames until at most `depth` remain, keeping the working root.
    fn truncate_to_depth(&mut self, depth: usize) {
        self.frames.truncate(depth.saturating_sub(1));
    }

    /// Frame that receives an entry at the current depth.
    fn top(&self) -> &Frame {
        self.frames.last().unwrap_or(&self.root)
    }
}

/// Outcome of a build run.
#[derive(Debug)]
pub struct BuildReport {
    /// Resolved absolute target directory.
    pub target_root: PathBuf,
    /// Directory that depth-0 entries were placed under.
    pub working_root: PathBuf,
    /// Entries that now exist, in line order.
    pub created: Vec<CreatedEntry>,
    /// Entries that could not be created.
    pub failures: Vec<EntryFailure>,
    /// Lines that carried no entry (blank, glyph-only, `tree` summary).
    pub skipped: usize,
}

impl BuildReport {
    fn new(target_root: PathBuf) -> Self {
        Self {
            working_root: target_root.clone(),
            target_root,
            created: Vec::new(),
            failures: Vec::new(),
            skipped: 0,
        }
    }

    /// True when every entry was created.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Reject names that would leave their parent directory.
fn validate_name(name: &str) -> Result<()> {
    let escapes = Path::new(name)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(TreeError::PathValidation {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Builds a directory hierarchy from tree diagram lines.
pub struct HierarchyBuilder<'a, F: Filesystem + ?Sized> {
    fs: &'a F,
}

impl<'a, F: Filesystem + ?Sized> HierarchyBuilder<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Create every entry described by `lines` below `target`.
    ///
    /// Entry failures are reported and collected in the returned
    /// [`BuildReport`]; they never stop the run.
    ///
    /// # Errors
    ///
    /// Returns `TargetResolution` if `target` cannot be made absolute.
    pub fn build<I>(
        &self,
        lines: I,
        target: &Path,
        reporter: &mut dyn Reporter,
    ) -> Result<BuildReport>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let target_root = self.fs.resolve(target)?;
        tracing::debug!("Creating structure in: {}", target_root.display());

        let mut report = BuildReport::new(target_root.clone());
        let mut stack = PathStack::new(target_root.clone());
        let mut root_established = false;

        for (index, line) in lines.into_iter().enumerate() {
            let raw = line.as_ref();
            let parsed = parse_line(raw);
            if parsed.is_empty() || is_summary_line(raw) {
                report.skipped += 1;
                continue;
            }

            tracing::debug!(
                line = index + 1,
                depth = parsed.depth,
                directory = parsed.is_directory,
                "Parsed entry '{}'",
                parsed.name
            );

            if !root_established {
                root_established = true;
                self.establish_root(&parsed, &mut stack, &mut report, reporter);
                continue;
            }

            stack.truncate_to_depth(parsed.depth);
            if let Some(frame) = self.place_entry(&parsed, stack.top(), &mut report, reporter) {
                stack.push(frame);
            }
        }

        Ok(report)
    }

    /// Handle the first real entry, shifting the working root when it names
    /// a directory.
    fn establish_root(
        &self,
        parsed: &ParsedLine,
        stack: &mut PathStack,
        report: &mut BuildReport,
        reporter: &mut dyn Reporter,
    ) {
        if parsed.name == "." {
            tracing::debug!("Tree starts at the target directory itself");
            return;
        }

        let root = Frame::accepted(report.target_root.clone());
        if let Some(frame) = self.place_entry(parsed, &root, report, reporter) {
            report.working_root = frame.path.clone();
            stack.replace_root(frame);
        }
    }

    /// Create one entry below `parent`.
    ///
    /// Returns the frame to push when the entry is a directory. A directory
    /// whose creation failed is still returned so its children are attempted
    /// (and reported) at their real location.
    fn place_entry(
        &self,
        parsed: &ParsedLine,
        parent: &Frame,
        report: &mut BuildReport,
        reporter: &mut dyn Reporter,
    ) -> Option<Frame> {
        let kind = if parsed.is_directory {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        let path = parent.path.join(&parsed.name);

        let rejection = match &parent.rejected {
            Some(parent_name) => Some(TreeError::RejectedParent {
                name: parsed.name.clone(),
                parent: parent_name.clone(),
            }),
            None => validate_name(&parsed.name).err(),
        };

        if let Some(error) = rejection {
            self.fail(kind, path.clone(), error, report, reporter);
            return parsed.is_directory.then(|| Frame {
                path,
                rejected: Some(
                    parent
                        .rejected
                        .clone()
                        .unwrap_or_else(|| parsed.name.clone()),
                ),
            });
        }

        let outcome = match kind {
            EntryKind::Directory => self.fs.create_dir_all(&path),
            EntryKind::File => self.fs.touch(&path),
        };

        match outcome {
            Ok(()) => {
                let display = match report.target_root.parent() {
                    Some(base) => relative_to(&path, base),
                    None => path.clone(),
                };
                let entry = CreatedEntry {
                    kind,
                    path: path.clone(),
                    display,
                };
                reporter.entry_created(&entry);
                report.created.push(entry);
            }
            Err(error) => self.fail(kind, path.clone(), error, report, reporter),
        }

        parsed.is_directory.then(|| Frame::accepted(path))
    }

    fn fail(
        &self,
        kind: EntryKind,
        path: PathBuf,
        error: TreeError,
        report: &mut BuildReport,
        reporter: &mut dyn Reporter,
    ) {
        let failure = EntryFailure { kind, path, error };
        reporter.entry_failed(&failure);
        report.failures.push(failure);
    }
}
