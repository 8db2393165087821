//! Execution of a reverse-tree invocation.

use std::io::{self, Write};
use std::path::PathBuf;

use reverse_tree::{
    read_tree_file, render_tree, BuildReport, CreatedEntry, DryRunFilesystem, EntryFailure,
    Filesystem, HierarchyBuilder, LocalFilesystem, Reporter, Result, TracingReporter, TreeError,
};

use crate::cli::Cli;

/// Settings for one run, taken from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub tree_file: PathBuf,
    pub target: PathBuf,
    pub dry_run: bool,
    pub print: bool,
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            tree_file: cli.file.clone(),
            target: cli.target.clone(),
            dry_run: cli.dry_run,
            print: cli.print,
        }
    }
}

/// Counts reported after a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub working_root: PathBuf,
    pub created: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl From<&BuildReport> for RunSummary {
    fn from(report: &BuildReport) -> Self {
        Self {
            working_root: report.working_root.clone(),
            created: report.created.len(),
            failed: report.failures.len(),
            skipped: report.skipped,
        }
    }
}

/// Prints one progress line per entry. Failures and real (not dry-run)
/// creations are also forwarded to [`TracingReporter`].
///
/// Reporter callbacks cannot fail, so the first write error is kept and
/// returned by [`ConsoleReporter::finish`]. Later lines are not attempted.
pub struct ConsoleReporter<'a, W: Write> {
    out: &'a mut W,
    dry_run: bool,
    log: TracingReporter,
    write_error: Option<io::Error>,
}

impl<'a, W: Write> ConsoleReporter<'a, W> {
    pub fn new(out: &'a mut W, dry_run: bool) -> Self {
        Self {
            out,
            dry_run,
            log: TracingReporter,
            write_error: None,
        }
    }

    fn write_line(&mut self, line: &str) {
        if self.write_error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{line}") {
            self.write_error = Some(e);
        }
    }

    /// Surface the first write error, if any.
    pub fn finish(self) -> Result<()> {
        match self.write_error {
            Some(e) => Err(TreeError::output(e)),
            None => Ok(()),
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<'_, W> {
    fn entry_created(&mut self, entry: &CreatedEntry) {
        if !self.dry_run {
            self.log.entry_created(entry);
        }
        let verb = if self.dry_run { "Would create" } else { "Created" };
        self.write_line(&format!("{verb} {}: {}", entry.kind, entry.display.display()));
    }

    fn entry_failed(&mut self, failure: &EntryFailure) {
        self.log.entry_failed(failure);
        self.write_line(&format!(
            "Error creating {}: {}",
            failure.path.display(),
            failure.error
        ));
    }
}

fn build_with<F: Filesystem, W: Write>(
    fs: &F,
    lines: &[String],
    options: &RunOptions,
    out: &mut W,
) -> Result<BuildReport> {
    let mut reporter = ConsoleReporter::new(out, options.dry_run);
    let report = HierarchyBuilder::new(fs).build(lines, &options.target, &mut reporter)?;
    reporter.finish()?;
    Ok(report)
}

/// Read the tree file and create the structure it describes.
///
/// Progress goes to `out`. Entry failures are printed and counted but do not
/// make the run fail.
///
/// # Errors
///
/// Returns `SourceNotFound` / `SourceRead` when the tree file cannot be read
/// (nothing is created in that case) and `TargetResolution` when the target
/// directory cannot be resolved. Returns `Output` when `out` cannot be
/// written; entries created before that point stay on disk.
pub fn run<W: Write>(options: &RunOptions, out: &mut W) -> Result<RunSummary> {
    let lines = read_tree_file(&options.tree_file)?;

    let target_root = LocalFilesystem.resolve(&options.target)?;
    writeln!(out, "Creating structure in: {}", target_root.display())
        .map_err(TreeError::output)?;

    let report = if options.dry_run {
        let fs = DryRunFilesystem::new();
        let report = build_with(&fs, &lines, options, out)?;
        tracing::debug!("Planned {} operations", fs.operations().len());
        report
    } else {
        build_with(&LocalFilesystem, &lines, options, out)?
    };

    if options.print && !options.dry_run {
        match render_tree(&report.working_root) {
            Ok(tree) => write!(out, "\n{tree}").map_err(TreeError::output)?,
            Err(e) => tracing::warn!("Could not render result: {}", e),
        }
    }

    let source = options.tree_file.display();
    let written = if options.dry_run {
        writeln!(out, "\nDry run complete for '{source}', nothing was created")
    } else {
        writeln!(out, "\nStructure created successfully from '{source}'")
    };
    written.map_err(TreeError::output)?;
    if !report.is_clean() {
        writeln!(
            out,
            "{} of {} entries could not be created",
            report.failures.len(),
            report.failures.len() + report.created.len()
        )
        .map_err(TreeError::output)?;
    }

    Ok(RunSummary::from(&report))
}
