//! Filesystem capability consumed by the hierarchy builder.
//!
//! The builder never touches `std::fs` directly. It goes through the
//! [`Filesystem`] trait so a run can be planned without side effects
//! ([`DryRunFilesystem`]) or performed on disk ([`LocalFilesystem`]).

use crate::error::{Result, TreeError};
use filetime::FileTime;
use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Operations the builder needs from a filesystem.
pub trait Filesystem {
    /// Resolve `path` to an absolute path.
    ///
    /// Existing paths are canonicalized. Paths that do not exist yet are made
    /// absolute against the current directory.
    fn resolve(&self, path: &Path) -> Result<PathBuf> {
        let absolute = std::path::absolute(path).map_err(|e| TreeError::TargetResolution {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(absolute.canonicalize().unwrap_or(absolute))
    }

    /// Create `path` and any missing ancestors. Existing directories are fine.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Create an empty file at `path` if absent, creating missing ancestors.
    ///
    /// Existing content is never truncated.
    fn touch(&self, path: &Path) -> Result<()>;
}

/// Express `path` relative to `ancestor` for display.
///
/// Falls back to the full path when `ancestor` is not a prefix of `path`.
pub fn relative_to(path: &Path, ancestor: &Path) -> PathBuf {
    path.strip_prefix(ancestor)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Filesystem backed by the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| TreeError::directory_creation(path, e))
    }

    fn touch(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| TreeError::directory_creation(parent, e))?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| TreeError::file_creation(path, e))?;

        filetime::set_file_mtime(path, FileTime::now())
            .map_err(|e| TreeError::file_creation(path, e))?;

        tracing::trace!("Touched {}", path.display());
        Ok(())
    }
}

/// An operation recorded by [`DryRunFilesystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedOperation {
    /// A directory (and its ancestors) would be created.
    CreateDir(PathBuf),
    /// An empty file would be created.
    Touch(PathBuf),
}

/// Filesystem that records what would happen and changes nothing.
#[derive(Debug, Default)]
pub struct DryRunFilesystem {
    operations: RefCell<Vec<PlannedOperation>>,
}

impl DryRunFilesystem {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations recorded so far, in call order.
    pub fn operations(&self) -> Vec<PlannedOperation> {
        self.operations.borrow().clone()
    }

    fn record(&self, op: PlannedOperation) {
        self.operations.borrow_mut().push(op);
    }
}

impl Filesystem for DryRunFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.record(PlannedOperation::CreateDir(path.to_path_buf()));
        Ok(())
    }

    fn touch(&self, path: &Path) -> Result<()> {
        self.record(PlannedOperation::Touch(path.to_path_buf()));
        Ok(())
    }
}
