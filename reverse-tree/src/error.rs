//! Error types for tree building operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using TreeError.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that can occur while reading a tree description or creating entries.
#[derive(Error, Debug)]
pub enum TreeError {
    /// The tree description file does not exist.
    #[error("tree file '{path}' not found")]
    SourceNotFound { path: PathBuf },

    /// The tree description file exists but could not be read.
    #[error("failed to read tree file '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target root could not be resolved to an absolute path.
    #[error("failed to resolve target directory '{path}': {source}")]
    TargetResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create directory.
    #[error("failed to create directory '{path}': {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create file.
    #[error("failed to create file '{path}': {source}")]
    FileCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Entry name would escape its parent directory.
    #[error("path validation failed for '{name}': entry names must stay inside their parent")]
    PathValidation { name: String },

    /// Entry sits below a directory entry that was rejected.
    #[error("'{name}' is inside rejected entry '{parent}'")]
    RejectedParent { name: String, parent: String },

    /// Walking a directory for rendering failed.
    #[error("failed to walk '{path}': {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A directory was expected but the path is missing or not a directory.
    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    /// Writing progress output failed (for example a closed pipe).
    #[error("failed to write output: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

impl TreeError {
    /// Create a SourceRead error.
    pub fn source_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceRead {
            path: path.into(),
            source,
        }
    }

    /// Create a DirectoryCreation error.
    pub fn directory_creation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.into(),
            source,
        }
    }

    /// Create a FileCreation error.
    pub fn file_creation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileCreation {
            path: path.into(),
            source,
        }
    }

    /// Create an Output error.
    pub fn output(source: std::io::Error) -> Self {
        Self::Output { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_names_file() {
        let err = TreeError::SourceNotFound {
            path: PathBuf::from(".tree"),
        };
        assert_eq!(err.to_string(), "tree file '.tree' not found");
    }

    #[test]
    fn test_io_errors_keep_their_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = TreeError::directory_creation("/tmp/out/app", io);
        assert!(err.to_string().contains("/tmp/out/app"));
        assert!(err.to_string().contains("denied"));
        assert!(err.source().is_some());

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err = TreeError::output(io);
        assert_eq!(err.to_string(), "failed to write output: closed");
        assert!(err.source().is_some());
    }
}
