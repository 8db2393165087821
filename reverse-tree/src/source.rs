//! Reading tree description files.

use crate::error::{Result, TreeError};
use std::path::Path;

/// Split tree text into entry lines.
///
/// Line endings (`\n` and `\r\n`) and a leading byte order mark are removed,
/// and whitespace-only lines are dropped.
pub fn parse_tree_text(text: &str) -> Vec<String> {
    text.strip_prefix('\u{feff}')
        .unwrap_or(text)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Read the entry lines of a tree description file.
///
/// # Errors
///
/// Returns `SourceNotFound` when the file does not exist and `SourceRead` for
/// any other I/O or encoding failure. Nothing has been created at that point.
pub fn read_tree_file(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(TreeError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|e| TreeError::source_read(path, e))?;
    let lines = parse_tree_text(&text);
    tracing::debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}
