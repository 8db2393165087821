//! Render an existing directory as a tree diagram.
//!
//! The output uses the same connector style the parser reads, so building a
//! rendered diagram reproduces the directory's names and nesting.

use crate::error::{Result, TreeError};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUATION: &str = "│   ";
const PADDING: &str = "    ";

struct Child {
    name: String,
    is_dir: bool,
    path: PathBuf,
}

/// Immediate children of `dir`, sorted by file name.
fn list_children(dir: &Path) -> Result<Vec<Child>> {
    let mut children = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| TreeError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        children.push(Child {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: entry.file_type().is_dir(),
            path: entry.into_path(),
        });
    }
    Ok(children)
}

fn render_children(dir: &Path, prefix: &str, out: &mut String) -> Result<()> {
    let children = list_children(dir)?;
    let count = children.len();

    for (index, child) in children.into_iter().enumerate() {
        let last = index + 1 == count;
        let connector = if last { LAST_BRANCH } else { BRANCH };
        let suffix = if child.is_dir { "/" } else { "" };
        let _ = writeln!(out, "{prefix}{connector}{}{suffix}", child.name);

        if child.is_dir {
            let nested = format!("{prefix}{}", if last { PADDING } else { CONTINUATION });
            render_children(&child.path, &nested, out)?;
        }
    }
    Ok(())
}

/// Render `root` and everything below it.
///
/// The first line is the root's own name followed by `/`. Symbolic links are
/// listed as files and not followed.
pub fn render_tree(root: &Path) -> Result<String> {
    if !root.is_dir() {
        return Err(TreeError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());

    let mut out = format!("{name}/\n");
    render_children(root, "", &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_tree() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("app");
        fs::create_dir_all(root.join("src/bin")).unwrap();
        fs::write(root.join("src/main.rs"), "").unwrap();
        fs::write(root.join("src/bin/tool.rs"), "").unwrap();
        fs::write(root.join("README.md"), "").unwrap();

        let rendered = render_tree(&root).unwrap();
        let expected = [
            "app/",
            "├── README.md",
            "└── src/",
            "    ├── bin/",
            "    │   └── tool.rs",
            "    └── main.rs",
        ];
        assert_eq!(rendered.lines().collect::<Vec<_>>(), expected);
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_render_empty_dir() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("empty");
        fs::create_dir(&root).unwrap();

        assert_eq!(render_tree(&root).unwrap(), "empty/\n");
    }

    #[test]
    fn test_render_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let err = render_tree(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, TreeError::NotADirectory { .. }));
    }

    #[test]
    fn test_render_file_fails() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("notes.txt");
        fs::write(&file, "").unwrap();

        let err = render_tree(&file).unwrap_err();
        assert!(matches!(err, TreeError::NotADirectory { .. }));
        assert!(err.to_string().contains("notes.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_keeps_walk_error() {
        use std::error::Error as _;
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let root = temp.path().join("app");
        let locked = root.join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let result = render_tree(&root);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // Privileged users can still read the directory.
        if let Err(err) = result {
            assert!(matches!(err, TreeError::Walk { .. }));
            let source = err.source().unwrap();
            assert!(source.downcast_ref::<walkdir::Error>().is_some());
        }
    }
}
