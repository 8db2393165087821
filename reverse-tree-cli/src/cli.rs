//! CLI definition for the reverse-tree command-line interface.
//!
//! This module is self-contained, depending only on `clap` and `std`, so that
//! `build.rs` can compile it independently via `#[path = "src/cli.rs"]` to
//! generate documentation, man pages, and shell completions at build time.

use std::path::PathBuf;

use clap::Parser;

/// Tree file read when `--file` is not given.
pub const DEFAULT_TREE_FILE: &str = ".tree";

const AFTER_HELP: &str = "\
Examples:
  reverse-tree                          Create structure from .tree file
  reverse-tree -f project.tree          Use project.tree file
  reverse-tree -s /tmp/project          Create structure in /tmp/project
  reverse-tree -f app.tree -s ~/myapp   Use app.tree and create in ~/myapp
  reverse-tree -n -f app.tree           Show what would be created

Tree file format:
  project/
  ├── src/
  │   ├── main.py
  │   └── utils.py
  └── README.md

Names ending in '/' are directories, everything else is an empty file.
Indentation is read in units of four characters ('│   ' or four spaces).";

/// reverse-tree - create directory structures from tree format files
#[derive(Parser, Debug)]
#[command(name = "reverse-tree")]
#[command(version)]
#[command(about = "Create directory structures from tree format files")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Tree file to read
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_TREE_FILE)]
    pub file: PathBuf,

    /// Target directory to create the structure in
    #[arg(
        short = 's',
        long = "source",
        visible_alias = "target",
        value_name = "DIR",
        default_value = "."
    )]
    pub target: PathBuf,

    /// Show what would be created without touching the filesystem
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the resulting tree after building
    #[arg(short, long)]
    pub print: bool,

    /// Enable debug output to stderr
    #[arg(short, long)]
    pub debug: bool,
}
