//! Rebuild directory hierarchies from tree diagrams.
//!
//! This crate reads the indented, box-drawing notation printed by `tree` and
//! creates the directories and empty files it describes. It is split into
//! small pieces that can be used on their own:
//!
//! - [`parse_line`] - turns one diagram line into a [`ParsedLine`]
//! - [`HierarchyBuilder`] - walks parsed lines with a stack of open
//!   directories and creates entries through a [`Filesystem`]
//! - [`read_tree_file`] - loads a description file
//! - [`render_tree`] - the inverse: draws an existing directory
//!
//! # Example
//!
//! ```no_run
//! use reverse_tree::{HierarchyBuilder, LocalFilesystem, TracingReporter};
//! use std::path::Path;
//!
//! let lines = ["app/", "├── src/", "│   └── main.rs", "└── README.md"];
//! let report = HierarchyBuilder::new(&LocalFilesystem)
//!     .build(lines, Path::new("/tmp/out"), &mut TracingReporter)?;
//!
//! assert!(report.is_clean());
//! # Ok::<(), reverse_tree::TreeError>(())
//! ```
//!
//! # Indentation
//!
//! Depth is counted in units of [`INDENT_WIDTH`] characters (`"│   "` or four
//! spaces). A `├──` / `└──` connector adds one level for the entry it
//! introduces. The width is fixed and never guessed from the input.

mod builder;
mod error;
mod filesystem;
mod parser;
mod render;
mod report;
mod source;

pub use builder::{BuildReport, HierarchyBuilder};
pub use error::{Result, TreeError};
pub use filesystem::{relative_to, DryRunFilesystem, Filesystem, LocalFilesystem, PlannedOperation};
pub use parser::{is_summary_line, parse_line, ParsedLine, INDENT_WIDTH};
pub use render::render_tree;
pub use report::{
    CollectingReporter, CreatedEntry, EntryFailure, EntryKind, Reporter, TracingReporter,
};
pub use source::{parse_tree_text, read_tree_file};
