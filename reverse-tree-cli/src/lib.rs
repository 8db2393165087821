//! reverse-tree command-line front end.
//!
//! The binary is a thin wrapper: it parses [`Cli`], installs logging and
//! hands a [`RunOptions`] to [`run`], which reads the tree file, builds the
//! structure and prints progress. Fatal errors come back as values so the
//! binary alone decides the exit code.

mod cli;
pub mod run;

pub use cli::{Cli, DEFAULT_TREE_FILE};
pub use run::{run, ConsoleReporter, RunOptions, RunSummary};
