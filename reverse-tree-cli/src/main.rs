//! reverse-tree - create directory structures from tree format files.
//!
//! Usage:
//! - `reverse-tree`: read `.tree` in the current directory, build here
//! - `reverse-tree -f <file>`: read another tree file
//! - `reverse-tree -s <dir>`: build below another directory
//! - `reverse-tree -n`: show what would be created
//!
//! Exit codes:
//! - 0: Success (including runs where single entries failed)
//! - 1: The tree file could not be read, or progress output could not be
//!   written

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use reverse_tree::TreeError;
use reverse_tree_cli::{run, Cli, RunOptions};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("reverse_tree=debug,reverse_tree_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = execute(&cli);
    std::process::exit(exit_code);
}

/// Run the command and map the outcome to an exit code.
fn execute(cli: &Cli) -> i32 {
    let options = RunOptions::from(cli);
    let mut stdout = std::io::stdout().lock();
    let result = run(&options, &mut stdout)
        .and_then(|summary| stdout.flush().map(|()| summary).map_err(TreeError::output));

    match result {
        Ok(summary) => {
            tracing::debug!(
                created = summary.created,
                failed = summary.failed,
                skipped = summary.skipped,
                "Run finished"
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, TreeError::SourceNotFound { .. }) {
                eprintln!(
                    "Create a .tree file with your directory structure or specify a different file with -f"
                );
            }
            1
        }
    }
}
