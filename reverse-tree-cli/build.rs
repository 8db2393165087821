//! Build script for reverse-tree-cli.
//!
//! Generates the CLI reference, man page and shell completions from the clap
//! derive definitions in `src/cli.rs`:
//!
//! - Markdown CLI reference -> doc/reference/
//! - Man page -> docs/
//! - Shell completions -> completions/

use std::path::Path;

use clap::CommandFactory;

#[path = "src/cli.rs"]
mod cli;

#[path = "../build-support/doc_gen.rs"]
mod doc_gen;

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=../build-support/doc_gen.rs");

    let cmd = cli::Cli::command();
    let repo_root = Path::new("..");

    doc_gen::generate_markdown(&cmd, &repo_root.join("doc/reference"), "reverse-tree")?;
    doc_gen::generate_manpage(&cmd, &repo_root.join("docs"), "reverse-tree")?;
    doc_gen::generate_completions(cmd, &repo_root.join("completions"), "reverse-tree")?;

    Ok(())
}
