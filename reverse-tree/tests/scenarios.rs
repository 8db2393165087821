//! End-to-end build scenarios against a real temporary directory.

use reverse_tree::{
    parse_tree_text, read_tree_file, CollectingReporter, HierarchyBuilder, LocalFilesystem,
    TreeError,
};
use rstest::rstest;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn build(lines: &[String], target: &Path) -> reverse_tree::BuildReport {
    let mut reporter = CollectingReporter::default();
    HierarchyBuilder::new(&LocalFilesystem)
        .build(lines, target, &mut reporter)
        .expect("target should resolve")
}

fn canonical(temp: &TempDir) -> PathBuf {
    temp.path().canonicalize().unwrap()
}

const PROJECT: &str = "\
project/
├── Cargo.toml
├── src/
│   ├── main.rs
│   └── parser/
│       ├── mod.rs
│       └── lexer.rs
├── tests/
│   └── smoke.rs
└── README.md
";

#[test_log::test]
fn test_scenario_a_creates_expected_entries() {
    let temp = TempDir::new().unwrap();
    let lines = parse_tree_text("app/\n├── src/\n│   └── main.py\n└── README.md\n");

    let report = build(&lines, temp.path());

    let root = canonical(&temp);
    assert!(report.is_clean());
    assert!(root.join("app").is_dir());
    assert!(root.join("app/src").is_dir());
    assert!(root.join("app/src/main.py").is_file());
    assert!(root.join("app/README.md").is_file());
}

#[test_log::test]
fn test_nested_project() {
    let temp = TempDir::new().unwrap();
    let report = build(&parse_tree_text(PROJECT), temp.path());

    let root = canonical(&temp).join("project");
    assert!(report.is_clean());
    assert_eq!(report.created.len(), 10);
    for dir in ["src", "src/parser", "tests"] {
        assert!(root.join(dir).is_dir(), "{dir} should be a directory");
    }
    for file in [
        "Cargo.toml",
        "src/main.rs",
        "src/parser/mod.rs",
        "src/parser/lexer.rs",
        "tests/smoke.rs",
        "README.md",
    ] {
        assert!(root.join(file).is_file(), "{file} should be a file");
    }
}

#[test]
fn test_scenario_b_sibling_after_deeper_file() {
    let temp = TempDir::new().unwrap();
    let lines = parse_tree_text(
        "root/\n├── a/\n│   ├── b/\n│   │   └── deep.txt\n│   └── c/\n└── d/\n",
    );

    let report = build(&lines, temp.path());

    let root = canonical(&temp).join("root");
    assert!(report.is_clean());
    assert!(root.join("a/b/deep.txt").is_file());
    assert!(root.join("a/c").is_dir());
    assert!(!root.join("a/b/c").exists());
    assert!(root.join("d").is_dir());
    assert!(!root.join("a/d").exists());
}

#[test]
fn test_scenario_c_missing_description_creates_nothing() {
    let temp = TempDir::new().unwrap();
    let err = read_tree_file(&temp.path().join(".tree")).unwrap_err();

    assert!(matches!(err, TreeError::SourceNotFound { .. }));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_scenario_d_collision_is_isolated() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("app")).unwrap();
    fs::write(temp.path().join("app/lib"), "occupied").unwrap();

    let lines = parse_tree_text(
        "app/\n├── lib/\n│   └── util.rs\n├── bin/\n│   └── cli.rs\n└── README.md\n",
    );
    let report = build(&lines, temp.path());

    let root = canonical(&temp).join("app");
    let failed: Vec<_> = report.failures.iter().map(|f| f.path.clone()).collect();
    assert_eq!(failed, vec![root.join("lib"), root.join("lib/util.rs")]);
    assert!(root.join("bin/cli.rs").is_file());
    assert!(root.join("README.md").is_file());
    assert_eq!(fs::read_to_string(root.join("lib")).unwrap(), "occupied");
}

#[test]
fn test_second_run_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let lines = parse_tree_text(PROJECT);

    let first = build(&lines, temp.path());
    let main_rs = canonical(&temp).join("project/src/main.rs");
    fs::write(&main_rs, "fn main() {}\n").unwrap();
    let second = build(&lines, temp.path());

    assert!(first.is_clean());
    assert!(second.is_clean());
    assert_eq!(first.created.len(), second.created.len());
    assert_eq!(fs::read_to_string(&main_rs).unwrap(), "fn main() {}\n");
}

#[rstest]
#[case::unicode(
    ".\n├── docs\n│   └── index.md\n└── src\n    └── lib.rs\n\n2 directories, 2 files\n"
)]
#[case::ascii(".\n|-- docs\n|   `-- index.md\n`-- src\n    `-- lib.rs\n\n2 directories, 2 files\n")]
#[case::gnu_nbsp(
    ".\n├── docs\n│\u{a0}\u{a0} └── index.md\n└── src\n    └── lib.rs\n\n2 directories, 2 files\n"
)]
fn test_raw_tree_output(#[case] text: &str) {
    // Without `tree -F` directories carry no trailing slash, so every entry
    // is a file and deeper lines fall back to the nearest open directory.
    let temp = TempDir::new().unwrap();
    let report = build(&parse_tree_text(text), temp.path());

    let root = canonical(&temp);
    assert!(report.is_clean());
    assert_eq!(report.working_root, root);
    assert_eq!(report.skipped, 1);
    assert!(root.join("docs").is_file());
    assert!(root.join("index.md").is_file());
    assert!(root.join("src").is_file());
    assert!(root.join("lib.rs").is_file());
    assert!(!root.join("2 directories, 2 files").exists());
}

#[test]
fn test_hash_is_part_of_the_name() {
    let temp = TempDir::new().unwrap();
    let lines = parse_tree_text(
        "service/\n├── My #1 Folder/\n│   └── default.toml\n└── main.go  # entry point\n",
    );

    let report = build(&lines, temp.path());

    let root = canonical(&temp).join("service");
    assert!(report.is_clean());
    assert!(root.join("My #1 Folder/default.toml").is_file());
    assert!(root.join("main.go  # entry point").is_file());
    assert!(!root.join("default.toml").exists());
}

#[test]
fn test_summary_line_only_skipped_at_top_level() {
    let temp = TempDir::new().unwrap();
    let lines = parse_tree_text(".\n├── 2 files\n└── notes.txt\n\n2 directories, 2 files\n");

    let report = build(&lines, temp.path());

    let root = canonical(&temp);
    assert!(report.is_clean());
    assert_eq!(report.skipped, 1);
    assert!(root.join("2 files").is_file());
    assert!(!root.join("2 directories, 2 files").exists());
}
