use assert_cmd::Command;
use assert_fs::prelude::*;
use insta::assert_snapshot;
use predicates::prelude::*;
use predicates::str::contains;
use regex::Regex;

fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Replaces the version number (e.g., "0.1.0") in a string with a static placeholder.
fn redact_version(text: &str) -> String {
    let re = Regex::new(r"\d+\.\d+\.\d+").unwrap();
    re.replace_all(text, "[VERSION]").to_string()
}

#[test]
fn test_version_flag() {
    let output = cmd().arg("--version").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_snapshot!(redact_version(stdout.trim_end()), @"md-split [VERSION]");
}

#[test]
fn test_help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("split").and(contains("merge")));
}

#[test]
fn test_split_creates_numbered_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input_file = temp.child("guide.md");
    input_file
        .write_str("Intro text.\n## Getting Started\nInstall it.\n## FAQ\nNone yet.")
        .unwrap();

    cmd()
        .arg("split")
        .arg(input_file.path())
        .assert()
        .success()
        .stdout(
            contains("Writing split files...")
                .and(contains("Created: 00-preamble.md"))
                .and(contains("Created: 01-getting-started.md"))
                .and(contains("Created: 02-faq.md"))
                .and(contains("Successfully split markdown into 3 files")),
        );

    temp.child("splits/00-preamble.md").assert("Intro text.");
    temp.child("splits/01-getting-started.md")
        .assert("## Getting Started\nInstall it.");
    temp.child("splits/02-faq.md").assert("## FAQ\nNone yet.");

    // The source document is left alone.
    input_file.assert("Intro text.\n## Getting Started\nInstall it.\n## FAQ\nNone yet.");
}

#[test]
fn test_split_into_custom_directory() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input_file = temp.child("guide.md");
    input_file.write_str("## One\n## Two").unwrap();
    let target = temp.child("parts");

    cmd()
        .arg("split")
        .arg("--splits-dir")
        .arg(target.path())
        .arg(input_file.path())
        .assert()
        .success();

    target.child("01-one.md").assert("## One");
    target.child("02-two.md").assert("## Two");
    temp.child("splits").assert(predicate::path::missing());
}

#[test]
fn test_split_dry_run_writes_nothing() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input_file = temp.child("guide.md");
    input_file.write_str("## Alpha\na\n## Beta\nb").unwrap();

    cmd()
        .arg("split")
        .arg("--dry-run")
        .arg(input_file.path())
        .assert()
        .success()
        .stdout(
            contains("Would create: 01-alpha.md")
                .and(contains("Would create: 02-beta.md"))
                .and(contains("2 files would be written to")),
        );

    temp.child("splits").assert(predicate::path::missing());
}

#[test]
fn test_split_quiet_prints_nothing() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input_file = temp.child("guide.md");
    input_file.write_str("## Alpha\na").unwrap();

    cmd()
        .arg("--quiet")
        .arg("split")
        .arg(input_file.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    temp.child("splits/01-alpha.md").assert("## Alpha\na");
}

#[test]
fn test_split_missing_file_fails() {
    let temp = assert_fs::TempDir::new().unwrap();

    cmd()
        .arg("split")
        .arg(temp.path().join("missing.md"))
        .assert()
        .failure()
        .stderr(contains("Path does not exist"));
}

#[test]
fn test_split_blank_file_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input_file = temp.child("blank.md");
    input_file.write_str("\n  \n").unwrap();

    cmd()
        .arg("split")
        .arg(input_file.path())
        .assert()
        .failure()
        .stderr(contains("nothing to split"));

    temp.child("splits").assert(predicate::path::missing());
}

#[test]
fn test_merge_concatenates_in_numeric_order() {
    let temp = assert_fs::TempDir::new().unwrap();
    let splits = temp.child("splits");
    splits.child("02-b.md").write_str("Y").unwrap();
    splits.child("01-a.md").write_str("X").unwrap();
    let output_file = temp.child("merged.md");

    cmd()
        .arg("merge")
        .arg(splits.path())
        .arg(output_file.path())
        .assert()
        .success()
        .stdout(
            contains("Merging split files...")
                .and(contains("Merged: 01-a.md"))
                .and(contains("Merged: 02-b.md"))
                .and(contains("Successfully merged 2 files into")),
        );

    output_file.assert("X\n\nY");
}

#[test]
fn test_merge_dry_run_prints_document() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("00-preamble.md").write_str("Intro").unwrap();
    temp.child("01-a.md").write_str("## A\nfoo\n").unwrap();
    temp.child("02-b.md").write_str("## B\nbar").unwrap();

    let output = cmd()
        .arg("merge")
        .arg("--dry-run")
        .arg(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_snapshot!(stdout, @r"
    Intro

    ## A
    foo

    ## B
    bar
    ");
}

#[test]
fn test_merge_without_numbered_files_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("notes.md").write_str("a").unwrap();
    let output_file = temp.child("merged.md");

    cmd()
        .arg("merge")
        .arg(temp.path())
        .arg(output_file.path())
        .assert()
        .failure()
        .stderr(contains("No properly numbered split files found"));

    output_file.assert(predicate::path::missing());
}

#[test]
fn test_merge_empty_directory_fails() {
    let temp = assert_fs::TempDir::new().unwrap();

    cmd()
        .arg("merge")
        .arg(temp.path())
        .arg(temp.path().join("merged.md"))
        .assert()
        .failure()
        .stderr(contains("No markdown files found"));
}

#[test]
fn test_merge_requires_output() {
    let temp = assert_fs::TempDir::new().unwrap();

    cmd().arg("merge").arg(temp.path()).assert().failure();
}

#[test]
fn test_split_then_merge_round_trip() {
    let temp = assert_fs::TempDir::new().unwrap();
    let original = "# Handbook\n\nWelcome.\n\n## Setup\n\nSteps.\n\n## Usage\n\nMore steps.\n";
    let input_file = temp.child("handbook.md");
    input_file.write_str(original).unwrap();
    let output_file = temp.child("rebuilt.md");

    cmd().arg("-q").arg("split").arg(input_file.path()).assert().success();
    cmd()
        .arg("-q")
        .arg("merge")
        .arg(temp.path().join("splits"))
        .arg(output_file.path())
        .assert()
        .success();

    output_file.assert(original);
}
