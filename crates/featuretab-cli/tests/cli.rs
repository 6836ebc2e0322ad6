//! Command-line behaviour of the three binaries
//!
//! Each binary is run as a child process: argument count checks, exit
//! status, and the confirmation lines printed on success.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const FILE1: &str = "contig,start,end,strand\nchr1,10,20,+\n";
const FILE2: &str = "contig,start,end,strand\nchr1,10,20,+\nchr1,30,40,+\n";

fn run(bin: &str, args: &[&Path]) -> Output {
    Command::new(bin).args(args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_pair(dir: &Path) {
    fs::write(dir.join("file1.csv"), FILE1).unwrap();
    fs::write(dir.join("file2.csv"), FILE2).unwrap();
}

fn assert_usage_error(output: &Output) {
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(output).starts_with("Usage:"), "stderr: {}", stderr(output));
    assert!(output.stdout.is_empty());
}

// =============================================================================
// Argument count
// =============================================================================

#[test]
fn test_extract_wrong_argument_count() {
    let bin = env!("CARGO_BIN_EXE_featuretab_extract");
    let dir = TempDir::new().unwrap();

    assert_usage_error(&run(bin, &[]));
    assert_usage_error(&run(bin, &[dir.path()]));
    assert_usage_error(&run(bin, &[dir.path(), dir.path(), dir.path()]));
}

#[test]
fn test_merge_wrong_argument_count() {
    let bin = env!("CARGO_BIN_EXE_featuretab_merge");
    let dir = TempDir::new().unwrap();
    write_pair(dir.path());
    let first = dir.path().join("file1.csv");
    let second = dir.path().join("file2.csv");

    assert_usage_error(&run(bin, &[first.as_path()]));
    assert_usage_error(&run(bin, &[first.as_path(), second.as_path()]));
}

#[test]
fn test_subtract_wrong_argument_count() {
    let bin = env!("CARGO_BIN_EXE_featuretab_subtract");
    let dir = TempDir::new().unwrap();
    write_pair(dir.path());
    let first = dir.path().join("file1.csv");
    let second = dir.path().join("file2.csv");
    let output = dir.path().join("out.csv");

    assert_usage_error(&run(bin, &[first.as_path()]));
    assert_usage_error(&run(
        bin,
        &[
            first.as_path(),
            second.as_path(),
            output.as_path(),
            output.as_path(),
        ],
    ));
    assert!(!output.exists());
}

// =============================================================================
// Successful runs
// =============================================================================

#[test]
fn test_extract_success() {
    let bin = env!("CARGO_BIN_EXE_featuretab_extract");
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(
        input.path().join("sample.csv"),
        "contig,start,end,strand,sequence\nc1,78,99,+,AAAAACGUACGUACGUACGUTT\n",
    )
    .unwrap();

    let result = run(bin, &[input.path(), output.path()]);

    assert_eq!(result.status.code(), Some(0), "stderr: {}", stderr(&result));
    assert!(stdout(&result).contains(&format!(
        "Done! Wrote 1 records from 1 table(s) to {}",
        output.path().display()
    )));
    assert_eq!(
        fs::read_to_string(output.path().join("sample.fasta")).unwrap(),
        ">c1 (99)\nCGUACGUACGUACGUU\n"
    );
}

#[test]
fn test_merge_success() {
    let bin = env!("CARGO_BIN_EXE_featuretab_merge");
    let dir = TempDir::new().unwrap();
    write_pair(dir.path());
    let output = dir.path().join("union.csv");

    let result = run(
        bin,
        &[
            dir.path().join("file1.csv").as_path(),
            dir.path().join("file2.csv").as_path(),
            output.as_path(),
        ],
    );

    assert_eq!(result.status.code(), Some(0), "stderr: {}", stderr(&result));
    assert_eq!(
        stdout(&result),
        format!("Union file saved as {}\n", output.display())
    );
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "contig,start,end,strand,source\nchr1,10,20,+,B1\nchr1,10,20,+,B2\nchr1,30,40,+,2\n"
    );
}

#[test]
fn test_subtract_success() {
    let bin = env!("CARGO_BIN_EXE_featuretab_subtract");
    let dir = TempDir::new().unwrap();
    write_pair(dir.path());
    let output = dir.path().join("filtered.csv");

    let result = run(
        bin,
        &[
            dir.path().join("file1.csv").as_path(),
            dir.path().join("file2.csv").as_path(),
            output.as_path(),
        ],
    );

    assert_eq!(result.status.code(), Some(0), "stderr: {}", stderr(&result));
    assert!(
        stdout(&result)
            .lines()
            .any(|l| l == format!("Filtered file saved as {}", output.display()))
    );
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "contig,start,end,strand\nchr1,30,40,+\n"
    );
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_extract_missing_input_dir() {
    let bin = env!("CARGO_BIN_EXE_featuretab_extract");
    let dir = TempDir::new().unwrap();

    let absent = dir.path().join("absent");
    let output = dir.path().join("out");

    let result = run(bin, &[absent.as_path(), output.as_path()]);

    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).contains("Error extracting tables"));
}

#[test]
fn test_merge_missing_input() {
    let bin = env!("CARGO_BIN_EXE_featuretab_merge");
    let dir = TempDir::new().unwrap();
    write_pair(dir.path());
    let output = dir.path().join("union.csv");

    let result = run(
        bin,
        &[
            dir.path().join("absent.csv").as_path(),
            dir.path().join("file2.csv").as_path(),
            output.as_path(),
        ],
    );

    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).contains("Error merging"));
    assert!(stdout(&result).is_empty());
    assert!(!output.exists());
}

#[test]
fn test_subtract_missing_input() {
    let bin = env!("CARGO_BIN_EXE_featuretab_subtract");
    let dir = TempDir::new().unwrap();
    write_pair(dir.path());
    let output = dir.path().join("filtered.csv");

    let result = run(
        bin,
        &[
            dir.path().join("file1.csv").as_path(),
            dir.path().join("absent.csv").as_path(),
            output.as_path(),
        ],
    );

    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).contains("Error subtracting"));
    assert!(!output.exists());
}
