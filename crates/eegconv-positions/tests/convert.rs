//! End-to-end tests for the position converter.

use std::fs;
use std::path::PathBuf;

use eegconv_model::{IndexBase, PositionOptions};
use eegconv_positions::{PositionError, convert_positions};

const SAMPLE: &str = "Polhemus FASTRAK export\n\
                      NA\t1.0\t2.0\t3.0\n\
                      LPA\t-1.0\t2.0\t3.0\n\
                      RPA\t1.5\t2.0\t3.0\n\
                      1\tFp1\t0.1\t0.2\t0.3\n\
                      2\tCz\t0.4\t0.5\t0.6\n\
                      3\t\t0.5\t0.5\t0.5\n\
                      4\t\t0.25\t0.25\t0.25\n";

fn write_sample(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("subject01.pos");
    fs::write(&path, content).unwrap();
    path
}

fn data_lines(path: &PathBuf) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.starts_with('#'))
        .map(String::from)
        .collect()
}

#[test]
fn converts_sample_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(&dir, SAMPLE);
    let output = dir.path().join("subject01.hpts");

    convert_positions(&input, &output, &PositionOptions::default()).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines[0].starts_with("# Converted from"));
    assert!(lines[1].starts_with("# "));
    assert_eq!(
        &lines[2..],
        &[
            "cardinal 2 10.0 20.0 30.0",
            "cardinal 1 -10.0 20.0 30.0",
            "cardinal 3 15.0 20.0 30.0",
            "eeg 1 1.0 2.0 3.0",
            "eeg 2 4.0 5.0 6.0",
            "extra 1 5.0 5.0 5.0",
            "extra 2 2.5 2.5 2.5",
        ]
    );
}

#[test]
fn zero_base_shifts_sequential_identifiers() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(&dir, SAMPLE);
    let output = dir.path().join("subject01.hpts");

    let options = PositionOptions::default().with_index_base(IndexBase::Zero);
    convert_positions(&input, &output, &options).unwrap();

    let lines = data_lines(&output);
    assert_eq!(lines[3], "eeg 0 1.0 2.0 3.0");
    assert_eq!(lines[5], "extra 0 5.0 5.0 5.0");
}

#[test]
fn existing_destination_is_refused_and_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(&dir, SAMPLE);
    let output = dir.path().join("subject01.hpts");
    fs::write(&output, "sentinel\n").unwrap();

    let err = convert_positions(&input, &output, &PositionOptions::default()).unwrap_err();
    assert!(matches!(err, PositionError::DestinationExists { .. }));
    assert_eq!(fs::read_to_string(&output).unwrap(), "sentinel\n");
}

#[test]
fn overwrite_replaces_existing_destination() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(&dir, SAMPLE);
    let output = dir.path().join("subject01.hpts");
    fs::write(&output, "sentinel\n").unwrap();

    let options = PositionOptions::default().with_overwrite(true);
    convert_positions(&input, &output, &options).unwrap();
    assert!(fs::read_to_string(&output).unwrap().starts_with("# Converted"));
}

#[test]
fn repeated_conversion_is_identical_except_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(&dir, SAMPLE);
    let output = dir.path().join("subject01.hpts");
    let options = PositionOptions::default().with_overwrite(true);

    convert_positions(&input, &output, &options).unwrap();
    let first: Vec<String> = fs::read_to_string(&output)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();
    convert_positions(&input, &output, &options).unwrap();
    let second: Vec<String> = fs::read_to_string(&output)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();

    // Everything is byte-identical except the timestamp comment (line 2).
    assert_eq!(first.len(), second.len());
    assert_eq!(first[0], second[0]);
    assert!(second[1].starts_with("# "));
    assert_eq!(first[2..], second[2..]);
}

#[test]
fn malformed_line_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(&dir, "header\nNA\t1.0\t2.0\n");
    let output = dir.path().join("subject01.hpts");

    let err = convert_positions(&input, &output, &PositionOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        PositionError::MalformedRecord { line: 2, .. }
    ));
    assert!(!output.exists());
}

#[test]
fn malformed_line_does_not_modify_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(&dir, "header\nBAD\t1.0\t2.0\t3.0\n");
    let output = dir.path().join("subject01.hpts");
    fs::write(&output, "previous run\n").unwrap();

    let options = PositionOptions::default().with_overwrite(true);
    assert!(convert_positions(&input, &output, &options).is_err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous run\n");
}

#[test]
fn missing_input_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.pos");
    let output = dir.path().join("out.hpts");
    let err = convert_positions(&input, &output, &PositionOptions::default()).unwrap_err();
    assert!(matches!(err, PositionError::Read { .. }));
}
