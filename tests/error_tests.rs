//! Error scenario integration tests

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn flight_report_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_flight-report"))
}

fn fixture(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("flights.json");
    fs::write(&path, contents).expect("Failed to write fixture");
    (dir, path)
}

#[test]
fn missing_input_option() {
    flight_report_bin()
        .arg("-d")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please, specify input file"));
}

#[test]
fn no_arguments_at_all() {
    flight_report_bin()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please, specify input file"));
}

#[test]
fn output_missing_value() {
    let (_dir, input) = fixture("[]");

    flight_report_bin()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please, specify output file path"));
}

#[test]
fn airtime_missing_value() {
    let (_dir, input) = fixture("[]");

    flight_report_bin()
        .arg("-i")
        .arg(&input)
        .arg("-a")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please, specify airtime value"));
}

#[test]
fn input_file_not_found() {
    let dir = tempfile::tempdir().unwrap();

    flight_report_bin()
        .arg("-i")
        .arg(dir.path().join("nope.json"))
        .arg("-d")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Cannot find input file"));
}

#[test]
fn invalid_json() {
    let (_dir, input) = fixture("this is {not json\nat all]");

    flight_report_bin()
        .arg("-i")
        .arg(&input)
        .arg("-d")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Invalid JSON format in input file"));
}

#[test]
fn airtime_not_a_number() {
    let (dir, input) = fixture(r#"[{"AIR_TIME":50,"DISTANCE":200}]"#);
    let output = dir.path().join("report.txt");

    flight_report_bin()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["-a", "abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Airtime must be a number"));

    // Validation fails before anything is written
    assert!(!output.exists());
}

#[test]
fn missing_file_reported_before_bad_airtime() {
    let dir = tempfile::tempdir().unwrap();

    flight_report_bin()
        .arg("-i")
        .arg(dir.path().join("nope.json"))
        .args(["-a", "abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot find input file"));
}

#[test]
fn unwritable_output_path() {
    let (dir, input) = fixture(r#"[{"AIR_TIME":50,"DISTANCE":200}]"#);

    flight_report_bin()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("missing-dir").join("report.txt"))
        .arg("-d")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Cannot write output file"));
}

#[test]
fn unknown_option() {
    let (_dir, input) = fixture("[]");

    flight_report_bin()
        .arg("-i")
        .arg(&input)
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--bogus"));
}
