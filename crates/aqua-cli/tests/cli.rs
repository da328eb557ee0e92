use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::{Value, json};
use tempfile::TempDir;

fn write_upload(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write upload");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aqua-clean"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run aqua-clean")
}

fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1, "stdout: {stdout}");
    serde_json::from_str(stdout.trim()).expect("stdout is JSON")
}

fn stderr_error(output: &Output) -> Value {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .rev()
        .find(|line| line.starts_with('{'))
        .unwrap_or_else(|| panic!("no JSON error in stderr: {stderr}"));
    serde_json::from_str(line).expect("stderr error is JSON")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

#[test]
fn cleans_ocean_upload_to_json() {
    let dir = TempDir::new().unwrap();
    let input = write_upload(
        &dir,
        "ocean.csv",
        "EventID,Temp_C,Depth(m),Lat,Long\n\"0\",25.5,100,19.0,72.9\n",
    );
    let output = run(&[path_arg(&input), "ocean"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!([{
            "eventID": "OCEAN_1",
            "temperature_C": 25.5,
            "DepthInMeters": 100.0,
            "decimalLatitude": 19.0,
            "decimalLongitude": 72.9,
            "locality": "Mumbai"
        }])
    );
}

#[test]
fn unmatched_columns_print_empty_array() {
    let dir = TempDir::new().unwrap();
    let input = write_upload(&dir, "other.csv", "foo,bar\n1,2\n");
    let output = run(&[path_arg(&input), "ocean"]);

    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!([]));
}

#[test]
fn unknown_kind_reports_structured_error() {
    let dir = TempDir::new().unwrap();
    let input = write_upload(&dir, "ocean.csv", "Temp\n20\n");
    let output = run(&[path_arg(&input), "edna"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let error = stderr_error(&output);
    let message = error["error"].as_str().expect("error message");
    assert!(message.contains("edna"), "{message}");
}

#[test]
fn fish_rows_without_taxonomy_are_dropped() {
    let dir = TempDir::new().unwrap();
    let input = write_upload(
        &dir,
        "fish.csv",
        "scientificName,Family,Genus,Species,Class,organismQuantity\n\
         Sardinella longiceps,Clupeidae,Sardinella,longiceps,Actinopterygii,40\n\
         ,,,,,7\n",
    );
    let output = run(&[path_arg(&input), "fish"]);

    assert!(output.status.success());
    let records = stdout_json(&output);
    let records = records.as_array().expect("array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["scientificName"], "Sardinella longiceps");
    assert_eq!(records[0]["organismQuantity"], 40.0);
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.csv");
    let output = run(&[path_arg(&missing), "ocean"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_error(&output)["error"].is_string());
}

#[test]
fn wrong_argument_count_is_a_usage_error() {
    let output = run(&["only-one-arg.csv"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(stderr_error(&output)["error"].is_string());
}

#[test]
fn csv_export_and_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_upload(&dir, "ocean.csv", "EventID,Temp\nA,20\nA,20\nB,99\n");
    let csv_out = dir.path().join("cleaned.csv");
    let output = run(&[
        path_arg(&input),
        "ocean",
        "--csv-out",
        path_arg(&csv_out),
        "--summary",
        "--color",
        "never",
    ]);

    assert!(output.status.success());
    let exported = fs::read_to_string(&csv_out).expect("read export");
    assert_eq!(
        exported,
        "eventID,temperature_C,locality\nA,20.0,Unknown\n"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Duplicate rows removed"), "{stderr}");
}

#[test]
fn strict_event_ids_drop_nonconforming_rows() {
    let dir = TempDir::new().unwrap();
    let input = write_upload(&dir, "ocean.csv", "eventID,Temp\nEV2023_01,20\n0,21\n");
    let output = run(&[path_arg(&input), "ocean", "--strict-event-ids"]);

    assert!(output.status.success());
    let records = stdout_json(&output);
    assert_eq!(records.as_array().map(Vec::len), Some(1));
    assert_eq!(records[0]["eventID"], "EV2023_01");
}

#[test]
fn strict_event_ids_are_rejected_for_fish() {
    let dir = TempDir::new().unwrap();
    let input = write_upload(&dir, "fish.csv", "scientificName\nThunnus\n");
    let output = run(&[path_arg(&input), "fish", "--strict-event-ids"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn column_overrides_are_applied() {
    let dir = TempDir::new().unwrap();
    let input = write_upload(&dir, "ocean.csv", "reading,Lat\n22.5,19\n");
    let output = run(&[path_arg(&input), "ocean", "--map", "reading=temperature_C"]);

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)[0]["temperature_C"], 22.5);
}

#[test]
fn custom_locality_table_is_used() {
    let dir = TempDir::new().unwrap();
    let regions = write_upload(
        &dir,
        "regions.csv",
        "name,min_lat,max_lat,min_lon,max_lon\nTest Bay,0,1,0,1\n",
    );
    let input = write_upload(&dir, "ocean.csv", "Lat,Long\n0.5,0.5\n");
    let output = run(&[path_arg(&input), "ocean", "--regions", path_arg(&regions)]);

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)[0]["locality"], "Test Bay");
}
