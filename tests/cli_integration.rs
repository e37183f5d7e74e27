//! Integration tests for the hotspot-labels binary.

use assert_cmd::cargo::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/hotspots.csv")
}

/// Command isolated from any user configuration or environment filter.
fn command(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo_bin("hotspot-labels"));
    cmd.env("HOTSPOT_LABELS_CONFIG", config_dir.join("config.toml"))
        .env_remove("HOTSPOT_LABELS_FILTER")
        .env_remove("RUST_LOG")
        .arg("--no-progress");
    cmd
}

#[test]
fn test_stats_report() {
    let dir = tempdir().unwrap();

    command(dir.path())
        .arg("stats")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total hotspots: 5"))
        .stdout(predicate::str::contains("Invalid records: 2"))
        .stdout(predicate::str::contains("  Animal: 2"));
}

#[test]
fn test_stats_with_filter() {
    let dir = tempdir().unwrap();

    command(dir.path())
        .arg("stats")
        .arg(fixture())
        .arg("--filter")
        .arg("hotspot_type=Anomaly")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total hotspots: 1"))
        .stdout(predicate::str::contains("  Anomaly: 1"))
        .stdout(predicate::str::contains("Animal").not());
}

#[test]
fn test_invalid_filter_fails() {
    let dir = tempdir().unwrap();

    command(dir.path())
        .arg("stats")
        .arg(fixture())
        .arg("--filter")
        .arg("colour=red")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid filter clause"));
}

#[test]
fn test_filter_writes_csv() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("animals.csv");

    command(dir.path())
        .arg("filter")
        .arg(fixture())
        .arg("-f")
        .arg("species_id=Ringed Seal")
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("\"hotspot_id\",\"timestamp\""));
    assert!(lines[1].starts_with("\"1\","));
    assert!(lines[1].contains(",100,50,1000,2000,1100,2100,"));
    assert!(lines[2].starts_with("\"4\","));
}

#[test]
fn test_annotations_to_stdout() {
    let dir = tempdir().unwrap();

    let assert = command(dir.path())
        .arg("annotations")
        .arg(fixture())
        .arg("--compact")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let boxes = &value["thermal16"]["CHESS_FL1_C_160407_235833.627_THERM-16BIT.PNG"]["bboxes"];
    assert_eq!(boxes.as_array().unwrap().len(), 2);
}

#[test]
fn test_malformed_filename_is_fatal() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.csv");
    std::fs::write(
        &input,
        "hotspot_id,timestamp,filt_thermal16,filt_thermal8,filt_color,x_pos,y_pos,thumb_left,thumb_top,thumb_right,thumb_bottom,hotspot_type,species_id\n\
1,20160407235833.627GMT,thermal.png,b,c,0,0,0,0,0,0,Animal,Seal\n",
    )
    .unwrap();

    command(dir.path())
        .arg("stats")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed image filename"));
}

#[test]
fn test_config_path_honours_override() {
    let dir = tempdir().unwrap();

    command(dir.path())
        .arg("config")
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
