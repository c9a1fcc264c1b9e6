use serde_json::Value;
use std::f64::consts::PI;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_great-circle");

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("great_circle_cli_{}_{}.json", name, std::process::id()))
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(BIN)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary starts");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("stdin accepts the request");
    child.wait_with_output().expect("binary finishes")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_success_exits_zero() {
    let output = Command::new(BIN)
        .args(["half-circumference", "--request", r#"{"bodyRadius": 1}"#])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let value = stdout_json(&output);
    assert!((value["halfCircumference"].as_f64().unwrap() - PI).abs() < 1e-12);
}

#[test]
fn test_request_read_from_stdin() {
    let body = r#"{"originLatitude": 0, "originLongitude": 0, "destinationLatitude": 0, "destinationLongitude": 90, "bodyRadius": 6371000}"#;
    let output = run_with_stdin(&["haversine"], body);

    assert_eq!(output.status.code(), Some(0));
    let distance = stdout_json(&output)["distance"].as_f64().unwrap();
    assert!((distance - 10_007_543.0).abs() < 1.0, "Distance was {}", distance);
}

#[test]
fn test_rejected_request_exits_two() {
    let output = run_with_stdin(&["vincenty"], r#"{"originLatitude": 10}"#);

    assert_eq!(output.status.code(), Some(2));
    let value = stdout_json(&output);
    assert!(value.get("destinationLatitude").is_some());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[WARN vincenty]"), "stderr was {}", stderr);
}

#[test]
fn test_malformed_json_exits_one() {
    let output = run_with_stdin(&["azimuth"], "not json");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("error:"));
}

#[test]
fn test_write_config_then_load_it() {
    let path = temp_path("written");
    let path_arg = path.to_string_lossy().to_string();

    let output = Command::new(BIN).args(["write-config", path_arg.as_str()]).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["default_body_radius"], 6_371_000.0);
    assert_eq!(written["azimuth_convention"], "spherical");

    let output = Command::new(BIN)
        .args(["--config", path_arg.as_str(), "distance-to-poles", "-r", r#"{"bodyRadius": 2}"#])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let _ = fs::remove_file(path);
}

#[test]
fn test_config_warnings_reported() {
    let path = temp_path("permissive");
    let path_arg = path.to_string_lossy().to_string();
    fs::write(&path, r#"{ "enforce_ranges": false, "azimuth_convention": "legacy" }"#).unwrap();

    let output = Command::new(BIN)
        .args([
            "--config",
            path_arg.as_str(),
            "half-circumference",
            "--request",
            r#"{"bodyRadius": 1}"#,
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("[WARN config]").count(), 2, "stderr was {}", stderr);

    let _ = fs::remove_file(path);
}

#[test]
fn test_missing_config_file_exits_one() {
    let path_arg = temp_path("absent").to_string_lossy().to_string();
    let output = Command::new(BIN)
        .args(["--config", path_arg.as_str(), "half-circumference", "-r", "{}"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}
