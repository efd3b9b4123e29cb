// Integration tests for the mediasniff binary

use std::fs;
use std::process::Command;

fn mediasniff() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mediasniff"))
}

#[test]
fn test_version_display() {
    let output = mediasniff()
        .arg("--version")
        .output()
        .expect("Failed to run mediasniff --version");

    assert!(output.status.success(), "Version command failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mediasniff"), "Expected 'mediasniff' in version output");
}

#[test]
fn test_help_display() {
    let output = mediasniff()
        .arg("--help")
        .output()
        .expect("Failed to run mediasniff --help");

    assert!(output.status.success(), "Help command failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("detect") && stdout.contains("info") && stdout.contains("stage"),
        "Expected commands in help output"
    );
}

#[test]
fn test_detect_json() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("frame"), [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]).unwrap();
    fs::write(dir.path().join("movie.AVI"), b"").unwrap();

    let output = mediasniff()
        .args(["detect", "--json"])
        .arg(dir.path())
        .output()
        .expect("Failed to run mediasniff detect");

    assert!(output.status.success(), "Detect command failed");

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Invalid JSON");
    let types: Vec<&str> = parsed
        .as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|d| d["media_type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["png", "avi"]);
}

#[test]
fn test_stage_rejects_unknown() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("notes.txt");
    fs::write(&file, b"just text").unwrap();

    let output = mediasniff()
        .arg("stage")
        .arg(&file)
        .arg("--cache-dir")
        .arg(dir.path().join("cache"))
        .output()
        .expect("Failed to run mediasniff stage");

    assert!(!output.status.success(), "Stage should refuse unknown files");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported file type"));
}

#[test]
fn test_stage_creates_cache_folder() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("cat.gif");
    fs::write(&file, b"GIF89a").unwrap();
    let cache = dir.path().join("cache");

    let output = mediasniff()
        .arg("stage")
        .arg(&file)
        .args(["--cache-dir"])
        .arg(&cache)
        .args(["--naming", "custom", "--name", "shared"])
        .output()
        .expect("Failed to run mediasniff stage");

    assert!(output.status.success(), "Stage command failed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("shared.gif"));

    let folders: Vec<_> = fs::read_dir(&cache).unwrap().filter_map(|e| e.ok()).collect();
    assert_eq!(folders.len(), 1);
}
