use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".stkr").join("config.json")
}

const BINARY_NAME: &str = "stkr";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"))
        .stdout(contains("Usage:"));
}

#[test]
/// Elided addresses keep the first 6 and last 4 characters.
fn address_prints_elided_addresses() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    let output = cmd
        .args(["address", "--count", "3", "--seed", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert_eq!(line.len(), 13, "unexpected address {line}");
        assert!(line.starts_with("0x"));
        assert_eq!(&line[6..9], "...");
    }
}

#[test]
/// The same seed yields the same full addresses.
fn address_is_deterministic_with_a_seed() {
    let run = || {
        Command::cargo_bin(BINARY_NAME)
            .unwrap()
            .args(["address", "--full", "--seed", "42"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    let first = run();
    assert_eq!(first, run());

    let address = String::from_utf8(first).unwrap();
    let address = address.trim();
    assert_eq!(address.len(), 42);
    assert!(address[2..].chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
/// Headless mode stops after the requested number of live donations.
fn headless_start_runs_the_feed() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args([
        "start",
        "--headless",
        "--seed",
        "7",
        "--feed-interval-ms",
        "10",
        "--max-ticks",
        "2",
    ])
    .env("HOME", tmp.path())
    .timeout(std::time::Duration::from_secs(30))
    .assert()
    .success()
    .stdout(contains("Page loaded with 5 donations"))
    .stdout(contains("donated").count(2))
    .stdout(contains("7 donations"));
}

#[test]
/// Values from the config file are picked up from $HOME.
fn headless_start_reads_the_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, r#"{"feed_interval_ms": 10, "seed": 3}"#).unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--headless", "--max-ticks", "1"])
        .env("HOME", tmp.path())
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success()
        .stdout(contains("seed 3"))
        .stdout(contains("new donation every 10ms"));
}

#[test]
/// An unreadable config file is reported and the command fails.
fn start_rejects_an_invalid_config_file() {
    let tmp = temp_home_dir();
    let config_path = tmp.path().join("broken.json");
    fs::write(&config_path, "not json").unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--headless", "--config"])
        .arg(&config_path)
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Failed to load config"));
}
