#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the hotels-server binary

use std::process::{Command, Stdio};

use tempfile::TempDir;

fn run_hotels_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_hotels-server"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute hotels-server")
}

fn write_config(dir: &TempDir, yaml: &str) -> String {
    let path = dir.path().join("hotels.yaml");
    std::fs::write(&path, yaml).unwrap();
    path.to_string_lossy().into_owned()
}

const VALID_CONFIG: &str = r#"
server:
  bind_addr: "127.0.0.1:0"
database:
  dsn: "sqlite::memory:"
hotels:
  jwt_secret: "smoke-test-secret"
"#;

#[test]
fn test_cli_help_command() {
    let output = run_hotels_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_cli_version_command() {
    let output = run_hotels_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("hotels-server"), "Should contain binary name");
}

#[test]
fn test_check_accepts_valid_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, VALID_CONFIG);

    let output = run_hotels_server(&["--config", &path, "check"]);

    assert!(
        output.status.success(),
        "check should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"));
    assert!(!stdout.contains("smoke-test-secret"), "Secret must be masked");
}

#[test]
fn test_check_rejects_missing_secret() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "server:\n  bind_addr: \"127.0.0.1:0\"\n");

    let output = run_hotels_server(&["--config", &path, "check"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("jwt_secret"), "stderr: {stderr}");
}

#[test]
fn test_missing_config_file_fails() {
    let output = run_hotels_server(&["--config", "/nonexistent/hotels.yaml", "check"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"), "stderr: {stderr}");
}

#[test]
fn test_unknown_config_key_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "hotels:\n  jwt_secret: \"x\"\n  jwt_secrte: \"y\"\n");

    let output = run_hotels_server(&["--config", &path, "check"]);

    assert!(!output.status.success());
}

#[test]
fn test_print_config_applies_port_override() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, VALID_CONFIG);

    let output = run_hotels_server(&["--config", &path, "--port", "9123", "--print-config"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Effective configuration:"));
    assert!(stdout.contains("127.0.0.1:9123"), "stdout: {stdout}");
}

#[test]
fn test_env_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, VALID_CONFIG);

    let output = Command::new(env!("CARGO_BIN_EXE_hotels-server"))
        .args(["--config", &path, "--print-config"])
        .env("HOTELS__LOGGING__FORMAT", "json")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("json"), "stdout: {stdout}");
}
