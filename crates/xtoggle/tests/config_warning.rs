//! Integration tests for config warning behavior.

use std::fs;
use std::process::Command;

fn write_config(home: &std::path::Path, content: &str) {
    let config_dir = home.join(".xtoggle");
    fs::create_dir_all(&config_dir).expect("Failed to create .xtoggle dir");
    fs::write(config_dir.join("config.toml"), content).expect("Failed to write config");
}

/// An invalid config file produces a warning before the command runs.
///
/// PATH is emptied so the command fails right after loading config.
#[test]
fn test_config_warning_on_invalid_toml() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_config(temp_dir.path(), "invalid toml [[[");

    let output = Command::new(env!("CARGO_BIN_EXE_xtoggle"))
        .env("HOME", temp_dir.path())
        .env("PATH", temp_dir.path().join("empty"))
        .env("XDG_SESSION_TYPE", "x11")
        .args(["toggle", "1"])
        .output()
        .expect("Failed to execute xtoggle");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
    assert!(
        stderr.contains("Tip: Check ~/.xtoggle/config.toml"),
        "Expected tip about config file in stderr, got: {}",
        stderr
    );
    assert!(!output.status.success());
}

/// An unknown backend name is reported as a config warning.
#[test]
fn test_config_warning_on_unknown_backend() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_config(temp_dir.path(), "[backend]\ndefault = \"wayland\"\n");

    let output = Command::new(env!("CARGO_BIN_EXE_xtoggle"))
        .env("HOME", temp_dir.path())
        .env("PATH", temp_dir.path().join("empty"))
        .env("XDG_SESSION_TYPE", "x11")
        .args(["toggle", "1"])
        .output()
        .expect("Failed to execute xtoggle");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid backend 'wayland'"),
        "Expected backend warning in stderr, got: {}",
        stderr
    );
}

/// A valid config file does not produce warnings.
#[test]
fn test_no_warning_on_valid_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_config(temp_dir.path(), "[backend]\ndefault = \"xrandr\"\n");

    let output = Command::new(env!("CARGO_BIN_EXE_xtoggle"))
        .env("HOME", temp_dir.path())
        .env("PATH", temp_dir.path().join("empty"))
        .env("XDG_SESSION_TYPE", "x11")
        .args(["toggle", "1"])
        .output()
        .expect("Failed to execute xtoggle");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("Warning: Could not load config"),
        "Unexpected warning in stderr: {}",
        stderr
    );
    assert!(
        stderr.contains("xrandr is not installed"),
        "Expected missing xrandr error, got: {}",
        stderr
    );
}
