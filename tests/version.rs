//! Integration test: Verify binary prints correct version

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_pucy"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected output to contain version '{}', but got: {}",
        env!("CARGO_PKG_VERSION"),
        stdout
    );
}

#[test]
fn missing_file_exits_non_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_pucy"))
        .arg("/nonexistent/pucy-input.txt")
        .env("PUCY_CONFIG", "/nonexistent/pucy-config.toml")
        .env("XDG_STATE_HOME", std::env::temp_dir())
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "nothing is printed on failure");
}
