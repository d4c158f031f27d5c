//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use image::{Rgba, RgbaImage};
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the qrcraft binary
pub fn qrcraft_bin() -> &'static str {
    env!("CARGO_BIN_EXE_qrcraft")
}

/// Runs the binary with the given arguments.
pub fn run_qrcraft(args: &[&str]) -> Output {
    Command::new(qrcraft_bin())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Creates a temp dir for test inputs and outputs.
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Writes an opaque single-color 8x8 PNG logo into `dir` and returns its path.
pub fn create_test_logo(dir: &TempDir, rgba: [u8; 4]) -> PathBuf {
    let path = dir.path().join("logo.png");
    let img = RgbaImage::from_pixel(8, 8, Rgba(rgba));
    img.save(&path).expect("Failed to write logo fixture");
    path
}

/// Decodes stderr as a lossy UTF-8 string.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Decodes stdout as a lossy UTF-8 string.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Asserts the command succeeded, printing stderr on failure.
pub fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        stderr_of(output)
    );
}
