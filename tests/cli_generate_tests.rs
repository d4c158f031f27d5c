//! End-to-end tests for `qrcraft url` and `qrcraft text` commands.

use std::process::Command;

mod fixtures;
use fixtures::*;

#[test]
fn test_url_generates_png_with_requested_size() {
    let dir = temp_dir();
    let out_path = dir.path().join("code.png");

    let output = run_qrcraft(&[
        "url",
        "https://example.com",
        "--size",
        "200",
        "--output",
        out_path.to_str().unwrap(),
    ]);

    assert_success(&output);
    assert!(stdout_of(&output).contains("✓ Generated URL QR code"));
    assert!(out_path.exists(), "PNG should exist at {}", out_path.display());

    let img = image::open(&out_path).expect("Failed to read generated PNG");
    assert_eq!(img.width(), 200);
    assert_eq!(img.height(), 200);
}

#[test]
fn test_url_empty_input_fails_and_writes_nothing() {
    let dir = temp_dir();
    let out_path = dir.path().join("code.png");

    let output = run_qrcraft(&["url", "   ", "--output", out_path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Please enter a URL"));
    assert!(!out_path.exists(), "No file may be written on validation failure");
}

#[test]
fn test_text_generates_png() {
    let dir = temp_dir();
    let out_path = dir.path().join("text.png");

    let output = run_qrcraft(&[
        "text",
        "hello from the terminal",
        "--size",
        "128",
        "--output",
        out_path.to_str().unwrap(),
    ]);

    assert_success(&output);
    assert!(stdout_of(&output).contains("Plain Text"));
    assert!(out_path.exists());
}

#[test]
fn test_text_empty_input_fails() {
    let output = run_qrcraft(&["text", ""]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Please enter some text"));
}

#[test]
fn test_custom_foreground_color_is_applied() {
    let dir = temp_dir();
    let out_path = dir.path().join("red.png");

    let output = run_qrcraft(&[
        "url",
        "https://example.com",
        "--size",
        "128",
        "--fg",
        "#FF0000",
        "--output",
        out_path.to_str().unwrap(),
    ]);

    assert_success(&output);

    // The finder pattern puts a dark module in the top-left corner
    let img = image::open(&out_path).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
}

#[test]
fn test_invalid_color_is_rejected() {
    let output = run_qrcraft(&["url", "https://example.com", "--fg", "bright red"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Invalid hex color"));
}

#[test]
fn test_zero_size_is_rejected() {
    let output = run_qrcraft(&["url", "https://example.com", "--size", "0"]);

    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn test_default_output_filename() {
    let dir = temp_dir();

    let output = Command::new(qrcraft_bin())
        .args(["url", "https://example.com", "--size", "64"])
        .current_dir(dir.path())
        .output()
        .expect("Failed to execute command");

    assert_success(&output);
    assert!(
        dir.path().join("qrcraft-code.png").exists(),
        "Default export filename should be qrcraft-code.png"
    );
}

#[test]
fn test_preview_prints_unicode_blocks() {
    let dir = temp_dir();
    let out_path = dir.path().join("code.png");

    let output = run_qrcraft(&[
        "url",
        "https://example.com",
        "--preview",
        "--output",
        out_path.to_str().unwrap(),
    ]);

    assert_success(&output);
    let stdout = stdout_of(&output);
    assert!(
        stdout.contains('█') || stdout.contains('▀') || stdout.contains('▄'),
        "Preview should contain half-block characters"
    );
}
