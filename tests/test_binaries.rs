//! Integration tests for the rsdecode binary

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn rsdecode() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rsdecode"))
}

#[test]
fn test_help() {
    let output = rsdecode()
        .arg("--help")
        .output()
        .expect("Failed to execute rsdecode");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Reed-Solomon syndrome and error-locator decoder"));
    assert!(stdout.contains("--generator"));
}

#[test]
fn test_zero_word_is_error_free() {
    let output = rsdecode()
        .args(["0"; 15])
        .output()
        .expect("Failed to execute rsdecode");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error locator: [1, 0, 0]"));
    assert!(stdout.contains("No errors detected"));
}

#[test]
fn test_single_error_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("word.txt");
    // All-zero codeword with a 1 at position 3
    fs::write(&path, "0, 0, 0, 1, 0, 0, 0, 0\n0, 0, 0, 0, 0, 0, 0\n").unwrap();

    let output = rsdecode()
        .args(["--size", "16", "--data-symbols", "11", "--generator", "0x13"])
        .arg("--input")
        .arg(&path)
        .output()
        .expect("Failed to execute rsdecode");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Syndromes: [8, 12, 10, 15]"));
    assert!(stdout.contains("Error locator: [1, 8, 0]"));
    assert!(stdout.contains("1 error(s) detected"));
}

#[test]
fn test_hex_word_gf256() {
    let mut word = vec![0u8; 255];
    word[10] = 0x42;
    let output = rsdecode()
        .args(["--size", "256", "--data-symbols", "251"])
        .args(["--hex", &hex::encode(&word)])
        .output()
        .expect("Failed to execute rsdecode");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Degree: 1 (L = 1)"));
}

#[test]
fn test_wrong_length_fails() {
    let output = rsdecode()
        .args(["1", "2", "3"])
        .output()
        .expect("Failed to execute rsdecode");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("has length 3, expected 15"));
}

#[test]
fn test_invalid_configuration_fails() {
    let output = rsdecode()
        .args(["--size", "16", "--data-symbols", "14", "0"])
        .output()
        .expect("Failed to execute rsdecode");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid decoder configuration"));

    let output = rsdecode()
        .args(["--size", "32", "0"])
        .output()
        .expect("Failed to execute rsdecode");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No built-in generator polynomial for GF(32)"));
}
