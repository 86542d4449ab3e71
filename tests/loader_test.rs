//! Loader tests against real files.

use std::fs;
use std::path::PathBuf;

use ls8::{load_file, LoadError};

/// Writes `contents` to a uniquely named file in the system temp directory.
fn temp_program(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("ls8-{}-{}.ls8", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_bundled_program() {
    let program = load_file(concat!(env!("CARGO_MANIFEST_DIR"), "/programs/print8.ls8")).unwrap();

    assert_eq!(program, vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
}

#[test]
fn test_load_temp_file() {
    let path = temp_program("ok", "# comment only\n\n00000001 # HLT\n");

    let program = load_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(program, vec![0x01]);
}

#[test]
fn test_load_invalid_line() {
    let path = temp_program("invalid", "10000010\nLDI\n");

    let err = load_file(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    match err {
        LoadError::InvalidNumber { line, text } => {
            assert_eq!(line, 2);
            assert_eq!(text, "LDI");
        }
        other => panic!("expected InvalidNumber, got {:?}", other),
    }
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("ls8-definitely-missing.ls8");

    assert!(matches!(load_file(&path), Err(LoadError::NotFound { .. })));
}

#[test]
fn test_load_directory_is_io_error() {
    let err = load_file(std::env::temp_dir()).unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }));
}
