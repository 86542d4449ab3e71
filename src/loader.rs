//! # Program Loader
//!
//! Reads LS-8 programs written as text, one binary byte per line:
//!
//! ```text
//! # print8.ls8: print the number 8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```
//!
//! - `#` starts a comment, on its own line or after a value
//! - Blank lines are skipped; surrounding whitespace is ignored
//! - A `0b` prefix is accepted
//!
//! The result is the byte sequence to place in memory from address 0.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::MEMORY_SIZE;

/// Errors produced while reading a program.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A line is not a binary number.
    #[error("invalid number {text:?} on line {line}")]
    InvalidNumber { line: usize, text: String },

    /// A binary number does not fit in a byte.
    #[error("value {value} on line {line} does not fit in a byte")]
    ByteOutOfRange { line: usize, value: u32 },

    /// The program is larger than memory.
    #[error("program is {len} bytes but memory holds only {capacity}")]
    ProgramTooLarge { len: usize, capacity: usize },

    /// The program file does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The program file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Parses program text into bytes.
///
/// # Examples
///
/// ```
/// use ls8::parse_program;
///
/// let source = "
/// ## LDI R0,8
/// 10000010
/// 00000000
/// 00001000 # immediate
/// ";
///
/// assert_eq!(parse_program(source).unwrap(), vec![0x82, 0x00, 0x08]);
/// ```
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }

        program.push(parse_byte(line, text)?);
    }

    if program.len() > MEMORY_SIZE {
        return Err(LoadError::ProgramTooLarge {
            len: program.len(),
            capacity: MEMORY_SIZE,
        });
    }

    Ok(program)
}

/// Reads and parses the program at `path`.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();

    let source = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let program = parse_program(&source)?;
    debug!("read {} bytes from {}", program.len(), path.display());

    Ok(program)
}

fn parse_byte(line: usize, text: &str) -> Result<u8, LoadError> {
    let digits = text
        .strip_prefix("0b")
        .or_else(|| text.strip_prefix("0B"))
        .unwrap_or(text);

    let invalid = || LoadError::InvalidNumber {
        line,
        text: text.to_string(),
    };

    // from_str_radix accepts a leading sign; program bytes never have one
    if !digits.starts_with(|c: char| c == '0' || c == '1') {
        return Err(invalid());
    }

    let value = u32::from_str_radix(digits, 2).map_err(|_| invalid())?;
    u8::try_from(value).map_err(|_| LoadError::ByteOutOfRange { line, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_and_blank_lines() {
        let source = "# header\n\n   \n10000010 # LDI\n  00000001  \n#00000011\n";

        assert_eq!(parse_program(source).unwrap(), vec![0x82, 0x01]);
    }

    #[test]
    fn test_prefix_accepted() {
        assert_eq!(parse_program("0b101\n0B11").unwrap(), vec![5, 3]);
    }

    #[test]
    fn test_invalid_number_reports_line() {
        match parse_program("00000001\n\n0000002\n") {
            Err(LoadError::InvalidNumber { line, text }) => {
                assert_eq!(line, 3);
                assert_eq!(text, "0000002");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_sign_is_rejected() {
        assert!(matches!(
            parse_program("+1"),
            Err(LoadError::InvalidNumber { line: 1, .. })
        ));
    }

    #[test]
    fn test_byte_out_of_range() {
        assert!(matches!(
            parse_program("100000000"),
            Err(LoadError::ByteOutOfRange { line: 1, value: 256 })
        ));
    }

    #[test]
    fn test_program_too_large() {
        let source = "00000000\n".repeat(257);

        assert!(matches!(
            parse_program(&source),
            Err(LoadError::ProgramTooLarge { len: 257, capacity: 256 })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_file("does/not/exist.ls8").unwrap_err();

        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(err.to_string(), "file not found: does/not/exist.ls8");
    }
}
