//! Fuzz target for the program loader.
//!
//! Feeds arbitrary text to the `.ls8` parser to find panics in line
//! splitting, comment stripping and number parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ls8::{parse_program, MEMORY_SIZE};

fuzz_target!(|data: &[u8]| {
    let source = String::from_utf8_lossy(data);

    // Errors are fine; panics are not
    if let Ok(program) = parse_program(&source) {
        assert!(program.len() <= MEMORY_SIZE);
    }
});
