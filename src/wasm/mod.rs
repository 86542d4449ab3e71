//! WebAssembly bindings for the LS-8 emulator.
//!
//! This module provides JavaScript-callable interfaces to the virtual machine,
//! enabling browser-based execution of `.ls8` programs.

pub mod api;

pub use api::Ls8Emulator;
