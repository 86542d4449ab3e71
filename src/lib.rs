//! # LS-8 Virtual Machine
//!
//! A small 8-bit virtual machine with 256 bytes of memory, eight byte-wide
//! registers and a fixed instruction set of a dozen opcodes.
//!
//! The crate provides the execution engine (memory, registers, dispatch, ALU
//! and the call stack) plus the collaborators around it: a loader for `.ls8`
//! text programs, a disassembler and optional WebAssembly bindings.
//!
//! ## Quick Start
//!
//! ```rust
//! use ls8::{Ram, CPU};
//!
//! let mut cpu = CPU::new(Ram::new());
//!
//! // LDI R0,8; PRN R0; HLT
//! cpu.load_program(&[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]).unwrap();
//!
//! let mut printed = Vec::new();
//! cpu.set_print_callback(move |value| printed.push(value));
//!
//! cpu.run().unwrap();
//! assert!(cpu.halted());
//! assert_eq!(cpu.pc(), 6);
//! ```
//!
//! ## Architecture
//!
//! - **Ownership**: one `CPU` value owns its memory, registers and program counter
//! - **Explicit faults**: out-of-range memory or register access is an error, not UB
//! - **Exhaustive dispatch**: opcodes decode into the `Opcode` enum and are matched
//! - **8-bit arithmetic**: ALU results wrap modulo 256
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute loop
//! - `memory` - MemoryBus trait and the 256-byte RAM
//! - `registers` - Register file and the stack pointer register
//! - `opcodes` - Opcode enumeration and metadata
//! - `loader` - `.ls8` program text parsing
//! - `disassembler` - Byte code to text listing

pub mod cpu;
pub mod disassembler;
pub mod loader;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use cpu::CPU;
pub use disassembler::{disassemble, format_instruction, format_listing, Instruction};
pub use loader::{load_file, parse_program, LoadError};
pub use memory::{MemoryBus, Ram, MEMORY_SIZE};
pub use opcodes::{Opcode, OpcodeMetadata, OperandKind};
pub use registers::{RegisterFile, REGISTER_COUNT, SP, STACK_START};

/// Errors that can occur during CPU execution.
///
/// Every variant is terminal for the run: the CPU stops at the faulting
/// instruction and leaves PC pointing at it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The opcode byte has no handler.
    ///
    /// Contains the opcode byte and the address it was fetched from.
    #[error("unknown instruction {opcode} at address {pc}")]
    UnknownInstruction { opcode: u8, pc: u16 },

    /// The ALU was asked to perform an operation it does not implement.
    #[error("unsupported ALU operation {0}")]
    UnsupportedAluOperation(&'static str),

    /// A memory access fell outside the 256-byte address space.
    #[error("memory address {0} is out of range")]
    AddressOutOfRange(u16),

    /// An operand named a register that does not exist.
    #[error("register R{0} does not exist")]
    RegisterOutOfRange(u8),
}
