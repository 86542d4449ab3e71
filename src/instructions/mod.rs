//! # LS-8 Instruction Implementations
//!
//! Each instruction is a standalone function taking a mutable reference to
//! the CPU, the decoded opcode and its operand bytes. Handlers advance PC by
//! the instruction width unless they transfer control.
//!
//! ## Categories
//!
//! - **alu**: Register arithmetic (ADD, MUL)
//! - **control**: Control flow (HLT, CALL, RET)
//! - **io**: Output (PRN)
//! - **load_store**: Register loads (LDI)
//! - **stack**: Stack operations (PUSH, POP) and the push/pop helpers

pub mod alu;
pub mod control;
pub mod io;
pub mod load_store;
pub mod stack;

use crate::{MemoryBus, Opcode, CPU};

/// Moves PC past an instruction that does not transfer control.
pub(crate) fn advance_pc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: Opcode) {
    cpu.pc = cpu
        .pc
        .wrapping_add(opcode.metadata().size_bytes as u16);
}
