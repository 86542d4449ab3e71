//! # Output Instructions
//!
//! - PRN: Print a register in decimal
//!
//! `PRA` is a reserved encoding without a handler.

use super::advance_pc;
use crate::cpu::Operands;
use crate::{ExecutionError, MemoryBus, Opcode, CPU};

/// Executes the PRN (Print Numeric) instruction.
///
/// Hands the value of the register to the CPU's print callback. The default
/// callback writes it to standard output as a decimal number followed by a
/// newline.
///
/// Bytes: 2
pub(crate) fn execute_prn<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: Opcode,
    operands: Operands,
) -> Result<(), ExecutionError> {
    let value = cpu.registers.get(operands.a)?;

    (cpu.on_print)(value);

    advance_pc(cpu, opcode);

    Ok(())
}
