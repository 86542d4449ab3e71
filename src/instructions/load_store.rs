//! # Load Instructions
//!
//! - LDI: Load Immediate into a register
//!
//! `LD` and `ST` are reserved encodings without handlers.

use super::advance_pc;
use crate::cpu::Operands;
use crate::{ExecutionError, MemoryBus, Opcode, CPU};

/// Executes the LDI (Load Immediate) instruction.
///
/// `LDI reg, imm` sets `reg` to the immediate byte.
///
/// Bytes: 3
///
/// # Examples
///
/// ```
/// use ls8::{Ram, CPU};
///
/// let mut cpu = CPU::new(Ram::new());
/// cpu.load_program(&[0x82, 0x03, 0x2A]).unwrap(); // LDI R3,42
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.registers().get(3).unwrap(), 42);
/// assert_eq!(cpu.pc(), 3);
/// ```
pub(crate) fn execute_ldi<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: Opcode,
    operands: Operands,
) -> Result<(), ExecutionError> {
    cpu.registers.set(operands.a, operands.b)?;

    advance_pc(cpu, opcode);

    Ok(())
}
