//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements register-to-register arithmetic:
//! - ADD: `reg_a = reg_a + reg_b`
//! - MUL: `reg_a = reg_a * reg_b`
//!
//! Registers are 8 bits wide, so results wrap modulo 256.

use super::advance_pc;
use crate::cpu::Operands;
use crate::{ExecutionError, MemoryBus, Opcode, CPU};

/// Executes an ALU instruction (ADD or MUL).
///
/// Bytes: 3
///
/// # Examples
///
/// ```
/// use ls8::{Ram, CPU};
///
/// let mut cpu = CPU::new(Ram::new());
/// cpu.load_program(&[0xA0, 0x00, 0x01]).unwrap(); // ADD R0,R1
/// cpu.registers_mut().set(0, 200).unwrap();
/// cpu.registers_mut().set(1, 100).unwrap();
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.registers().get(0).unwrap(), 44); // 300 mod 256
/// assert_eq!(cpu.pc(), 3);
/// ```
pub(crate) fn execute_alu<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: Opcode,
    operands: Operands,
) -> Result<(), ExecutionError> {
    alu(cpu, opcode, operands.a, operands.b)?;

    advance_pc(cpu, opcode);

    Ok(())
}

/// Applies `op` to registers `reg_a` and `reg_b`, storing into `reg_a`.
///
/// Only `Add` and `Mul` are arithmetic operations; any other opcode is an
/// `UnsupportedAluOperation` fault.
pub(crate) fn alu<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: Opcode,
    reg_a: u8,
    reg_b: u8,
) -> Result<(), ExecutionError> {
    let a = cpu.registers.get(reg_a)?;
    let b = cpu.registers.get(reg_b)?;

    let result = match op {
        Opcode::Add => a.wrapping_add(b),
        Opcode::Mul => a.wrapping_mul(b),
        other => return Err(ExecutionError::UnsupportedAluOperation(other.mnemonic())),
    };

    cpu.registers.set(reg_a, result)
}
