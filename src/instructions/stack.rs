//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PUSH: Push a register onto the stack
//! - POP: Pop the top of the stack into a register
//!
//! The stack lives in main memory and grows downward from `STACK_START`.
//! R7 holds the address of the current top of stack. A push decrements R7
//! and then writes; a pop reads and then increments R7. Neither overflow nor
//! underflow is prevented: R7 wraps within 8 bits.

use log::warn;

use super::advance_pc;
use crate::cpu::Operands;
use crate::{ExecutionError, MemoryBus, Opcode, CPU};

/// Decrements SP and stores `value` at the new top of stack.
pub(crate) fn push_value<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> Result<(), ExecutionError> {
    let old_sp = cpu.registers.sp();
    if old_sp == 0x00 {
        warn!("stack pointer wrapped below 0x00 at PC {:#04X}", cpu.pc);
    }

    let sp = old_sp.wrapping_sub(1);
    cpu.registers.set_sp(sp);
    cpu.memory.write(sp as u16, value)
}

/// Reads the top of stack and increments SP.
pub(crate) fn pop_value<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<u8, ExecutionError> {
    let sp = cpu.registers.sp();
    let value = cpu.memory.read(sp as u16)?;

    if sp == 0xFF {
        warn!("stack pointer wrapped above 0xFF at PC {:#04X}", cpu.pc);
    }
    cpu.registers.set_sp(sp.wrapping_add(1));

    Ok(value)
}

/// Executes the PUSH instruction.
///
/// Bytes: 2
///
/// # Examples
///
/// ```
/// use ls8::{MemoryBus, Ram, CPU};
///
/// let mut cpu = CPU::new(Ram::new());
/// cpu.load_program(&[0x45, 0x02]).unwrap(); // PUSH R2
/// cpu.registers_mut().set(2, 0x42).unwrap();
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.sp(), 0xF3);
/// assert_eq!(cpu.memory().read(0xF3).unwrap(), 0x42);
/// assert_eq!(cpu.pc(), 2);
/// ```
pub(crate) fn execute_push<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: Opcode,
    operands: Operands,
) -> Result<(), ExecutionError> {
    let value = cpu.registers.get(operands.a)?;
    push_value(cpu, value)?;

    advance_pc(cpu, opcode);

    Ok(())
}

/// Executes the POP instruction.
///
/// The register index is validated before SP moves, so a bad operand leaves
/// the stack untouched.
///
/// Bytes: 2
pub(crate) fn execute_pop<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: Opcode,
    operands: Operands,
) -> Result<(), ExecutionError> {
    cpu.registers.get(operands.a)?;

    let value = pop_value(cpu)?;
    cpu.registers.set(operands.a, value)?;

    advance_pc(cpu, opcode);

    Ok(())
}
