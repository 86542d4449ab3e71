//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - HLT: Halt the CPU
//! - CALL: Call a subroutine whose address is held in a register
//! - RET: Return from a subroutine
//!
//! CALL pushes the address of the instruction that follows it (PC + 2) and
//! RET pops it back into PC. Nothing checks that calls and returns pair up;
//! an unbalanced PUSH/POP inside a subroutine returns to the wrong place.

use log::debug;

use super::advance_pc;
use super::stack::{pop_value, push_value};
use crate::cpu::Operands;
use crate::{ExecutionError, MemoryBus, Opcode, CPU};

/// Executes the HLT instruction.
///
/// Advances PC past the opcode and sets the halt flag. The run loop stops;
/// terminating the process is left to the caller.
///
/// Bytes: 1
pub(crate) fn execute_hlt<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: Opcode,
) -> Result<(), ExecutionError> {
    advance_pc(cpu, opcode);
    cpu.halted = true;

    debug!(
        "halted at {:#04X} after {} instructions",
        cpu.pc,
        cpu.instructions + 1
    );

    Ok(())
}

/// Executes the CALL instruction.
///
/// 1. Read the target address from the operand register
/// 2. Compute the return address, PC + 2
/// 3. Push it onto the stack
/// 4. Set PC to the target
///
/// The target is read before the push, so `CALL R7` jumps to the stack
/// pointer's value from before the return address was pushed.
///
/// A return address that does not fit in a byte is an `AddressOutOfRange`
/// fault.
///
/// # Examples
///
/// ```
/// use ls8::{MemoryBus, Ram, CPU};
///
/// let mut cpu = CPU::new(Ram::new());
/// cpu.load_program(&[0x50, 0x01]).unwrap(); // CALL R1
/// cpu.registers_mut().set(1, 0x40).unwrap();
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.pc(), 0x40);
/// assert_eq!(cpu.sp(), 0xF3);
/// assert_eq!(cpu.memory().read(0xF3).unwrap(), 0x02);
/// ```
pub(crate) fn execute_call<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: Opcode,
    operands: Operands,
) -> Result<(), ExecutionError> {
    let target = cpu.registers.get(operands.a)?;

    let return_address = cpu.pc.wrapping_add(opcode.metadata().size_bytes as u16);
    let return_address = u8::try_from(return_address)
        .map_err(|_| ExecutionError::AddressOutOfRange(return_address))?;

    push_value(cpu, return_address)?;
    cpu.pc = target as u16;

    Ok(())
}

/// Executes the RET instruction.
///
/// Pops the return address pushed by CALL into PC.
///
/// Bytes: 1
pub(crate) fn execute_ret<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    let return_address = pop_value(cpu)?;
    cpu.pc = return_address as u16;

    Ok(())
}
