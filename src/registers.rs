//! # Register File
//!
//! Eight general-purpose 8-bit registers, R0 through R7. R7 doubles as the
//! stack pointer and starts at `STACK_START`; the others start at zero.

use crate::ExecutionError;

/// Number of registers in the register file.
pub const REGISTER_COUNT: usize = 8;

/// Index of the register reserved as the stack pointer.
pub const SP: u8 = 7;

/// Initial stack pointer value. The stack grows downward from here.
pub const STACK_START: u8 = 0xF4;

/// The LS-8 register file.
///
/// # Examples
///
/// ```
/// use ls8::{RegisterFile, STACK_START};
///
/// let mut regs = RegisterFile::new();
/// assert_eq!(regs.sp(), STACK_START);
///
/// regs.set(3, 0x2A).unwrap();
/// assert_eq!(regs.get(3).unwrap(), 0x2A);
/// assert!(regs.get(8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a register file in its power-on state.
    pub fn new() -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[SP as usize] = STACK_START;
        Self { regs }
    }

    /// Returns the value of register `index`.
    pub fn get(&self, index: u8) -> Result<u8, ExecutionError> {
        self.regs
            .get(index as usize)
            .copied()
            .ok_or(ExecutionError::RegisterOutOfRange(index))
    }

    /// Sets register `index` to `value`.
    pub fn set(&mut self, index: u8, value: u8) -> Result<(), ExecutionError> {
        let reg = self
            .regs
            .get_mut(index as usize)
            .ok_or(ExecutionError::RegisterOutOfRange(index))?;
        *reg = value;
        Ok(())
    }

    /// Returns the stack pointer (R7).
    pub fn sp(&self) -> u8 {
        self.regs[SP as usize]
    }

    /// Sets the stack pointer (R7).
    pub fn set_sp(&mut self, value: u8) {
        self.regs[SP as usize] = value;
    }

    /// Returns all eight registers, R0 first.
    pub fn as_slice(&self) -> &[u8] {
        &self.regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
