//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from a
//! specific memory implementation, and `Ram`, the flat 256-byte memory the
//! LS-8 ships with.
//!
//! ## Design Principles
//!
//! - Every access is bounds-checked; an address outside the bus is an
//!   `ExecutionError::AddressOutOfRange` fault rather than garbage
//! - Cells are `u8`, so stored values are always 8 bits wide
//! - `read(&self)` / `write(&mut self)` keep side effects explicit

use crate::ExecutionError;

/// Number of addressable bytes on the LS-8.
pub const MEMORY_SIZE: usize = 256;

/// Memory bus trait for the CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use ls8::{MemoryBus, Ram};
///
/// let mut mem = Ram::new();
/// mem.write(0x42, 0x99).unwrap();
/// assert_eq!(mem.read(0x42).unwrap(), 0x99);
///
/// // Past the end of memory
/// assert!(mem.read(0x100).is_err());
/// ```
pub trait MemoryBus {
    /// Reads the byte at `addr`.
    ///
    /// Returns `AddressOutOfRange` if `addr` is not below `size()`.
    fn read(&self, addr: u16) -> Result<u8, ExecutionError>;

    /// Writes `value` to `addr`.
    ///
    /// Returns `AddressOutOfRange` if `addr` is not below `size()`.
    fn write(&mut self, addr: u16, value: u8) -> Result<(), ExecutionError>;

    /// Number of addressable bytes.
    fn size(&self) -> usize;
}

/// Flat 256-byte RAM, zero-initialized.
///
/// # Examples
///
/// ```
/// use ls8::{MemoryBus, Ram};
///
/// let mem = Ram::new();
/// assert_eq!(mem.read(0x00).unwrap(), 0x00);
/// assert_eq!(mem.read(0xFF).unwrap(), 0x00);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ram {
    data: [u8; MEMORY_SIZE],
}

impl Ram {
    /// Creates a new RAM with every cell set to zero.
    pub fn new() -> Self {
        Self {
            data: [0; MEMORY_SIZE],
        }
    }

    /// Returns the full contents of memory.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for Ram {
    fn read(&self, addr: u16) -> Result<u8, ExecutionError> {
        self.data
            .get(addr as usize)
            .copied()
            .ok_or(ExecutionError::AddressOutOfRange(addr))
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), ExecutionError> {
        let cell = self
            .data
            .get_mut(addr as usize)
            .ok_or(ExecutionError::AddressOutOfRange(addr))?;
        *cell = value;
        Ok(())
    }

    fn size(&self) -> usize {
        MEMORY_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ram_read_write() {
        let mut mem = Ram::new();

        // Initially all zeros
        assert_eq!(mem.read(0x00), Ok(0x00));
        assert_eq!(mem.read(0xFF), Ok(0x00));

        mem.write(0x12, 0x42).unwrap();
        assert_eq!(mem.read(0x12), Ok(0x42));

        // Neighbours unchanged
        assert_eq!(mem.read(0x11), Ok(0x00));
        assert_eq!(mem.read(0x13), Ok(0x00));
    }

    #[test]
    fn test_ram_boundaries() {
        let mut mem = Ram::new();

        mem.write(0x00, 0x01).unwrap();
        mem.write(0xFF, 0xFF).unwrap();
        assert_eq!(mem.read(0x00), Ok(0x01));
        assert_eq!(mem.read(0xFF), Ok(0xFF));

        assert_eq!(mem.read(0x100), Err(ExecutionError::AddressOutOfRange(0x100)));
        assert_eq!(
            mem.write(0xFFFF, 0x01),
            Err(ExecutionError::AddressOutOfRange(0xFFFF))
        );
    }

    #[test]
    fn test_repeated_reads_are_stable() {
        let mut mem = Ram::new();
        mem.write(0x80, 0x5A).unwrap();

        assert_eq!(mem.read(0x80), mem.read(0x80));
        assert_eq!(mem.size(), 256);
        assert_eq!(mem.as_slice()[0x80], 0x5A);
    }
}
