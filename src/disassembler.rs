//! LS-8 Disassembler Module
//!
//! Converts machine code back into readable mnemonics, e.g. `LDI R0,8`.

pub mod decoder;
pub mod formatter;

pub use decoder::decode_instruction;
pub use formatter::{format_instruction, format_listing};

use crate::OperandKind;

/// A single disassembled instruction
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDI", "PRN"), or ".byte" for raw data
    pub mnemonic: &'static str,

    /// How each operand byte is interpreted
    pub operand_kinds: &'static [OperandKind],

    /// Operand bytes (0-2 bytes depending on the opcode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (opcode + operands)
    pub size_bytes: u8,
}

/// Disassemble a byte slice into a vector of instructions.
///
/// Bytes that do not start a complete, defined instruction become one-byte
/// `.byte` entries, so every input byte is accounted for.
///
/// # Examples
///
/// ```
/// use ls8::{disassemble, format_instruction};
///
/// let listing: Vec<String> = disassemble(&[0x82, 0x00, 0x08, 0x47, 0x00, 0x01], 0)
///     .iter()
///     .map(format_instruction)
///     .collect();
///
/// assert_eq!(listing, vec!["LDI R0,8", "PRN R0", "HLT"]);
/// ```
pub fn disassemble(bytes: &[u8], start_address: u16) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = start_address;

    while offset < bytes.len() {
        let instr = decoder::decode_instruction(&bytes[offset..], address).unwrap_or_else(|| {
            Instruction {
                address,
                opcode: bytes[offset],
                mnemonic: ".byte",
                operand_kinds: &[],
                operand_bytes: Vec::new(),
                size_bytes: 1,
            }
        });

        offset += instr.size_bytes as usize;
        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}
