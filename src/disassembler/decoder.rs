//! Instruction decoder for the LS-8 disassembler

use crate::disassembler::Instruction;
use crate::Opcode;

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// Some(Instruction) for a named opcode with all its operand bytes present,
/// None otherwise. Reserved opcodes (LD, ST, PRA, NOP) decode normally even
/// though the CPU has no handler for them.
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let opcode = Opcode::from_byte(*bytes.first()?)?;
    let metadata = opcode.metadata();

    let size = metadata.size_bytes as usize;
    if bytes.len() < size {
        return None;
    }

    Some(Instruction {
        address,
        opcode: opcode.byte(),
        mnemonic: metadata.mnemonic,
        operand_kinds: metadata.operands,
        operand_bytes: bytes[1..size].to_vec(),
        size_bytes: metadata.size_bytes,
    })
}
