//! Formatting functions for disassembled instructions

use crate::disassembler::Instruction;
use crate::OperandKind;

/// Format a single instruction as assembly text
///
/// Registers print as `R<n>`, immediates in decimal, operands separated by a
/// comma: `LDI R0,8`, `MUL R0,R1`, `PRN R0`, `HLT`.
pub fn format_instruction(instr: &Instruction) -> String {
    // Special case for .byte directive (undefined opcodes)
    if instr.mnemonic == ".byte" {
        return format!(".byte ${:02X}", instr.opcode);
    }

    let operands: Vec<String> = instr
        .operand_kinds
        .iter()
        .zip(&instr.operand_bytes)
        .map(|(kind, byte)| match kind {
            OperandKind::Register => format!("R{}", byte),
            OperandKind::Immediate => byte.to_string(),
        })
        .collect();

    if operands.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operands.join(","))
    }
}

/// Format instructions as a listing with addresses and raw bytes
///
/// ```text
/// 00: 82 00 08  LDI R0,8
/// 03: 47 00     PRN R0
/// 05: 01        HLT
/// ```
pub fn format_listing(instructions: &[Instruction]) -> String {
    let mut listing = String::new();

    for instr in instructions {
        let mut bytes = vec![format!("{:02X}", instr.opcode)];
        if instr.mnemonic != ".byte" {
            bytes.extend(instr.operand_bytes.iter().map(|b| format!("{:02X}", b)));
        }

        listing.push_str(&format!(
            "{:02X}: {:<10}{}\n",
            instr.address,
            bytes.join(" "),
            format_instruction(instr)
        ));
    }

    listing
}
