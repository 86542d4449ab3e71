//! # Opcode Metadata
//!
//! The `Opcode` enum is the single source of truth for the LS-8 instruction
//! set. Decoding turns a byte into an `Opcode`; the CPU then dispatches with
//! an exhaustive `match`, and the disassembler reads the same metadata.
//!
//! Each opcode entry includes:
//! - Mnemonic (instruction name)
//! - Operand kinds (register index or immediate byte)
//! - Instruction size in bytes
//! - Implementation status flag
//!
//! `LD`, `ST` and `PRA` are reserved encodings and `NOP` exists as a named
//! constant only. None of them has a handler: executing one is an
//! unknown-instruction fault, exactly like any undefined byte.

/// How an operand byte is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// Index into the register file (R0-R7).
    Register,

    /// Literal 8-bit value.
    Immediate,
}

/// Static information about one opcode.
///
/// # Examples
///
/// ```
/// use ls8::{Opcode, OperandKind};
///
/// let ldi = Opcode::Ldi.metadata();
/// assert_eq!(ldi.mnemonic, "LDI");
/// assert_eq!(ldi.operands, &[OperandKind::Register, OperandKind::Immediate]);
/// assert_eq!(ldi.size_bytes, 3);
/// assert!(ldi.implemented);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDI", "PRN").
    pub mnemonic: &'static str,

    /// Operand kinds in encoding order (0-2 entries).
    pub operands: &'static [OperandKind],

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Whether the CPU has a handler for this opcode.
    pub implemented: bool,
}

/// Every named LS-8 opcode, keyed by its byte encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    Nop = 0b0000_0000,
    Hlt = 0b0000_0001,
    Ldi = 0b1000_0010,
    Ld = 0b1000_0011,
    St = 0b1000_0100,
    Push = 0b0100_0101,
    Pop = 0b0100_0110,
    Prn = 0b0100_0111,
    Pra = 0b0100_1000,
    Call = 0b0101_0000,
    Ret = 0b0001_0001,
    Add = 0b1010_0000,
    Mul = 0b1010_0010,
}

const NONE: &[OperandKind] = &[];
const REG: &[OperandKind] = &[OperandKind::Register];
const REG_REG: &[OperandKind] = &[OperandKind::Register, OperandKind::Register];
const REG_IMM: &[OperandKind] = &[OperandKind::Register, OperandKind::Immediate];

impl Opcode {
    /// All named opcodes, in encoding order of the table above.
    pub const ALL: [Opcode; 13] = [
        Opcode::Nop,
        Opcode::Hlt,
        Opcode::Ldi,
        Opcode::Ld,
        Opcode::St,
        Opcode::Push,
        Opcode::Pop,
        Opcode::Prn,
        Opcode::Pra,
        Opcode::Call,
        Opcode::Ret,
        Opcode::Add,
        Opcode::Mul,
    ];

    /// Decodes an opcode byte. Returns `None` for bytes with no name.
    ///
    /// ```
    /// use ls8::Opcode;
    ///
    /// assert_eq!(Opcode::from_byte(0b1000_0010), Some(Opcode::Ldi));
    /// assert_eq!(Opcode::from_byte(0xFF), None);
    /// ```
    pub fn from_byte(byte: u8) -> Option<Opcode> {
        Self::ALL.iter().copied().find(|op| op.byte() == byte)
    }

    /// The byte encoding of this opcode.
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Instruction mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        self.metadata().mnemonic
    }

    /// Returns the static metadata for this opcode.
    pub const fn metadata(self) -> OpcodeMetadata {
        let (mnemonic, operands, implemented) = match self {
            Opcode::Nop => ("NOP", NONE, false),
            Opcode::Hlt => ("HLT", NONE, true),
            Opcode::Ldi => ("LDI", REG_IMM, true),
            Opcode::Ld => ("LD", REG_REG, false),
            Opcode::St => ("ST", REG_REG, false),
            Opcode::Push => ("PUSH", REG, true),
            Opcode::Pop => ("POP", REG, true),
            Opcode::Prn => ("PRN", REG, true),
            Opcode::Pra => ("PRA", REG, false),
            Opcode::Call => ("CALL", REG, true),
            Opcode::Ret => ("RET", NONE, true),
            Opcode::Add => ("ADD", REG_REG, true),
            Opcode::Mul => ("MUL", REG_REG, true),
        };

        OpcodeMetadata {
            mnemonic,
            operands,
            size_bytes: operands.len() as u8 + 1,
            implemented,
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
