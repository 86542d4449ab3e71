//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the LS-8 processor state
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: R0-R7, with R7 as the stack pointer
//! - **Program counter** (PC): address of the next instruction
//! - **Halt flag**: set by `HLT`, stops the run loop
//! - **Instruction counter**: number of instructions executed
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction
//! - `run()`: Execute until `HLT`
//! - `run_for_instructions()`: Execute until `HLT` or the budget is spent
//!
//! Any fault stops execution and leaves PC on the faulting instruction.

use log::{debug, trace};

use crate::instructions::{alu, control, io, load_store, stack};
use crate::{ExecutionError, MemoryBus, Opcode, RegisterFile};

/// Operand bytes fetched for one instruction.
///
/// Bytes the opcode does not use are left at zero and never read from memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Operands {
    pub(crate) a: u8,
    pub(crate) b: u8,
}

/// LS-8 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use ls8::{Ram, CPU, STACK_START};
///
/// let cpu = CPU::new(Ram::new());
///
/// assert_eq!(cpu.pc(), 0);
/// assert_eq!(cpu.sp(), STACK_START);
/// assert!(!cpu.halted());
/// assert_eq!(cpu.instructions(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// General-purpose registers; R7 is the stack pointer
    pub(crate) registers: RegisterFile,

    /// Set once `HLT` executes
    pub(crate) halted: bool,

    /// Total instructions executed
    pub(crate) instructions: u64,

    /// Memory bus implementation
    pub(crate) memory: M,

    /// Receives every value printed by `PRN`
    pub(crate) on_print: Box<dyn FnMut(u8)>,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus.
    ///
    /// PC starts at 0, all registers are zero except the stack pointer, and
    /// `PRN` output goes to standard output.
    pub fn new(memory: M) -> Self {
        Self {
            pc: 0,
            registers: RegisterFile::new(),
            halted: false,
            instructions: 0,
            memory,
            on_print: Box::new(|value| println!("{}", value)),
        }
    }

    /// Replaces the `PRN` output sink.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    /// use ls8::{Ram, CPU};
    ///
    /// let printed = Rc::new(RefCell::new(Vec::new()));
    /// let sink = Rc::clone(&printed);
    ///
    /// let mut cpu = CPU::new(Ram::new());
    /// cpu.set_print_callback(move |value| sink.borrow_mut().push(value));
    ///
    /// // LDI R0,5; LDI R1,3; MUL R0,R1; PRN R0; HLT
    /// cpu.load_program(&[
    ///     0x82, 0x00, 0x05, 0x82, 0x01, 0x03, 0xA2, 0x00, 0x01, 0x47, 0x00, 0x01,
    /// ])
    /// .unwrap();
    /// cpu.run().unwrap();
    ///
    /// assert_eq!(*printed.borrow(), vec![15]);
    /// ```
    pub fn set_print_callback<F>(&mut self, callback: F)
    where
        F: FnMut(u8) + 'static,
    {
        self.on_print = Box::new(callback);
    }

    /// Copies `program` into memory starting at address 0.
    ///
    /// Fails with `AddressOutOfRange` if the program does not fit; memory is
    /// left untouched in that case.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), ExecutionError> {
        let capacity = self.memory.size();
        if program.len() > capacity {
            let end = u16::try_from(capacity).unwrap_or(u16::MAX);
            return Err(ExecutionError::AddressOutOfRange(end));
        }

        for (addr, &byte) in (0u16..).zip(program) {
            self.memory.write(addr, byte)?;
        }
        debug!("loaded {} program bytes", program.len());
        Ok(())
    }

    /// Executes one instruction.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch the opcode byte at PC
    /// 2. Decode it into an `Opcode`; undefined or unhandled bytes fault
    /// 3. Fetch as many operand bytes as the opcode takes
    /// 4. Dispatch to the handler, which advances or replaces PC
    ///
    /// Does nothing once the CPU has halted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::{ExecutionError, Ram, CPU};
    ///
    /// let mut cpu = CPU::new(Ram::new());
    /// cpu.load_program(&[0xFF]).unwrap();
    ///
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::UnknownInstruction { opcode: 255, pc: 0 })
    /// );
    /// ```
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        if self.halted {
            return Ok(());
        }

        let byte = self.memory.read(self.pc)?;
        trace!("{}", self.trace_line());

        let unknown = ExecutionError::UnknownInstruction {
            opcode: byte,
            pc: self.pc,
        };
        let opcode = Opcode::from_byte(byte).ok_or_else(|| unknown.clone())?;
        let operands = self.fetch_operands(opcode)?;

        match opcode {
            Opcode::Hlt => control::execute_hlt(self, opcode)?,
            Opcode::Ldi => load_store::execute_ldi(self, opcode, operands)?,
            Opcode::Prn => io::execute_prn(self, opcode, operands)?,
            Opcode::Add | Opcode::Mul => alu::execute_alu(self, opcode, operands)?,
            Opcode::Push => stack::execute_push(self, opcode, operands)?,
            Opcode::Pop => stack::execute_pop(self, opcode, operands)?,
            Opcode::Call => control::execute_call(self, opcode, operands)?,
            Opcode::Ret => control::execute_ret(self)?,
            Opcode::Nop | Opcode::Ld | Opcode::St | Opcode::Pra => return Err(unknown),
        }

        self.instructions += 1;
        Ok(())
    }

    /// Runs until `HLT`.
    ///
    /// Returns the number of instructions executed by this call. A program
    /// that never halts never returns; use `run_for_instructions` to bound it.
    pub fn run(&mut self) -> Result<u64, ExecutionError> {
        let start = self.instructions;

        while !self.halted {
            self.step()?;
        }

        Ok(self.instructions - start)
    }

    /// Runs until `HLT` or until `budget` instructions have executed.
    ///
    /// Returns the number of instructions executed; check `halted()` to tell
    /// the two apart.
    pub fn run_for_instructions(&mut self, budget: u64) -> Result<u64, ExecutionError> {
        let start = self.instructions;

        while !self.halted && self.instructions - start < budget {
            self.step()?;
        }

        Ok(self.instructions - start)
    }

    /// Formats the current machine state as a single trace line.
    ///
    /// Layout: `TRACE: PC | OP A B | R0 R1 R2 R3 R4 R5 R6 R7`, all in hex.
    /// Bytes past the end of memory are shown as `--`.
    ///
    /// ```
    /// use ls8::{Ram, CPU};
    ///
    /// let mut cpu = CPU::new(Ram::new());
    /// cpu.load_program(&[0x82, 0x00, 0x08]).unwrap();
    ///
    /// assert_eq!(
    ///     cpu.trace_line(),
    ///     "TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4"
    /// );
    /// ```
    pub fn trace_line(&self) -> String {
        let peek = |offset: u16| match self.memory.read(self.pc.wrapping_add(offset)) {
            Ok(byte) => format!("{:02X}", byte),
            Err(_) => "--".to_string(),
        };

        let registers: Vec<String> = self
            .registers
            .as_slice()
            .iter()
            .map(|reg| format!("{:02X}", reg))
            .collect();

        format!(
            "TRACE: {:02X} | {} {} {} | {}",
            self.pc,
            peek(0),
            peek(1),
            peek(2),
            registers.join(" ")
        )
    }

    fn fetch_operands(&self, opcode: Opcode) -> Result<Operands, ExecutionError> {
        let count = opcode.metadata().operands.len();
        let mut operands = Operands::default();

        if count >= 1 {
            operands.a = self.memory.read(self.pc.wrapping_add(1))?;
        }
        if count >= 2 {
            operands.b = self.memory.read(self.pc.wrapping_add(2))?;
        }

        Ok(operands)
    }

    // ========== State Accessors ==========

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }

    /// Returns the stack pointer (R7).
    pub fn sp(&self) -> u8 {
        self.registers.sp()
    }

    /// Sets the stack pointer (R7).
    pub fn set_sp(&mut self, sp: u8) {
        self.registers.set_sp(sp);
    }

    /// Returns the register file.
    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    /// Returns the register file for modification.
    pub fn registers_mut(&mut self) -> &mut RegisterFile {
        &mut self.registers
    }

    /// Returns true once `HLT` has executed.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Returns the number of instructions executed since construction.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Returns the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns the memory bus for modification.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}
