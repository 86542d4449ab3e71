//! WASM API for the LS-8 emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection,
//! program loading and disassembly.

use crate::{disassemble, format_instruction, parse_program, MemoryBus, Ram, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl<E: std::error::Error> From<E> for JsError {
    fn from(err: E) -> Self {
        JsError::new(&err.to_string())
    }
}

/// One line of disassembly
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Ls8Emulator {
    cpu: CPU<Ram>,
    on_print: js_sys::Function,
    program: Vec<u8>,
}

#[wasm_bindgen]
impl Ls8Emulator {
    /// Create a new emulator; `on_print` is called with each value `PRN` prints
    #[wasm_bindgen(constructor)]
    pub fn new(on_print: js_sys::Function) -> Self {
        Ls8Emulator {
            cpu: Self::build_cpu(&on_print),
            on_print,
            program: Vec::new(),
        }
    }

    fn build_cpu(on_print: &js_sys::Function) -> CPU<Ram> {
        let mut cpu = CPU::new(Ram::new());
        let callback = on_print.clone();
        cpu.set_print_callback(move |value| {
            let _ = callback.call1(&JsValue::NULL, &JsValue::from(value));
        });
        cpu
    }

    /// Parse `.ls8` program text and load it at address 0; returns its size
    pub fn load_source(&mut self, source: &str) -> Result<usize, JsError> {
        let program = parse_program(source)?;
        self.load_program(&program)?;
        Ok(program.len())
    }

    /// Reset the machine and load raw program bytes at address 0
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), JsError> {
        self.cpu = Self::build_cpu(&self.on_print);
        self.cpu.load_program(program)?;
        self.program = program.to_vec();
        Ok(())
    }

    /// Execute a single instruction
    pub fn step(&mut self) -> Result<(), JsError> {
        self.cpu.step()?;
        Ok(())
    }

    /// Execute up to `budget` instructions and return how many ran
    pub fn run_for_instructions(&mut self, budget: u32) -> Result<u32, JsError> {
        let executed = self.cpu.run_for_instructions(budget as u64)?;
        Ok(executed as u32)
    }

    /// Reset the CPU and reload the last program
    pub fn reset(&mut self) -> Result<(), JsError> {
        let program = std::mem::take(&mut self.program);
        self.load_program(&program)
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        self.cpu.halted()
    }

    #[wasm_bindgen(getter)]
    pub fn instructions(&self) -> f64 {
        self.cpu.instructions() as f64 // Convert u64 to f64 for JavaScript
    }

    /// All eight registers, R0 first
    pub fn registers(&self) -> Vec<u8> {
        self.cpu.registers().as_slice().to_vec()
    }

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> Result<u8, JsError> {
        Ok(self.cpu.memory().read(addr)?)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) -> Result<(), JsError> {
        self.cpu.memory_mut().write(addr, value)?;
        Ok(())
    }

    /// The whole 256-byte memory (for display)
    pub fn memory(&self) -> Vec<u8> {
        self.cpu.memory().as_slice().to_vec()
    }

    /// Current machine state as a trace line
    pub fn trace_line(&self) -> String {
        self.cpu.trace_line()
    }

    /// Disassemble `count` instructions starting at `start_addr`
    pub fn disassemble(&self, start_addr: u16, count: u32) -> Vec<JsValue> {
        let memory = self.cpu.memory().as_slice();
        let start = (start_addr as usize).min(memory.len());

        disassemble(&memory[start..], start_addr)
            .iter()
            .take(count as usize)
            .map(|instr| {
                let mut bytes = vec![instr.opcode];
                bytes.extend_from_slice(&instr.operand_bytes);

                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes,
                    text: format_instruction(instr),
                })
            })
            .collect()
    }
}
