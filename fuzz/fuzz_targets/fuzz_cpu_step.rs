//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary register states and memory contents,
//! then executes a handful of instructions to find edge cases and panics.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ls8::{MemoryBus, Ram, CPU, MEMORY_SIZE};

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Initial register values, R7 (SP) included
    registers: [u8; 8],
    /// Initial program counter
    pc: u8,
    /// Memory contents written from address 0
    memory: Vec<u8>,
    /// Instructions to execute
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = Ram::new();
    for (addr, &byte) in input.memory.iter().take(MEMORY_SIZE).enumerate() {
        memory.write(addr as u16, byte).unwrap();
    }

    let mut cpu = CPU::new(memory);
    cpu.set_print_callback(|_| {});
    cpu.set_pc(input.pc as u16);
    for (index, &value) in input.registers.iter().enumerate() {
        cpu.registers_mut().set(index as u8, value).unwrap();
    }

    let before = cpu.instructions();

    // We don't care if it returns an error - just no panics
    let result = cpu.run_for_instructions(input.steps as u64);

    // Basic sanity checks after execution
    if let Ok(executed) = result {
        assert!(executed <= input.steps as u64);
        assert_eq!(cpu.instructions() - before, executed);
    }
    assert!(cpu.pc() <= MEMORY_SIZE as u16);
});
