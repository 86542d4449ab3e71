//! Tests for the stack instructions (PUSH, POP).
//!
//! Tests cover:
//! - PUSH decrements SP before writing
//! - POP reads before incrementing SP
//! - LIFO ordering and SP round trip
//! - SP wraparound at both ends (unguarded)

use ls8::{MemoryBus, Ram, CPU, STACK_START};

const PUSH: u8 = 0b0100_0101;
const POP: u8 = 0b0100_0110;

fn setup_cpu(program: &[u8]) -> CPU<Ram> {
    let mut cpu = CPU::new(Ram::new());
    cpu.load_program(program).unwrap();
    cpu
}

#[test]
fn test_push_basic_operation() {
    let mut cpu = setup_cpu(&[PUSH, 0x00]);
    cpu.registers_mut().set(0, 0x42).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), STACK_START - 1);
    assert_eq!(cpu.memory().read(0xF3), Ok(0x42));
    assert_eq!(cpu.pc(), 2);
}

#[test]
fn test_pop_basic_operation() {
    let mut cpu = setup_cpu(&[POP, 0x03]);
    cpu.memory_mut().write(0xF3, 0x99).unwrap();
    cpu.set_sp(0xF3);

    cpu.step().unwrap();

    assert_eq!(cpu.registers().get(3), Ok(0x99));
    assert_eq!(cpu.sp(), STACK_START);
    assert_eq!(cpu.pc(), 2);
}

#[test]
fn test_push_pop_round_trip() {
    // PUSH R0; POP R1
    let mut cpu = setup_cpu(&[PUSH, 0x00, POP, 0x01]);
    cpu.registers_mut().set(0, 0x5A).unwrap();

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.registers().get(1), Ok(0x5A));
    assert_eq!(cpu.sp(), STACK_START);
}

#[test]
fn test_stack_is_lifo() {
    // PUSH R0; PUSH R1; POP R2; POP R3
    let mut cpu = setup_cpu(&[PUSH, 0x00, PUSH, 0x01, POP, 0x02, POP, 0x03]);
    cpu.registers_mut().set(0, 1).unwrap();
    cpu.registers_mut().set(1, 2).unwrap();

    cpu.run_for_instructions(4).unwrap();

    assert_eq!(cpu.registers().get(2), Ok(2));
    assert_eq!(cpu.registers().get(3), Ok(1));
    assert_eq!(cpu.sp(), STACK_START);
}

#[test]
fn test_push_stack_pointer_itself() {
    let mut cpu = setup_cpu(&[PUSH, 0x07]); // PUSH R7

    cpu.step().unwrap();

    // The value pushed is SP before the decrement
    assert_eq!(cpu.memory().read(0xF3), Ok(STACK_START));
}

#[test]
fn test_push_wraps_stack_pointer() {
    let mut cpu = setup_cpu(&[PUSH, 0x00]);
    cpu.registers_mut().set(0, 0x77).unwrap();
    cpu.set_sp(0x00);

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.memory().read(0xFF), Ok(0x77));
}

#[test]
fn test_pop_wraps_stack_pointer() {
    let mut cpu = setup_cpu(&[POP, 0x00]);
    cpu.memory_mut().write(0xFF, 0x12).unwrap();
    cpu.set_sp(0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.registers().get(0), Ok(0x12));
    assert_eq!(cpu.sp(), 0x00);
}
