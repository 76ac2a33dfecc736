//! Stress tests for UVM
//!
//! Large programs that fill code memory, and wide memory exports.

use uvm_assembler::assemble_source;
use uvm_runtime::{HaltReason, VMConfig, VM};
use uvm_spec::{Config, Instruction, Program, DEFAULT_CODE_SIZE, DEFAULT_DATA_SIZE};

// ============================================================================
// Large Program Tests
// ============================================================================

#[test]
fn test_fill_default_code_memory() {
    // 65536 / 3 = 21845 whole words, one spare byte
    let count = DEFAULT_CODE_SIZE / 3;
    let instructions = vec![Instruction::load_const(1); count];
    let program = Program::from_instructions(&instructions);

    let mut vm = VM::from_program(&program, VMConfig::default()).unwrap();
    let result = vm.run().unwrap();

    assert_eq!(result.steps, count as u64);
    assert_eq!(result.stack.len(), count);
    assert_eq!(result.halt_reason, HaltReason::CodeExhausted { ip: count * 3 });
}

#[test]
fn test_write_every_addressable_cell() {
    // load_const reaches 0..512; write each cell with its own address
    let mut instructions = Vec::new();
    for address in 0..0x200 {
        instructions.push(Instruction::load_const(address));
        instructions.push(Instruction::load_const(address));
        instructions.push(Instruction::write_mem());
    }
    let program = Program::from_instructions(&instructions);

    let mut vm = VM::from_program(&program, VMConfig::default()).unwrap();
    let result = vm.run().unwrap();
    assert!(result.stack.is_empty());

    let dump = vm.dump(0, 0x1FF).unwrap();
    assert_eq!(dump.len(), 0x200);
    assert!(dump.cells.iter().all(|c| c.value == c.address as i64));
}

#[test]
fn test_long_source_program() {
    let mut source = String::new();
    for i in 0..2000 {
        source.push_str(&format!("- load_const: {}\n", i % 512));
        source.push_str("- less_or_eq: 0\n");
    }
    let code = assemble_source(&source).unwrap();
    assert_eq!(code.len(), 4000 * 3);

    let mut vm = VM::new(&code, VMConfig::default()).unwrap();
    let result = vm.run().unwrap();

    // data[0] is 0, so every comparison is true
    assert_eq!(result.stack, vec![1; 2000]);
    assert_eq!(result.steps, 4000);
}

#[test]
fn test_dump_whole_data_memory() {
    let vm = VM::new(&[], VMConfig::default()).unwrap();
    let dump = vm.dump(0, usize::MAX).unwrap();
    assert_eq!(dump.len(), DEFAULT_DATA_SIZE);
}

#[test]
fn test_large_custom_memory() {
    let config = VMConfig::new(Config::new(3 * 10_000, 1 << 20).unwrap());
    let instructions = vec![Instruction::read_mem(0x1FFF); 10_000];
    let program = Program::from_instructions(&instructions);

    let mut vm = VM::from_program(&program, config).unwrap();
    let result = vm.run().unwrap();

    assert_eq!(result.steps, 10_000);
    assert_eq!(result.halt_reason, HaltReason::CodeExhausted { ip: 30_000 });
}
