//! Integration tests for the memory subsystem
//!
//! Tests code loading, data bounds and range export.

use uvm_runtime::{dump, CodeMemory, DataMemory, MemoryCell, RuntimeError, VMConfig, VM};
use uvm_spec::{Instruction, Program, SpecError};

#[test]
fn test_data_memory_starts_zeroed() {
    let data = DataMemory::new(65536);
    assert_eq!(data.len(), 65536);
    assert!(data.as_slice().iter().all(|&cell| cell == 0));
}

#[test]
fn test_data_bounds() {
    let mut data = DataMemory::new(16);
    assert_eq!(data.read(0), Some(0));
    assert_eq!(data.read(15), Some(0));
    assert_eq!(data.read(16), None);
    assert_eq!(data.read(i64::MIN), None);

    assert!(data.write(15, i64::MAX));
    assert!(!data.write(16, 1));
    assert!(!data.write(-5, 1));
    assert_eq!(data.read(15), Some(i64::MAX));
}

#[test]
fn test_code_memory_zero_fill() {
    let mut code = CodeMemory::new(12);
    let program = Program::from_instructions(&[Instruction::load_const(1)]);
    code.load(&program).unwrap();

    assert_eq!(code.capacity(), 12);
    assert_eq!(code.loaded_len(), 3);
    assert_eq!(code.fetch(3), Some([0, 0, 0]));
    assert_eq!(code.fetch(6), Some([0, 0, 0]));
    assert_eq!(code.fetch(9), Some([0, 0, 0]));
    assert_eq!(code.fetch(10), None);
}

#[test]
fn test_code_memory_exact_fit() {
    let mut code = CodeMemory::new(6);
    code.load(&Program::from_bytes(&[0x55; 6])).unwrap();
    assert_eq!(code.fetch(3), Some([0x55; 3]));
    assert_eq!(code.fetch(6), None);

    let err = code.load(&Program::from_bytes(&[0x55; 7])).unwrap_err();
    assert_eq!(
        err,
        RuntimeError::Spec(SpecError::ProgramTooLarge { size: 7, capacity: 6 })
    );
}

#[test]
fn test_export_after_preset() {
    let mut data = DataMemory::new(65536);
    data.preset(100, &[10, 20, 30]).unwrap();

    let dump = dump(&data, 100, 102).unwrap();
    assert_eq!(dump.start, 100);
    assert_eq!(dump.end, 102);
    assert_eq!(
        dump.cells,
        vec![
            MemoryCell { address: 100, value: 10 },
            MemoryCell { address: 101, value: 20 },
            MemoryCell { address: 102, value: 30 },
        ]
    );
}

#[test]
fn test_export_is_ascending() {
    let mut data = DataMemory::new(32);
    data.preset(0, &[5, 4, 3, 2, 1]).unwrap();

    let dump = dump(&data, 0, 31).unwrap();
    assert_eq!(dump.len(), 32);
    assert!(dump.cells.windows(2).all(|w| w[0].address + 1 == w[1].address));
}

#[test]
fn test_export_rejects_reversed_range() {
    let data = DataMemory::new(8);
    assert!(matches!(
        dump(&data, 3, 2),
        Err(RuntimeError::InvalidRange { start: 3, end: 2 })
    ));
}

#[test]
fn test_export_after_run_reflects_writes() {
    let program = Program::from_instructions(&[
        Instruction::load_const(77),
        Instruction::load_const(3),
        Instruction::write_mem(),
    ]);
    let mut vm = VM::from_program(&program, VMConfig::default()).unwrap();
    vm.run().unwrap();

    let xml = vm.dump(2, 4).unwrap().to_xml();
    assert!(xml.contains("<cell address=\"0x3\" value=\"77\" dec=\"77\"/>"));
    assert!(xml.contains("<cell address=\"0x2\" value=\"0\" dec=\"0\"/>"));
}
