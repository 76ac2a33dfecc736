//! End-to-end integration tests for the UVM toolchain
//!
//! These tests verify the complete workflow:
//! 1. Assemble program text into bytecode
//! 2. Execute the bytecode in the VM
//! 3. Export a range of data memory
//! 4. Disassemble the bytecode back to program text

use uvm_assembler::{assemble_source, assemble_with_listing};
use uvm_disassembler::{disassemble, to_source};
use uvm_runtime::{HaltReason, Preset, RuntimeError, VMConfig, VM};
use uvm_spec::ProgramEntry;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const ARRAY_COPY: &str = "\
# copy three cells from 100.. to 200..
- read_mem: 100
- load_const: 200
- write_mem: 0

- read_mem: 101
- load_const: 201
- write_mem: 0

- read_mem: 102
- load_const: 202
- write_mem: 0
";

// ============================================================================
// Assemble -> Execute -> Export
// ============================================================================

#[test]
fn test_array_copy_pipeline() {
    init_tracing();

    let code = assemble_source(ARRAY_COPY).expect("Assembly failed");
    assert_eq!(code.len(), 27);

    let config = VMConfig::default().with_preset(Preset::array_copy_fixture());
    let mut vm = VM::new(&code, config).expect("VM construction failed");
    let result = vm.run().expect("Execution failed");

    assert_eq!(result.steps, 9);
    assert_eq!(result.halt_reason, HaltReason::EndOfProgram { ip: 27 });

    let dump = vm.dump(200, 202).expect("Export failed");
    assert_eq!(dump.values().collect::<Vec<_>>(), vec![10, 20, 30]);
    assert_eq!(
        dump.to_xml(),
        "<?xml version=\"1.0\" ?>\n\
         <memory_dump start=\"0xc8\" end=\"0xca\">\n  \
         <cell address=\"0xc8\" value=\"10\" dec=\"10\"/>\n  \
         <cell address=\"0xc9\" value=\"20\" dec=\"20\"/>\n  \
         <cell address=\"0xca\" value=\"30\" dec=\"30\"/>\n\
         </memory_dump>\n"
    );
}

#[test]
fn test_plain_form_program() {
    init_tracing();

    let source = "load_const 42\nload_const 7\nwrite_mem 0\nread_mem 7\n";
    let code = assemble_source(source).unwrap();

    let mut vm = VM::new(&code, VMConfig::default()).unwrap();
    let result = vm.run().unwrap();

    assert_eq!(result.stack, vec![42]);
    assert_eq!(vm.data().read(7), Some(42));
}

#[test]
fn test_compare_pipeline() {
    let source = "\
- load_const: 10
- load_const: 20
- less_or_eq: 0
";
    let code = assemble_source(source).unwrap();
    let config = VMConfig::default().with_preset(Preset::new(0, [15]));

    let mut vm = VM::new(&code, config).unwrap();
    assert_eq!(vm.run().unwrap().stack, vec![10, 1]);
}

#[test]
fn test_truncated_operand_runs_masked() {
    // 0x204 does not fit in 9 bits; the low bits (4) are what runs.
    let (code, listing) = assemble_with_listing(&[ProgramEntry::new("load_const", 0x204)]).unwrap();
    assert!(listing.entries[0].truncated());

    let mut vm = VM::new(&code, VMConfig::default()).unwrap();
    assert_eq!(vm.run().unwrap().stack, vec![4]);
}

#[test]
fn test_runtime_error_surfaces_through_pipeline() {
    let code = assemble_source("- load_const: 1\n- write_mem: 0\n").unwrap();
    let mut vm = VM::new(&code, VMConfig::default()).unwrap();

    let err = vm.run().unwrap_err();
    assert!(matches!(err, RuntimeError::StackUnderflow { ip: 3, .. }));
    assert!(err.to_string().contains("write_mem needs 2 values"));
}

// ============================================================================
// Assemble -> Disassemble
// ============================================================================

#[test]
fn test_disassemble_assembled_program() {
    let code = assemble_source(ARRAY_COPY).unwrap();
    let text = disassemble(&code).unwrap();

    assert!(text.starts_with("; UVM bytecode: 27 bytes, 9 words\n"));
    assert!(text.contains("read_mem 100"));
    assert!(text.contains("load_const 202"));
    assert_eq!(text.lines().count(), 10);
}

#[test]
fn test_source_roundtrip() {
    let code = assemble_source(ARRAY_COPY).unwrap();
    let regenerated = to_source(&code).unwrap();
    assert_eq!(assemble_source(&regenerated).unwrap(), code);
}
