//! # UVM Runtime
//!
//! Execute UVM bytecode on a small stack machine.
//!
//! The VM owns a byte-addressed code memory, a cell-addressed data memory and
//! an operand stack. Each cycle fetches one 3-byte word at the instruction
//! pointer, dispatches on its tag and advances by one word. There are no
//! jumps, so every run finishes after a single pass over the program.
//!
//! ## Features
//!
//! - **4 instructions**: `load_const`, `read_mem`, `write_mem`, `less_or_eq`
//! - **Bounds-checked memory**: every data access is validated
//! - **Presets**: data fixtures applied before execution
//! - **Export**: range dumps of data memory, with XML rendering
//!
//! ## Example
//!
//! ```rust
//! use uvm_runtime::{VM, VMConfig, Preset};
//! use uvm_spec::{Instruction, Program};
//!
//! let program = Program::from_instructions(&[
//!     Instruction::read_mem(100),
//!     Instruction::load_const(200),
//!     Instruction::write_mem(),
//! ]);
//! let config = VMConfig::default().with_preset(Preset::array_copy_fixture());
//! let mut vm = VM::from_program(&program, config).unwrap();
//! let result = vm.run().unwrap();
//! assert_eq!(result.steps, 3);
//! assert_eq!(vm.data().read(200), Some(10));
//! ```

pub mod error;
pub mod execute;
pub mod export;
pub mod memory;
pub mod state;
pub mod vm;

pub use error::{Result, RuntimeError};
pub use export::{dump, MemoryCell, MemoryDump};
pub use memory::{CodeMemory, DataMemory};
pub use state::{HaltReason, VMState, VMStatus};
pub use vm::{ExecutionResult, Preset, VMConfig, VM};

/// Simple execution helper
///
/// Runs `code` with the given configuration and returns the VM after halt,
/// so callers can inspect or export data memory.
pub fn run(code: &[u8], config: VMConfig) -> Result<(VM, ExecutionResult)> {
    let mut vm = VM::new(code, config)?;
    let result = vm.run()?;
    Ok((vm, result))
}
