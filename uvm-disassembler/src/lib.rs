//! # UVM Disassembler
//!
//! Turn UVM bytecode back into readable text or structured entries.
//!
//! ## Example
//!
//! ```rust
//! use uvm_disassembler::{disassemble, to_entries};
//!
//! let code = [0x55, 0x01, 0x00]; // load_const 42
//! let text = disassemble(&code).unwrap();
//! assert!(text.contains("load_const 42"));
//!
//! let entries = to_entries(&code).unwrap();
//! assert_eq!(entries[0].mnemonic, "load_const");
//! ```

pub mod decoder;
pub mod disassembler;
pub mod error;
pub mod formatter;

pub use decoder::decode;
pub use disassembler::{disassemble, to_entries, to_instructions, to_source};
pub use error::{DisassemblerError, Result};
pub use formatter::format;
