//! # UVM Specification
//!
//! Bytecode format for a small stack machine with separate code and data
//! memory.
//!
//! ## Key Features
//! - 4 opcodes with fixed 3-bit tags (5, 4, 2, 1)
//! - Fixed-width 3-byte little-endian instruction words
//! - Per-opcode operand widths (9, 13, 14 bits) with silent masking on encode
//! - All-zero word as end-of-program sentinel
//! - Harvard layout: byte-addressed code memory, cell-addressed data memory

pub mod config;
pub mod encoding;
pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;

pub use config::{Config, ConfigError, MAX_MEMORY_SIZE};
pub use encoding::{decode, encode, RawWord, SENTINEL, WORD_SIZE};
pub use error::SpecError;
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use program::{Program, ProgramEntry};

/// Default code memory capacity in bytes
pub const DEFAULT_CODE_SIZE: usize = Config::DEFAULT.code_size;

/// Default data memory capacity in cells
pub const DEFAULT_DATA_SIZE: usize = Config::DEFAULT.data_size;

/// Data memory cell value
pub type Word = i64;

