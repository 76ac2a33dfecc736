//! # Error Types for the UVM specification crate

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Unknown opcode tag {tag} (operand field {operand:#06x})")]
    UnknownOpcode { tag: u8, operand: u32 },

    #[error("Unknown mnemonic: {0}")]
    UnknownMnemonic(String),

    #[error("Program too large: {size} bytes, code memory holds {capacity}")]
    ProgramTooLarge { size: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, SpecError>;
