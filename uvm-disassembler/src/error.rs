//! Disassembler errors

use thiserror::Error;
use uvm_spec::SpecError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisassemblerError {
    #[error("Unknown opcode tag {tag} at offset {offset:#06x}")]
    UnknownOpcode { tag: u8, offset: usize },

    #[error("Spec error: {0}")]
    Spec(#[from] SpecError),
}

impl DisassemblerError {
    /// Attach the byte offset to a decode error from `uvm-spec`
    pub fn at_offset(err: SpecError, offset: usize) -> Self {
        match err {
            SpecError::UnknownOpcode { tag, .. } => DisassemblerError::UnknownOpcode { tag, offset },
            other => DisassemblerError::Spec(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
