//! Assembler errors

use thiserror::Error;
use uvm_spec::SpecError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblerError {
    #[error("Syntax error at line {line}, column {column}: {message}")]
    SyntaxError {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Unknown mnemonic '{mnemonic}' at instruction {index}")]
    UnknownMnemonic { mnemonic: String, index: usize },

    #[error("Invalid operand at line {line}: {value}")]
    InvalidOperand { line: usize, value: String },

    #[error("Spec error: {0}")]
    Spec(#[from] SpecError),
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
