//! Runtime error types for UVM

use thiserror::Error;
use uvm_spec::{Opcode, SpecError, Word};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("Spec error: {0}")]
    Spec(#[from] SpecError),

    #[error("Unknown opcode tag {tag} at IP {ip:#06x} (operand field {operand:#06x})")]
    UnknownOpcode { tag: u8, operand: u32, ip: usize },

    #[error("Stack underflow at IP {ip:#06x}: {opcode} needs {needed} values, found {available}")]
    StackUnderflow {
        opcode: Opcode,
        ip: usize,
        needed: usize,
        available: usize,
    },

    #[error("Out of bounds read at IP {ip:#06x}: {opcode} address {address}")]
    OutOfBoundsRead {
        opcode: Opcode,
        address: i64,
        ip: usize,
    },

    #[error("Out of bounds write at IP {ip:#06x}: address {address} (value {value} discarded)")]
    OutOfBoundsWrite { address: i64, value: Word, ip: usize },

    #[error("Invalid range: start {start} > end {end}")]
    InvalidRange { start: usize, end: usize },

    #[error("Preset of {len} values at address {address} exceeds data memory ({capacity} cells)")]
    PresetOutOfBounds {
        address: usize,
        len: usize,
        capacity: usize,
    },

    #[error("VM faulted at IP {ip:#06x} and cannot resume")]
    Faulted { ip: usize },
}

impl RuntimeError {
    /// Attach the instruction pointer to a decode error from `uvm-spec`
    pub fn at_ip(err: SpecError, ip: usize) -> Self {
        match err {
            SpecError::UnknownOpcode { tag, operand } => RuntimeError::UnknownOpcode { tag, operand, ip },
            other => RuntimeError::Spec(other),
        }
    }

    /// Instruction pointer the error was raised at, if any
    pub fn ip(&self) -> Option<usize> {
        match self {
            RuntimeError::UnknownOpcode { ip, .. }
            | RuntimeError::StackUnderflow { ip, .. }
            | RuntimeError::OutOfBoundsRead { ip, .. }
            | RuntimeError::OutOfBoundsWrite { ip, .. }
            | RuntimeError::Faulted { ip } => Some(*ip),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
