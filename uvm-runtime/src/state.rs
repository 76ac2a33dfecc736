//! VM state for UVM

use serde::{Deserialize, Serialize};
use uvm_spec::Word;

/// Why a run ended cleanly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HaltReason {
    /// All-zero sentinel word at `ip`
    EndOfProgram { ip: usize },
    /// No whole word left at `ip` (end of code memory or trailing partial word)
    CodeExhausted { ip: usize },
}

impl HaltReason {
    pub fn ip(&self) -> usize {
        match self {
            HaltReason::EndOfProgram { ip } | HaltReason::CodeExhausted { ip } => *ip,
        }
    }
}

/// Execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VMStatus {
    Running,
    Halted(HaltReason),
    /// A fatal error aborted execution
    Faulted,
}

/// VM state
#[derive(Debug, Clone)]
pub struct VMState {
    /// Instruction pointer (byte offset into code memory)
    pub ip: usize,

    /// Operand stack, top at the end
    pub stack: Vec<Word>,

    /// Instructions executed so far
    pub steps: u64,

    pub status: VMStatus,
}

impl VMState {
    pub fn new() -> Self {
        VMState {
            ip: 0,
            stack: Vec::new(),
            steps: 0,
            status: VMStatus::Running,
        }
    }

    #[inline]
    pub fn push(&mut self, value: Word) {
        self.stack.push(value);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Word> {
        self.stack.pop()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Halt execution
    pub fn halt(&mut self, reason: HaltReason) {
        self.status = VMStatus::Halted(reason);
    }

    pub fn fault(&mut self) {
        self.status = VMStatus::Faulted;
    }
}

impl Default for VMState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = VMState::new();
        assert_eq!(state.ip, 0);
        assert!(state.stack.is_empty());
        assert_eq!(state.status, VMStatus::Running);
    }

    #[test]
    fn test_stack_is_lifo() {
        let mut state = VMState::new();
        state.push(1);
        state.push(2);
        assert_eq!(state.depth(), 2);
        assert_eq!(state.pop(), Some(2));
        assert_eq!(state.pop(), Some(1));
        assert_eq!(state.pop(), None);
    }

    #[test]
    fn test_halt() {
        let mut state = VMState::new();
        state.halt(HaltReason::EndOfProgram { ip: 6 });
        assert_eq!(state.status, VMStatus::Halted(HaltReason::EndOfProgram { ip: 6 }));
    }
}
