//! Virtual Machine for UVM

use crate::error::{Result, RuntimeError};
use crate::execute::execute;
use crate::export::{self, MemoryDump};
use crate::memory::{CodeMemory, DataMemory};
use crate::state::{HaltReason, VMState, VMStatus};
use serde::{Deserialize, Serialize};
use uvm_spec::{Config, Instruction, Program, SpecError, Word, WORD_SIZE};

/// Values written to consecutive data cells before execution starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub address: usize,
    pub values: Vec<Word>,
}

impl Preset {
    pub fn new(address: usize, values: impl Into<Vec<Word>>) -> Self {
        Self {
            address,
            values: values.into(),
        }
    }

    /// Source array used by the array copy demo: `data[100..103] = [10, 20, 30]`
    pub fn array_copy_fixture() -> Self {
        Self::new(100, [10, 20, 30])
    }
}

/// VM configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VMConfig {
    /// Code and data memory capacities
    pub memory: Config,

    /// Data fixtures applied at construction, in order
    pub presets: Vec<Preset>,
}

impl VMConfig {
    pub fn new(memory: Config) -> Self {
        Self {
            memory,
            presets: Vec::new(),
        }
    }

    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.presets.push(preset);
        self
    }
}

/// Execution result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Number of instructions executed
    pub steps: u64,

    /// Reason for halting
    pub halt_reason: HaltReason,

    /// Operand stack at halt, bottom first
    pub stack: Vec<Word>,
}

/// UVM Virtual Machine
#[derive(Debug, Clone)]
pub struct VM {
    state: VMState,
    code: CodeMemory,
    data: DataMemory,
}

impl VM {
    /// Create a VM with `code` loaded at offset 0 and presets applied
    pub fn new(code: &[u8], config: VMConfig) -> Result<Self> {
        Self::from_program(&Program::from_bytes(code), config)
    }

    pub fn from_program(program: &Program, config: VMConfig) -> Result<Self> {
        config.memory.validate().map_err(SpecError::from)?;

        let mut code = CodeMemory::new(config.memory.code_size);
        code.load(program)?;

        let mut data = DataMemory::new(config.memory.data_size);
        for preset in &config.presets {
            data.preset(preset.address, &preset.values)?;
        }

        tracing::debug!(
            "loaded {} of {} code bytes, {} data cells, {} presets",
            code.loaded_len(),
            code.capacity(),
            data.len(),
            config.presets.len()
        );

        Ok(Self {
            state: VMState::new(),
            code,
            data,
        })
    }

    /// Execute one fetch/decode/execute cycle
    ///
    /// Calling `step` on a halted VM returns the halt status unchanged.
    pub fn step(&mut self) -> Result<VMStatus> {
        match self.state.status {
            VMStatus::Running => {}
            VMStatus::Halted(_) => return Ok(self.state.status),
            VMStatus::Faulted => return Err(RuntimeError::Faulted { ip: self.state.ip }),
        }

        let ip = self.state.ip;
        let Some(bytes) = self.code.fetch(ip) else {
            return Ok(self.halt(HaltReason::CodeExhausted { ip }));
        };
        let inst = match Instruction::decode(bytes) {
            Ok(Some(inst)) => inst,
            Ok(None) => return Ok(self.halt(HaltReason::EndOfProgram { ip })),
            Err(err) => {
                self.state.fault();
                tracing::debug!("fault at {:#06x}: {}", ip, err);
                return Err(RuntimeError::at_ip(err, ip));
            }
        };

        tracing::debug!(
            "[{:4}] IP={:#06x} {} stack={:?}",
            self.state.steps,
            ip,
            inst,
            self.state.stack
        );

        if let Err(err) = execute(&inst, &mut self.state, &mut self.data) {
            self.state.fault();
            tracing::debug!("fault at {:#06x}: {}", ip, err);
            return Err(err);
        }

        self.state.ip += WORD_SIZE;
        self.state.steps += 1;
        Ok(self.state.status)
    }

    /// Run until the program halts or faults
    pub fn run(&mut self) -> Result<ExecutionResult> {
        loop {
            if let VMStatus::Halted(halt_reason) = self.step()? {
                return Ok(ExecutionResult {
                    steps: self.state.steps,
                    halt_reason,
                    stack: self.state.stack.clone(),
                });
            }
        }
    }

    fn halt(&mut self, reason: HaltReason) -> VMStatus {
        self.state.halt(reason);
        tracing::debug!(
            "halted after {} steps: {:?}, stack={:?}",
            self.state.steps,
            reason,
            self.state.stack
        );
        self.state.status
    }

    /// Export data cells in the inclusive range `[start, end]`
    pub fn dump(&self, start: usize, end: usize) -> Result<MemoryDump> {
        export::dump(&self.data, start, end)
    }

    pub fn state(&self) -> &VMState {
        &self.state
    }

    pub fn data(&self) -> &DataMemory {
        &self.data
    }

    pub fn stack(&self) -> &[Word] {
        &self.state.stack
    }

    pub fn ip(&self) -> usize {
        self.state.ip
    }
}
