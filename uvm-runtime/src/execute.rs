//! Instruction execution for UVM
//!
//! Handlers never move the instruction pointer; the VM advances it after a
//! handler returns `Ok`.

use crate::error::{Result, RuntimeError};
use crate::memory::DataMemory;
use crate::state::VMState;
use uvm_spec::{Instruction, Opcode, Word};

/// Fail unless the stack holds enough inputs for `opcode`
#[inline]
fn require_stack(state: &VMState, opcode: Opcode) -> Result<()> {
    let needed = opcode.stack_inputs();
    if state.depth() < needed {
        return Err(RuntimeError::StackUnderflow {
            opcode,
            ip: state.ip,
            needed,
            available: state.depth(),
        });
    }
    Ok(())
}

/// Pop a value the caller already checked for with `require_stack`
#[inline]
fn pop_checked(state: &mut VMState, opcode: Opcode) -> Result<Word> {
    let ip = state.ip;
    state.pop().ok_or(RuntimeError::StackUnderflow {
        opcode,
        ip,
        needed: opcode.stack_inputs(),
        available: 0,
    })
}

/// Read a data cell addressed by an instruction operand
#[inline]
fn read_operand_cell(state: &VMState, data: &DataMemory, instr: &Instruction) -> Result<Word> {
    let address = i64::from(instr.operand);
    data.read(address).ok_or(RuntimeError::OutOfBoundsRead {
        opcode: instr.opcode,
        address,
        ip: state.ip,
    })
}

/// Execute single instruction
pub fn execute(instr: &Instruction, state: &mut VMState, data: &mut DataMemory) -> Result<()> {
    match instr.opcode {
        Opcode::LoadConst => {
            state.push(Word::from(instr.operand));
        }

        Opcode::ReadMem => {
            let value = read_operand_cell(state, data, instr)?;
            tracing::trace!("read mem[{}] = {}", instr.operand, value);
            state.push(value);
        }

        // Address is on top, value beneath it. Both are popped before the
        // bounds check, so a failed write still consumes them.
        Opcode::WriteMem => {
            require_stack(state, instr.opcode)?;
            let address = pop_checked(state, instr.opcode)?;
            let value = pop_checked(state, instr.opcode)?;
            if !data.write(address, value) {
                return Err(RuntimeError::OutOfBoundsWrite {
                    address,
                    value,
                    ip: state.ip,
                });
            }
            tracing::trace!("write mem[{}] = {}", address, value);
        }

        Opcode::LessOrEq => {
            require_stack(state, instr.opcode)?;
            let right = pop_checked(state, instr.opcode)?;
            let left = read_operand_cell(state, data, instr)?;
            state.push(Word::from(left <= right));
        }
    }

    Ok(())
}
