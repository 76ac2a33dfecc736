//! Instruction encoding to 3-byte words
//!
//! Operands wider than the opcode's field are truncated to their low bits.
//! This is the wire format's wraparound rule, not an error.

use crate::error::{AssemblerError, Result};
use uvm_spec::{encoding, Instruction, Opcode, ProgramEntry, SpecError, WORD_SIZE};

/// Encode instruction to its 3-byte word
pub fn encode(instr: &Instruction) -> [u8; WORD_SIZE] {
    encoding::encode(instr.opcode, instr.operand)
}

/// Resolve and encode a structured entry. `index` is reported on failure.
pub fn encode_entry(entry: &ProgramEntry, index: usize) -> Result<(Opcode, [u8; WORD_SIZE])> {
    let instr = entry.to_instruction().map_err(|err| match err {
        SpecError::UnknownMnemonic(mnemonic) => AssemblerError::UnknownMnemonic { mnemonic, index },
        other => AssemblerError::Spec(other),
    })?;
    Ok((instr.opcode, encode(&instr)))
}
