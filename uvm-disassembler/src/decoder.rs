//! Instruction decoder

use crate::error::{DisassemblerError, Result};
use uvm_spec::{Instruction, WORD_SIZE};

/// Decode one 3-byte word found at `offset`.
///
/// `Ok(None)` marks the end-of-program sentinel.
pub fn decode(bytes: [u8; WORD_SIZE], offset: usize) -> Result<Option<Instruction>> {
    Instruction::decode(bytes).map_err(|err| DisassemblerError::at_offset(err, offset))
}
