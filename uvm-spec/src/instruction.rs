//! Decoded UVM instruction

use crate::encoding::{self, RawWord, WORD_SIZE};
use crate::error::{Result, SpecError};
use crate::Opcode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single instruction: opcode plus operand.
///
/// Instructions built by the decoder carry the full 16-bit operand field;
/// instructions built by hand may carry any `u32` and are masked on encode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operand: u32,
}

impl Instruction {
    pub const fn new(opcode: Opcode, operand: u32) -> Self {
        Self { opcode, operand }
    }

    pub const fn load_const(value: u32) -> Self {
        Self::new(Opcode::LoadConst, value)
    }

    pub const fn read_mem(address: u32) -> Self {
        Self::new(Opcode::ReadMem, address)
    }

    /// The operand is ignored by the canonical handler.
    pub const fn write_mem() -> Self {
        Self::new(Opcode::WriteMem, 0)
    }

    pub const fn less_or_eq(address: u32) -> Self {
        Self::new(Opcode::LessOrEq, address)
    }

    /// Encode to the 3-byte wire form
    pub fn encode(&self) -> [u8; WORD_SIZE] {
        encoding::encode(self.opcode, self.operand)
    }

    /// Check that the operand survives encoding unchanged
    pub fn operand_fits(&self) -> bool {
        self.operand & !self.opcode.operand_mask() == 0
    }

    /// Decode a 3-byte word.
    ///
    /// `Ok(None)` is the end-of-program sentinel; an unknown tag is an error.
    pub fn decode(bytes: [u8; WORD_SIZE]) -> Result<Option<Self>> {
        encoding::decode(bytes).map(Self::try_from).transpose()
    }
}

impl TryFrom<RawWord> for Instruction {
    type Error = SpecError;

    fn try_from(raw: RawWord) -> Result<Self> {
        let opcode = Opcode::from_u8(raw.tag).ok_or(SpecError::UnknownOpcode {
            tag: raw.tag,
            operand: raw.operand,
        })?;
        Ok(Self::new(opcode, raw.operand))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.opcode, self.operand)
    }
}
