//! # Program Structure
//!
//! A binary program is a bare concatenation of 3-byte instruction words:
//! no header, no magic number, no length prefix. A structured program is an
//! ordered list of `{mnemonic, operand}` records.

use crate::encoding::{self, WORD_SIZE};
use crate::error::{Result, SpecError};
use crate::{Instruction, Opcode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One record of a structured program
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgramEntry {
    pub mnemonic: String,
    pub operand: u32,
}

impl ProgramEntry {
    pub fn new(mnemonic: impl Into<String>, operand: u32) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            operand,
        }
    }

    /// Resolve the mnemonic
    pub fn opcode(&self) -> Result<Opcode> {
        Opcode::from_mnemonic(&self.mnemonic)
            .ok_or_else(|| SpecError::UnknownMnemonic(self.mnemonic.clone()))
    }

    pub fn to_instruction(&self) -> Result<Instruction> {
        Ok(Instruction::new(self.opcode()?, self.operand))
    }
}

impl From<Instruction> for ProgramEntry {
    fn from(inst: Instruction) -> Self {
        Self::new(inst.opcode.mnemonic(), inst.operand)
    }
}

impl fmt::Display for ProgramEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mnemonic, self.operand)
    }
}

/// Binary program
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Raw code bytes
    pub code: Vec<u8>,
}

impl Program {
    /// Create an empty program
    pub fn new() -> Self {
        Self { code: Vec::new() }
    }

    /// Wrap raw bytes; any length is accepted
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            code: bytes.to_vec(),
        }
    }

    /// Encode a sequence of instructions
    pub fn from_instructions<'a, I>(instructions: I) -> Self
    where
        I: IntoIterator<Item = &'a Instruction>,
    {
        let code = instructions
            .into_iter()
            .flat_map(|inst| inst.encode())
            .collect();
        Self { code }
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.code
    }

    /// Consume into raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.code
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Number of whole instruction words
    pub fn word_count(&self) -> usize {
        self.code.len() / WORD_SIZE
    }

    /// Bytes past the last whole word
    pub fn trailing_bytes(&self) -> &[u8] {
        &self.code[self.word_count() * WORD_SIZE..]
    }

    /// Iterate over the whole words with their byte offsets
    pub fn words(&self) -> impl Iterator<Item = (usize, [u8; WORD_SIZE])> + '_ {
        (0..self.word_count()).filter_map(move |i| {
            let offset = i * WORD_SIZE;
            encoding::word_at(&self.code, offset).map(|w| (offset, w))
        })
    }

    /// Check that the program fits in `capacity` bytes of code memory
    pub fn check_fits(&self, capacity: usize) -> Result<()> {
        if self.code.len() > capacity {
            return Err(SpecError::ProgramTooLarge {
                size: self.code.len(),
                capacity,
            });
        }
        Ok(())
    }
}

impl From<Vec<u8>> for Program {
    fn from(code: Vec<u8>) -> Self {
        Self { code }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Program ({} bytes, {} words", self.len(), self.word_count())?;
        if !self.trailing_bytes().is_empty() {
            write!(f, ", {} trailing", self.trailing_bytes().len())?;
        }
        write!(f, ")")
    }
}
