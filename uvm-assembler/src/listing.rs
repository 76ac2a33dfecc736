//! Assembly listing
//!
//! A side record of what the assembler produced for each entry. Building it
//! never changes the binary output.

use serde::{Deserialize, Serialize};
use std::fmt;
use uvm_spec::{Instruction, Opcode, WORD_SIZE};

/// One listed instruction
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// Byte offset in the output
    pub offset: usize,
    pub opcode: Opcode,
    /// Operand as written in the source, before masking
    pub operand: u32,
    pub bytes: [u8; WORD_SIZE],
}

impl ListingEntry {
    /// Check whether the encoder truncated the operand
    pub fn truncated(&self) -> bool {
        !Instruction::new(self.opcode, self.operand).operand_fits()
    }
}

impl fmt::Display for ListingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: A={}, B={}, bytes=[0x{:02X}, 0x{:02X}, 0x{:02X}]",
            self.opcode,
            self.opcode.to_u8(),
            self.operand,
            self.bytes[0],
            self.bytes[1],
            self.bytes[2],
        )
    }
}

/// Full listing for one assembly run
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub entries: Vec<ListingEntry>,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListingEntry> {
        self.entries.iter()
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Listing ({} instructions) ===", self.entries.len())?;
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        write!(f, "===")
    }
}
