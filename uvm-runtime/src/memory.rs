//! Memory subsystem
//!
//! Two disjoint address spaces: byte-addressed code memory and
//! cell-addressed data memory. Both are allocated once and never resized.

use crate::error::{Result, RuntimeError};
use uvm_spec::{encoding, Program, Word, WORD_SIZE};

/// Code memory: fixed-capacity byte buffer, program copied in at offset 0
#[derive(Debug, Clone)]
pub struct CodeMemory {
    bytes: Vec<u8>,
    loaded: usize,
}

impl CodeMemory {
    pub fn new(capacity: usize) -> Self {
        CodeMemory {
            bytes: vec![0; capacity],
            loaded: 0,
        }
    }

    /// Copy `program` to offset 0. Previously loaded bytes are cleared.
    pub fn load(&mut self, program: &Program) -> Result<()> {
        program.check_fits(self.bytes.len())?;
        self.bytes.fill(0);
        self.bytes[..program.len()].copy_from_slice(program.as_bytes());
        self.loaded = program.len();
        Ok(())
    }

    /// Fetch the word at `ip`.
    ///
    /// `None` when the word would run past the end of code memory, or when it
    /// straddles the end of the loaded program (a trailing partial word).
    pub fn fetch(&self, ip: usize) -> Option<[u8; WORD_SIZE]> {
        let end = ip.checked_add(WORD_SIZE)?;
        if ip < self.loaded && end > self.loaded {
            return None;
        }
        encoding::word_at(&self.bytes, ip)
    }

    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Number of bytes copied in by the last load
    pub fn loaded_len(&self) -> usize {
        self.loaded
    }
}

/// Data memory: fixed number of signed cells, all zero at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataMemory {
    cells: Vec<Word>,
}

impl DataMemory {
    pub fn new(size: usize) -> Self {
        DataMemory {
            cells: vec![0; size],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert a signed address to an index, if it is in range
    #[inline]
    pub fn index(&self, address: i64) -> Option<usize> {
        usize::try_from(address)
            .ok()
            .filter(|&i| i < self.cells.len())
    }

    pub fn read(&self, address: i64) -> Option<Word> {
        self.index(address).map(|i| self.cells[i])
    }

    /// Store `value`; returns `false` if the address is out of range
    #[must_use]
    pub fn write(&mut self, address: i64, value: Word) -> bool {
        match self.index(address) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Write consecutive cells starting at `address`
    pub fn preset(&mut self, address: usize, values: &[Word]) -> Result<()> {
        let end = address
            .checked_add(values.len())
            .filter(|&end| end <= self.cells.len())
            .ok_or(RuntimeError::PresetOutOfBounds {
                address,
                len: values.len(),
                capacity: self.cells.len(),
            })?;
        self.cells[address..end].copy_from_slice(values);
        Ok(())
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.cells
    }
}
