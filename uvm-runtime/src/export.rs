//! Data memory export
//!
//! Produces an ordered `(address, value)` view of a range of data cells.
//! Rendering beyond the XML form is left to callers; the types are serde
//! serializable.

use crate::error::{Result, RuntimeError};
use crate::memory::DataMemory;
use serde::{Deserialize, Serialize};
use std::fmt;
use uvm_spec::Word;

/// One exported cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCell {
    pub address: usize,
    pub value: Word,
}

/// Snapshot of data cells for a requested inclusive range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDump {
    /// Requested start address
    pub start: usize,
    /// Requested end address (inclusive, may exceed capacity)
    pub end: usize,
    /// Cells in ascending address order, clamped to capacity
    pub cells: Vec<MemoryCell>,
}

impl MemoryDump {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = Word> + '_ {
        self.cells.iter().map(|cell| cell.value)
    }

    /// Render as an indented XML document
    pub fn to_xml(&self) -> String {
        XmlDump(self).to_string()
    }
}

/// XML rendering of a dump
struct XmlDump<'a>(&'a MemoryDump);

impl fmt::Display for XmlDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dump = self.0;
        writeln!(f, "<?xml version=\"1.0\" ?>")?;
        write!(
            f,
            "<memory_dump start=\"{:#x}\" end=\"{:#x}\"",
            dump.start, dump.end
        )?;
        if dump.cells.is_empty() {
            return writeln!(f, "/>");
        }
        writeln!(f, ">")?;
        for cell in &dump.cells {
            writeln!(
                f,
                "  <cell address=\"{:#x}\" value=\"{}\" dec=\"{}\"/>",
                cell.address, cell.value, cell.value
            )?;
        }
        writeln!(f, "</memory_dump>")
    }
}

/// Export cells `start..=end` of `data`
///
/// Addresses past the end of data memory are dropped from the result.
/// `start > end` is an error.
pub fn dump(data: &DataMemory, start: usize, end: usize) -> Result<MemoryDump> {
    if start > end {
        return Err(RuntimeError::InvalidRange { start, end });
    }

    let upper = end.saturating_add(1).min(data.len());
    let cells = data
        .as_slice()
        .get(start..upper)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, &value)| MemoryCell {
            address: start + i,
            value,
        })
        .collect();

    tracing::trace!("dump [{}, {}] of {} cells", start, end, data.len());

    Ok(MemoryDump { start, end, cells })
}
