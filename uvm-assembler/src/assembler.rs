//! Main assembler logic

use crate::encoder::encode_entry;
use crate::error::Result;
use crate::listing::{Listing, ListingEntry};
use crate::parser::parse_source;
use uvm_spec::{ProgramEntry, WORD_SIZE};

/// Assemble structured entries into bytecode.
///
/// Output offset of entry `i` is `i * 3`. Fails on the first unknown mnemonic
/// without returning partial output.
pub fn assemble(program: &[ProgramEntry]) -> Result<Vec<u8>> {
    assemble_with_listing(program).map(|(code, _)| code)
}

/// Assemble and record a listing of every emitted word
pub fn assemble_with_listing(program: &[ProgramEntry]) -> Result<(Vec<u8>, Listing)> {
    let mut code = Vec::with_capacity(program.len() * WORD_SIZE);
    let mut listing = Listing::default();

    for (index, entry) in program.iter().enumerate() {
        let (opcode, bytes) = encode_entry(entry, index)?;
        listing.entries.push(ListingEntry {
            offset: code.len(),
            opcode,
            operand: entry.operand,
            bytes,
        });
        code.extend_from_slice(&bytes);
    }

    Ok((code, listing))
}

/// Parse program text and assemble it
pub fn assemble_source(source: &str) -> Result<Vec<u8>> {
    let entries = parse_source(source)?;
    assemble(&entries)
}
