//! Full program disassembly

use crate::decoder::decode;
use crate::error::Result;
use crate::formatter::{format, format_bytes, format_entry, format_line};
use uvm_spec::{Instruction, Program, ProgramEntry};

/// Disassemble bytecode into an annotated listing.
///
/// Stops at the first sentinel word. Bytes past the last whole word are
/// reported in a trailing comment.
pub fn disassemble(code: &[u8]) -> Result<String> {
    let program = Program::from_bytes(code);
    let mut output = String::new();

    output.push_str(&format!(
        "; UVM bytecode: {} bytes, {} words\n",
        program.len(),
        program.word_count()
    ));

    for (offset, word) in program.words() {
        match decode(word, offset)? {
            Some(inst) => {
                output.push_str(&format_line(offset, word, &format(&inst)));
                output.push('\n');
            }
            None => {
                output.push_str(&format_line(offset, word, "; end of program"));
                output.push('\n');
                return Ok(output);
            }
        }
    }

    let trailing = program.trailing_bytes();
    if !trailing.is_empty() {
        output.push_str(&format!("; trailing bytes: {}\n", format_bytes(trailing)));
    }

    Ok(output)
}

/// Decode bytecode back into instructions, up to the first sentinel
pub fn to_instructions(code: &[u8]) -> Result<Vec<Instruction>> {
    let program = Program::from_bytes(code);
    let mut out = Vec::with_capacity(program.word_count());
    for (offset, word) in program.words() {
        match decode(word, offset)? {
            Some(inst) => out.push(inst),
            None => break,
        }
    }
    Ok(out)
}

/// Decode bytecode into structured entries the assembler accepts
pub fn to_entries(code: &[u8]) -> Result<Vec<ProgramEntry>> {
    Ok(to_instructions(code)?
        .into_iter()
        .map(ProgramEntry::from)
        .collect())
}

/// Render bytecode as program text in the YAML list form
pub fn to_source(code: &[u8]) -> Result<String> {
    let mut output = String::new();
    for inst in to_instructions(code)? {
        output.push_str(&format_entry(&inst));
        output.push('\n');
    }
    Ok(output)
}
