//! Instruction formatting to assembly text

use uvm_spec::{Instruction, WORD_SIZE};

/// Format instruction as assembly text (`load_const 42`)
pub fn format(instr: &Instruction) -> String {
    format!("{} {}", instr.opcode.mnemonic(), instr.operand)
}

/// Format instruction in the YAML list form (`- load_const: 42`)
pub fn format_entry(instr: &Instruction) -> String {
    format!("- {}: {}", instr.opcode.mnemonic(), instr.operand)
}

/// Format the raw bytes of a word (`55 01 00`)
pub fn format_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format one listing line: offset, raw bytes, text
pub fn format_line(offset: usize, bytes: [u8; WORD_SIZE], text: &str) -> String {
    format!("{:04x}:  {}  {}", offset, format_bytes(&bytes), text)
}
