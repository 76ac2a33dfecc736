//! # Instruction Encoding Constants and Helpers
//!
//! Every instruction is a 3-byte little-endian word:
//!
//! ```text
//! bit  23 ............ 3+w | 3+w-1 ...... 3 | 2 .. 0
//!      zero                | operand (w)    | opcode
//! ```
//!
//! `w` depends on the opcode (see [`Opcode::operand_bits`]). The encoder masks
//! the operand to `w` bits, so out-of-range operands wrap silently. The decoder
//! does not re-mask per opcode: it always exposes the 16-bit field at bits
//! 3..=18.

use crate::Opcode;

// ============================================================================
// Layout Constants
// ============================================================================

/// Size of one encoded instruction in bytes
pub const WORD_SIZE: usize = 3;

/// Opcode field: bits 0-2
pub const OPCODE_SHIFT: u32 = 0;

/// Opcode mask (3 bits)
pub const OPCODE_MASK: u32 = 0b111;

/// Operand field: starts at bit 3
pub const OPERAND_SHIFT: u32 = 3;

/// Raw operand field exposed by the decoder (16 bits)
pub const OPERAND_FIELD_MASK: u32 = 0xFFFF;

/// The all-zero end-of-program word
pub const SENTINEL: [u8; WORD_SIZE] = [0; WORD_SIZE];

/// Raw decoded word: tag and operand field, not yet validated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawWord {
    pub tag: u8,
    pub operand: u32,
}

// ============================================================================
// Encoding
// ============================================================================

/// Mask an operand to the width of `opcode` (intentional wraparound)
#[inline]
pub const fn mask_operand(opcode: Opcode, operand: u32) -> u32 {
    operand & opcode.operand_mask()
}

/// Pack opcode and operand into the low 24 bits of a `u32`
#[inline]
pub const fn encode_word(opcode: Opcode, operand: u32) -> u32 {
    ((opcode.to_u8() as u32) & OPCODE_MASK) | (mask_operand(opcode, operand) << OPERAND_SHIFT)
}

/// Encode an instruction into its 3-byte wire form
#[inline]
pub fn encode(opcode: Opcode, operand: u32) -> [u8; WORD_SIZE] {
    let le = encode_word(opcode, operand).to_le_bytes();
    [le[0], le[1], le[2]]
}

// ============================================================================
// Decoding
// ============================================================================

/// Read 3 bytes as a little-endian `u32` with a zero high byte
#[inline]
pub const fn word_from_bytes(bytes: [u8; WORD_SIZE]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0])
}

/// Extract the opcode tag (bits 0-2)
#[inline]
pub const fn extract_tag(word: u32) -> u8 {
    ((word >> OPCODE_SHIFT) & OPCODE_MASK) as u8
}

/// Extract the raw operand field (bits 3-18)
#[inline]
pub const fn extract_operand(word: u32) -> u32 {
    (word >> OPERAND_SHIFT) & OPERAND_FIELD_MASK
}

/// Check for the end-of-program sentinel
#[inline]
pub fn is_sentinel(bytes: [u8; WORD_SIZE]) -> bool {
    bytes == SENTINEL
}

/// Decode a 3-byte word. Returns `None` for the sentinel.
pub fn decode(bytes: [u8; WORD_SIZE]) -> Option<RawWord> {
    if is_sentinel(bytes) {
        return None;
    }
    let word = word_from_bytes(bytes);
    Some(RawWord {
        tag: extract_tag(word),
        operand: extract_operand(word),
    })
}

/// Fetch the word at `offset`, if 3 full bytes are available
#[inline]
pub fn word_at(code: &[u8], offset: usize) -> Option<[u8; WORD_SIZE]> {
    let end = offset.checked_add(WORD_SIZE)?;
    let slice = code.get(offset..end)?;
    Some([slice[0], slice[1], slice[2]])
}
