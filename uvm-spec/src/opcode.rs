//! # UVM Opcode Definitions
//!
//! Opcodes occupy the low 3 bits of every instruction word. The tag values
//! are fixed wire constants; they are neither contiguous nor ordered.
//!
//! | Mnemonic     | Tag | Operand width |
//! |--------------|-----|---------------|
//! | `load_const` | 5   | 9 bits        |
//! | `read_mem`   | 4   | 13 bits       |
//! | `write_mem`  | 2   | 14 bits       |
//! | `less_or_eq` | 1   | 13 bits       |

use serde::{Deserialize, Serialize};

/// Instruction opcode (3-bit tag)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// LESS_OR_EQ: push (mem[operand] <= pop()) ? 1 : 0
    LessOrEq = 1,
    /// WRITE_MEM: addr = pop(); value = pop(); mem[addr] = value
    WriteMem = 2,
    /// READ_MEM: push mem[operand]
    ReadMem = 4,
    /// LOAD_CONST: push operand
    LoadConst = 5,
}

impl Opcode {
    /// Opcode width in bits
    pub const BITS: u32 = 3;

    /// Opcode mask (0b111)
    pub const MASK: u32 = 0b111;

    /// Every opcode, in tag order
    pub const ALL: [Opcode; 4] = [
        Opcode::LessOrEq,
        Opcode::WriteMem,
        Opcode::ReadMem,
        Opcode::LoadConst,
    ];

    /// Try to convert from a raw tag
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Opcode::LessOrEq),
            2 => Some(Opcode::WriteMem),
            4 => Some(Opcode::ReadMem),
            5 => Some(Opcode::LoadConst),
            _ => None,
        }
    }

    /// Convert to the raw tag
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Resolve an assembly mnemonic
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        match mnemonic {
            "load_const" => Some(Opcode::LoadConst),
            "read_mem" => Some(Opcode::ReadMem),
            "write_mem" => Some(Opcode::WriteMem),
            "less_or_eq" => Some(Opcode::LessOrEq),
            _ => None,
        }
    }

    /// Assembly mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::LoadConst => "load_const",
            Opcode::ReadMem => "read_mem",
            Opcode::WriteMem => "write_mem",
            Opcode::LessOrEq => "less_or_eq",
        }
    }

    /// Width of the operand field in bits
    #[inline]
    pub const fn operand_bits(self) -> u32 {
        match self {
            Opcode::LoadConst => 9,
            Opcode::ReadMem | Opcode::LessOrEq => 13,
            Opcode::WriteMem => 14,
        }
    }

    /// Mask selecting the low `operand_bits()` bits
    #[inline]
    pub const fn operand_mask(self) -> u32 {
        (1u32 << self.operand_bits()) - 1
    }

    /// Number of stack values the handler pops
    #[inline]
    pub const fn stack_inputs(self) -> usize {
        match self {
            Opcode::LoadConst | Opcode::ReadMem => 0,
            Opcode::LessOrEq => 1,
            Opcode::WriteMem => 2,
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
