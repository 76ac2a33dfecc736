//! # Memory Configuration
//!
//! Capacities of the two address spaces. Both are fixed for the lifetime of a
//! VM; code memory is measured in bytes, data memory in cells.

use crate::encoding::WORD_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest capacity accepted for either address space (16 Mi)
pub const MAX_MEMORY_SIZE: usize = 1 << 24;

/// Memory layout configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Config {
    /// Code memory capacity in bytes
    pub code_size: usize,
    /// Data memory capacity in cells
    pub data_size: usize,
}

impl Config {
    /// Default configuration: 64 KiB of code, 65536 data cells
    pub const DEFAULT: Self = Self {
        code_size: 65536,
        data_size: 65536,
    };

    /// Create a new configuration with validation
    pub const fn new(code_size: usize, data_size: usize) -> Result<Self, ConfigError> {
        let config = Self {
            code_size,
            data_size,
        };

        if code_size < WORD_SIZE {
            return Err(ConfigError::CodeTooSmall);
        }
        if code_size > MAX_MEMORY_SIZE {
            return Err(ConfigError::CodeTooLarge);
        }
        if data_size == 0 {
            return Err(ConfigError::ZeroDataSize);
        }
        if data_size > MAX_MEMORY_SIZE {
            return Err(ConfigError::DataTooLarge);
        }

        Ok(config)
    }

    /// Number of whole instruction words code memory can hold
    #[inline]
    pub const fn code_words(&self) -> usize {
        self.code_size / WORD_SIZE
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::new(self.code_size, self.data_size).map(|_| ())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ code: {} bytes ({} words), data: {} cells }}",
            self.code_size,
            self.code_words(),
            self.data_size,
        )
    }
}

/// Configuration error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Code memory must hold at least one instruction word
    CodeTooSmall,
    /// Code memory exceeds MAX_MEMORY_SIZE
    CodeTooLarge,
    /// Data memory must have at least one cell
    ZeroDataSize,
    /// Data memory exceeds MAX_MEMORY_SIZE
    DataTooLarge,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::CodeTooSmall => {
                write!(f, "code_size must be at least {} bytes", WORD_SIZE)
            }
            ConfigError::CodeTooLarge => {
                write!(f, "code_size must not exceed {} bytes", MAX_MEMORY_SIZE)
            }
            ConfigError::ZeroDataSize => {
                write!(f, "data_size must be at least 1 cell")
            }
            ConfigError::DataTooLarge => {
                write!(f, "data_size must not exceed {} cells", MAX_MEMORY_SIZE)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
