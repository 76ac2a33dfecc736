//! UVM Assembler
//!
//! Turn a structured program (ordered `{mnemonic, operand}` records) into a
//! flat sequence of 3-byte instruction words. A small text front end accepts
//! the YAML list form (`- load_const: 42`) and a plain `load_const 42` form.
//!
//! ## Example
//!
//! ```rust
//! use uvm_assembler::assemble_source;
//!
//! let source = r#"
//!     - load_const: 42
//!     - load_const: 7
//!     - write_mem: 0
//! "#;
//!
//! let code = assemble_source(source).unwrap();
//! assert_eq!(code.len(), 9);
//! ```

pub mod assembler;
pub mod encoder;
pub mod error;
pub mod lexer;
pub mod listing;
pub mod parser;

pub use assembler::{assemble, assemble_source, assemble_with_listing};
pub use encoder::{encode, encode_entry};
pub use error::{AssemblerError, Result};
pub use listing::{Listing, ListingEntry};
pub use parser::{parse_entry, parse_source};
