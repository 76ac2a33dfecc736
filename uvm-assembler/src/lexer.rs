//! # Lexer for UVM program sources
//!
//! Accepts both the YAML-style list form (`- load_const: 42`) and the plain
//! form (`load_const 42`).

use logos::Logos;

/// Tokens for UVM program text
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip whitespace (not newlines)
#[logos(skip r"#[^\n]*")] // Skip comments
pub enum Token {
    /// Mnemonic
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Decimal literal, sign included. Range is checked by the parser.
    #[regex(r"-?[0-9]+", |lex| lex.slice().to_string())]
    Number(String),

    /// Hexadecimal literal, `0x` prefix included
    #[regex(r"0x[0-9a-fA-F]+", |lex| lex.slice().to_string())]
    Hex(String),

    /// Binary literal, `0b` prefix included
    #[regex(r"0b[01]+", |lex| lex.slice().to_string())]
    Binary(String),

    /// List item marker
    #[token("-")]
    Dash,

    /// Key/value separator
    #[token(":")]
    Colon,

    /// Newline
    #[regex(r"\n")]
    Newline,
}
