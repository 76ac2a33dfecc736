//! Program text parser
//!
//! One instruction per line:
//!
//! ```text
//! - load_const: 42     # YAML list form
//! read_mem 0x64        # plain form
//! ```

use crate::error::{AssemblerError, Result};
use crate::lexer::Token;
use logos::Logos;
use std::ops::Range;
use uvm_spec::ProgramEntry;

/// Parse a whole source text into structured entries
pub fn parse_source(source: &str) -> Result<Vec<ProgramEntry>> {
    let mut entries = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        if let Some(entry) = parse_line(line, idx + 1)? {
            entries.push(entry);
        }
    }

    Ok(entries)
}

/// Parse a single instruction from text
pub fn parse_entry(text: &str) -> Result<ProgramEntry> {
    parse_line(text, 1)?.ok_or_else(|| AssemblerError::SyntaxError {
        line: 1,
        column: 1,
        message: "Empty instruction".to_string(),
    })
}

/// Parse one line; `Ok(None)` for blank and comment-only lines
fn parse_line(text: &str, line: usize) -> Result<Option<ProgramEntry>> {
    let mut tokens = Vec::new();
    for (token, span) in Token::lexer(text).spanned() {
        match token {
            Ok(Token::Newline) => {}
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                return Err(syntax_error(
                    line,
                    &span,
                    format!("Invalid token '{}'", &text[span.clone()]),
                ))
            }
        }
    }

    let mut iter = tokens.into_iter().peekable();

    if iter.peek().is_none() {
        return Ok(None);
    }

    if matches!(iter.peek(), Some((Token::Dash, _))) {
        iter.next();
    }

    let mnemonic = match iter.next() {
        Some((Token::Identifier(name), _)) => name,
        Some((_, span)) => return Err(syntax_error(line, &span, "Expected mnemonic".to_string())),
        None => {
            return Err(AssemblerError::SyntaxError {
                line,
                column: text.len() + 1,
                message: "Expected mnemonic".to_string(),
            })
        }
    };

    if matches!(iter.peek(), Some((Token::Colon, _))) {
        iter.next();
    }

    let operand = match iter.next() {
        Some((token, span)) => parse_operand(&token, line).ok_or_else(|| {
            syntax_error(line, &span, "Expected numeric operand".to_string())
        })??,
        None => {
            return Err(AssemblerError::SyntaxError {
                line,
                column: text.trim_end().len() + 1,
                message: format!("Missing operand for '{}'", mnemonic),
            })
        }
    };

    if let Some((_, span)) = iter.next() {
        return Err(syntax_error(
            line,
            &span,
            format!("Unexpected '{}' after operand", &text[span.clone()]),
        ));
    }

    Ok(Some(ProgramEntry { mnemonic, operand }))
}

/// Convert a numeric token; `None` if the token is not a number
///
/// Every literal that is negative or does not fit in `u32` is an
/// `InvalidOperand`, however many digits it has.
fn parse_operand(token: &Token, line: usize) -> Option<Result<u32>> {
    let (literal, digits, radix) = match token {
        Token::Number(s) => (s, s.as_str(), 10),
        Token::Hex(s) => (s, &s[2..], 16),
        Token::Binary(s) => (s, &s[2..], 2),
        _ => return None,
    };

    let value = i128::from_str_radix(digits, radix).ok();
    Some(
        value
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| AssemblerError::InvalidOperand {
                line,
                value: value.map_or_else(|| literal.clone(), |v| v.to_string()),
            }),
    )
}

fn syntax_error(line: usize, span: &Range<usize>, message: String) -> AssemblerError {
    AssemblerError::SyntaxError {
        line,
        column: span.start + 1,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_form() {
        let entry = parse_entry("- load_const: 42").unwrap();
        assert_eq!(entry, ProgramEntry::new("load_const", 42));
    }

    #[test]
    fn test_parse_plain_form() {
        let entry = parse_entry("read_mem 0x64").unwrap();
        assert_eq!(entry, ProgramEntry::new("read_mem", 100));
    }

    #[test]
    fn test_parse_source_skips_blank_and_comments() {
        let source = "# array copy\n\n- read_mem: 100\n  - write_mem: 0  # store\n";
        let entries = parse_source(source).unwrap();
        assert_eq!(
            entries,
            vec![ProgramEntry::new("read_mem", 100), ProgramEntry::new("write_mem", 0)]
        );
    }

    #[test]
    fn test_missing_operand() {
        match parse_source("ok 1\nload_const") {
            Err(AssemblerError::SyntaxError { line, column, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(column, 11);
            }
            other => panic!("Expected SyntaxError, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_operand() {
        assert!(matches!(
            parse_entry("load_const -1"),
            Err(AssemblerError::InvalidOperand { line: 1, .. })
        ));
    }

    #[test]
    fn test_oversized_operand() {
        assert!(matches!(
            parse_entry("load_const 0x100000000"),
            Err(AssemblerError::InvalidOperand { .. })
        ));
    }

    #[test]
    fn test_trailing_garbage() {
        match parse_entry("load_const 1 2") {
            Err(AssemblerError::SyntaxError { column, .. }) => assert_eq!(column, 14),
            other => panic!("Expected SyntaxError, got {:?}", other),
        }
    }

    #[test]
    fn test_mnemonic_case_preserved() {
        assert_eq!(parse_entry("READ_MEM 1").unwrap().mnemonic, "READ_MEM");
    }

    #[test]
    fn test_oversized_literals_are_invalid_operands() {
        for text in [
            "load_const 99999999999999999999",
            "load_const 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
            "load_const -99999999999999999999999999999999999999999",
        ] {
            assert!(
                matches!(parse_entry(text), Err(AssemblerError::InvalidOperand { line: 1, .. })),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_mnemonic_not_validated_here() {
        // Mnemonic resolution belongs to the assembler.
        assert_eq!(parse_entry("halt 0").unwrap().mnemonic, "halt");
    }
}
