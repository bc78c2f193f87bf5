//! Parsing of raw text typed into the limit and guess fields.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("not a number")]
    NotANumber,
    #[error("number is too large")]
    Overflow,
}

/// Parses a non-negative integer literal: surrounding whitespace is ignored,
/// everything else must be ASCII digits. Signs are rejected.
pub fn parse_literal(raw: &str) -> Result<u32, LiteralError> {
    let text = raw.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LiteralError::NotANumber);
    }
    // Only overflow is left once every byte is a digit.
    text.parse::<u32>().map_err(|_| LiteralError::Overflow)
}
