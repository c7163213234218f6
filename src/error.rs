//! The parser's single public error type.
//!
//! Every failure mode the grammar and lexer can produce collapses into one
//! of these two variants; there is no partial-success or recovery path.

use crate::lexer::{LexError, Tok};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A token was unexpected, or the input ended before a complete query
    /// was formed. Carries a human-readable description of what lalrpop
    /// expected at the failure point.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// An `integer` token's text did not fit in an `i64`.
    #[error("invalid integer literal: {0}")]
    InvalidNumber(String),
}

pub(crate) fn convert(err: lalrpop_util::ParseError<usize, Tok<'_>, LexError>) -> ParseError {
    use lalrpop_util::ParseError::*;
    match err {
        User {
            error: LexError::InvalidNumber(text),
        } => ParseError::InvalidNumber(text),
        User {
            error: LexError::InvalidToken,
        } => ParseError::Syntax("invalid token".to_string()),
        InvalidToken { location } => {
            ParseError::Syntax(format!("invalid token at offset {location}"))
        }
        UnrecognizedEof { location, expected } => ParseError::Syntax(format!(
            "unexpected end of input at offset {location}, expected one of: {}",
            expected.join(", ")
        )),
        UnrecognizedToken {
            token: (start, tok, end),
            expected,
        } => ParseError::Syntax(format!(
            "unexpected token {tok} at offset {start}..{end}, expected one of: {}",
            expected.join(", ")
        )),
        ExtraToken {
            token: (start, tok, end),
        } => ParseError::Syntax(format!("extra token {tok} at offset {start}..{end}")),
    }
}
