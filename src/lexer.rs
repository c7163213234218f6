//! Tokeniser feeding the generated LALR parser.
//!
//! Keywords are case-insensitive (`MATCH`, `match`, `Match` all lex the same
//! way); everything else is a fixed-width token or one of the three
//! variable-width terminals (`identifier`, `integer`, `string`).

use logos::Logos;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LexError {
    #[default]
    InvalidToken,
    InvalidNumber(String),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::InvalidToken => write!(f, "unrecognised token"),
            LexError::InvalidNumber(s) => write!(f, "invalid integer literal: {s}"),
        }
    }
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Tok<'input> {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("|")]
    Pipe,
    #[token("..")]
    DotDot,
    #[token(".")]
    Dot,
    #[token("*")]
    Star,
    #[token("-")]
    Dash,
    #[token("<=")]
    Le,
    #[token(">=")]
    Ge,
    #[token("<>")]
    Ne,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,

    #[token("MATCH", ignore(case), priority = 10)]
    Match,
    #[token("WHERE", ignore(case), priority = 10)]
    Where,
    #[token("RETURN", ignore(case), priority = 10)]
    Return,
    #[token("ORDER", ignore(case), priority = 10)]
    Order,
    #[token("BY", ignore(case), priority = 10)]
    By,
    #[token("SKIP", ignore(case), priority = 10)]
    Skip,
    #[token("LIMIT", ignore(case), priority = 10)]
    Limit,
    #[token("DISTINCT", ignore(case), priority = 10)]
    Distinct,
    #[token("AS", ignore(case), priority = 10)]
    As,
    #[token("AND", ignore(case), priority = 10)]
    And,
    #[token("OR", ignore(case), priority = 10)]
    Or,
    #[token("XOR", ignore(case), priority = 10)]
    Xor,
    #[token("NOT", ignore(case), priority = 10)]
    Not,
    #[token("ASCENDING", ignore(case), priority = 10)]
    Ascending,
    #[token("ASC", ignore(case), priority = 10)]
    Asc,
    #[token("DESCENDING", ignore(case), priority = 10)]
    Descending,
    #[token("DESC", ignore(case), priority = 10)]
    Desc,
    #[token("TRUE", ignore(case), priority = 10)]
    True,
    #[token("FALSE", ignore(case), priority = 10)]
    False,
    #[token("NULL", ignore(case), priority = 10)]
    Null,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice(), priority = 1)]
    Identifier(&'input str),

    #[regex(r"-?[0-9]+", |lex| lex.slice(), priority = 2)]
    IntegerLit(&'input str),

    #[regex(r"'([^'\\]|\\.)*'", |lex| lex.slice(), priority = 2)]
    StringLit(&'input str),
}

impl fmt::Display for Tok<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Adapts a [`logos::Lexer`] to the `(start, token, end)` iterator shape
/// lalrpop expects from an external lexer.
pub struct Lexer<'input> {
    inner: logos::Lexer<'input, Tok<'input>>,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Lexer {
            inner: Tok::lexer(input),
        }
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Result<(usize, Tok<'input>, usize), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let tok = self.inner.next()?;
        let span = self.inner.span();
        Some(match tok {
            Ok(t) => Ok((span.start, t, span.end)),
            Err(e) => Err(e),
        })
    }
}
