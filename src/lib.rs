//! cypher-ast - Parser for a subset of the Cypher graph query language
//!
//! Turns query text into a typed [`ast::Query`]: a single `identifier`-based
//! lexer feeds a generated LALR(1) parser whose reduction actions build the
//! AST directly, with no intermediate generic parse tree. Supported surface:
//! `MATCH` (with node and relationship patterns, variable-length `*` ranges,
//! and `WHERE`), `RETURN` (with `DISTINCT`, `AS` aliasing, `ORDER BY`,
//! `SKIP`, `LIMIT`). See [`ast`] for the full node set.

pub mod ast;
pub mod error;
mod lexer;
mod transform;

lalrpop_util::lalrpop_mod!(
    #[allow(clippy::all)]
    grammar
);

pub use error::ParseError;

/// Parses a single Cypher query, returning its AST or the first error the
/// parser encountered. There is no recovery: a malformed query always
/// produces exactly one [`ParseError`], never a partial tree.
pub fn parse(query: &str) -> Result<ast::Query<'_>, ParseError> {
    log::debug!("parsing query: {query}");
    let lexer = lexer::Lexer::new(query);
    grammar::SingleQueryParser::new()
        .parse(query, lexer)
        .map_err(error::convert)
}
