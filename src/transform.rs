//! Rule-to-node handlers called directly from `grammar.lalrpop`'s reduction
//! actions.
//!
//! In a tree-walking transformer each of these would be looked up in a
//! rule-name table at runtime; here the grammar rule that would key the
//! lookup is statically known at compile time, so the "table" is just a
//! direct call from the matching action. Same bottom-up rewrite, resolved
//! one stage earlier.

use crate::ast::{
    Comparison, Direction, Expression, NotExpression, PartialComparison, Property,
    PropertyLabelExpression, PropertyMap, Range, RelationshipPattern, Variable,
};
use crate::lexer::LexError;

/// Parses an `integer` token's raw text, rejecting anything that overflows
/// `i64`. The grammar calls this from a fallible (`=>?`) action so the
/// failure surfaces as a normal parse error rather than a panic.
pub fn parse_int(text: &str) -> Result<i64, LexError> {
    text.parse::<i64>()
        .map_err(|_| LexError::InvalidNumber(text.to_string()))
}

/// Assembles a relationship from its direction and optional bracketed
/// detail block. When the block is absent the relationship carries no
/// variable, no types, the default single-hop range, and no properties.
pub fn relationship_pattern<'a>(
    direction: Direction,
    detail: Option<RelationshipDetail<'a>>,
) -> RelationshipPattern<'a> {
    match detail {
        Some(d) => RelationshipPattern {
            direction,
            variable: d.variable,
            types: d.types,
            range: d.range.unwrap_or_default(),
            properties: d.properties,
        },
        None => RelationshipPattern {
            direction,
            variable: None,
            types: Vec::new(),
            range: Range::default(),
            properties: PropertyMap::new(),
        },
    }
}

/// The four slots inside `-[ ... ]-`, already individually transformed.
pub struct RelationshipDetail<'a> {
    pub variable: Option<Variable<'a>>,
    pub types: Vec<String>,
    pub range: Option<Range>,
    pub properties: PropertyMap<'a>,
}

/// Resolves the `lo..hi` form of a range literal. The bare-`*` and
/// exact-`*n` forms are simple enough to build directly in the grammar; this
/// covers the four remaining combinations of present/absent bound.
pub fn range_from_dots(low: Option<i64>, high: Option<i64>) -> Range {
    match (low, high) {
        (Some(lo), Some(hi)) => Range {
            low: lo,
            high: Some(hi),
        },
        (Some(lo), None) => Range { low: lo, high: None },
        (None, Some(hi)) => Range {
            low: 1,
            high: Some(hi),
        },
        (None, None) => Range { low: 1, high: None },
    }
}

/// Wraps every atomic expression in its universal `PropertyLabelExpression`
/// shell, even when the access chain and label test are both empty.
pub fn property_or_labels_expression<'a>(
    atom: Expression<'a>,
    properties: Vec<Property<'a>>,
    node_labels: Option<Vec<String>>,
) -> Expression<'a> {
    Expression::PropertyLabelExpression(Box::new(PropertyLabelExpression {
        atom: Box::new(atom),
        properties,
        node_labels: node_labels.unwrap_or_default(),
    }))
}

/// A comparison with no right-hand side returns its operand unchanged
/// rather than a `BaseExpression` wrapper — see the note on that variant in
/// `ast.rs`.
pub fn comparison_expression<'a>(
    lhs: Expression<'a>,
    rhs: Option<PartialComparison<'a>>,
) -> Expression<'a> {
    match rhs {
        None => lhs,
        Some(partial) => Expression::Comparison(Box::new(Comparison {
            expr1: Box::new(lhs),
            expr2: partial,
        })),
    }
}

/// Folds one more leading `NOT` into an already-built expression, flipping
/// parity rather than stacking wrappers: `NOT (NOT x)` and `NOT NOT x`
/// collapse to the same `neg = false` node.
pub fn not_expression(inner: Expression<'_>) -> Expression<'_> {
    match inner {
        Expression::NotExpression(n) => Expression::NotExpression(Box::new(NotExpression {
            expr: n.expr,
            neg: !n.neg,
        })),
        other => Expression::NotExpression(Box::new(NotExpression {
            expr: Box::new(other),
            neg: true,
        })),
    }
}
