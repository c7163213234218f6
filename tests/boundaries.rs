//! Edge-case behaviours called out explicitly as boundaries.

use cypher_ast::ast::*;
use cypher_ast::parse;

#[test]
fn empty_relationship_detail_parses_with_defaults() {
    let q = parse("MATCH (n)-[]-(m) RETURN n").unwrap();
    match &q.matches[0].pattern[1] {
        PatternItem::Element(elem) => {
            assert_eq!(elem.rel.variable, None);
            assert!(elem.rel.types.is_empty());
            assert_eq!(elem.rel.range, Range { low: 1, high: Some(1) });
            assert!(elem.rel.properties.is_empty());
        }
        other => panic!("expected a relationship element, got {other:?}"),
    }
}

#[test]
fn double_not_cancels_to_non_negated() {
    let q = parse("MATCH (n) WHERE NOT NOT n.flag RETURN n").unwrap();
    let where_clause = q.matches[0].where_clause.as_ref().unwrap();
    match where_clause {
        Expression::NotExpression(not) => assert!(!not.neg),
        other => panic!("expected a NotExpression, got {other:?}"),
    }
}

#[test]
fn single_not_is_negated() {
    let q = parse("MATCH (n) WHERE NOT n.flag RETURN n").unwrap();
    let where_clause = q.matches[0].where_clause.as_ref().unwrap();
    match where_clause {
        Expression::NotExpression(not) => assert!(not.neg),
        other => panic!("expected a NotExpression, got {other:?}"),
    }
}

#[test]
fn return_distinct_star() {
    let q = parse("RETURN DISTINCT *").unwrap_err();
    // A RETURN with no preceding MATCH is also rejected (see invariant 6's
    // mirror case); exercise DISTINCT + * through a well-formed query
    // instead.
    assert!(matches!(q, cypher_ast::ParseError::Syntax(_)));

    let q = parse("MATCH (n) RETURN DISTINCT *").unwrap();
    assert!(q.ret.distinct);
    assert_eq!(q.ret.projections, vec![ProjectionItemOrStar::Star]);
}

#[test]
fn star_cannot_be_mixed_with_concrete_projection_items() {
    let err = parse("MATCH (n) RETURN n, *").unwrap_err();
    assert!(matches!(err, cypher_ast::ParseError::Syntax(_)));
}
