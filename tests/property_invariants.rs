//! Property-based checks for the invariants that must hold across every
//! successfully parsed query, not just the handful of concrete scenarios.

use cypher_ast::ast::*;
use cypher_ast::parse;
use proptest::prelude::*;

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,5}"
}

proptest! {
    /// Invariant 1: parsing is deterministic.
    #[test]
    fn parse_is_deterministic(name in ident()) {
        let query = format!("MATCH (n) RETURN {name}");
        let first = parse(&query);
        let second = parse(&query);
        prop_assert_eq!(first, second);
    }

    /// Invariant 2: a bare variable projection is always wrapped in a
    /// PropertyLabelExpression, never handed back as a raw Variable.
    #[test]
    fn atoms_are_always_wrapped(name in ident()) {
        let query = format!("MATCH ({name}) RETURN {name}");
        let q = parse(&query).unwrap();
        match &q.ret.projections[0] {
            ProjectionItemOrStar::Item(item) => {
                prop_assert!(matches!(item.expr, Expression::PropertyLabelExpression(_)));
            }
            ProjectionItemOrStar::Star => {
                prop_assert!(false, "expected a projected item, got *");
            }
        }
    }

    /// Invariant 3: a relationship's range never has high < low.
    #[test]
    fn range_high_never_below_low(lo in 0i64..20, hi in 0i64..20) {
        let (a, b) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let query = format!("MATCH (n)-[r*{a}..{b}]-(m) RETURN n");
        let q = parse(&query).unwrap();
        match &q.matches[0].pattern[1] {
            PatternItem::Element(elem) => {
                prop_assert!(elem.rel.range.high.is_none() || elem.rel.range.high.unwrap() >= elem.rel.range.low);
            }
            other => prop_assert!(false, "expected a relationship element, got {other:?}"),
        }
    }

    /// Invariant 4: NotExpression.neg tracks the parity of leading NOTs.
    #[test]
    fn not_parity_matches_token_count(count in 0usize..6) {
        let nots = "NOT ".repeat(count);
        let query = format!("MATCH (n) WHERE {nots}n.flag RETURN n");
        let q = parse(&query).unwrap();
        let where_clause = q.matches[0].where_clause.as_ref();
        let expected_neg = count % 2 == 1;
        match (count, where_clause) {
            (0, Some(_)) => {}
            (_, Some(Expression::NotExpression(not))) => {
                prop_assert_eq!(not.neg, expected_neg);
            }
            other => prop_assert!(false, "unexpected where clause shape: {other:?}"),
        }
    }

    /// Invariant 5: the four arrow shapes map to the documented directions.
    #[test]
    fn direction_mapping_matches_arrow_shape(
        left_arrow in prop::bool::ANY,
        right_arrow in prop::bool::ANY,
    ) {
        let lhs = if left_arrow { "<-" } else { "-" };
        let rhs = if right_arrow { "->" } else { "-" };
        let query = format!("MATCH (n){lhs}[r]{rhs}(m) RETURN n");
        let q = parse(&query).unwrap();
        let expected = match (left_arrow, right_arrow) {
            (false, false) => Direction::None,
            (true, false) => Direction::Left,
            (false, true) => Direction::Right,
            (true, true) => Direction::Both,
        };
        match &q.matches[0].pattern[1] {
            PatternItem::Element(elem) => prop_assert_eq!(elem.rel.direction, expected),
            other => prop_assert!(false, "expected a relationship element, got {other:?}"),
        }
    }

    /// Invariant 6: MATCH with no RETURN always fails to parse.
    #[test]
    fn match_without_return_always_errors(name in ident()) {
        let query = format!("MATCH ({name})");
        prop_assert!(parse(&query).is_err());
    }
}
