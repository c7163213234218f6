//! Typed AST produced by the parser.
//!
//! Every node here is an immutable value built bottom-up while the grammar
//! reduces; equality is structural (`#[derive(PartialEq)]` throughout) and
//! nothing is shared by identity. See [`crate::parse`] for the entry point.

/// Orientation of a relationship pattern, e.g. `-[r]->`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `-[r]-`
    None,
    /// `<-[r]->`
    Both,
    /// `-[r]->`
    Right,
    /// `<-[r]-`
    Left,
}

/// Comparison operators accepted by `partial_comparison_expression`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
}

/// Multiplicity bound on a variable-length relationship, e.g. `*1..3`.
///
/// `high = None` means unbounded. The default, used whenever a relationship
/// carries no `*`, is the single-hop range `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub low: i64,
    pub high: Option<i64>,
}

impl Default for Range {
    fn default() -> Self {
        Range {
            low: 1,
            high: Some(1),
        }
    }
}

/// A bound name, e.g. `n` in `(n:Person)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable<'a>(pub &'a str);

/// A single property-access step, e.g. `name` in `n.name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property<'a>(pub &'a str);

/// A mapping from property name to value expression, e.g. `{name: 'Alice'}`.
///
/// Represented as an insertion-ordered vector of pairs rather than a hash
/// map: these maps are always small and the ordering of `map_literal`'s
/// output is otherwise observable in `Debug` output used by tests.
pub type PropertyMap<'a> = Vec<(String, Expression<'a>)>;

/// A literal value: `Str` also carries the unquoted-keyword spelling for
/// `TRUE`/`FALSE`/`NULL` (see `literal` in the design notes), matching the
/// source grammar's choice to store those as their rule name rather than as
/// a distinct boolean/null variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal<'a> {
    /// Raw source text, quotes included for string literals.
    Str(&'a str),
    Int(i64),
    List(Vec<Expression<'a>>),
}

/// The narrower expression subset valid as the head of a
/// [`PropertyLabelExpression`]. Every expression variant is grammatically
/// reachable here once parenthesised, so `Atom` is simply an alias for
/// `Expression` rather than a separate type — see DESIGN.md.
pub type Atom<'a> = Expression<'a>;

/// The pervasive wrapper produced for every atomic expression: carries an
/// optional `.prop.prop…` access chain and an optional `:Label:Label…` test.
/// Produced even when both are empty — this uniformity is load-bearing,
/// downstream consumers rely on it.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyLabelExpression<'a> {
    pub atom: Box<Atom<'a>>,
    pub properties: Vec<Property<'a>>,
    pub node_labels: Vec<String>,
}

/// The right-hand side of a comparison: an operator plus its operand.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialComparison<'a> {
    pub op: Operator,
    pub expr: Box<Expression<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<'a> {
    pub expr1: Box<Expression<'a>>,
    pub expr2: PartialComparison<'a>,
}

/// `NotExpression.neg` reflects the parity of `NOT` tokens seen, not their
/// count: `NOT NOT x` yields `neg = false`.
#[derive(Debug, Clone, PartialEq)]
pub struct NotExpression<'a> {
    pub expr: Box<Expression<'a>>,
    pub neg: bool,
}

/// Closed sum type for every expression shape the grammar produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'a> {
    Literal(Literal<'a>),
    Variable(Variable<'a>),
    PropertyLabelExpression(Box<PropertyLabelExpression<'a>>),
    /// Pass-through wrapper kept for API completeness. The grammar collapses
    /// a comparison with no right-hand side to its bare operand instead of
    /// constructing this, so it is never produced by [`crate::parse`] — see
    /// DESIGN.md.
    BaseExpression(Box<Expression<'a>>),
    Comparison(Box<Comparison<'a>>),
    AndExpression(Vec<Expression<'a>>),
    OrExpression(Vec<Expression<'a>>),
    XorExpression(Vec<Expression<'a>>),
    NotExpression(Box<NotExpression<'a>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodePattern<'a> {
    pub variable: Option<Variable<'a>>,
    pub labels: Vec<String>,
    pub properties: PropertyMap<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipPattern<'a> {
    pub direction: Direction,
    pub variable: Option<Variable<'a>>,
    pub types: Vec<String>,
    pub range: Range,
    pub properties: PropertyMap<'a>,
}

/// One hop in a pattern: a relationship landing on a node.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternElement<'a> {
    pub rel: RelationshipPattern<'a>,
    pub node: NodePattern<'a>,
}

/// One element of a `Match.pattern` sequence: either a standalone node or a
/// node reached by traversing a relationship.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternItem<'a> {
    Node(NodePattern<'a>),
    Element(PatternElement<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a> {
    pub pattern: Vec<PatternItem<'a>>,
    pub where_clause: Option<Expression<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortItem<'a> {
    pub var: Variable<'a>,
    /// Raw token text (`"ASC"`, `"DESC"`, …); case-normalisation is left to
    /// the caller. Defaults to `"ASC"` when no direction keyword is given.
    pub direction: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order<'a> {
    pub vars: Vec<SortItem<'a>>,
}

/// One projected column, with an optional `AS` alias.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionItem<'a> {
    pub expr: Expression<'a>,
    pub var: Option<Variable<'a>>,
}

/// An entry in a RETURN clause's item list: either the `*` wildcard or a
/// concrete projected column.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionItemOrStar<'a> {
    Star,
    Item(ProjectionItem<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a> {
    pub projections: Vec<ProjectionItemOrStar<'a>>,
    pub distinct: bool,
    pub order: Option<Order<'a>>,
    pub skip: Option<Expression<'a>>,
    pub limit: Option<Expression<'a>>,
}

/// Root AST node: the result of [`crate::parse`].
#[derive(Debug, Clone, PartialEq)]
pub struct Query<'a> {
    pub matches: Vec<Match<'a>>,
    pub ret: Projection<'a>,
}
