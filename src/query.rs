use neo4rs::Query;
use tracing::{debug, trace};

use cyphr_dsl_core::error::CyphrError;
use cyphr_dsl_core::literal::render_literal;
use cyphr_dsl_core::traits::IntoCyphrValue;
use cyphr_dsl_core::WhereQuery;

/// Anything that can be placed after a clause keyword.
///
/// Implemented for plain text and [`WhereQuery`], and for a `Result` of
/// either, so the output of
/// [`ConditionBuilder::build`](cyphr_dsl_core::ConditionBuilder::build) can be
/// passed straight to [`QueryBuilder::where_`] without unwrapping.
pub trait IntoFragment {
    fn into_fragment(self) -> Result<String, CyphrError>;
}

impl IntoFragment for &str {
    fn into_fragment(self) -> Result<String, CyphrError> {
        Ok(self.to_owned())
    }
}

impl IntoFragment for String {
    fn into_fragment(self) -> Result<String, CyphrError> {
        Ok(self)
    }
}

impl IntoFragment for WhereQuery {
    fn into_fragment(self) -> Result<String, CyphrError> {
        Ok(self.into_string())
    }
}

impl<T: IntoFragment> IntoFragment for Result<T, CyphrError> {
    fn into_fragment(self) -> Result<String, CyphrError> {
        self.and_then(IntoFragment::into_fragment)
    }
}

/// One projection of a RETURN or WITH clause: `fn(name.field) AS alias`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnPart {
    pub name: String,
    pub field: String,
    pub alias: String,
    /// Function applied to the projection, without parentheses (e.g. `count`).
    pub function: String,
}

impl ReturnPart {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    pub fn function(mut self, function: impl Into<String>) -> Self {
        self.function = function.into();
        self
    }

    fn render(&self) -> Result<String, CyphrError> {
        if self.name.is_empty() {
            return Err(CyphrError::InvalidClause("return part needs a name".to_owned()));
        }
        let mut out = if self.field.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, self.field)
        };
        if !self.function.is_empty() {
            out = format!("{}({})", self.function, out);
        }
        if !self.alias.is_empty() {
            out = format!("{} AS {}", out, self.alias);
        }
        Ok(out)
    }
}

/// One sort key of an ORDER BY clause.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderByPart {
    pub name: String,
    pub field: String,
    pub descending: bool,
}

impl OrderByPart {
    pub fn asc(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self { name: name.into(), field: field.into(), descending: false }
    }

    pub fn desc(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self { name: name.into(), field: field.into(), descending: true }
    }

    fn render(&self) -> Result<String, CyphrError> {
        if self.name.is_empty() {
            return Err(CyphrError::InvalidClause("order by part needs a name".to_owned()));
        }
        let key = if self.field.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, self.field)
        };
        Ok(if self.descending { format!("{key} DESC") } else { key })
    }
}

/// Assembles a full Cypher query clause by clause.
///
/// Follows the same rules as
/// [`ConditionBuilder`](cyphr_dsl_core::ConditionBuilder): a failing clause
/// is recorded, later clauses are skipped, and everything is reported by
/// [`build`](Self::build). Errors carry the keyword of the clause they
/// belong to.
///
/// ```rust
/// use cyphr_dsl::prelude::*;
///
/// let adult = PredicateConfig::new("u")
///     .field("age")
///     .operator(Operator::GreaterThanOrEqualTo)
///     .check(18_i64);
///
/// let text = QueryBuilder::new()
///     .match_("(u:User)")
///     .where_(c(adult).build())
///     .return_([ReturnPart::new("u").field("name")])
///     .limit(10)
///     .build()
///     .unwrap();
/// assert_eq!(text, "MATCH (u:User) WHERE u.age >= 18 RETURN u.name LIMIT 10");
/// ```
#[derive(Debug, Default)]
#[must_use = "a query does nothing until `build()` is called"]
pub struct QueryBuilder {
    clauses: Vec<String>,
    errors: Vec<CyphrError>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn match_(self, pattern: impl IntoFragment) -> Self {
        self.clause("MATCH", pattern)
    }

    pub fn optional_match(self, pattern: impl IntoFragment) -> Self {
        self.clause("OPTIONAL MATCH", pattern)
    }

    pub fn create(self, pattern: impl IntoFragment) -> Self {
        self.clause("CREATE", pattern)
    }

    pub fn merge(self, pattern: impl IntoFragment) -> Self {
        self.clause("MERGE", pattern)
    }

    /// `ON CREATE SET ...`, valid after [`merge`](Self::merge).
    pub fn on_create_set(self, assignments: impl IntoFragment) -> Self {
        self.clause("ON CREATE SET", assignments)
    }

    /// `ON MATCH SET ...`, valid after [`merge`](Self::merge).
    pub fn on_match_set(self, assignments: impl IntoFragment) -> Self {
        self.clause("ON MATCH SET", assignments)
    }

    /// Accepts a condition chain's `build()` output directly.
    pub fn where_(self, condition: impl IntoFragment) -> Self {
        self.clause("WHERE", condition)
    }

    pub fn set(self, assignments: impl IntoFragment) -> Self {
        self.clause("SET", assignments)
    }

    /// `SET name.field = <literal>`, with the value rendered inline.
    pub fn set_property(self, name: &str, field: &str, value: impl IntoCyphrValue) -> Self {
        let assignment = render_literal(&value.into_value())
            .map(|literal| format!("{name}.{field} = {literal}"));
        self.clause("SET", assignment)
    }

    pub fn remove(self, items: impl IntoFragment) -> Self {
        self.clause("REMOVE", items)
    }

    /// `DELETE a, b`, or `DETACH DELETE a, b` when `detach` is set.
    pub fn delete(self, detach: bool, names: &[&str]) -> Self {
        let keyword = if detach { "DETACH DELETE" } else { "DELETE" };
        let fragment = if names.is_empty() {
            Err(CyphrError::InvalidClause("nothing to delete".to_owned()))
        } else {
            Ok(names.join(", "))
        };
        self.clause(keyword, fragment)
    }

    pub fn with_<I>(self, parts: I) -> Self
    where
        I: IntoIterator<Item = ReturnPart>,
    {
        let fragment = join_parts(parts, ReturnPart::render);
        self.clause("WITH", fragment)
    }

    pub fn return_<I>(self, parts: I) -> Self
    where
        I: IntoIterator<Item = ReturnPart>,
    {
        let fragment = join_parts(parts, ReturnPart::render);
        self.clause("RETURN", fragment)
    }

    pub fn return_distinct<I>(self, parts: I) -> Self
    where
        I: IntoIterator<Item = ReturnPart>,
    {
        let fragment = join_parts(parts, ReturnPart::render);
        self.clause("RETURN DISTINCT", fragment)
    }

    pub fn order_by<I>(self, parts: I) -> Self
    where
        I: IntoIterator<Item = OrderByPart>,
    {
        let fragment = join_parts(parts, OrderByPart::render);
        self.clause("ORDER BY", fragment)
    }

    pub fn skip(self, n: u64) -> Self {
        self.clause("SKIP", n.to_string())
    }

    pub fn limit(self, n: u64) -> Self {
        self.clause("LIMIT", n.to_string())
    }

    /// Finish the query and return its text.
    pub fn build(self) -> Result<String, CyphrError> {
        if !self.errors.is_empty() {
            debug!(errors = self.errors.len(), "query build failed");
            return Err(CyphrError::Aggregated { errors: self.errors });
        }
        if self.clauses.is_empty() {
            return Err(CyphrError::InvalidClause("query has no clauses".to_owned()));
        }
        let text = self.clauses.join(" ");
        debug!(clauses = self.clauses.len(), query = %text, "query built");
        Ok(text)
    }

    /// Finish the query and wrap it for execution with `neo4rs`.
    pub fn into_query(self) -> Result<CyphrQuery, CyphrError> {
        self.build().map(CyphrQuery::new)
    }

    fn clause(mut self, keyword: &str, fragment: impl IntoFragment) -> Self {
        if !self.errors.is_empty() {
            trace!(keyword, "skipping clause, query already failed");
            return self;
        }
        match fragment.into_fragment() {
            Ok(text) if text.trim().is_empty() => {
                self.errors.push(CyphrError::InvalidClause(format!("{keyword} needs a body")));
            }
            Ok(text) => {
                trace!(keyword, body = %text, "appending clause");
                self.clauses.push(format!("{keyword} {text}"));
            }
            Err(e) => self.errors.push(e.with_context(keyword)),
        }
        self
    }
}

fn join_parts<I, T, F>(parts: I, render: F) -> Result<String, CyphrError>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> Result<String, CyphrError>,
{
    let rendered = parts
        .into_iter()
        .map(|p| render(&p))
        .collect::<Result<Vec<_>, _>>()?;
    if rendered.is_empty() {
        return Err(CyphrError::InvalidClause("at least one item is required".to_owned()));
    }
    Ok(rendered.join(", "))
}

/// A built query text paired with a [`neo4rs::Query`] for execution.
///
/// Provides a builder-style `.param()` API. Values that should not be
/// inlined (user input, large lists) belong in parameters.
///
/// ```rust
/// use cyphr_dsl::query::CyphrQuery;
///
/// let query = CyphrQuery::new("MATCH (u:User {name: $name}) RETURN u")
///     .param("name", "Alice");
/// assert_eq!(query.text(), "MATCH (u:User {name: $name}) RETURN u");
/// ```
pub struct CyphrQuery {
    text: String,
    inner: Query,
}

impl CyphrQuery {
    /// Create a new query from a Cypher string.
    pub fn new(query: impl Into<String>) -> Self {
        let text: String = query.into();
        let inner = neo4rs::query(&text);
        Self { text, inner }
    }

    /// Bind a named parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl IntoCyphrValue) -> Self {
        let k: String = key.into();
        self.inner = self.inner.param(&k, value.into_value());
        self
    }

    /// The Cypher text the query was built from.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Hand the query to the driver, e.g. `graph.execute(q.into_inner())`.
    pub fn into_inner(self) -> Query {
        self.inner
    }
}

/// Convenience constructor — equivalent to [`CyphrQuery::new`].
pub fn query(q: impl Into<String>) -> CyphrQuery {
    CyphrQuery::new(q)
}
