//! Fluent chain of predicates joined by boolean operators.
//!
//! Errors never interrupt a chain. The first failure is recorded, every
//! later continuation becomes a no-op, and [`ConditionBuilder::build`]
//! reports what was collected as one
//! [`Aggregated`](CyphrError::Aggregated) error.
//!
//! ```rust
//! use cyphr_dsl_core::{c, Operator, PredicateConfig};
//!
//! let eq = |name: &str, field: &str, v: i64| {
//!     PredicateConfig::new(name).field(field).operator(Operator::EqualTo).check(v)
//! };
//!
//! let inner = c(eq("a", "x", 1)).and(eq("b", "y", 2)).build();
//! let query = c(eq("c", "z", 3)).or_nested(inner).build().unwrap();
//! assert_eq!(query.as_str(), "c.z = 3 OR (a.x = 1 AND b.y = 2)");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::condition::{PredicateConfig, WhereQuery};
use crate::error::CyphrError;

/// Keyword placed between two links of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BooleanOperator {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
    #[serde(rename = "XOR")]
    Xor,
    #[serde(rename = "NOT")]
    Not,
    #[serde(rename = "AND NOT")]
    AndNot,
}

impl BooleanOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            BooleanOperator::And => "AND",
            BooleanOperator::Or => "OR",
            BooleanOperator::Xor => "XOR",
            BooleanOperator::Not => "NOT",
            BooleanOperator::AndNot => "AND NOT",
        }
    }
}

impl fmt::Display for BooleanOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of the chain. Only the first link has no keyword.
#[derive(Debug, Clone)]
struct Link {
    keyword: Option<BooleanOperator>,
    text: WhereQuery,
}

/// Builds a WHERE expression from predicates and nested sub-chains.
///
/// Every continuation consumes and returns the builder, so calls compose
/// left to right and `build()` can only run once.
#[derive(Debug, Default)]
#[must_use = "a condition chain does nothing until `build()` is called"]
pub struct ConditionBuilder {
    links: Vec<Link>,
    errors: Vec<CyphrError>,
}

/// Start a condition chain with its first predicate.
///
/// Shorthand for [`ConditionBuilder::start`].
pub fn c(config: PredicateConfig) -> ConditionBuilder {
    ConditionBuilder::start(config)
}

impl ConditionBuilder {
    /// Render the first predicate of a chain.
    ///
    /// A rendering failure is kept and reported by [`build`](Self::build);
    /// the builder stays usable.
    pub fn start(config: PredicateConfig) -> Self {
        let mut builder = Self::default();
        builder.push_predicate(None, &config);
        builder
    }

    /// Start a chain with an already built sub-chain, which is wrapped in
    /// parentheses. An `Err` is recorded as-is.
    pub fn start_nested(nested: Result<WhereQuery, CyphrError>) -> Self {
        let mut builder = Self::default();
        builder.push_nested(None, nested);
        builder
    }

    pub fn and(self, config: PredicateConfig) -> Self {
        self.add_condition(BooleanOperator::And, config)
    }

    pub fn or(self, config: PredicateConfig) -> Self {
        self.add_condition(BooleanOperator::Or, config)
    }

    pub fn xor(self, config: PredicateConfig) -> Self {
        self.add_condition(BooleanOperator::Xor, config)
    }

    pub fn not(self, config: PredicateConfig) -> Self {
        self.add_condition(BooleanOperator::Not, config)
    }

    pub fn and_not(self, config: PredicateConfig) -> Self {
        self.add_condition(BooleanOperator::AndNot, config)
    }

    /// Append the result of a sub-chain's `build()` under `AND`.
    ///
    /// ```rust
    /// use cyphr_dsl_core::{c, Operator, PredicateConfig};
    ///
    /// let is_admin = PredicateConfig::new("u").label("Admin");
    /// let old = PredicateConfig::new("u").field("age").operator(Operator::GreaterThan).check(65_i64);
    /// let young = PredicateConfig::new("u").field("age").operator(Operator::LessThan).check(18_i64);
    ///
    /// let ages = c(old).or(young).build();
    /// let q = c(is_admin).and_nested(ages).build().unwrap();
    /// assert_eq!(q.as_str(), "u:Admin AND (u.age > 65 OR u.age < 18)");
    /// ```
    pub fn and_nested(self, nested: Result<WhereQuery, CyphrError>) -> Self {
        self.add_nested_condition(BooleanOperator::And, nested)
    }

    pub fn or_nested(self, nested: Result<WhereQuery, CyphrError>) -> Self {
        self.add_nested_condition(BooleanOperator::Or, nested)
    }

    pub fn xor_nested(self, nested: Result<WhereQuery, CyphrError>) -> Self {
        self.add_nested_condition(BooleanOperator::Xor, nested)
    }

    pub fn not_nested(self, nested: Result<WhereQuery, CyphrError>) -> Self {
        self.add_nested_condition(BooleanOperator::Not, nested)
    }

    pub fn and_not_nested(self, nested: Result<WhereQuery, CyphrError>) -> Self {
        self.add_nested_condition(BooleanOperator::AndNot, nested)
    }

    /// Whether any step of the chain has failed so far.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of links appended so far.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Finish the chain.
    ///
    /// Returns every collected failure as one
    /// [`Aggregated`](CyphrError::Aggregated) error, or
    /// [`EmptyChain`](CyphrError::EmptyChain) when nothing was added.
    /// Otherwise the links are joined with single spaces, each link after
    /// the first prefixed by its keyword.
    pub fn build(self) -> Result<WhereQuery, CyphrError> {
        if self.has_errors() {
            debug!(errors = self.errors.len(), "condition chain failed");
            return Err(CyphrError::Aggregated { errors: self.errors });
        }
        if self.links.is_empty() {
            return Err(CyphrError::EmptyChain);
        }

        let mut parts = Vec::with_capacity(self.links.len() * 2);
        for link in &self.links {
            if let Some(keyword) = link.keyword {
                parts.push(keyword.as_str());
            }
            parts.push(link.text.as_str());
        }
        let query = WhereQuery::new(parts.join(" "));
        debug!(links = self.links.len(), %query, "condition chain built");
        Ok(query)
    }

    fn add_condition(mut self, keyword: BooleanOperator, config: PredicateConfig) -> Self {
        if self.has_errors() {
            trace!(%keyword, "skipping condition, chain already failed");
            return self;
        }
        self.push_predicate(Some(keyword), &config);
        self
    }

    fn add_nested_condition(
        mut self,
        keyword: BooleanOperator,
        nested: Result<WhereQuery, CyphrError>,
    ) -> Self {
        if self.has_errors() {
            trace!(%keyword, "skipping nested condition, chain already failed");
            return self;
        }
        self.push_nested(Some(keyword), nested);
        self
    }

    fn push_predicate(&mut self, keyword: Option<BooleanOperator>, config: &PredicateConfig) {
        match config.render() {
            Ok(text) => self.push_link(keyword, text),
            Err(e) => self.record(e),
        }
    }

    fn push_nested(
        &mut self,
        keyword: Option<BooleanOperator>,
        nested: Result<WhereQuery, CyphrError>,
    ) {
        match nested {
            Ok(text) => self.push_link(keyword, WhereQuery::new(format!("({text})"))),
            Err(e) => self.record(e),
        }
    }

    fn push_link(&mut self, keyword: Option<BooleanOperator>, text: WhereQuery) {
        trace!(keyword = keyword.map(|k| k.as_str()), %text, "appending link");
        self.links.push(Link { keyword, text });
    }

    fn record(&mut self, error: CyphrError) {
        debug!(%error, "condition rejected");
        self.errors.push(error);
    }
}
