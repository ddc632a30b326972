//! Single-predicate configuration and rendering.
//!
//! A [`PredicateConfig`] describes one atomic piece of a WHERE expression:
//! a comparison (`a.age > 30`), a label check (`a:Person`), a function call
//! (`exists(a.email)`) or a membership test (`a.id IN [1,2,3]`). Rendering
//! validates the combination of fields first; see [`PredicateConfig::render`]
//! for the exact precedence of the checks.

use std::fmt;
use std::str::FromStr;

use neo4rs::BoltType as Value;
use serde::{Deserialize, Serialize};

use crate::error::CyphrError;
use crate::literal::{render_list, render_literal};
use crate::traits::IntoCyphrValue;

/// Comparison operators usable inside a predicate.
///
/// Serializes to its Cypher spelling, so filter definitions can be loaded
/// from JSON (`"STARTS WITH"`, `">="`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<=")]
    LessThanOrEqualTo,
    #[serde(rename = ">=")]
    GreaterThanOrEqualTo,
    #[serde(rename = "=")]
    EqualTo,
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "IS")]
    Is,
    #[serde(rename = "=~")]
    RegexEqualTo,
    #[serde(rename = "STARTS WITH")]
    StartsWith,
    #[serde(rename = "ENDS WITH")]
    EndsWith,
    #[serde(rename = "CONTAINS")]
    Contains,
}

impl Operator {
    pub const ALL: [Operator; 11] = [
        Operator::LessThan,
        Operator::GreaterThan,
        Operator::LessThanOrEqualTo,
        Operator::GreaterThanOrEqualTo,
        Operator::EqualTo,
        Operator::In,
        Operator::Is,
        Operator::RegexEqualTo,
        Operator::StartsWith,
        Operator::EndsWith,
        Operator::Contains,
    ];

    /// The operator as written in Cypher.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::LessThanOrEqualTo => "<=",
            Operator::GreaterThanOrEqualTo => ">=",
            Operator::EqualTo => "=",
            Operator::In => "IN",
            Operator::Is => "IS",
            Operator::RegexEqualTo => "=~",
            Operator::StartsWith => "STARTS WITH",
            Operator::EndsWith => "ENDS WITH",
            Operator::Contains => "CONTAINS",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = CyphrError;

    /// Parses the Cypher spelling, case-insensitive for the keyword operators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CyphrError::invalid_configuration(format!("unknown operator '{wanted}'")))
    }
}

/// Rendered text of a predicate or of a finished condition chain.
///
/// Pass it to a nested continuation such as
/// [`ConditionBuilder::and_nested`](crate::chain::ConditionBuilder::and_nested)
/// or to a query's WHERE clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct WhereQuery(String);

impl WhereQuery {
    pub fn new(text: impl Into<String>) -> Self {
        WhereQuery(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for WhereQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WhereQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<WhereQuery> for String {
    fn from(q: WhereQuery) -> Self {
        q.0
    }
}

/// Configuration of one predicate.
///
/// Empty strings and `None` mean "not set". Fields are public so a config
/// can be written as a struct literal with `..Default::default()`; the
/// fluent setters cover the common cases.
///
/// ```rust
/// use cyphr_dsl_core::{Operator, PredicateConfig};
///
/// let cond = PredicateConfig::new("a")
///     .field("age")
///     .operator(Operator::GreaterThan)
///     .check(30_i64);
/// assert_eq!(cond.render().unwrap().as_str(), "a.age > 30");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PredicateConfig {
    /// Subject identifier bound in a MATCH pattern.
    pub name: String,
    /// Property accessed on `name`.
    pub field: String,
    /// Label to test; a non-empty label renders `name:label` and nothing else.
    pub label: String,
    /// Function applied to the field access, without parentheses (e.g. `toLower`).
    pub field_function: String,

    /// Comparison operator. Mutually exclusive with `condition_function`.
    pub operator: Option<Operator>,
    /// Function wrapping the whole predicate, without parentheses (e.g. `exists`).
    pub condition_function: String,

    /// Value compared against, for every operator except `IN`.
    pub check: Option<Value>,
    /// Compare against `check_name.check_field` instead of a literal.
    pub check_name: String,
    pub check_field: String,
    /// Values for the `IN` operator.
    pub check_slice: Option<Vec<Value>>,

    /// Prefix the predicate with `NOT`.
    pub negate: bool,
}

impl PredicateConfig {
    /// Start a config for the entity bound to `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn field_function(mut self, function: impl Into<String>) -> Self {
        self.field_function = function.into();
        self
    }

    pub fn operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    pub fn condition_function(mut self, function: impl Into<String>) -> Self {
        self.condition_function = function.into();
        self
    }

    pub fn check(mut self, value: impl IntoCyphrValue) -> Self {
        self.check = Some(value.into_value());
        self
    }

    /// Compare against another entity's property, rendered as `name.field`.
    pub fn check_ref(mut self, name: impl Into<String>, field: impl Into<String>) -> Self {
        self.check_name = name.into();
        self.check_field = field.into();
        self
    }

    pub fn check_slice<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: IntoCyphrValue,
    {
        self.check_slice = Some(values.into_iter().map(IntoCyphrValue::into_value).collect());
        self
    }

    pub fn negate(mut self) -> Self {
        self.negate = true;
        self
    }

    /// Validate the configuration and render it as Cypher text.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    ///
    /// 1. at least one of `name`, `field`, `label`, `field_function` is set;
    /// 2. `field`, `label` and `field_function` are not all set;
    /// 3. a non-empty `label` renders `name:label` right away;
    /// 4. exactly one of `operator` and `condition_function` is set;
    /// 5. a condition function renders `fn(base)`;
    /// 6. `IN` needs a non-empty `check_slice` and no `check`;
    /// 7. other operators need exactly one of `check` or
    ///    (`check_name`, `check_field`).
    pub fn render(&self) -> Result<WhereQuery, CyphrError> {
        self.validate_identity()?;

        if !self.label.is_empty() {
            return Ok(WhereQuery(format!("{}:{}", self.name, self.label)));
        }

        let base = self.base();
        let body = match (self.operator, self.condition_function.is_empty()) {
            (None, true) => {
                return Err(CyphrError::ConflictingOperator(
                    "one of operator or condition_function must be set".to_owned(),
                ))
            }
            (Some(_), false) => {
                return Err(CyphrError::ConflictingOperator(
                    "only one of operator or condition_function can be set".to_owned(),
                ))
            }
            (None, false) => format!("{}({})", self.condition_function, base),
            (Some(Operator::In), true) => format!("{} IN {}", base, self.membership_values()?),
            (Some(op), true) => format!("{} {} {}", base, op, self.comparison_value()?),
        };

        Ok(WhereQuery(if self.negate { format!("NOT {body}") } else { body }))
    }

    fn validate_identity(&self) -> Result<(), CyphrError> {
        if self.name.is_empty()
            && self.field.is_empty()
            && self.label.is_empty()
            && self.field_function.is_empty()
        {
            return Err(CyphrError::invalid_configuration(
                "one of name, field, label or field_function must be set",
            ));
        }
        if !self.field.is_empty() && !self.label.is_empty() && !self.field_function.is_empty() {
            return Err(CyphrError::invalid_configuration(
                "field, label and field_function cannot all be set",
            ));
        }
        Ok(())
    }

    /// `name` or `name.field`, wrapped in the field function when one is set.
    fn base(&self) -> String {
        let access = if self.field.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, self.field)
        };
        if self.field_function.is_empty() {
            access
        } else {
            format!("{}({})", self.field_function, access)
        }
    }

    fn membership_values(&self) -> Result<String, CyphrError> {
        let values = self.check_slice.as_ref().ok_or_else(|| {
            CyphrError::MissingMembershipValues("check_slice must be set for IN".to_owned())
        })?;
        if self.check.is_some() {
            return Err(CyphrError::MissingMembershipValues(
                "check must not be set when using IN".to_owned(),
            ));
        }
        if values.is_empty() {
            return Err(CyphrError::MissingMembershipValues(
                "check_slice must not be empty".to_owned(),
            ));
        }
        render_list(values)
    }

    fn comparison_value(&self) -> Result<String, CyphrError> {
        let has_ref = !self.check_name.is_empty() && !self.check_field.is_empty();
        match (&self.check, has_ref) {
            (Some(value), false) => render_literal(value),
            (None, true) => Ok(format!("{}.{}", self.check_name, self.check_field)),
            _ => Err(CyphrError::MissingComparisonValue),
        }
    }
}

/// Render a predicate configuration. Equivalent to [`PredicateConfig::render`].
pub fn new_condition(config: &PredicateConfig) -> Result<WhereQuery, CyphrError> {
    config.render()
}
