//! Error types for condition rendering and query assembly.

use thiserror::Error;

/// Unified error type for all cyphr-dsl operations.
///
/// Predicate-level failures never abort a fluent chain. They are collected
/// by [`ConditionBuilder`](crate::chain::ConditionBuilder) and surface from
/// `build()` wrapped in [`Aggregated`](CyphrError::Aggregated):
///
/// ```text
/// (2) errors occurred: invalid configuration: one of name, field, label or field_function must be set;missing comparison value: exactly one of check or (check_name, check_field) must be set
/// ```
#[derive(Error, Debug)]
pub enum CyphrError {
    /// The identity part of a predicate (name, field, label, field function)
    /// is missing or contradicts itself.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Both or neither of `operator` and `condition_function` were given.
    #[error("conflicting operator specification: {0}")]
    ConflictingOperator(String),

    /// `IN` was used without a non-empty `check_slice`, or together with `check`.
    #[error("missing membership values: {0}")]
    MissingMembershipValues(String),

    /// A comparison operator needs exactly one of `check` or
    /// (`check_name`, `check_field`).
    #[error("missing comparison value: exactly one of check or (check_name, check_field) must be set")]
    MissingComparisonValue,

    /// A value has no Cypher literal form.
    #[error("unsupported literal type: {got} ({context})")]
    UnsupportedLiteral { got: String, context: String },

    /// A driver value could not be converted for rendering.
    #[error("mapping error: {0}")]
    Mapping(String),

    /// `build()` was called on a chain without a single link.
    #[error("no condition defined")]
    EmptyChain,

    /// Every failure collected over the lifetime of a condition chain, in
    /// the order they occurred.
    #[error("({}) errors occurred: {}", .errors.len(), join_messages(.errors))]
    Aggregated { errors: Vec<CyphrError> },

    /// A query clause was used incorrectly.
    #[error("invalid clause: {0}")]
    InvalidClause(String),

    /// Wraps an inner error with additional context (for example the clause
    /// keyword a failed fragment was meant for).
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<CyphrError>,
    },
}

fn join_messages(errors: &[CyphrError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

impl CyphrError {
    /// Create an [`UnsupportedLiteral`](CyphrError::UnsupportedLiteral) error.
    pub fn unsupported_literal(got: &str, context: &str) -> Self {
        CyphrError::UnsupportedLiteral {
            got: got.to_owned(),
            context: context.to_owned(),
        }
    }

    /// Create an [`InvalidConfiguration`](CyphrError::InvalidConfiguration) error.
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        CyphrError::InvalidConfiguration(reason.into())
    }

    /// Number of underlying failures: the length of an aggregated list, or
    /// `1` for any other error.
    pub fn count(&self) -> usize {
        match self {
            CyphrError::Aggregated { errors } => errors.len(),
            _ => 1,
        }
    }

    /// Wrap this error with additional context, producing a
    /// [`Context`](CyphrError::Context) variant.
    ///
    /// ```rust
    /// # use cyphr_dsl_core::CyphrError;
    /// let err = CyphrError::EmptyChain;
    /// let wrapped = err.with_context("WHERE");
    /// assert_eq!(wrapped.to_string(), "WHERE: no condition defined");
    /// ```
    pub fn with_context(self, ctx: impl Into<String>) -> Self {
        CyphrError::Context {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}
