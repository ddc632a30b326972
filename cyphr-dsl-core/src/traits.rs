//! Conversion traits between Rust values, driver values and Cypher text.

use neo4rs::BoltType as Value;
use crate::error::CyphrError;

/// Converts a Rust value into a `neo4rs::BoltType` so it can be used as a
/// predicate value ([`PredicateConfig::check`](crate::condition::PredicateConfig::check))
/// or a query parameter.
///
/// A blanket implementation covers all types that already implement
/// `Into<BoltType>` (e.g. `String`, `&str`, `i64`, `f64`, `bool`,
/// `Vec<T>`, chrono dates). Custom implementations are provided for
/// [`Point2D`] and [`Point3D`].
///
/// [`Point2D`]: crate::Point2D
/// [`Point3D`]: crate::Point3D
pub trait IntoCyphrValue {
    /// Convert `self` into a [`BoltType`](neo4rs::BoltType).
    fn into_value(self) -> Value;
}

impl<T: Into<Value>> IntoCyphrValue for T {
    fn into_value(self) -> Value {
        self.into()
    }
}

/// Renders a value as literal Cypher text, suitable for inlining into a
/// WHERE expression.
///
/// Implemented for [`BoltType`](neo4rs::BoltType); see
/// [`render_literal`](crate::literal::render_literal) for the per-variant
/// rules.
pub trait ToCypherLiteral {
    /// Render `self`, or fail with
    /// [`UnsupportedLiteral`](CyphrError::UnsupportedLiteral) when the value
    /// has no literal form.
    fn to_cypher_literal(&self) -> Result<String, CyphrError>;
}
