//! Core predicate rendering, condition chains and error types for cyphr-dsl.
//!
//! This crate is not meant to be used directly — use the [`cyphr_dsl`] facade
//! crate instead, which re-exports everything you need.

pub mod traits;
pub mod error;

pub mod value;
pub mod literal;
pub mod condition;
pub mod chain;

pub use error::CyphrError;
pub use value::{Point2D, Point3D};
pub use traits::{IntoCyphrValue, ToCypherLiteral};
pub use condition::{new_condition, Operator, PredicateConfig, WhereQuery};
pub use chain::{c, BooleanOperator, ConditionBuilder};
