//! Convenience re-exports for common cyphr-dsl usage.
//!
//! ```rust
//! use cyphr_dsl::prelude::*;
//! ```
//!
//! This imports the predicate and chain builders (`PredicateConfig`,
//! `Operator`, `c`, `ConditionBuilder`, `BooleanOperator`, `WhereQuery`),
//! the query layer (`QueryBuilder`, `ReturnPart`, `OrderByPart`,
//! `CyphrQuery`), the value traits, the spatial wrappers and the error type.

pub use cyphr_dsl_core::{c, BooleanOperator, ConditionBuilder, Operator, PredicateConfig, WhereQuery};
pub use cyphr_dsl_core::traits::{IntoCyphrValue, ToCypherLiteral};
pub use cyphr_dsl_core::CyphrError;
pub use cyphr_dsl_core::{Point2D, Point3D};
pub use crate::query::{CyphrQuery, IntoFragment, OrderByPart, QueryBuilder, ReturnPart};
