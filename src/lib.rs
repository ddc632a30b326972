#![doc = r#"
A typed builder for Cypher queries, on top of [`neo4rs`] 0.8.

`cyphr-dsl` assembles WHERE expressions and whole queries from typed
configuration instead of string concatenation. Everything it produces is
plain Cypher text you can paste into Neo4j Browser.

# Quick start

## Describe predicates

A [`PredicateConfig`] is one comparison, label check, function call or
membership test:

```rust
use cyphr_dsl::prelude::*;

let older = PredicateConfig::new("a").field("age").operator(Operator::GreaterThan).check(30_i64);
assert_eq!(older.render().unwrap().as_str(), "a.age > 30");

let person = PredicateConfig::new("a").label("Person");
assert_eq!(person.render().unwrap().as_str(), "a:Person");

let ids = PredicateConfig::new("a").field("id").operator(Operator::In).check_slice([1_i64, 2, 3]);
assert_eq!(ids.render().unwrap().as_str(), "a.id IN [1,2,3]");
```

## Chain conditions

[`c`] starts a chain; `and`, `or`, `xor`, `not` and `and_not` extend it
left to right. Grouping is explicit: build the inner chain first and pass its
result to one of the `*_nested` methods.

```rust
use cyphr_dsl::prelude::*;

let eq = |n: &str, f: &str, v: i64| PredicateConfig::new(n).field(f).operator(Operator::EqualTo).check(v);

let group = c(eq("a", "x", 1)).and(eq("b", "y", 2)).build();
let cond = c(eq("c", "z", 3)).or_nested(group).build().unwrap();
assert_eq!(cond.as_str(), "c.z = 3 OR (a.x = 1 AND b.y = 2)");
```

## Collect errors, not panics

A chain never stops on the first bad predicate. Failures are collected and
reported once by `build()`:

```rust
use cyphr_dsl::prelude::*;

let err = c(PredicateConfig::new("a").field("x").operator(Operator::EqualTo).check(1_i64))
    .and(PredicateConfig::default())
    .build()
    .unwrap_err();
assert_eq!(err.count(), 1);
assert!(err.to_string().starts_with("(1) errors occurred:"));
```

## Build a query

```rust
use cyphr_dsl::prelude::*;

let active = PredicateConfig::new("u").field("active").operator(Operator::EqualTo).check(true);
let query = QueryBuilder::new()
    .match_("(u:User)")
    .where_(c(active).build())
    .return_([ReturnPart::new("u").field("name").alias("name")])
    .order_by([OrderByPart::asc("u", "name")])
    .into_query()
    .unwrap();
assert_eq!(
    query.text(),
    "MATCH (u:User) WHERE u.active = true RETURN u.name AS name ORDER BY u.name"
);
// graph.execute(query.into_inner()).await?;
```

# Literal values

Values are `neo4rs::BoltType`s and render inline:

| Bolt type | Cypher text |
|-----------|-------------|
| String | `'Alice'` (quotes escaped) |
| Integer / Float | `42`, `1.0` |
| Boolean / Null | `true`, `null` |
| List / Map | `[1,2]`, `{k: 'v'}` |
| Point2D / Point3D | `point({srid: 7203, x: 1.0, y: 2.0})` |
| Date, LocalTime, Time, LocalDateTime, DateTime | `date('2024-01-15')`, ... |

Bytes, durations and graph entities have no literal form and are rejected with
[`CyphrError::UnsupportedLiteral`].

[`neo4rs`]: https://docs.rs/neo4rs
[`PredicateConfig`]: cyphr_dsl_core::PredicateConfig
[`c`]: cyphr_dsl_core::c
"#]

pub mod prelude;
pub mod query;

pub use cyphr_dsl_core as core;

pub use cyphr_dsl_core::{c, BooleanOperator, ConditionBuilder, Operator, PredicateConfig, WhereQuery};
pub use cyphr_dsl_core::CyphrError;
pub use query::{CyphrQuery, QueryBuilder};
