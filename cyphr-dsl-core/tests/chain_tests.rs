use std::sync::Once;

use cyphr_dsl_core::{c, BooleanOperator, ConditionBuilder, CyphrError, Operator, PredicateConfig, WhereQuery};
use tracing_subscriber::EnvFilter;

fn init_test_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn eq(name: &str, field: &str, value: i64) -> PredicateConfig {
    PredicateConfig::new(name).field(field).operator(Operator::EqualTo).check(value)
}

/// Has no identity fields at all, so rendering fails.
fn invalid() -> PredicateConfig {
    PredicateConfig {
        name: String::new(),
        field: String::new(),
        label: String::new(),
        field_function: String::new(),
        ..Default::default()
    }
}

// --- Plain chains ---

#[test]
fn test_single_predicate() {
    init_test_tracing();
    let q = c(eq("a", "x", 1)).build().unwrap();
    assert_eq!(q.as_str(), "a.x = 1");
}

#[test]
fn test_chain_in_insertion_order() {
    init_test_tracing();
    let q = c(eq("a", "x", 1))
        .and(eq("b", "y", 2))
        .or(eq("c", "z", 3))
        .build()
        .unwrap();
    assert_eq!(q.as_str(), "a.x = 1 AND b.y = 2 OR c.z = 3");
}

#[test]
fn test_every_keyword() {
    init_test_tracing();
    let q = ConditionBuilder::start(eq("a", "v", 0))
        .and(eq("a", "v", 1))
        .or(eq("a", "v", 2))
        .xor(eq("a", "v", 3))
        .not(eq("a", "v", 4))
        .and_not(eq("a", "v", 5))
        .build()
        .unwrap();
    assert_eq!(
        q.as_str(),
        "a.v = 0 AND a.v = 1 OR a.v = 2 XOR a.v = 3 NOT a.v = 4 AND NOT a.v = 5"
    );
}

#[test]
fn test_mixed_predicate_kinds() {
    init_test_tracing();
    let q = c(PredicateConfig::new("p").label("Person"))
        .and(
            PredicateConfig::new("p")
                .field("email")
                .condition_function("exists"),
        )
        .and_not(
            PredicateConfig::new("p")
                .field("status")
                .operator(Operator::In)
                .check_slice(["banned", "deleted"]),
        )
        .build()
        .unwrap();
    assert_eq!(
        q.as_str(),
        "p:Person AND exists(p.email) AND NOT p.status IN ['banned','deleted']"
    );
}

#[test]
fn test_no_surrounding_whitespace() {
    let q = c(eq("a", "x", 1)).and(eq("b", "y", 2)).build().unwrap();
    assert_eq!(q.as_str(), q.as_str().trim());
    assert!(!q.as_str().contains("  "));
}

// --- Nesting ---

#[test]
fn test_and_nested() {
    init_test_tracing();
    let inner = c(eq("b", "y", 2)).or(eq("c", "z", 3)).build();
    let q = c(eq("a", "x", 1)).and_nested(inner).build().unwrap();
    assert_eq!(q.as_str(), "a.x = 1 AND (b.y = 2 OR c.z = 3)");
}

#[test]
fn test_nested_keywords() {
    let sub = || c(eq("s", "v", 9)).build();
    let q = c(eq("a", "x", 1))
        .or_nested(sub())
        .xor_nested(sub())
        .not_nested(sub())
        .and_not_nested(sub())
        .build()
        .unwrap();
    assert_eq!(
        q.as_str(),
        "a.x = 1 OR (s.v = 9) XOR (s.v = 9) NOT (s.v = 9) AND NOT (s.v = 9)"
    );
}

#[test]
fn test_nesting_matches_direct_text() {
    let a_and_b = c(eq("a", "x", 1)).and(eq("b", "y", 2)).build();
    let q = ConditionBuilder::start_nested(a_and_b)
        .or(eq("c", "z", 3))
        .build()
        .unwrap();
    assert_eq!(q.as_str(), "(a.x = 1 AND b.y = 2) OR c.z = 3");
}

#[test]
fn test_pre_rendered_fragment_nested() {
    let q = c(eq("a", "x", 1))
        .and_nested(Ok(WhereQuery::new("b.y = 2 OR b.y = 3")))
        .build()
        .unwrap();
    assert_eq!(q.as_str(), "a.x = 1 AND (b.y = 2 OR b.y = 3)");
}

#[test]
fn test_deeply_nested() {
    let innermost = c(eq("c", "z", 3)).xor(eq("d", "w", 4)).build();
    let middle = c(eq("b", "y", 2)).or_nested(innermost).build();
    let q = c(eq("a", "x", 1)).and_nested(middle).build().unwrap();
    assert_eq!(q.as_str(), "a.x = 1 AND (b.y = 2 OR (c.z = 3 XOR d.w = 4))");
}

// --- Errors ---

#[test]
fn test_invalid_second_predicate() {
    init_test_tracing();
    let err = c(eq("a", "x", 1)).and(invalid()).build().unwrap_err();
    match &err {
        CyphrError::Aggregated { errors } => {
            assert_eq!(errors.len(), 1);
            assert!(matches!(errors[0], CyphrError::InvalidConfiguration(_)));
        }
        other => panic!("expected Aggregated, got: {other}"),
    }
    assert_eq!(err.count(), 1);
}

#[test]
fn test_invalid_first_predicate_keeps_chain_usable() {
    let builder = c(invalid());
    assert!(builder.has_errors());
    assert!(builder.is_empty());
    let err = builder.and(eq("a", "x", 1)).or(eq("b", "y", 2)).build().unwrap_err();
    assert_eq!(err.count(), 1);
}

#[test]
fn test_errored_chain_is_absorbing() {
    let err = c(eq("a", "x", 1))
        .and(PredicateConfig::new("a").field("x").operator(Operator::EqualTo))
        .or(invalid())
        .and(eq("b", "y", 2))
        .and_nested(c(eq("c", "z", 3)).build())
        .build()
        .unwrap_err();
    match &err {
        CyphrError::Aggregated { errors } => {
            assert_eq!(errors.len(), 1);
            assert!(matches!(errors[0], CyphrError::MissingComparisonValue));
        }
        other => panic!("expected Aggregated, got: {other}"),
    }
}

#[test]
fn test_nested_error_is_passed_through() {
    let inner = c(eq("b", "y", 2)).and(invalid()).build();
    let err = c(eq("a", "x", 1)).or_nested(inner).build().unwrap_err();
    match &err {
        CyphrError::Aggregated { errors } => {
            assert_eq!(errors.len(), 1);
            match &errors[0] {
                CyphrError::Aggregated { errors: inner } => assert_eq!(inner.len(), 1),
                other => panic!("expected inner Aggregated, got: {other}"),
            }
        }
        other => panic!("expected Aggregated, got: {other}"),
    }
}

#[test]
fn test_start_nested_with_error() {
    let err = ConditionBuilder::start_nested(Err(CyphrError::EmptyChain))
        .and(eq("a", "x", 1))
        .build()
        .unwrap_err();
    assert_eq!(err.to_string(), "(1) errors occurred: no condition defined");
}

#[test]
fn test_aggregated_message() {
    let err = c(eq("a", "x", 1)).and(invalid()).build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "(1) errors occurred: invalid configuration: one of name, field, label or field_function must be set"
    );
}

#[test]
fn test_aggregated_message_joins_with_semicolons() {
    let err = CyphrError::Aggregated {
        errors: vec![CyphrError::EmptyChain, CyphrError::MissingComparisonValue],
    };
    assert_eq!(
        err.to_string(),
        "(2) errors occurred: no condition defined;missing comparison value: exactly one of check or (check_name, check_field) must be set"
    );
}

#[test]
fn test_empty_chain() {
    let err = ConditionBuilder::default().build().unwrap_err();
    assert!(matches!(err, CyphrError::EmptyChain));
    assert_eq!(err.to_string(), "no condition defined");
}

// --- Misc ---

#[test]
fn test_len_tracks_links() {
    let builder = c(eq("a", "x", 1)).and(eq("b", "y", 2));
    assert_eq!(builder.len(), 2);
    assert!(!builder.has_errors());
}

#[test]
fn test_boolean_operator_spelling() {
    assert_eq!(BooleanOperator::AndNot.to_string(), "AND NOT");
    let json = serde_json::to_string(&BooleanOperator::Xor).unwrap();
    assert_eq!(json, "\"XOR\"");
    let op: BooleanOperator = serde_json::from_str("\"AND NOT\"").unwrap();
    assert_eq!(op, BooleanOperator::AndNot);
}
