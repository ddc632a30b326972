use cyphr_dsl_core::literal::{quote_string, render_list, render_literal};
use cyphr_dsl_core::{CyphrError, IntoCyphrValue, Point2D, Point3D, ToCypherLiteral};
use neo4rs::BoltType;

fn render(value: impl IntoCyphrValue) -> String {
    value.into_value().to_cypher_literal().unwrap()
}

// --- Scalars ---

#[test]
fn test_render_integer() {
    assert_eq!(render(42_i64), "42");
    assert_eq!(render(-7_i64), "-7");
}

#[test]
fn test_render_float_keeps_decimal_point() {
    assert_eq!(render(1.0_f64), "1.0");
    assert_eq!(render(2.5_f64), "2.5");
}

#[test]
fn test_render_non_finite_float_rejected() {
    let err = f64::NAN.into_value().to_cypher_literal().unwrap_err();
    match &err {
        CyphrError::UnsupportedLiteral { got, .. } => assert_eq!(got, "Float"),
        other => panic!("expected UnsupportedLiteral, got: {other}"),
    }
    assert!(render_literal(&f64::INFINITY.into_value()).is_err());
}

#[test]
fn test_render_bool_and_null() {
    assert_eq!(render(true), "true");
    assert_eq!(render(false), "false");
    assert_eq!(render_literal(&BoltType::Null(neo4rs::BoltNull)).unwrap(), "null");
}

#[test]
fn test_render_string_quoted() {
    assert_eq!(render("Alice"), "'Alice'");
    assert_eq!(render(String::from("")), "''");
}

#[test]
fn test_render_string_escapes_quotes_and_backslashes() {
    assert_eq!(render("it's"), r"'it\'s'");
    assert_eq!(quote_string(r"C:\tmp"), r"'C:\\tmp'");
}

// --- Collections ---

#[test]
fn test_render_list() {
    let val = BoltType::List(neo4rs::BoltList {
        value: vec![
            BoltType::Integer(neo4rs::BoltInteger { value: 1 }),
            BoltType::String(neo4rs::BoltString { value: "two".to_string() }),
            BoltType::Boolean(neo4rs::BoltBoolean { value: true }),
        ],
    });
    assert_eq!(render_literal(&val).unwrap(), "[1,'two',true]");
}

#[test]
fn test_render_list_helper_fails_on_any_bad_element() {
    let values = vec![1_i64.into_value(), f64::NAN.into_value()];
    assert!(render_list(&values).is_err());
    assert_eq!(render_list(&[]).unwrap(), "[]");
}

#[test]
fn test_render_map_sorted_keys() {
    let mut map = neo4rs::BoltMap::new();
    map.put(
        neo4rs::BoltString { value: "name".to_string() },
        BoltType::String(neo4rs::BoltString { value: "Alice".to_string() }),
    );
    map.put(
        neo4rs::BoltString { value: "age".to_string() },
        BoltType::Integer(neo4rs::BoltInteger { value: 30 }),
    );
    map.put(
        neo4rs::BoltString { value: "first name".to_string() },
        BoltType::String(neo4rs::BoltString { value: "A".to_string() }),
    );

    let val = BoltType::Map(map);
    assert_eq!(
        render_literal(&val).unwrap(),
        "{age: 30, `first name`: 'A', name: 'Alice'}"
    );
}

// --- Spatial ---

#[test]
fn test_render_point2d() {
    assert_eq!(render(Point2D::cartesian(1.0, 2.0)), "point({srid: 7203, x: 1.0, y: 2.0})");
    assert_eq!(render(Point2D::wgs84(12.5, 55.75)), "point({srid: 4326, x: 12.5, y: 55.75})");
}

#[test]
fn test_render_point3d() {
    let p = Point3D { sr_id: 9157, x: 1.0, y: 2.0, z: 3.5 };
    assert_eq!(render(p), "point({srid: 9157, x: 1.0, y: 2.0, z: 3.5})");
}

// --- Temporal ---

#[test]
fn test_render_date() {
    let d = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    assert_eq!(render(d), "date('2024-01-15')");
}

#[test]
fn test_render_local_time() {
    let t = chrono::NaiveTime::from_hms_opt(10, 30, 0).unwrap();
    assert_eq!(render(t), "localtime('10:30:00')");
}

#[test]
fn test_render_time_with_offset() {
    let t = chrono::NaiveTime::from_hms_opt(10, 30, 0).unwrap();
    let offset = chrono::FixedOffset::east_opt(3600).unwrap();
    let val = BoltType::Time(neo4rs::BoltTime::from((t, offset)));
    assert_eq!(render_literal(&val).unwrap(), "time('10:30:00+01:00')");
}

#[test]
fn test_render_local_datetime() {
    let dt = chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();
    assert_eq!(render(dt), "localdatetime('2024-01-15T10:30:00')");
}

#[test]
fn test_render_datetime_with_offset() {
    let dt = chrono::DateTime::parse_from_rfc3339("2024-01-15T10:30:00+01:00").unwrap();
    assert_eq!(render(dt), "datetime('2024-01-15T10:30:00+01:00')");
}

// --- Unsupported ---

#[test]
fn test_render_bytes_unsupported() {
    let val = BoltType::Bytes(neo4rs::BoltBytes::new(bytes::Bytes::from_static(b"hello")));
    let err = render_literal(&val).unwrap_err();
    match &err {
        CyphrError::UnsupportedLiteral { got, .. } => assert_eq!(got, "Bytes"),
        other => panic!("expected UnsupportedLiteral, got: {other}"),
    }
}

fn duration(months: i64, days: i64, seconds: i64, nanoseconds: i64) -> BoltType {
    BoltType::Duration(neo4rs::BoltDuration::new(
        months.into(),
        days.into(),
        seconds.into(),
        nanoseconds.into(),
    ))
}

#[test]
fn test_render_negative_duration_unsupported() {
    let err = render_literal(&duration(0, 0, -5, 0)).unwrap_err();
    match &err {
        CyphrError::UnsupportedLiteral { got, .. } => assert_eq!(got, "Duration"),
        other => panic!("expected UnsupportedLiteral, got: {other}"),
    }
}

#[test]
fn test_render_duration_with_huge_month_count_does_not_panic() {
    let err = render_literal(&duration(i64::MAX / 1000, 0, 0, 0)).unwrap_err();
    assert!(matches!(err, CyphrError::UnsupportedLiteral { .. }));
}

#[test]
fn test_render_plain_duration_unsupported() {
    let err = render_literal(&duration(1, 2, 90, 0)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported literal type: Duration (no faithful literal form)"
    );
}

#[test]
fn test_render_node_unsupported() {
    let node = neo4rs::BoltNode::new(
        neo4rs::BoltInteger::new(1),
        vec![BoltType::from("User")].into(),
        vec![(neo4rs::BoltString::from("name"), BoltType::from("Alice"))]
            .into_iter()
            .collect(),
    );
    let err = render_literal(&BoltType::Node(node)).unwrap_err();
    assert!(err.to_string().contains("Node"));
}

#[test]
fn test_unsupported_element_inside_list() {
    let val = BoltType::List(neo4rs::BoltList {
        value: vec![
            BoltType::Integer(neo4rs::BoltInteger { value: 1 }),
            BoltType::Bytes(neo4rs::BoltBytes::new(bytes::Bytes::from_static(b"x"))),
        ],
    });
    assert!(matches!(
        render_literal(&val),
        Err(CyphrError::UnsupportedLiteral { .. })
    ));
}
