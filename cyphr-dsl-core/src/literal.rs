//! Rendering of driver values as inline Cypher literals.
//!
//! | Bolt type | Cypher text |
//! |-----------|-------------|
//! | String | `'it\'s'` |
//! | Integer | `42` |
//! | Float | `1.0`, `2.5` (non-finite values are rejected) |
//! | Boolean | `true` |
//! | Null | `null` |
//! | List | `[1,2,3]` |
//! | Map | `{age: 30, name: 'Alice'}` (keys sorted) |
//! | Point2D / Point3D | `point({srid: 7203, x: 1.0, y: 2.0})` |
//! | Date | `date('2024-01-15')` |
//! | LocalTime | `localtime('10:30:00')` |
//! | Time | `time('10:30:00+01:00')` |
//! | LocalDateTime | `localdatetime('2024-01-15T10:30:00')` |
//! | DateTime | `datetime('2024-01-15T10:30:00+01:00')` |
//!
//! Bytes, durations, graph entities (nodes, relationships, paths) and
//! zone-id datetimes have no literal form and fail with
//! [`UnsupportedLiteral`](CyphrError::UnsupportedLiteral).

use neo4rs::BoltType;
use crate::error::CyphrError;
use crate::traits::ToCypherLiteral;
use crate::value::type_name;

/// Render a single value as Cypher literal text.
pub fn render_literal(value: &BoltType) -> Result<String, CyphrError> {
    match value {
        BoltType::Null(_) => Ok("null".to_owned()),
        BoltType::Boolean(b) => Ok(b.value.to_string()),
        BoltType::Integer(i) => Ok(i.value.to_string()),
        BoltType::Float(f) => render_float(f.value),
        BoltType::String(s) => Ok(quote_string(&s.value)),
        BoltType::List(xs) => render_list(&xs.value),
        BoltType::Map(m) => {
            let mut entries = m.value.iter().collect::<Vec<_>>();
            entries.sort_by(|(a, _), (b, _)| a.value.cmp(&b.value));
            let mut parts = Vec::with_capacity(entries.len());
            for (k, v) in entries {
                parts.push(format!("{}: {}", escape_key(&k.value), render_literal(v)?));
            }
            Ok(format!("{{{}}}", parts.join(", ")))
        }
        BoltType::Point2D(p) => Ok(format!(
            "point({{srid: {}, x: {}, y: {}}})",
            p.sr_id.value,
            render_float(p.x.value)?,
            render_float(p.y.value)?,
        )),
        BoltType::Point3D(p) => Ok(format!(
            "point({{srid: {}, x: {}, y: {}, z: {}}})",
            p.sr_id.value,
            render_float(p.x.value)?,
            render_float(p.y.value)?,
            render_float(p.z.value)?,
        )),
        BoltType::Date(d) => {
            let date: chrono::NaiveDate = d.clone().try_into().map_err(|e: neo4rs::Error| {
                CyphrError::Mapping(format!("BoltDate -> NaiveDate: {e}"))
            })?;
            Ok(format!("date('{}')", date.format("%Y-%m-%d")))
        }
        BoltType::LocalTime(t) => {
            let time: chrono::NaiveTime = t.clone().into();
            Ok(format!("localtime('{}')", format_time(&time)))
        }
        BoltType::Time(t) => {
            let (time, offset): (chrono::NaiveTime, chrono::FixedOffset) = t.clone().into();
            Ok(format!("time('{}{}')", format_time(&time), offset))
        }
        BoltType::LocalDateTime(dt) => {
            let ndt: chrono::NaiveDateTime = dt.clone().try_into().map_err(|e: neo4rs::Error| {
                CyphrError::Mapping(format!("BoltLocalDateTime -> NaiveDateTime: {e}"))
            })?;
            Ok(format!(
                "localdatetime('{}T{}')",
                ndt.date().format("%Y-%m-%d"),
                format_time(&ndt.time()),
            ))
        }
        BoltType::DateTime(dt) => {
            let cdt: chrono::DateTime<chrono::FixedOffset> =
                dt.clone().try_into().map_err(|e: neo4rs::Error| {
                    CyphrError::Mapping(format!("BoltDateTime -> DateTime<FixedOffset>: {e}"))
                })?;
            Ok(format!(
                "datetime('{}')",
                cdt.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, false)
            ))
        }
        // Months and days have no fixed length in seconds.
        BoltType::Duration(_) => Err(CyphrError::unsupported_literal(
            "Duration",
            "no faithful literal form",
        )),
        other => Err(CyphrError::unsupported_literal(type_name(other), "no Cypher literal form")),
    }
}

/// Render a sequence as a Cypher list, `[v1,v2,...]`.
pub fn render_list(values: &[BoltType]) -> Result<String, CyphrError> {
    let rendered = values
        .iter()
        .map(render_literal)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("[{}]", rendered.join(",")))
}

/// Single-quote a string, escaping backslashes and single quotes.
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn render_float(v: f64) -> Result<String, CyphrError> {
    if !v.is_finite() {
        return Err(CyphrError::unsupported_literal("Float", "non-finite value"));
    }
    // Debug keeps the decimal point for whole numbers (1.0, not 1).
    Ok(format!("{v:?}"))
}

fn format_time(t: &chrono::NaiveTime) -> String {
    t.format("%H:%M:%S%.f").to_string()
}

fn escape_key(key: &str) -> String {
    let mut chars = key.chars();
    let plain = match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
    };
    if plain {
        key.to_owned()
    } else {
        format!("`{}`", key.replace('`', "``"))
    }
}

impl ToCypherLiteral for BoltType {
    fn to_cypher_literal(&self) -> Result<String, CyphrError> {
        render_literal(self)
    }
}
