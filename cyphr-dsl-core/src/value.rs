//! Value model shared by predicate rendering and query parameters.
//!
//! Predicate values are plain [`neo4rs::BoltType`]s so anything the driver
//! can send as a parameter can also be inlined as a literal. This module adds
//! the spatial wrapper types that have no `Into<BoltType>` of their own.

use crate::traits::IntoCyphrValue;

/// Returns a human-readable name for a [`neo4rs::BoltType`] variant.
///
/// Used in error messages to describe a value that cannot be rendered.
pub fn type_name(v: &neo4rs::BoltType) -> &'static str {
    match v {
        neo4rs::BoltType::Null(_) => "Null",
        neo4rs::BoltType::Boolean(_) => "Boolean",
        neo4rs::BoltType::Integer(_) => "Integer",
        neo4rs::BoltType::Float(_) => "Float",
        neo4rs::BoltType::String(_) => "String",
        neo4rs::BoltType::Bytes(_) => "Bytes",
        neo4rs::BoltType::List(_) => "List",
        neo4rs::BoltType::Map(_) => "Map",
        neo4rs::BoltType::Node(_) => "Node",
        neo4rs::BoltType::Relation(_) => "Relationship",
        neo4rs::BoltType::UnboundedRelation(_) => "UnboundedRelationship",
        neo4rs::BoltType::Path(_) => "Path",
        neo4rs::BoltType::Point2D(_) => "Point2D",
        neo4rs::BoltType::Point3D(_) => "Point3D",
        neo4rs::BoltType::Duration(_) => "Duration",
        neo4rs::BoltType::Date(_) => "Date",
        neo4rs::BoltType::Time(_) => "Time",
        neo4rs::BoltType::LocalTime(_) => "LocalTime",
        neo4rs::BoltType::LocalDateTime(_) => "LocalDateTime",
        neo4rs::BoltType::DateTime(_) => "DateTime",
        neo4rs::BoltType::DateTimeZoneId(_) => "DateTimeZoneId",
    }
}

/// SRID of the cartesian 2D coordinate system.
pub const SRID_CARTESIAN: i64 = 7203;
/// SRID of the cartesian 3D coordinate system.
pub const SRID_CARTESIAN_3D: i64 = 9157;
/// SRID of WGS 84 (geographic, 2D).
pub const SRID_WGS84: i64 = 4326;
/// SRID of WGS 84 (geographic, 3D).
pub const SRID_WGS84_3D: i64 = 4979;

/// A 2-dimensional point, rendered as `point({srid: .., x: .., y: ..})`.
///
/// ```rust
/// use cyphr_dsl_core::{Point2D, IntoCyphrValue, ToCypherLiteral};
///
/// let p = Point2D::cartesian(1.0, 2.5).into_value();
/// assert_eq!(p.to_cypher_literal().unwrap(), "point({srid: 7203, x: 1.0, y: 2.5})");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Point2D {
    /// Spatial Reference System Identifier.
    pub sr_id: i64,
    /// X coordinate (or longitude for geographic CRS).
    pub x: f64,
    /// Y coordinate (or latitude for geographic CRS).
    pub y: f64,
}

impl Point2D {
    pub fn cartesian(x: f64, y: f64) -> Self {
        Self { sr_id: SRID_CARTESIAN, x, y }
    }

    pub fn wgs84(longitude: f64, latitude: f64) -> Self {
        Self { sr_id: SRID_WGS84, x: longitude, y: latitude }
    }
}

/// A 3-dimensional point. Same as [`Point2D`] with a `z` component.
#[derive(Debug, Clone, PartialEq)]
pub struct Point3D {
    pub sr_id: i64,
    pub x: f64,
    pub y: f64,
    /// Z coordinate (altitude/height).
    pub z: f64,
}

impl Point3D {
    pub fn cartesian(x: f64, y: f64, z: f64) -> Self {
        Self { sr_id: SRID_CARTESIAN_3D, x, y, z }
    }

    pub fn wgs84(longitude: f64, latitude: f64, height: f64) -> Self {
        Self { sr_id: SRID_WGS84_3D, x: longitude, y: latitude, z: height }
    }
}

impl IntoCyphrValue for Point2D {
    fn into_value(self) -> neo4rs::BoltType {
        neo4rs::BoltType::Point2D(neo4rs::BoltPoint2D {
            sr_id: neo4rs::BoltInteger::new(self.sr_id),
            x: neo4rs::BoltFloat::new(self.x),
            y: neo4rs::BoltFloat::new(self.y),
        })
    }
}

impl IntoCyphrValue for Point3D {
    fn into_value(self) -> neo4rs::BoltType {
        neo4rs::BoltType::Point3D(neo4rs::BoltPoint3D {
            sr_id: neo4rs::BoltInteger::new(self.sr_id),
            x: neo4rs::BoltFloat::new(self.x),
            y: neo4rs::BoltFloat::new(self.y),
            z: neo4rs::BoltFloat::new(self.z),
        })
    }
}
