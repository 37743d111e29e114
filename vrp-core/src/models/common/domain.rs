#[cfg(test)]
#[path = "../../../tests/unit/models/common/domain_test.rs"]
mod domain_test;

use crate::models::common::Timestamp;
use crate::models::{ModelError, ModelResult};
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Represents a time window.
#[derive(Clone, Debug)]
pub struct TimeWindow {
    /// Earliest time.
    pub start: Timestamp,
    /// Latest time.
    pub end: Timestamp,
}

impl TimeWindow {
    /// Creates a new [`TimeWindow`]. Fails if start is negative or end is before start.
    pub fn new(start: Timestamp, end: Timestamp) -> ModelResult<Self> {
        if start.is_nan() || start < 0. {
            return Err(ModelError::InvalidValue {
                field: "time window start".to_string(),
                reason: format!("must not be negative, got {start}"),
            });
        }

        if end.is_nan() || end < start {
            return Err(ModelError::InvalidValue {
                field: "time window end".to_string(),
                reason: format!("must not be less than start, got [{start}, {end}]"),
            });
        }

        Ok(Self { start, end })
    }

    /// Returns unlimited time window.
    pub fn max() -> Self {
        Self { start: 0., end: Float::MAX }
    }

    /// Checks whether time window has intersection with another one.
    pub fn intersects(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::max()
    }
}

impl PartialEq<TimeWindow> for TimeWindow {
    fn eq(&self, other: &TimeWindow) -> bool {
        compare_floats(self.start, other.start) == Ordering::Equal
            && compare_floats(self.end, other.end) == Ordering::Equal
    }
}

impl Eq for TimeWindow {}

impl Hash for TimeWindow {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.to_bits().hash(state);
        self.end.to_bits().hash(state);
    }
}

/// Represents a point on a plane.
#[derive(Clone, Copy, Debug)]
pub struct Coordinate {
    /// X value.
    pub x: Float,
    /// Y value.
    pub y: Float,
}

impl Coordinate {
    /// Creates a new [`Coordinate`].
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        compare_floats(self.x, other.x) == Ordering::Equal && compare_floats(self.y, other.y) == Ordering::Equal
    }
}

impl Display for Coordinate {
    /// Writes a canonical form which is also used as location id when no explicit id is given.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[x={:?}][y={:?}]", self.x, self.y)
    }
}

/// Represents a location: a symbolic id with an optional coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    /// Location id.
    pub id: String,
    /// Location coordinate.
    pub coord: Option<Coordinate>,
}

impl Location {
    /// Creates a location from id and optional coordinate.
    pub fn new(id: &str, coord: Option<Coordinate>) -> Self {
        Self { id: id.to_string(), coord }
    }

    /// Creates a location which id is derived from the coordinate.
    pub fn from_coord(coord: Coordinate) -> Self {
        Self { id: coord.to_string(), coord: Some(coord) }
    }

    /// Resolves a location from an optional id and an optional coordinate.
    /// Returns `None` if both are absent.
    pub fn resolve(id: Option<&str>, coord: Option<Coordinate>) -> Option<Self> {
        match (id, coord) {
            (Some(id), coord) => Some(Self::new(id, coord)),
            (None, Some(coord)) => Some(Self::from_coord(coord)),
            (None, None) => None,
        }
    }
}
