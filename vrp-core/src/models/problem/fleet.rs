#[cfg(test)]
#[path = "../../../tests/unit/models/problem/fleet_test.rs"]
mod fleet_test;

use crate::models::common::{Capacity, Cost, Coordinate, Location, Timestamp};
use crate::utils::Float;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A cost multiplier applied to a penalty vehicle type when no explicit factor is given.
pub const DEFAULT_PENALTY_FACTOR: Float = 2.;

/// A suffix used to register a penalty variant of a vehicle type.
pub const PENALTY_TYPE_SUFFIX: &str = "_penalty";

/// Represents operating costs of a vehicle type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Costs {
    /// A fixed cost to use a vehicle.
    pub fixed: Cost,
    /// Cost per distance unit.
    pub per_distance: Cost,
    /// Cost per time unit.
    pub per_time: Cost,
}

/// Represents a vehicle type: capacity and costs shared by vehicles.
#[derive(Clone, Debug)]
pub struct VehicleType {
    /// Type id.
    pub id: String,
    /// Vehicle capacity.
    pub capacity: Capacity,
    /// Operating costs.
    pub costs: Costs,
    /// A penalty factor, specified only for penalty types.
    pub penalty_factor: Option<Float>,
}

impl VehicleType {
    /// Wraps a base type into a penalty variant. The variant keeps id, capacity and costs of the base type.
    pub fn new_penalty(base: &VehicleType, factor: Option<Float>) -> Self {
        Self { penalty_factor: Some(factor.unwrap_or(DEFAULT_PENALTY_FACTOR)), ..base.clone() }
    }

    /// Returns true if the type is a penalty variant.
    pub fn is_penalty(&self) -> bool {
        self.penalty_factor.is_some()
    }

    /// Returns an effective cost multiplier: penalty factor for penalty types, 1 otherwise.
    pub fn cost_multiplier(&self) -> Float {
        self.penalty_factor.unwrap_or(1.)
    }

    /// Returns a key under which the type is registered.
    pub fn registry_id(&self) -> String {
        if self.is_penalty() { format!("{}{PENALTY_TYPE_SUFFIX}", self.id) } else { self.id.clone() }
    }
}

impl PartialEq for VehicleType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.is_penalty() == other.is_penalty()
    }
}

impl Eq for VehicleType {}

impl Hash for VehicleType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.is_penalty().hash(state);
    }
}

/// Represents a vehicle.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// Vehicle id.
    pub id: String,
    /// Vehicle type.
    pub vehicle_type: Arc<VehicleType>,
    /// Location where vehicle starts.
    pub start: Location,
    /// Location where vehicle ends, equals to start location when not specified explicitly.
    pub end: Location,
    /// Earliest departure time.
    pub earliest_start: Timestamp,
    /// Latest arrival time.
    pub latest_arrival: Timestamp,
    /// Whether vehicle has to return to its end location.
    pub return_to_depot: bool,
}

impl Vehicle {
    /// Returns start coordinate if it is known.
    pub fn start_coord(&self) -> Option<Coordinate> {
        self.start.coord
    }

    /// Returns end coordinate if it is known.
    pub fn end_coord(&self) -> Option<Coordinate> {
        self.end.coord
    }
}

impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vehicle {}

impl Hash for Vehicle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Represents a driver, person who drives a vehicle.
/// NOTE: At the moment, it is not assigned by the document reader.
#[derive(Clone, Debug, PartialEq)]
pub struct Driver {
    /// Driver id.
    pub id: String,
}

impl Driver {
    /// Creates a new driver.
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}
