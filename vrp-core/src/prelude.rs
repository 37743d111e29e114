//! This module reimports a common used types.

pub use crate::models::common::{Capacity, CapacityBuilder, Coordinate, Location, TimeWindow};
pub use crate::models::problem::{
    DefaultServiceBuilderFactory, Driver, Job, Place, Service, ServiceBuilder, ServiceBuilderFactory, ServiceKind,
    Shipment, ShipmentBuilder, Vehicle, VehicleBuilder, VehicleType, VehicleTypeBuilder,
};
pub use crate::models::solution::{ActivityKind, Route, RouteBuilder, Schedule, TourActivity};
pub use crate::models::{FleetSize, ModelError, ModelResult, Problem, ProblemBuilder, Solution, UNKNOWN_COST};

pub use crate::utils::Float;
pub use crate::utils::compare_floats;
pub use crate::utils::parse_time_to_seconds;
