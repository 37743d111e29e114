//! Provides a way to build core problem models using the builder pattern.

#[cfg(test)]
#[path = "../../../tests/unit/models/problem/builders_test.rs"]
mod builders_test;

use crate::models::common::*;
use crate::models::problem::{Costs, Place, Service, ServiceKind, Shipment, Vehicle, VehicleType};
use crate::models::{ModelError, ModelResult};
use std::sync::Arc;

/// Keeps track of how capacity is specified: either as a scalar value or as a list of dimensions.
#[derive(Clone, Debug, Default)]
struct CapacitySpec {
    scalar: Option<i32>,
    dimensions: CapacityBuilder,
}

impl CapacitySpec {
    fn add_dimension(&mut self, index: usize, value: i32) -> ModelResult<()> {
        self.dimensions = std::mem::take(&mut self.dimensions).add_dimension(index, value)?;
        Ok(())
    }

    fn build(self, entity: &'static str, id: &str) -> ModelResult<Capacity> {
        match (self.scalar, self.dimensions.is_empty()) {
            (Some(_), false) => Err(ModelError::AmbiguousSpecification { entity, id: id.to_string() }),
            (None, true) => Err(ModelError::MissingSpecification { entity, id: id.to_string() }),
            (Some(value), true) => Capacity::new_scalar(value),
            (None, false) => Ok(self.dimensions.build()),
        }
    }
}

/// Accumulates place properties until location can be resolved.
#[derive(Clone, Debug)]
struct PlaceSpec {
    location_id: Option<String>,
    coord: Option<Coordinate>,
    duration: Duration,
    time_window: TimeWindow,
}

impl Default for PlaceSpec {
    fn default() -> Self {
        Self { location_id: None, coord: None, duration: 0., time_window: TimeWindow::max() }
    }
}

impl PlaceSpec {
    fn set_duration(&mut self, duration: Duration, field: &str) -> ModelResult<()> {
        if duration.is_nan() || duration < 0. {
            return Err(ModelError::InvalidValue {
                field: field.to_string(),
                reason: format!("duration must not be negative, got {duration}"),
            });
        }

        self.duration = duration;
        Ok(())
    }

    fn build(self, entity: &'static str, id: &str, role: &'static str) -> ModelResult<Place> {
        let location = Location::resolve(self.location_id.as_deref(), self.coord)
            .ok_or_else(|| ModelError::MissingLocation { entity, id: id.to_string(), role })?;

        Ok(Place { location, duration: self.duration, time_window: self.time_window })
    }
}

fn ensure_id(entity: &'static str, id: &str) -> ModelResult<()> {
    if id.is_empty() { Err(ModelError::MissingRequiredField { entity, field: "id" }) } else { Ok(()) }
}

/// Provides a way to build a [Service] job using the builder pattern.
#[derive(Clone, Debug)]
pub struct ServiceBuilder {
    id: String,
    kind: ServiceKind,
    size: CapacitySpec,
    place: PlaceSpec,
}

impl ServiceBuilder {
    /// Creates a builder for a generic service with given id.
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string(), kind: ServiceKind::Service, size: Default::default(), place: Default::default() }
    }

    /// Sets a service kind.
    pub fn kind(mut self, kind: ServiceKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets an explicit location id.
    pub fn location_id(mut self, location_id: &str) -> Self {
        self.place.location_id = Some(location_id.to_string());
        self
    }

    /// Sets a coordinate. It is used as location id when no explicit id is given.
    pub fn coord(mut self, coord: Coordinate) -> Self {
        self.place.coord = Some(coord);
        self
    }

    /// Sets a scalar size which is stored as the first capacity dimension.
    pub fn size(mut self, value: i32) -> Self {
        self.size.scalar = Some(value);
        self
    }

    /// Adds a size dimension. Fails if value is negative.
    pub fn add_size_dimension(mut self, index: usize, value: i32) -> ModelResult<Self> {
        self.size.add_dimension(index, value)?;
        Ok(self)
    }

    /// Sets service duration. Fails if duration is negative.
    pub fn duration(mut self, duration: Duration) -> ModelResult<Self> {
        self.place.set_duration(duration, "service duration")?;
        Ok(self)
    }

    /// Sets a time window. Setting it again replaces the previous one.
    pub fn time_window(mut self, time_window: TimeWindow) -> Self {
        self.place.time_window = time_window;
        self
    }

    /// Builds a [Service].
    pub fn build(self) -> ModelResult<Service> {
        ensure_id("service", &self.id)?;

        let size = self.size.build("service", &self.id)?;
        let place = self.place.build("service", &self.id, "service")?;

        Ok(Service { id: self.id, kind: self.kind, size, place })
    }
}

/// Creates a [ServiceBuilder] for a service type tag, so that a caller is decoupled from
/// the concrete set of service kinds.
pub trait ServiceBuilderFactory {
    /// Creates a builder for the given type tag, job id and optional scalar size.
    fn create_builder(&self, tag: &str, id: &str, size: Option<i32>) -> ServiceBuilder;
}

/// A default factory which maps `pickup` and `delivery` tags to their kinds and any other tag to a generic service.
#[derive(Clone, Debug, Default)]
pub struct DefaultServiceBuilderFactory;

impl ServiceBuilderFactory for DefaultServiceBuilderFactory {
    fn create_builder(&self, tag: &str, id: &str, size: Option<i32>) -> ServiceBuilder {
        let builder = ServiceBuilder::new(id).kind(ServiceKind::from_tag(tag));

        match size {
            Some(size) => builder.size(size),
            None => builder,
        }
    }
}

/// Provides a way to build a [Shipment] job using the builder pattern.
#[derive(Clone, Debug)]
pub struct ShipmentBuilder {
    id: String,
    size: CapacitySpec,
    pickup: PlaceSpec,
    delivery: PlaceSpec,
}

impl ShipmentBuilder {
    /// Creates a builder for a shipment with given id.
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string(), size: Default::default(), pickup: Default::default(), delivery: Default::default() }
    }

    /// Sets a scalar size which is stored as the first capacity dimension.
    pub fn size(mut self, value: i32) -> Self {
        self.size.scalar = Some(value);
        self
    }

    /// Adds a size dimension. Fails if value is negative.
    pub fn add_size_dimension(mut self, index: usize, value: i32) -> ModelResult<Self> {
        self.size.add_dimension(index, value)?;
        Ok(self)
    }

    /// Sets pickup location id.
    pub fn pickup_location_id(mut self, location_id: &str) -> Self {
        self.pickup.location_id = Some(location_id.to_string());
        self
    }

    /// Sets pickup coordinate.
    pub fn pickup_coord(mut self, coord: Coordinate) -> Self {
        self.pickup.coord = Some(coord);
        self
    }

    /// Sets pickup duration. Fails if duration is negative.
    pub fn pickup_duration(mut self, duration: Duration) -> ModelResult<Self> {
        self.pickup.set_duration(duration, "pickup duration")?;
        Ok(self)
    }

    /// Sets pickup time window.
    pub fn pickup_time_window(mut self, time_window: TimeWindow) -> Self {
        self.pickup.time_window = time_window;
        self
    }

    /// Sets delivery location id.
    pub fn delivery_location_id(mut self, location_id: &str) -> Self {
        self.delivery.location_id = Some(location_id.to_string());
        self
    }

    /// Sets delivery coordinate.
    pub fn delivery_coord(mut self, coord: Coordinate) -> Self {
        self.delivery.coord = Some(coord);
        self
    }

    /// Sets delivery duration. Fails if duration is negative.
    pub fn delivery_duration(mut self, duration: Duration) -> ModelResult<Self> {
        self.delivery.set_duration(duration, "delivery duration")?;
        Ok(self)
    }

    /// Sets delivery time window.
    pub fn delivery_time_window(mut self, time_window: TimeWindow) -> Self {
        self.delivery.time_window = time_window;
        self
    }

    /// Builds a [Shipment].
    pub fn build(self) -> ModelResult<Shipment> {
        ensure_id("shipment", &self.id)?;

        let size = self.size.build("shipment", &self.id)?;
        let pickup = self.pickup.build("shipment", &self.id, "pickup")?;
        let delivery = self.delivery.build("shipment", &self.id, "delivery")?;

        Ok(Shipment { id: self.id, size, pickup, delivery })
    }
}

/// Provides a way to build a [VehicleType].
#[derive(Clone, Debug)]
pub struct VehicleTypeBuilder {
    id: String,
    capacity: CapacitySpec,
    costs: Costs,
}

impl VehicleTypeBuilder {
    /// Creates a builder for a vehicle type with given id.
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string(), capacity: Default::default(), costs: Default::default() }
    }

    /// Sets a scalar capacity which is stored as the first capacity dimension.
    pub fn capacity(mut self, value: i32) -> Self {
        self.capacity.scalar = Some(value);
        self
    }

    /// Adds a capacity dimension. Fails if value is negative.
    pub fn add_capacity_dimension(mut self, index: usize, value: i32) -> ModelResult<Self> {
        self.capacity.add_dimension(index, value)?;
        Ok(self)
    }

    /// Sets a fixed cost.
    pub fn fixed_cost(mut self, cost: Cost) -> Self {
        self.costs.fixed = cost;
        self
    }

    /// Sets a cost per distance unit.
    pub fn cost_per_distance(mut self, cost: Cost) -> Self {
        self.costs.per_distance = cost;
        self
    }

    /// Sets a cost per time unit.
    pub fn cost_per_time(mut self, cost: Cost) -> Self {
        self.costs.per_time = cost;
        self
    }

    /// Builds a [VehicleType].
    pub fn build(self) -> ModelResult<VehicleType> {
        ensure_id("vehicle type", &self.id)?;

        let capacity = self.capacity.build("vehicle type", &self.id)?;

        Ok(VehicleType { id: self.id, capacity, costs: self.costs, penalty_factor: None })
    }
}

/// Provides a way to build a [Vehicle].
#[derive(Clone, Debug)]
pub struct VehicleBuilder {
    id: String,
    vehicle_type: Option<Arc<VehicleType>>,
    start_id: Option<String>,
    start_coord: Option<Coordinate>,
    end_id: Option<String>,
    end_coord: Option<Coordinate>,
    earliest_start: Timestamp,
    latest_arrival: Timestamp,
    return_to_depot: bool,
}

impl VehicleBuilder {
    /// Creates a builder for a vehicle with given id.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            vehicle_type: None,
            start_id: None,
            start_coord: None,
            end_id: None,
            end_coord: None,
            earliest_start: 0.,
            latest_arrival: Timestamp::MAX,
            return_to_depot: true,
        }
    }

    /// Sets a vehicle type.
    pub fn vehicle_type(mut self, vehicle_type: Arc<VehicleType>) -> Self {
        self.vehicle_type = Some(vehicle_type);
        self
    }

    /// Sets start location id.
    pub fn start_location_id(mut self, location_id: &str) -> Self {
        self.start_id = Some(location_id.to_string());
        self
    }

    /// Sets start coordinate.
    pub fn start_coord(mut self, coord: Coordinate) -> Self {
        self.start_coord = Some(coord);
        self
    }

    /// Sets end location id.
    pub fn end_location_id(mut self, location_id: &str) -> Self {
        self.end_id = Some(location_id.to_string());
        self
    }

    /// Sets end coordinate.
    pub fn end_coord(mut self, coord: Coordinate) -> Self {
        self.end_coord = Some(coord);
        self
    }

    /// Sets earliest departure time.
    pub fn earliest_start(mut self, time: Timestamp) -> Self {
        self.earliest_start = time;
        self
    }

    /// Sets latest arrival time.
    pub fn latest_arrival(mut self, time: Timestamp) -> Self {
        self.latest_arrival = time;
        self
    }

    /// Sets whether vehicle returns to its end location.
    pub fn return_to_depot(mut self, value: bool) -> Self {
        self.return_to_depot = value;
        self
    }

    /// Builds a [Vehicle].
    pub fn build(self) -> ModelResult<Vehicle> {
        ensure_id("vehicle", &self.id)?;

        let vehicle_type =
            self.vehicle_type.ok_or(ModelError::MissingRequiredField { entity: "vehicle", field: "type" })?;

        let start = Location::resolve(self.start_id.as_deref(), self.start_coord)
            .ok_or_else(|| ModelError::MissingLocation { entity: "vehicle", id: self.id.clone(), role: "start" })?;
        let end = Location::resolve(self.end_id.as_deref(), self.end_coord).unwrap_or_else(|| start.clone());

        if self.latest_arrival < self.earliest_start {
            return Err(ModelError::InvalidValue {
                field: "latest arrival".to_string(),
                reason: format!(
                    "must not be less than earliest start, got [{}, {}]",
                    self.earliest_start, self.latest_arrival
                ),
            });
        }

        Ok(Vehicle {
            id: self.id,
            vehicle_type,
            start,
            end,
            earliest_start: self.earliest_start,
            latest_arrival: self.latest_arrival,
            return_to_depot: self.return_to_depot,
        })
    }
}
