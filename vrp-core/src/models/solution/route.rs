#[cfg(test)]
#[path = "../../../tests/unit/models/solution/route_test.rs"]
mod route_test;

use crate::models::common::{Capacity, Duration, Location, TimeWindow, Timestamp};
use crate::models::problem::{Driver, Job, Place, Service, ServiceKind, Shipment, Vehicle};
use crate::models::{ModelError, ModelResult};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Specifies a job reference of an activity.
#[derive(Clone, Debug)]
pub enum ActivityKind {
    /// Serves a service job.
    Service(Arc<Service>),
    /// Performs pickup leg of a shipment.
    PickupShipment(Arc<Shipment>),
    /// Performs delivery leg of a shipment.
    DeliverShipment(Arc<Shipment>),
}

impl ActivityKind {
    /// Returns a type tag of the activity.
    pub fn as_tag(&self) -> &'static str {
        match self {
            ActivityKind::Service(service) => service.kind.as_tag(),
            ActivityKind::PickupShipment(_) => "pickupShipment",
            ActivityKind::DeliverShipment(_) => "deliverShipment",
        }
    }
}

/// Represents an activity schedule.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schedule {
    /// Arrival time.
    pub arrival: Timestamp,
    /// Departure time.
    pub departure: Timestamp,
}

impl Schedule {
    /// Creates a new instance of [Schedule].
    pub fn new(arrival: Timestamp, departure: Timestamp) -> Self {
        Self { arrival, departure }
    }
}

/// Represents an activity which is performed on a route.
#[derive(Clone, Debug)]
pub struct TourActivity {
    /// Specifies which job and which job leg is served.
    pub kind: ActivityKind,
    /// Specifies observed schedule.
    pub schedule: Schedule,
}

impl TourActivity {
    /// Returns a job associated with the activity.
    pub fn job(&self) -> Job {
        match &self.kind {
            ActivityKind::Service(service) => Job::Service(service.clone()),
            ActivityKind::PickupShipment(shipment) | ActivityKind::DeliverShipment(shipment) => {
                Job::Shipment(shipment.clone())
            }
        }
    }

    /// Returns a job id.
    pub fn job_id(&self) -> &str {
        match &self.kind {
            ActivityKind::Service(service) => service.id.as_str(),
            ActivityKind::PickupShipment(shipment) | ActivityKind::DeliverShipment(shipment) => shipment.id.as_str(),
        }
    }

    /// Returns a signed demand: positive when load is added to a vehicle, negative when it is removed.
    pub fn size(&self) -> Capacity {
        match &self.kind {
            ActivityKind::Service(service) if service.kind == ServiceKind::Delivery => -&service.size,
            ActivityKind::Service(service) => service.size.clone(),
            ActivityKind::PickupShipment(shipment) => shipment.size.clone(),
            ActivityKind::DeliverShipment(shipment) => -&shipment.size,
        }
    }

    /// Returns activity location.
    pub fn location(&self) -> &Location {
        &self.place().location
    }

    /// Returns activity duration.
    pub fn duration(&self) -> Duration {
        self.place().duration
    }

    /// Returns activity time window.
    pub fn time_window(&self) -> &TimeWindow {
        &self.place().time_window
    }

    fn place(&self) -> &Place {
        match &self.kind {
            ActivityKind::Service(service) => &service.place,
            ActivityKind::PickupShipment(shipment) => &shipment.pickup,
            ActivityKind::DeliverShipment(shipment) => &shipment.delivery,
        }
    }
}

/// Represents a sequence of activities performed by a vehicle.
#[derive(Clone, Debug)]
pub struct Route {
    /// A vehicle which performs activities.
    pub vehicle: Arc<Vehicle>,
    /// An optional driver.
    pub driver: Option<Arc<Driver>>,
    /// Departure time from start location.
    pub departure_time: Timestamp,
    /// Arrival time at end location, known for routes of computed solutions.
    pub end_time: Option<Timestamp>,
    /// Activities in visiting order.
    pub activities: Vec<TourActivity>,
}

impl Route {
    /// Returns an iterator over distinct jobs served on the route.
    pub fn jobs(&self) -> impl Iterator<Item = Job> + '_ {
        let mut seen = FxHashSet::default();
        self.activities.iter().filter(move |activity| seen.insert(activity.job_id().to_string())).map(|a| a.job())
    }
}

/// Provides a way to assemble a [Route] incrementally. Keeps shipment legs consistent: a shipment
/// is picked up once, delivered after pickup and never left open when route is built.
#[derive(Debug)]
pub struct RouteBuilder {
    route: Route,
    open_shipments: FxHashSet<String>,
    picked_shipments: FxHashSet<String>,
}

impl RouteBuilder {
    /// Creates a builder for a route of given vehicle.
    pub fn new(vehicle: Arc<Vehicle>) -> Self {
        let departure_time = vehicle.earliest_start;
        Self {
            route: Route { vehicle, driver: None, departure_time, end_time: None, activities: vec![] },
            open_shipments: Default::default(),
            picked_shipments: Default::default(),
        }
    }

    /// Sets a driver.
    pub fn driver(mut self, driver: Arc<Driver>) -> Self {
        self.route.driver = Some(driver);
        self
    }

    /// Sets departure time.
    pub fn departure_time(mut self, time: Timestamp) -> Self {
        self.route.departure_time = time;
        self
    }

    /// Sets arrival time at end location.
    pub fn end_time(mut self, time: Timestamp) -> Self {
        self.route.end_time = Some(time);
        self
    }

    /// Adds a service activity.
    pub fn add_service(mut self, service: Arc<Service>, schedule: Schedule) -> Self {
        self.route.activities.push(TourActivity { kind: ActivityKind::Service(service), schedule });
        self
    }

    /// Adds a pickup of shipment. Fails if the shipment is already picked up on this route.
    pub fn add_pickup(mut self, shipment: Arc<Shipment>, schedule: Schedule) -> ModelResult<Self> {
        if !self.picked_shipments.insert(shipment.id.clone()) {
            return Err(self.inconsistent(format!("shipment '{}' is picked up more than once", shipment.id)));
        }

        self.open_shipments.insert(shipment.id.clone());
        self.route.activities.push(TourActivity { kind: ActivityKind::PickupShipment(shipment), schedule });

        Ok(self)
    }

    /// Adds a delivery of shipment. Fails if the shipment is not picked up before.
    pub fn add_delivery(mut self, shipment: Arc<Shipment>, schedule: Schedule) -> ModelResult<Self> {
        if !self.open_shipments.remove(&shipment.id) {
            return Err(self.inconsistent(format!("shipment '{}' is delivered before it is picked up", shipment.id)));
        }

        self.route.activities.push(TourActivity { kind: ActivityKind::DeliverShipment(shipment), schedule });

        Ok(self)
    }

    /// Builds a [Route]. Fails if some shipment is picked up but not delivered.
    pub fn build(self) -> ModelResult<Route> {
        if !self.open_shipments.is_empty() {
            let mut ids = self.open_shipments.iter().cloned().collect::<Vec<_>>();
            ids.sort();
            return Err(self.inconsistent(format!("shipments are picked up but not delivered: {}", ids.join(", "))));
        }

        Ok(self.route)
    }

    fn inconsistent(&self, reason: String) -> ModelError {
        ModelError::InconsistentRoute { vehicle_id: self.route.vehicle.id.clone(), reason }
    }
}
