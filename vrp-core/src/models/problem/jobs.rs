#[cfg(test)]
#[path = "../../../tests/unit/models/problem/jobs_test.rs"]
mod jobs_test;

use crate::models::common::{Capacity, Duration, Location, TimeWindow};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Represents a job variant.
#[derive(Clone, Debug)]
pub enum Job {
    /// A job served at a single place.
    Service(Arc<Service>),
    /// A job with distinct pickup and delivery places.
    Shipment(Arc<Shipment>),
}

impl Job {
    /// Returns job id.
    pub fn id(&self) -> &str {
        match &self {
            Job::Service(service) => service.id.as_str(),
            Job::Shipment(shipment) => shipment.id.as_str(),
        }
    }

    /// Returns job size.
    pub fn size(&self) -> &Capacity {
        match &self {
            Job::Service(service) => &service.size,
            Job::Shipment(shipment) => &shipment.size,
        }
    }

    /// Considers job as [`Service`].
    pub fn as_service(&self) -> Option<&Arc<Service>> {
        match &self {
            Job::Service(service) => Some(service),
            _ => None,
        }
    }

    /// Considers job as [`Shipment`].
    pub fn as_shipment(&self) -> Option<&Arc<Shipment>> {
        match &self {
            Job::Shipment(shipment) => Some(shipment),
            _ => None,
        }
    }

    /// Get all places from the job.
    pub fn places(&self) -> Box<dyn Iterator<Item = &Place> + '_> {
        match &self {
            Job::Service(service) => Box::new(std::iter::once(&service.place)),
            Job::Shipment(shipment) => Box::new([&shipment.pickup, &shipment.delivery].into_iter()),
        }
    }
}

impl PartialEq<Job> for Job {
    fn eq(&self, other: &Job) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Job {}

impl Hash for Job {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl From<Service> for Job {
    fn from(service: Service) -> Self {
        Job::Service(Arc::new(service))
    }
}

impl From<Shipment> for Job {
    fn from(shipment: Shipment) -> Self {
        Job::Shipment(Arc::new(shipment))
    }
}

/// Represents a job place details where and when work has to be performed.
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    /// Location where work has to be performed.
    pub location: Location,
    /// Time has to be spend performing work.
    pub duration: Duration,
    /// Time window when work can be started.
    pub time_window: TimeWindow,
}

/// Specifies a service sub-kind. The kind is opaque for the model itself and is consumed by
/// the engine to distinguish fleet plan semantics.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ServiceKind {
    /// A generic service.
    Service,
    /// A service which loads a vehicle.
    Pickup,
    /// A service which unloads a vehicle.
    Delivery,
}

impl ServiceKind {
    /// Maps a type tag into the kind. Unknown tags are treated as a generic service.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "pickup" => ServiceKind::Pickup,
            "delivery" => ServiceKind::Delivery,
            _ => ServiceKind::Service,
        }
    }

    /// Returns a type tag of the kind.
    pub fn as_tag(&self) -> &'static str {
        match self {
            ServiceKind::Service => "service",
            ServiceKind::Pickup => "pickup",
            ServiceKind::Delivery => "delivery",
        }
    }
}

/// Represents a job which is served at a single place.
#[derive(Clone, Debug)]
pub struct Service {
    /// Job id.
    pub id: String,
    /// Service kind.
    pub kind: ServiceKind,
    /// Job size.
    pub size: Capacity,
    /// A place where the job is served.
    pub place: Place,
}

impl PartialEq for Service {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Service {}

impl Hash for Service {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Represents a job which is picked up at one place and delivered at another one.
#[derive(Clone, Debug)]
pub struct Shipment {
    /// Job id.
    pub id: String,
    /// Job size shared by both places.
    pub size: Capacity,
    /// Pickup place.
    pub pickup: Place,
    /// Delivery place.
    pub delivery: Place,
}

impl PartialEq for Shipment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Shipment {}

impl Hash for Shipment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
