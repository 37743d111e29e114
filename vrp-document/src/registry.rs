#[cfg(test)]
#[path = "../tests/unit/registry_test.rs"]
mod registry_test;

use crate::{ReadError, ReadResult, ReferenceKind};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;
use tracing::warn;
use vrp_core::models::problem::{Job, Service, Shipment, Vehicle, VehicleType};

/// An insertion ordered id to entity map used to resolve references between document sections.
#[derive(Debug)]
pub struct Registry<T> {
    kind: ReferenceKind,
    items: Vec<Arc<T>>,
    index: FxHashMap<String, usize>,
}

impl<T> Registry<T> {
    /// Creates an empty registry of entities of given kind.
    pub fn new(kind: ReferenceKind) -> Self {
        Self { kind, items: vec![], index: FxHashMap::default() }
    }

    /// Adds an entity under the key. Fails if the key is already taken.
    pub fn insert(&mut self, key: &str, item: Arc<T>) -> ReadResult<()> {
        if self.index.contains_key(key) {
            return Err(ReadError::AmbiguousSpecification {
                entity: self.entity(),
                id: key.to_string(),
                reason: "id is declared more than once".to_string(),
            });
        }

        self.index.insert(key.to_string(), self.items.len());
        self.items.push(item);

        Ok(())
    }

    /// Returns an entity by its key.
    pub fn get(&self, key: &str) -> Option<&Arc<T>> {
        self.index.get(key).and_then(|&idx| self.items.get(idx))
    }

    /// Returns an entity by its key or fails with unresolved reference error.
    pub fn resolve(&self, key: &str) -> ReadResult<Arc<T>> {
        self.get(key).cloned().ok_or_else(|| ReadError::unresolved(self.kind, key))
    }

    /// Returns true if the key is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Returns entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> + '_ {
        self.items.iter()
    }

    /// Returns amount of entities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if registry has no entities.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn entity(&self) -> &'static str {
        match self.kind {
            ReferenceKind::VehicleType => "vehicle type",
            ReferenceKind::Vehicle => "vehicle",
            ReferenceKind::Service => "service",
            ReferenceKind::Shipment => "shipment",
        }
    }
}

/// Keeps registries and frozen job ids of a single document load.
#[derive(Debug)]
pub struct ReadContext {
    /// Vehicle types keyed by their registry id, penalty variants use `<id>_penalty` key.
    pub vehicle_types: Registry<VehicleType>,
    /// Vehicles keyed by id.
    pub vehicles: Registry<Vehicle>,
    /// Services keyed by id.
    pub services: Registry<Service>,
    /// Shipments keyed by id.
    pub shipments: Registry<Shipment>,
    frozen: FxHashSet<String>,
    missing_coord: Option<String>,
}

impl Default for ReadContext {
    fn default() -> Self {
        Self {
            vehicle_types: Registry::new(ReferenceKind::VehicleType),
            vehicles: Registry::new(ReferenceKind::Vehicle),
            services: Registry::new(ReferenceKind::Service),
            shipments: Registry::new(ReferenceKind::Shipment),
            frozen: FxHashSet::default(),
            missing_coord: None,
        }
    }
}

impl ReadContext {
    /// Marks a job as committed to an initial route.
    pub fn freeze(&mut self, job_id: &str) {
        self.frozen.insert(job_id.to_string());
    }

    /// Returns true if a job is committed to an initial route.
    pub fn is_frozen(&self, job_id: &str) -> bool {
        self.frozen.contains(job_id)
    }

    /// Returns ids of jobs committed to initial routes.
    pub fn frozen_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.frozen.iter().map(String::as_str)
    }

    /// Finds a job by id in service and shipment registries.
    pub fn job(&self, job_id: &str) -> Option<Job> {
        self.services
            .get(job_id)
            .map(|service| Job::Service(service.clone()))
            .or_else(|| self.shipments.get(job_id).map(|shipment| Job::Shipment(shipment.clone())))
    }

    /// Returns jobs which are not frozen: services first, then shipments, each in document order.
    pub fn unfrozen_jobs(&self) -> impl Iterator<Item = Job> + '_ {
        let services = self.services.iter().map(|service| Job::Service(service.clone()));
        let shipments = self.shipments.iter().map(|shipment| Job::Shipment(shipment.clone()));

        services.chain(shipments).filter(|job| !self.is_frozen(job.id()))
    }

    pub(crate) fn warn_missing_coord(&mut self, vehicle_id: &str, path: &str) {
        if self.missing_coord.is_none() {
            warn!(vehicle_id, path, "vehicle coordinate is missing, will not warn again");
            self.missing_coord = Some(path.to_string());
        }
    }

    /// Returns a path of the first missing vehicle coordinate reported in this load.
    pub fn missing_coord(&self) -> Option<&str> {
        self.missing_coord.as_deref()
    }
}
