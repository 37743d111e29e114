#[cfg(test)]
#[path = "../../tests/unit/models/domain_test.rs"]
mod domain_test;

use crate::models::common::Cost;
use crate::models::problem::{Job, Vehicle, VehicleType};
use crate::models::solution::Route;
use crate::utils::compare_floats;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tracing::warn;

/// A cost value which means that solution cost is not specified.
pub const UNKNOWN_COST: Cost = -1.;

/// Specifies whether vehicles can be used an unlimited amount of times.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FleetSize {
    /// Every vehicle can be used as many times as needed.
    #[default]
    Infinite,
    /// Every vehicle can be used at most once.
    Finite,
}

impl FleetSize {
    /// Parses fleet size case-insensitively. Absent or unknown values are treated as infinite.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|value| value.trim().to_ascii_uppercase()) {
            Some(value) if value == "FINITE" => FleetSize::Finite,
            _ => FleetSize::Infinite,
        }
    }
}

impl Display for FleetSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FleetSize::Infinite => write!(f, "INFINITE"),
            FleetSize::Finite => write!(f, "FINITE"),
        }
    }
}

/// Defines VRP problem.
#[derive(Clone, Debug)]
pub struct Problem {
    jobs: Vec<Job>,
    job_index: FxHashMap<String, usize>,
    vehicles: Vec<Arc<Vehicle>>,
    initial_routes: Vec<Route>,
    fleet_size: FleetSize,
}

impl Problem {
    /// Returns jobs available for scheduling in insertion order.
    pub fn jobs(&self) -> &[Job] {
        self.jobs.as_slice()
    }

    /// Finds a job by its id.
    pub fn job(&self, id: &str) -> Option<&Job> {
        self.job_index.get(id).and_then(|&idx| self.jobs.get(idx))
    }

    /// Returns all vehicles.
    pub fn vehicles(&self) -> &[Arc<Vehicle>] {
        self.vehicles.as_slice()
    }

    /// Finds a vehicle by its id.
    pub fn vehicle(&self, id: &str) -> Option<&Arc<Vehicle>> {
        self.vehicles.iter().find(|vehicle| vehicle.id == id)
    }

    /// Returns distinct vehicle types used by vehicles in order of their first usage.
    pub fn vehicle_types(&self) -> Vec<Arc<VehicleType>> {
        let mut seen = FxHashSet::default();
        self.vehicles
            .iter()
            .filter(|vehicle| seen.insert(vehicle.vehicle_type.registry_id()))
            .map(|vehicle| vehicle.vehicle_type.clone())
            .collect()
    }

    /// Returns routes which are fixed before optimization starts.
    pub fn initial_routes(&self) -> &[Route] {
        self.initial_routes.as_slice()
    }

    /// Returns fleet size policy.
    pub fn fleet_size(&self) -> FleetSize {
        self.fleet_size
    }
}

/// Provides a way to assemble a [Problem].
#[derive(Clone, Debug, Default)]
pub struct ProblemBuilder {
    jobs: Vec<Job>,
    job_index: FxHashMap<String, usize>,
    vehicles: Vec<Arc<Vehicle>>,
    vehicle_index: FxHashMap<String, usize>,
    initial_routes: Vec<Route>,
    fleet_size: FleetSize,
}

impl ProblemBuilder {
    /// Adds a job. A job with the same id is replaced.
    pub fn add_job(&mut self, job: Job) -> &mut Self {
        match self.job_index.get(job.id()) {
            Some(&idx) => {
                warn!(job_id = job.id(), "job with the same id already exists, it is replaced");
                self.jobs[idx] = job;
            }
            None => {
                self.job_index.insert(job.id().to_string(), self.jobs.len());
                self.jobs.push(job);
            }
        }

        self
    }

    /// Adds a vehicle. A vehicle with the same id is replaced.
    pub fn add_vehicle(&mut self, vehicle: Arc<Vehicle>) -> &mut Self {
        match self.vehicle_index.get(&vehicle.id) {
            Some(&idx) => self.vehicles[idx] = vehicle,
            None => {
                self.vehicle_index.insert(vehicle.id.clone(), self.vehicles.len());
                self.vehicles.push(vehicle);
            }
        }

        self
    }

    /// Adds a route which is fixed before optimization starts. Its vehicle is added when it is not known yet.
    pub fn add_initial_vehicle_route(&mut self, route: Route) -> &mut Self {
        if !self.vehicle_index.contains_key(&route.vehicle.id) {
            self.add_vehicle(route.vehicle.clone());
        }

        self.initial_routes.push(route);
        self
    }

    /// Sets fleet size policy.
    pub fn set_fleet_size(&mut self, fleet_size: FleetSize) -> &mut Self {
        self.fleet_size = fleet_size;
        self
    }

    /// Returns true if a job with given id is added.
    pub fn has_job(&self, id: &str) -> bool {
        self.job_index.contains_key(id)
    }

    /// Returns jobs added so far.
    pub fn jobs(&self) -> &[Job] {
        self.jobs.as_slice()
    }

    /// Returns vehicles added so far.
    pub fn vehicles(&self) -> &[Arc<Vehicle>] {
        self.vehicles.as_slice()
    }

    /// Returns fleet size policy set so far.
    pub fn fleet_size(&self) -> FleetSize {
        self.fleet_size
    }

    /// Builds a [Problem].
    pub fn build(self) -> Problem {
        Problem {
            jobs: self.jobs,
            job_index: self.job_index,
            vehicles: self.vehicles,
            initial_routes: self.initial_routes,
            fleet_size: self.fleet_size,
        }
    }
}

/// Represents a VRP solution.
#[derive(Clone, Debug)]
pub struct Solution {
    /// List of routes.
    pub routes: Vec<Route>,
    /// Total cost, equals to [UNKNOWN_COST] when it is not specified.
    pub cost: Cost,
}

impl Solution {
    /// Creates a new solution.
    pub fn new(routes: Vec<Route>, cost: Option<Cost>) -> Self {
        Self { routes, cost: cost.unwrap_or(UNKNOWN_COST) }
    }

    /// Returns true if cost is specified.
    pub fn has_cost(&self) -> bool {
        compare_floats(self.cost, UNKNOWN_COST) != Ordering::Equal
    }
}
