//! Specifies logic to write problem and solutions back into a document of the same shape.

#[cfg(test)]
#[path = "../tests/unit/writer_test.rs"]
mod writer_test;

use crate::{ROOT_ELEMENT, TEXT_KEY};
use rustc_hash::FxHashSet;
use serde_json::{Map, Value, json};
use std::io::{BufWriter, Write};
use vrp_core::models::common::{Capacity, Location, TimeWindow, Timestamp};
use vrp_core::models::problem::{Job, Place, Service, Shipment, Vehicle, VehicleType};
use vrp_core::models::solution::{ActivityKind, Route, TourActivity};
use vrp_core::models::{Problem, Solution};

/// Writes problem and solutions as a json document. Jobs of initial routes are written together
/// with free jobs, so that reading the document again reproduces them.
pub fn write_document(problem: &Problem, solutions: &[Solution]) -> Value {
    let jobs = collect_jobs(problem);

    let mut content = Map::new();
    content.insert("problemType".to_string(), json!({ "fleetSize": problem.fleet_size().to_string() }));

    let types = problem.vehicle_types().iter().map(|vehicle_type| write_vehicle_type(vehicle_type)).collect::<Vec<_>>();
    content.insert("vehicleTypes".to_string(), json!({ "type": types }));

    let vehicles = problem.vehicles().iter().map(|vehicle| write_vehicle(vehicle)).collect::<Vec<_>>();
    content.insert("vehicles".to_string(), json!({ "vehicle": vehicles }));

    let services = jobs.iter().filter_map(Job::as_service).map(|service| write_service(service)).collect::<Vec<_>>();
    if !services.is_empty() {
        content.insert("services".to_string(), json!({ "service": services }));
    }

    let shipments =
        jobs.iter().filter_map(Job::as_shipment).map(|shipment| write_shipment(shipment)).collect::<Vec<_>>();
    if !shipments.is_empty() {
        content.insert("shipments".to_string(), json!({ "shipment": shipments }));
    }

    if !problem.initial_routes().is_empty() {
        let routes = problem.initial_routes().iter().map(|route| write_route(route, false)).collect::<Vec<_>>();
        content.insert("initialRoutes".to_string(), json!({ "route": routes }));
    }

    if !solutions.is_empty() {
        let solutions = solutions.iter().map(write_solution).collect::<Vec<_>>();
        content.insert("solutions".to_string(), json!({ "solution": solutions }));
    }

    json!({ ROOT_ELEMENT: Value::Object(content) })
}

/// Serializes problem and solutions into json format.
pub fn serialize_document<W: Write>(
    writer: BufWriter<W>,
    problem: &Problem,
    solutions: &[Solution],
) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, &write_document(problem, solutions))
}

/// Returns free jobs followed by jobs which are served only in initial routes.
fn collect_jobs(problem: &Problem) -> Vec<Job> {
    let mut seen = FxHashSet::default();

    problem
        .jobs()
        .iter()
        .cloned()
        .chain(problem.initial_routes().iter().flat_map(|route| route.jobs()))
        .filter(|job| seen.insert(job.id().to_string()))
        .collect()
}

fn write_vehicle_type(vehicle_type: &VehicleType) -> Value {
    let mut value = Map::new();
    value.insert("id".to_string(), json!(vehicle_type.id));
    if let Some(factor) = vehicle_type.penalty_factor {
        value.insert("@type".to_string(), json!("penalty"));
        value.insert("@penaltyFactor".to_string(), json!(factor));
    }
    value.insert("capacity-dimensions".to_string(), write_capacity(&vehicle_type.capacity));
    value.insert(
        "costs".to_string(),
        json!({
            "fixed": vehicle_type.costs.fixed,
            "distance": vehicle_type.costs.per_distance,
            "time": vehicle_type.costs.per_time,
        }),
    );

    Value::Object(value)
}

fn write_vehicle(vehicle: &Vehicle) -> Value {
    let mut value = Map::new();
    value.insert("id".to_string(), json!(vehicle.id));
    value.insert("typeId".to_string(), json!(vehicle.vehicle_type.id));
    if vehicle.vehicle_type.is_penalty() {
        value.insert("@type".to_string(), json!("penalty"));
    }
    value.insert("startLocation".to_string(), write_location(&vehicle.start));
    value.insert("endLocation".to_string(), write_location(&vehicle.end));

    let mut schedule = Map::new();
    schedule.insert("start".to_string(), json!(vehicle.earliest_start));
    if vehicle.latest_arrival < Timestamp::MAX {
        schedule.insert("end".to_string(), json!(vehicle.latest_arrival));
    }
    value.insert("timeSchedule".to_string(), Value::Object(schedule));
    value.insert("returnToDepot".to_string(), json!(vehicle.return_to_depot));

    Value::Object(value)
}

fn write_service(service: &Service) -> Value {
    let mut value = Map::new();
    value.insert("@id".to_string(), json!(service.id));
    value.insert("@type".to_string(), json!(service.kind.as_tag()));
    value.insert("capacity-dimensions".to_string(), write_capacity(&service.size));
    write_place(&mut value, &service.place);

    Value::Object(value)
}

fn write_shipment(shipment: &Shipment) -> Value {
    let mut pickup = Map::new();
    write_place(&mut pickup, &shipment.pickup);

    let mut delivery = Map::new();
    write_place(&mut delivery, &shipment.delivery);

    json!({
        "@id": shipment.id,
        "capacity-dimensions": write_capacity(&shipment.size),
        "pickup": Value::Object(pickup),
        "delivery": Value::Object(delivery),
    })
}

fn write_place(value: &mut Map<String, Value>, place: &Place) {
    value.insert("locationId".to_string(), json!(place.location.id));
    if let Some(coord) = place.location.coord {
        value.insert("coord".to_string(), json!({ "@x": coord.x, "@y": coord.y }));
    }
    value.insert("duration".to_string(), json!(place.duration));
    if place.time_window != TimeWindow::max() {
        value.insert(
            "timeWindows".to_string(),
            json!({ "timeWindow": [{ "start": place.time_window.start, "end": place.time_window.end }] }),
        );
    }
}

fn write_location(location: &Location) -> Value {
    let mut value = Map::new();
    value.insert("id".to_string(), json!(location.id));
    if let Some(coord) = location.coord {
        value.insert("coord".to_string(), json!({ "@x": coord.x, "@y": coord.y }));
    }

    Value::Object(value)
}

fn write_capacity(capacity: &Capacity) -> Value {
    let dimensions = match capacity.as_slice() {
        [] => vec![json!({ "@index": 0, TEXT_KEY: 0 })],
        values => values.iter().enumerate().map(|(index, value)| json!({ "@index": index, TEXT_KEY: value })).collect(),
    };

    json!({ "dimension": dimensions })
}

fn write_route(route: &Route, with_end: bool) -> Value {
    let mut value = Map::new();
    if let Some(driver) = &route.driver {
        value.insert("driverId".to_string(), json!(driver.id));
    }
    value.insert("vehicleId".to_string(), json!(route.vehicle.id));
    value.insert("start".to_string(), json!(route.departure_time));
    value.insert("act".to_string(), Value::Array(route.activities.iter().map(write_activity).collect()));
    if with_end {
        value.insert("end".to_string(), json!(route.end_time.unwrap_or(route.departure_time)));
    }

    Value::Object(value)
}

fn write_activity(activity: &TourActivity) -> Value {
    let reference = match &activity.kind {
        ActivityKind::Service(_) => "serviceId",
        ActivityKind::PickupShipment(_) | ActivityKind::DeliverShipment(_) => "shipmentId",
    };

    json!({
        "@type": activity.kind.as_tag(),
        reference: activity.job_id(),
        "arrTime": activity.schedule.arrival,
        "endTime": activity.schedule.departure,
    })
}

fn write_solution(solution: &Solution) -> Value {
    let mut value = Map::new();
    if solution.has_cost() {
        value.insert("cost".to_string(), json!(solution.cost));
    }
    let routes = solution.routes.iter().map(|route| write_route(route, true)).collect::<Vec<_>>();
    value.insert("routes".to_string(), json!({ "route": routes }));

    Value::Object(value)
}
