use super::*;
use crate::helpers::*;
use serde_json::json;
use vrp_core::models::common::Location;
use vrp_core::models::problem::DEFAULT_PENALTY_FACTOR;

fn read_fleet(problem: &Value) -> ReadResult<(ReadContext, ProblemBuilder)> {
    let root = JsonNode::new(problem);
    let mut context = ReadContext::default();
    let mut builder = ProblemBuilder::default();

    read_vehicles_and_their_types(&root, &mut context, &mut builder)?;

    Ok((context, builder))
}

fn create_fleet(types: Vec<Value>, vehicles: Vec<Value>) -> Value {
    json!({ "vehicleTypes": { "type": types }, "vehicles": { "vehicle": vehicles } })
}

#[test]
fn can_read_vehicle_type_with_costs() {
    let problem = create_fleet(vec![create_vehicle_type("t1", 10)], vec![]);

    let (context, _) = read_fleet(&problem).unwrap();
    let vehicle_type = context.vehicle_types.resolve("t1").unwrap();

    assert_eq!(vehicle_type.capacity.as_slice(), &[10]);
    assert_eq!(vehicle_type.costs.fixed, 100.);
    assert_eq!(vehicle_type.costs.per_distance, 1.);
    assert_eq!(vehicle_type.costs.per_time, 0.5);
    assert!(!vehicle_type.is_penalty());
}

#[test]
fn can_read_vehicle_type_with_capacity_dimensions() {
    let vehicle_type = json!({
        "id": "t1",
        "capacity-dimensions": { "dimension": [{ "@index": 0, "#text": 10 }, { "@index": 2, "#text": 5 }] }
    });

    let (context, _) = read_fleet(&create_fleet(vec![vehicle_type], vec![])).unwrap();

    assert_eq!(context.vehicle_types.resolve("t1").unwrap().capacity.as_slice(), &[10, 0, 5]);
}

parameterized_test! {can_register_penalty_type, (factor, expected_multiplier), {
    let mut vehicle_type = create_vehicle_type("T1", 10);
    vehicle_type["@type"] = json!("penalty");
    if let Some(factor) = factor {
        vehicle_type["@penaltyFactor"] = json!(factor);
    }

    let (context, _) = read_fleet(&create_fleet(vec![vehicle_type], vec![])).unwrap();

    let penalty_type = context.vehicle_types.resolve("T1_penalty").unwrap();
    assert!(context.vehicle_types.get("T1").is_none());
    assert_eq!(penalty_type.id, "T1");
    assert!(penalty_type.is_penalty());
    assert_eq!(penalty_type.cost_multiplier(), expected_multiplier);
}}

can_register_penalty_type! {
    case01_default_factor: (None::<&str>, DEFAULT_PENALTY_FACTOR),
    case02_explicit_factor: (Some("4.5"), 4.5),
}

#[test]
fn can_resolve_penalty_vehicle_to_penalty_type() {
    let mut penalty_type = create_vehicle_type("T1", 10);
    penalty_type["@type"] = json!("penalty");
    let mut penalty_vehicle = create_vehicle("v2", "T1");
    penalty_vehicle["@type"] = json!("penalty");

    let problem = create_fleet(
        vec![create_vehicle_type("T1", 10), penalty_type],
        vec![create_vehicle("v1", "T1"), penalty_vehicle],
    );

    let (context, builder) = read_fleet(&problem).unwrap();

    assert!(!context.vehicles.resolve("v1").unwrap().vehicle_type.is_penalty());
    assert!(context.vehicles.resolve("v2").unwrap().vehicle_type.is_penalty());
    assert_eq!(builder.vehicles().len(), 2);
}

#[test]
fn can_fail_on_unknown_vehicle_type() {
    let problem = create_fleet(vec![create_vehicle_type("t1", 10)], vec![create_vehicle("v1", "t2")]);

    assert_err_matches!(read_fleet(&problem), ReadError::UnresolvedReference { kind: ReferenceKind::VehicleType, .. });
}

#[test]
fn can_read_types_declared_after_vehicles() {
    let problem = json!({
        "vehicles": { "vehicle": [create_vehicle("v1", "t1")] },
        "vehicleTypes": { "type": [create_vehicle_type("t1", 10)] },
    });

    let (context, _) = read_fleet(&problem).unwrap();

    assert_eq!(context.vehicles.resolve("v1").unwrap().vehicle_type.id, "t1");
}

#[test]
fn can_read_vehicle_details() {
    let vehicle = json!({
        "id": "v1",
        "typeId": "t1",
        "startLocation": { "id": "start", "coord": { "@x": 1, "@y": 2 } },
        "endLocation": { "id": "end", "coord": { "@x": 3, "@y": 4 } },
        "timeSchedule": { "start": 10, "end": 100 },
        "returnToDepot": false,
    });

    let (context, _) = read_fleet(&create_fleet(vec![create_vehicle_type("t1", 10)], vec![vehicle])).unwrap();
    let vehicle = context.vehicles.resolve("v1").unwrap();

    assert_eq!(vehicle.start, Location::new("start", Some(Coordinate::new(1., 2.))));
    assert_eq!(vehicle.end, Location::new("end", Some(Coordinate::new(3., 4.))));
    assert_eq!(vehicle.earliest_start, 10.);
    assert_eq!(vehicle.latest_arrival, 100.);
    assert!(!vehicle.return_to_depot);
}

parameterized_test! {can_resolve_start_location, (vehicle, expected_id, expected_coord), {
    let (context, _) = read_fleet(&create_fleet(vec![create_vehicle_type("t1", 10)], vec![vehicle])).unwrap();
    let vehicle = context.vehicles.resolve("v1").unwrap();

    assert_eq!(vehicle.start.id, expected_id);
    assert_eq!(vehicle.start.coord, expected_coord);
    assert_eq!(vehicle.end, vehicle.start);
}}

can_resolve_start_location! {
    case01_location_first: (json!({
        "id": "v1", "typeId": "t1",
        "location": { "id": "a", "coord": { "@x": 1, "@y": 1 } },
        "startLocation": { "id": "b", "coord": { "@x": 2, "@y": 2 } },
    }), "a", Some(Coordinate::new(1., 1.))),
    case02_partial_location_coord: (json!({
        "id": "v1", "typeId": "t1",
        "location": { "id": "a", "coord": { "@x": 1 } },
        "startLocation": { "coord": { "@x": 2, "@y": 2 } },
    }), "a", Some(Coordinate::new(2., 2.))),
    case03_start_location_only: (json!({
        "id": "v1", "typeId": "t1",
        "startLocation": { "id": "b" },
    }), "b", None),
}

#[test]
fn can_fail_without_start_location_id() {
    let vehicle = json!({ "id": "v1", "typeId": "t1", "location": { "coord": { "@x": 1, "@y": 1 } } });

    let result = read_fleet(&create_fleet(vec![create_vehicle_type("t1", 10)], vec![vehicle]));

    assert_err_matches!(result, ReadError::MissingRequiredField { .. });
}

#[test]
fn can_accept_vehicles_without_coord() {
    let vehicles = (1..=3)
        .map(|idx| json!({ "id": format!("v{idx}"), "typeId": "t1", "location": { "id": "depot" } }))
        .collect();

    let (context, _) = read_fleet(&create_fleet(vec![create_vehicle_type("t1", 10)], vehicles)).unwrap();

    assert_eq!(context.vehicles.len(), 3);
    assert!(context.vehicles.iter().all(|vehicle| vehicle.start_coord().is_none()));
}

parameterized_test! {can_report_missing_coord_of_used_start_block, (vehicle, expected_path), {
    let problem = create_fleet(vec![create_vehicle_type("t1", 10)], vec![vehicle]);

    let (context, _) = read_fleet(&problem).unwrap();

    assert_eq!(context.missing_coord(), Some(expected_path));
}}

can_report_missing_coord_of_used_start_block! {
    case01_location: (json!({ "id": "v1", "typeId": "t1", "location": { "id": "depot" } }), "location.coord"),
    case02_start_location: (
        json!({ "id": "v1", "typeId": "t1", "startLocation": { "id": "depot" } }),
        "startLocation.coord"
    ),
}

#[test]
fn can_fail_on_duplicate_vehicle_id() {
    let problem = create_fleet(
        vec![create_vehicle_type("t1", 10)],
        vec![create_vehicle("v1", "t1"), create_vehicle("v1", "t1")],
    );

    assert_err_matches!(read_fleet(&problem), ReadError::AmbiguousSpecification { entity: "vehicle", .. });
}

#[test]
fn can_fail_on_malformed_schedule() {
    let mut vehicle = create_vehicle("v1", "t1");
    vehicle["timeSchedule"]["end"] = json!("later");

    let result = read_fleet(&create_fleet(vec![create_vehicle_type("t1", 10)], vec![vehicle]));

    assert_err_matches!(result, ReadError::MalformedNumericLiteral { .. });
}
