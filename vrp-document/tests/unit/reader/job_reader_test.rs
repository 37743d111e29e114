use super::*;
use crate::ErrorKind;
use crate::helpers::*;
use serde_json::json;
use vrp_core::models::ModelError;
use vrp_core::models::common::Location;
use vrp_core::models::problem::{DefaultServiceBuilderFactory, ServiceKind};

fn read_jobs(problem: &Value) -> ReadResult<ReadContext> {
    let root = JsonNode::new(problem);
    let mut context = ReadContext::default();

    read_shipments(&root, &mut context)?;
    read_services(&root, &mut context, &DefaultServiceBuilderFactory)?;

    Ok(context)
}

fn read_single_service(service: Value) -> ReadResult<Arc<Service>> {
    read_jobs(&json!({ "services": { "service": [service] } }))?.services.resolve("s1")
}

fn read_single_shipment(shipment: Value) -> ReadResult<Arc<Shipment>> {
    read_jobs(&json!({ "shipments": { "shipment": [shipment] } }))?.shipments.resolve("sh1")
}

#[test]
fn can_read_service_place() {
    let service = read_single_service(create_service("s1", 3)).unwrap();

    assert_eq!(service.kind, ServiceKind::Service);
    assert_eq!(service.size.as_slice(), &[3]);
    assert_eq!(service.place.location.id, "loc_s1");
    assert_eq!(service.place.location.coord, Some(Coordinate::new(10., 10.)));
    assert_eq!(service.place.duration, 5.);
    assert_eq!(service.place.time_window, TimeWindow::max());
}

parameterized_test! {can_read_service_kind, (tag, expected), {
    let mut service = create_service("s1", 1);
    match tag {
        Some(tag) => service["@type"] = json!(tag),
        None => service["@type"] = Value::Null,
    }

    assert_eq!(read_single_service(service).unwrap().kind, expected);
}}

can_read_service_kind! {
    case01_service: (Some("service"), ServiceKind::Service),
    case02_pickup: (Some("pickup"), ServiceKind::Pickup),
    case03_delivery: (Some("delivery"), ServiceKind::Delivery),
    case04_absent: (None::<&str>, ServiceKind::Service),
}

#[test]
fn can_use_last_service_time_window() {
    let mut service = create_service("s1", 1);
    service["timeWindows"] = json!({ "timeWindow": [{ "start": 0, "end": 10 }, { "start": 20, "end": 30 }] });

    let service = read_single_service(service).unwrap();

    assert_eq!(service.place.time_window, TimeWindow::new(20., 30.).unwrap());
}

#[test]
fn can_fail_on_incomplete_service_time_window() {
    let mut service = create_service("s1", 1);
    service["timeWindows"] = json!({ "timeWindow": { "start": 0 } });

    assert_err_matches!(read_single_service(service), ReadError::MissingRequiredField { .. });
}

#[test]
fn can_derive_service_location_id_from_coord() {
    let service = json!({ "@id": "s1", "capacity-demand": 1, "coord": { "@x": 3, "@y": 4 } });

    let service = read_single_service(service).unwrap();

    assert_eq!(service.place.location.id, "[x=3.0][y=4.0]");
}

#[test]
fn can_read_service_capacity_dimensions() {
    let service = json!({
        "@id": "s1",
        "locationId": "loc",
        "capacity-dimensions": { "dimension": [{ "@index": 1, "#text": 2 }, { "@index": 0, "#text": 1 }] }
    });

    assert_eq!(read_single_service(service).unwrap().size.as_slice(), &[1, 2]);
}

parameterized_test! {can_fail_on_invalid_service, (service, expected), {
    let result = read_single_service(service);

    assert_eq!(result.map(|_| ()).map_err(|err| err.kind()), Err(expected));
}}

can_fail_on_invalid_service! {
    case01_no_id: (json!({ "locationId": "loc", "capacity-demand": 1 }), ErrorKind::MissingRequiredField),
    case02_empty_id: (json!({ "@id": "", "locationId": "loc", "capacity-demand": 1 }), ErrorKind::MissingRequiredField),
    case03_no_location: (json!({ "@id": "s1", "capacity-demand": 1 }), ErrorKind::MissingRequiredField),
    case04_negative_duration: (
        json!({ "@id": "s1", "locationId": "loc", "capacity-demand": 1, "duration": -1 }),
        ErrorKind::InvalidValue
    ),
    case05_malformed_demand: (
        json!({ "@id": "s1", "locationId": "loc", "capacity-demand": "x" }),
        ErrorKind::MalformedNumericLiteral
    ),
    case06_negative_demand: (
        json!({ "@id": "s1", "locationId": "loc", "capacity-demand": -1 }),
        ErrorKind::InvalidValue
    ),
    case07_no_capacity: (json!({ "@id": "s1", "locationId": "loc" }), ErrorKind::MissingSpecification),
    case08_nan_duration: (
        json!({ "@id": "s1", "locationId": "loc", "capacity-demand": 1, "duration": "NaN" }),
        ErrorKind::MalformedNumericLiteral
    ),
    case09_infinite_coord: (
        json!({ "@id": "s1", "capacity-demand": 1, "coord": { "@x": "inf", "@y": "-infinity" } }),
        ErrorKind::MalformedNumericLiteral
    ),
    case10_nan_time_window: (
        json!({
            "@id": "s1",
            "locationId": "loc",
            "capacity-demand": 1,
            "timeWindows": { "timeWindow": [{ "start": "nan", "end": "NaN" }] }
        }),
        ErrorKind::MalformedNumericLiteral
    ),
    case11_huge_dimension_index: (
        json!({
            "@id": "s1",
            "locationId": "loc",
            "capacity-dimensions": { "dimension": [{ "@index": 3000000000_u64, "#text": 1 }] }
        }),
        ErrorKind::InvalidValue
    ),
}

#[test]
fn can_read_shipment_places() {
    let shipment = read_single_shipment(create_shipment("sh1")).unwrap();

    assert_eq!(shipment.size.as_slice(), &[2]);
    assert_eq!(shipment.pickup.location, Location::new("pickup_loc", Some(Coordinate::new(1., 1.))));
    assert_eq!(shipment.pickup.duration, 3.);
    assert_eq!(shipment.delivery.location, Location::new("delivery_loc", Some(Coordinate::new(5., 5.))));
    assert_eq!(shipment.delivery.duration, 4.);
}

parameterized_test! {can_read_shipment_time_window_only_when_complete, (time_windows, expected), {
    let mut shipment = create_shipment("sh1");
    shipment["pickup"]["timeWindows"] = time_windows;

    let shipment = read_single_shipment(shipment).unwrap();

    assert_eq!(shipment.pickup.time_window, expected);
    assert_eq!(shipment.delivery.time_window, TimeWindow::max());
}}

can_read_shipment_time_window_only_when_complete! {
    case01_complete: (json!({ "timeWindow": { "start": 5, "end": 50 } }), TimeWindow::new(5., 50.).unwrap()),
    case02_first_of_many: (
        json!({ "timeWindow": [{ "start": 5, "end": 50 }, { "start": 60, "end": 70 }] }),
        TimeWindow::new(5., 50.).unwrap()
    ),
    case03_start_only: (json!({ "timeWindow": { "start": 5 } }), TimeWindow::max()),
    case04_end_only: (json!({ "timeWindow": { "end": 50 } }), TimeWindow::max()),
}

#[test]
fn can_fail_on_shipment_without_delivery_location() {
    let mut shipment = create_shipment("sh1");
    shipment["delivery"] = json!({ "duration": 1 });

    assert_err_matches!(
        read_single_shipment(shipment),
        ReadError::Model(ModelError::MissingLocation { role: "delivery", .. })
    );
}

#[test]
fn can_fail_on_duplicate_shipment_id() {
    let problem = json!({ "shipments": { "shipment": [create_shipment("sh1"), create_shipment("sh1")] } });

    assert_err_matches!(read_jobs(&problem), ReadError::AmbiguousSpecification { entity: "shipment", .. });
}

#[test]
fn can_read_jobs_without_publishing_them() {
    let problem = json!({
        "services": { "service": [create_service("s1", 1), create_service("s2", 1)] },
        "shipments": { "shipment": create_shipment("sh1") },
    });

    let context = read_jobs(&problem).unwrap();

    assert_eq!(context.services.len(), 2);
    assert_eq!(context.shipments.len(), 1);
}
