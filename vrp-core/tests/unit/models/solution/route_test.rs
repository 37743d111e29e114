use super::*;
use crate::helpers::models::*;

fn schedule() -> Schedule {
    Schedule::new(0., 0.)
}

#[test]
fn can_build_route_with_services_and_shipment() {
    let shipment = test_shipment("sh1");

    let route = RouteBuilder::new(test_vehicle("v1"))
        .departure_time(10.)
        .end_time(100.)
        .add_service(test_service("s1"), Schedule::new(15., 20.))
        .add_pickup(shipment.clone(), schedule())
        .unwrap()
        .add_delivery(shipment, schedule())
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(route.departure_time, 10.);
    assert_eq!(route.end_time, Some(100.));
    assert!(route.driver.is_none());
    assert_eq!(route.activities.len(), 3);
    assert_eq!(route.activities[0].schedule, Schedule::new(15., 20.));
    assert_eq!(
        route.activities.iter().map(|activity| activity.kind.as_tag()).collect::<Vec<_>>(),
        vec!["service", "pickupShipment", "deliverShipment"]
    );
    assert_eq!(route.jobs().map(|job| job.id().to_string()).collect::<Vec<_>>(), vec!["s1", "sh1"]);
}

#[test]
fn can_use_vehicle_earliest_start_as_default_departure() {
    let route = RouteBuilder::new(test_vehicle("v1")).build().unwrap();

    assert_eq!(route.departure_time, 0.);
    assert!(route.end_time.is_none());
    assert!(route.activities.is_empty());
}

#[test]
fn can_get_signed_activity_demand() {
    let shipment = test_shipment("sh1");
    let route = RouteBuilder::new(test_vehicle("v1"))
        .add_service(test_service_of_kind("p", ServiceKind::Pickup, 3), schedule())
        .add_service(test_service_of_kind("d", ServiceKind::Delivery, 4), schedule())
        .add_pickup(shipment.clone(), schedule())
        .unwrap()
        .add_delivery(shipment, schedule())
        .unwrap()
        .build()
        .unwrap();

    let sizes = route.activities.iter().map(|activity| activity.size().get(0)).collect::<Vec<_>>();

    assert_eq!(sizes, vec![3, -4, 2, -2]);
}

#[test]
fn can_get_activity_place() {
    let shipment = test_shipment("sh1");
    let route = RouteBuilder::new(test_vehicle("v1"))
        .add_pickup(shipment.clone(), schedule())
        .unwrap()
        .add_delivery(shipment, schedule())
        .unwrap()
        .build()
        .unwrap();

    let delivery = &route.activities[1];

    assert_eq!(delivery.location().id, "[x=10.0][y=0.0]");
    assert_eq!(delivery.duration(), 0.);
    assert_eq!(delivery.time_window(), &TimeWindow::new(0., 100.).unwrap());
    assert_eq!(delivery.job_id(), "sh1");
}

#[test]
fn can_reject_delivery_before_pickup() {
    let result = RouteBuilder::new(test_vehicle("v1")).add_delivery(test_shipment("sh1"), schedule());

    assert_err_matches!(result, ModelError::InconsistentRoute { .. });
}

#[test]
fn can_reject_double_pickup() {
    let shipment = test_shipment("sh1");
    let result = RouteBuilder::new(test_vehicle("v1"))
        .add_pickup(shipment.clone(), schedule())
        .and_then(|builder| builder.add_pickup(shipment, schedule()));

    assert_err_matches!(result, ModelError::InconsistentRoute { .. });
}

#[test]
fn can_reject_open_shipment() {
    let result = RouteBuilder::new(test_vehicle("v1"))
        .add_pickup(test_shipment("sh1"), schedule())
        .and_then(|builder| builder.build());

    match result {
        Err(ModelError::InconsistentRoute { vehicle_id, reason }) => {
            assert_eq!(vehicle_id, "v1");
            assert!(reason.contains("sh1"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
