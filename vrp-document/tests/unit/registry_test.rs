use super::*;
use crate::ErrorKind;
use vrp_core::models::common::Coordinate;
use vrp_core::models::problem::{ServiceBuilder, ShipmentBuilder};

fn create_service(id: &str) -> Arc<Service> {
    Arc::new(ServiceBuilder::new(id).location_id("loc").size(1).build().unwrap())
}

fn create_shipment(id: &str) -> Arc<Shipment> {
    Arc::new(
        ShipmentBuilder::new(id)
            .size(1)
            .pickup_coord(Coordinate::new(0., 0.))
            .delivery_coord(Coordinate::new(1., 1.))
            .build()
            .unwrap(),
    )
}

#[test]
fn can_insert_and_resolve_entities() {
    let mut registry = Registry::new(ReferenceKind::Service);

    registry.insert("s1", create_service("s1")).unwrap();
    registry.insert("s2", create_service("s2")).unwrap();

    assert_eq!(registry.len(), 2);
    assert!(registry.contains("s2"));
    assert_eq!(registry.resolve("s1").unwrap().id, "s1");
    assert_eq!(registry.iter().map(|service| service.id.as_str()).collect::<Vec<_>>(), vec!["s1", "s2"]);
}

#[test]
fn can_reject_duplicate_id() {
    let mut registry = Registry::new(ReferenceKind::Service);
    registry.insert("s1", create_service("s1")).unwrap();

    let result = registry.insert("s1", create_service("s1"));

    assert_err_matches!(result, ReadError::AmbiguousSpecification { entity: "service", .. });
    assert_eq!(registry.len(), 1);
}

#[test]
fn can_report_unresolved_reference() {
    let registry = Registry::<Shipment>::new(ReferenceKind::Shipment);

    let error = registry.resolve("sh1").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::UnresolvedReference);
    assert!(registry.is_empty());
    assert!(registry.get("sh1").is_none());
}

#[test]
fn can_publish_only_unfrozen_jobs_in_order() {
    let mut context = ReadContext::default();
    context.shipments.insert("sh1", create_shipment("sh1")).unwrap();
    context.services.insert("s1", create_service("s1")).unwrap();
    context.services.insert("s2", create_service("s2")).unwrap();
    context.freeze("s1");

    let ids = context.unfrozen_jobs().map(|job| job.id().to_string()).collect::<Vec<_>>();

    assert_eq!(ids, vec!["s2", "sh1"]);
    assert!(context.is_frozen("s1"));
    assert_eq!(context.frozen_ids().collect::<Vec<_>>(), vec!["s1"]);
}

#[test]
fn can_find_frozen_job_by_id() {
    let mut context = ReadContext::default();
    context.services.insert("s1", create_service("s1")).unwrap();
    context.shipments.insert("sh1", create_shipment("sh1")).unwrap();
    context.freeze("sh1");

    assert_eq!(context.job("sh1").map(|job| job.as_shipment().is_some()), Some(true));
    assert_eq!(context.job("s1").map(|job| job.as_service().is_some()), Some(true));
    assert!(context.job("unknown").is_none());
}

#[test]
fn can_warn_about_missing_coord_once_per_context() {
    let mut context = ReadContext::default();
    assert!(context.missing_coord().is_none());

    context.warn_missing_coord("v1", "startLocation.coord");
    context.warn_missing_coord("v2", "location.coord");

    assert_eq!(context.missing_coord(), Some("startLocation.coord"));
    assert!(ReadContext::default().missing_coord().is_none());
}
