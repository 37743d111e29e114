use super::*;

parameterized_test! {can_classify_error, (error, expected), {
    assert_eq!(error.kind(), expected);
}}

can_classify_error! {
    case01_missing_field: (ReadError::missing("vehicles.vehicle.id"), ErrorKind::MissingRequiredField),
    case02_unresolved: (ReadError::unresolved(ReferenceKind::Vehicle, "v1"), ErrorKind::UnresolvedReference),
    case03_unsupported: (ReadError::UnsupportedVariant { tag: "service".to_string() }, ErrorKind::UnsupportedVariant),
    case04_model_invalid: (
        ReadError::from(ModelError::InvalidValue { field: "duration".to_string(), reason: "negative".to_string() }),
        ErrorKind::InvalidValue
    ),
    case05_model_location: (
        ReadError::from(ModelError::MissingLocation { entity: "service", id: "s1".to_string(), role: "service" }),
        ErrorKind::MissingRequiredField
    ),
    case06_model_route: (
        ReadError::from(ModelError::InconsistentRoute { vehicle_id: "v1".to_string(), reason: "open".to_string() }),
        ErrorKind::InconsistentRoute
    ),
    case07_model_ambiguous: (
        ReadError::from(ModelError::AmbiguousSpecification { entity: "service", id: "s1".to_string() }),
        ErrorKind::AmbiguousSpecification
    ),
}

#[test]
fn can_classify_document_error() {
    let error = ReadError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());

    assert_eq!(error.kind(), ErrorKind::MalformedDocument);
}

#[test]
fn can_format_error_messages() {
    assert_eq!(
        ReadError::missing("initialRoutes.route.start").to_string(),
        "missing required field 'initialRoutes.route.start'"
    );
    assert_eq!(
        ReadError::unresolved(ReferenceKind::VehicleType, "t1").to_string(),
        "vehicle type with id 't1' is not declared"
    );
    assert_eq!(
        ReadError::MalformedNumericLiteral { path: "duration".to_string(), literal: "abc".to_string() }.to_string(),
        "cannot parse 'abc' at 'duration'"
    );
}
