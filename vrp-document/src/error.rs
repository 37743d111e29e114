#[cfg(test)]
#[path = "../tests/unit/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};
use thiserror::Error;
use vrp_core::models::ModelError;

/// Specifies a kind of entity referenced by id from another part of the document.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ReferenceKind {
    /// A vehicle type referenced by a vehicle.
    VehicleType,
    /// A vehicle referenced by a route.
    Vehicle,
    /// A service referenced by a route activity.
    Service,
    /// A shipment referenced by a route activity.
    Shipment,
}

impl Display for ReferenceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReferenceKind::VehicleType => "vehicle type",
            ReferenceKind::Vehicle => "vehicle",
            ReferenceKind::Service => "service",
            ReferenceKind::Shipment => "shipment",
        };

        write!(f, "{name}")
    }
}

/// Classifies a [ReadError] regardless of the layer where it is raised.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// A required field, location or reference is absent.
    MissingRequiredField,
    /// Mutually exclusive fields are given together or an id is declared twice.
    AmbiguousSpecification,
    /// None of alternative fields is given.
    MissingSpecification,
    /// A referenced entity is not declared.
    UnresolvedReference,
    /// A tag is outside of the supported set.
    UnsupportedVariant,
    /// A numeric or boolean text cannot be parsed.
    MalformedNumericLiteral,
    /// A value violates an entity invariant.
    InvalidValue,
    /// Route activities are not consistent with each other.
    InconsistentRoute,
    /// The document is rejected by schema validation.
    SchemaViolation,
    /// The document cannot be parsed.
    MalformedDocument,
    /// The document cannot be read.
    Io,
}

/// An error raised while reading a document. The first error aborts the whole load.
#[derive(Debug, Error)]
pub enum ReadError {
    /// A required field is absent.
    #[error("missing required field '{path}'")]
    MissingRequiredField {
        /// A path to the field.
        path: String,
    },

    /// Mutually exclusive fields are given together or an id is declared twice.
    #[error("{entity} '{id}' is ambiguous: {reason}")]
    AmbiguousSpecification {
        /// An entity name.
        entity: &'static str,
        /// An entity id.
        id: String,
        /// A description of the ambiguity.
        reason: String,
    },

    /// None of alternative fields is given.
    #[error("{entity} '{id}' is incomplete: {reason}")]
    MissingSpecification {
        /// An entity name.
        entity: &'static str,
        /// An entity id.
        id: String,
        /// A description of what is missing.
        reason: String,
    },

    /// A referenced entity is not declared in the document.
    #[error("{kind} with id '{id}' is not declared")]
    UnresolvedReference {
        /// A kind of the referenced entity.
        kind: ReferenceKind,
        /// A referenced id.
        id: String,
    },

    /// An activity type tag is not supported.
    #[error("activity type '{tag}' is not supported, use 'pickupShipment' or 'deliverShipment'")]
    UnsupportedVariant {
        /// An unsupported tag.
        tag: String,
    },

    /// A field cannot be parsed as a number or boolean.
    #[error("cannot parse '{literal}' at '{path}'")]
    MalformedNumericLiteral {
        /// A path to the field.
        path: String,
        /// A text which cannot be parsed.
        literal: String,
    },

    /// The document is rejected by schema validation.
    #[error("document violates schema '{schema}': {reason}")]
    SchemaViolation {
        /// A schema resource name.
        schema: String,
        /// A description of the violation.
        reason: String,
    },

    /// An entity builder rejects the data.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The document cannot be parsed.
    #[error("cannot parse document: {0}")]
    Document(#[from] serde_json::Error),

    /// The document cannot be read.
    #[error("cannot read document: {0}")]
    Io(#[from] std::io::Error),
}

impl ReadError {
    /// Returns a kind of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReadError::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            ReadError::AmbiguousSpecification { .. } => ErrorKind::AmbiguousSpecification,
            ReadError::MissingSpecification { .. } => ErrorKind::MissingSpecification,
            ReadError::UnresolvedReference { .. } => ErrorKind::UnresolvedReference,
            ReadError::UnsupportedVariant { .. } => ErrorKind::UnsupportedVariant,
            ReadError::MalformedNumericLiteral { .. } => ErrorKind::MalformedNumericLiteral,
            ReadError::SchemaViolation { .. } => ErrorKind::SchemaViolation,
            ReadError::Model(error) => match error {
                ModelError::InvalidValue { .. } => ErrorKind::InvalidValue,
                ModelError::MissingLocation { .. } | ModelError::MissingRequiredField { .. } => {
                    ErrorKind::MissingRequiredField
                }
                ModelError::AmbiguousSpecification { .. } => ErrorKind::AmbiguousSpecification,
                ModelError::MissingSpecification { .. } => ErrorKind::MissingSpecification,
                ModelError::InconsistentRoute { .. } => ErrorKind::InconsistentRoute,
            },
            ReadError::Document(_) => ErrorKind::MalformedDocument,
            ReadError::Io(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn missing(path: &str) -> Self {
        ReadError::MissingRequiredField { path: path.to_string() }
    }

    pub(crate) fn unresolved(kind: ReferenceKind, id: &str) -> Self {
        ReadError::UnresolvedReference { kind, id: id.to_string() }
    }
}

/// A type alias for result type with `ReadError`.
pub type ReadResult<T> = Result<T, ReadError>;
