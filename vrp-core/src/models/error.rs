use thiserror::Error;

/// An error raised when a model entity violates one of its construction invariants.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModelError {
    /// A value passed to a builder is out of its allowed range.
    #[error("invalid value of '{field}': {reason}")]
    InvalidValue {
        /// A field name.
        field: String,
        /// A description of the violation.
        reason: String,
    },

    /// Neither location id nor coordinate is given for a location role.
    #[error("{entity} '{id}' has no {role} location: either location id or coordinate must be given")]
    MissingLocation {
        /// An entity name.
        entity: &'static str,
        /// An entity id.
        id: String,
        /// A location role, e.g. pickup or delivery.
        role: &'static str,
    },

    /// A required field is absent or empty.
    #[error("{entity} has no required field '{field}'")]
    MissingRequiredField {
        /// An entity name.
        entity: &'static str,
        /// A field name.
        field: &'static str,
    },

    /// Both scalar capacity and capacity dimensions are given.
    #[error("{entity} '{id}' uses both scalar capacity and capacity dimensions, use only one of them")]
    AmbiguousSpecification {
        /// An entity name.
        entity: &'static str,
        /// An entity id.
        id: String,
    },

    /// Neither scalar capacity nor capacity dimensions are given.
    #[error("{entity} '{id}' has no capacity, use either scalar capacity or capacity dimensions")]
    MissingSpecification {
        /// An entity name.
        entity: &'static str,
        /// An entity id.
        id: String,
    },

    /// Route activities are not consistent with each other.
    #[error("route of vehicle '{vehicle_id}' is inconsistent: {reason}")]
    InconsistentRoute {
        /// A vehicle id.
        vehicle_id: String,
        /// A description of the violation.
        reason: String,
    },
}

/// A type alias for result type with `ModelError`.
pub type ModelResult<T> = Result<T, ModelError>;
