use crate::utils::Float;

/// Represents a time duration.
pub type Duration = Float;

/// Represents a timestamp.
pub type Timestamp = Float;

/// Specifies cost value.
pub type Cost = Float;
