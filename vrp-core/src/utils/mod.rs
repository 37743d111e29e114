//! A collection of various utility helpers.

mod comparison;
pub use self::comparison::*;

mod time;
pub use self::time::*;

/// Alias to a scalar floating type.
pub type Float = f64;
