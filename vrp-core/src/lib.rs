//! Core crate contains an entity model to describe an instance of ***Vehicle Routing Problem***:
//! jobs with pickup and delivery semantics, vehicles and their types, multi-dimensional capacity,
//! time windows, routes and solutions.
//!
//! All entities are created through builders which check construction invariants and produce
//! immutable values:
//!
//! ```
//! use vrp_core::prelude::*;
//!
//! let service = ServiceBuilder::new("job1")
//!     .coord(Coordinate::new(3., 4.))
//!     .size(5)
//!     .build()
//!     .expect("cannot build service");
//!
//! assert_eq!(service.place.location.id, "[x=3.0][y=4.0]");
//! assert_eq!(service.size.get(0), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod models;
pub mod prelude;
pub mod utils;
