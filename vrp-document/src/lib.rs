//! Document crate reads an instance of ***Vehicle Routing Problem*** from a hierarchical document:
//! jobs, vehicles and their types, initial routes and previously computed solutions.
//!
//! Sections are processed in a fixed order so that routes and solutions can refer to vehicles and
//! jobs declared anywhere in the document. A load either returns complete content or the first
//! error found:
//!
//! ```
//! use vrp_document::prelude::*;
//!
//! let document = r#"{
//!   "problem": {
//!     "problemType": { "fleetSize": "FINITE" },
//!     "vehicleTypes": { "type": [{ "id": "t1", "capacity": 10 }] },
//!     "vehicles": { "vehicle": [{ "id": "v1", "typeId": "t1", "location": { "id": "depot" } }] },
//!     "services": { "service": [{ "@id": "1", "capacity-demand": 5, "coord": { "@x": 3, "@y": 4 } }] }
//!   }
//! }"#;
//!
//! let problem = document.read_document().expect("cannot read document");
//!
//! assert_eq!(problem.jobs().len(), 1);
//! assert_eq!(problem.fleet_size(), FleetSize::Finite);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

mod config;
pub use self::config::*;

mod error;
pub use self::error::*;

mod node;
pub use self::node::*;

mod registry;
pub use self::registry::*;

mod schema;
pub use self::schema::*;

pub mod prelude;
pub mod reader;
pub mod writer;
