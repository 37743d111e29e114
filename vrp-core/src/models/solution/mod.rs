//! Solution domain models.

mod route;
pub use self::route::{ActivityKind, Route, RouteBuilder, Schedule, TourActivity};
