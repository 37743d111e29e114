//! Common models.

mod capacity;
pub use self::capacity::*;

mod domain;
pub use self::domain::*;

mod primitives;
pub use self::primitives::*;
