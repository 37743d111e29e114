//! Problem domain models.

mod builders;
pub use self::builders::*;

mod jobs;
pub use self::jobs::*;

mod fleet;
pub use self::fleet::*;
