
pub use self::document::*;
