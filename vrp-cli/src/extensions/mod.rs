//! Module provides various helper functionality.

pub mod check;
pub mod convert;
