//! A command line interface library to read, check and convert *Vehicle Routing Problem* documents.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub use vrp_core as core;
pub use vrp_document as document;

pub mod extensions;
