//! This module reimports a common used types.

pub use crate::reader::{DocumentContent, DocumentProblem, DocumentReader};
pub use crate::writer::{serialize_document, write_document};
pub use crate::{
    ErrorKind, ReadContext, ReadError, ReaderConfig, SchemaValidator, StructuralSchemaValidator, read_config,
};

pub use vrp_core::prelude::*;
