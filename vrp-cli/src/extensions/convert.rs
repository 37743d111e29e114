//! A helper module which normalizes a document: reads it and writes it back.

#[cfg(test)]
#[path = "../../tests/unit/extensions/convert_test.rs"]
mod convert_test;

use std::io::{BufReader, BufWriter, Read, Write};
use vrp_document::prelude::*;

/// Reads a document and writes it back in the canonical shape: capacities as dimensions,
/// vehicle locations as `startLocation` and `endLocation`, jobs of initial routes listed with other jobs.
pub fn convert_document<R: Read, W: Write>(
    reader: BufReader<R>,
    writer: BufWriter<W>,
    with_solutions: bool,
) -> Result<(), String> {
    let (problem, solutions) = if with_solutions {
        reader.read_document_with_solutions()
    } else {
        reader.read_document().map(|problem| (problem, vec![]))
    }
    .map_err(|err| format!("cannot read document: '{err}'"))?;

    serialize_document(writer, &problem, &solutions).map_err(|err| format!("cannot write document: '{err}'"))
}
