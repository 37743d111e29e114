//! A helper module which reads a document and summarizes its content.

#[cfg(test)]
#[path = "../../tests/unit/extensions/check_test.rs"]
mod check_test;

use serde::Serialize;
use std::io::{BufReader, BufWriter, Read, Write};
use tracing::info;
use vrp_document::prelude::*;
use vrp_document::reader::deserialize_document;

/// Summarizes a content of successfully read document.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    /// Fleet size policy.
    pub fleet_size: String,
    /// Amount of vehicle types including penalty variants.
    pub vehicle_types: usize,
    /// Amount of vehicles.
    pub vehicles: usize,
    /// Amount of services declared in the document.
    pub services: usize,
    /// Amount of shipments declared in the document.
    pub shipments: usize,
    /// Amount of jobs available for scheduling.
    pub free_jobs: usize,
    /// Ids of jobs committed to initial routes.
    pub frozen_jobs: Vec<String>,
    /// Amount of initial routes.
    pub initial_routes: usize,
    /// Costs of solutions, `None` when cost is not specified.
    pub solutions: Vec<Option<f64>>,
}

/// Reads a document using the config and returns its summary.
pub fn check_document<R: Read>(reader: BufReader<R>, config: ReaderConfig) -> Result<DocumentSummary, ReadError> {
    let document = deserialize_document(reader)?;
    let content = DocumentReader::new(config).with_schema_validator(StructuralSchemaValidator).read(&document)?;

    let mut frozen_jobs = content.context.frozen_ids().map(|id| id.to_string()).collect::<Vec<_>>();
    frozen_jobs.sort();

    let problem = content.problem.build();

    let summary = DocumentSummary {
        fleet_size: problem.fleet_size().to_string(),
        vehicle_types: content.context.vehicle_types.len(),
        vehicles: problem.vehicles().len(),
        services: content.context.services.len(),
        shipments: content.context.shipments.len(),
        free_jobs: problem.jobs().len(),
        frozen_jobs,
        initial_routes: problem.initial_routes().len(),
        solutions: content
            .solutions
            .iter()
            .map(|solution| if solution.has_cost() { Some(solution.cost) } else { None })
            .collect(),
    };

    info!(free_jobs = summary.free_jobs, vehicles = summary.vehicles, "document is valid");

    Ok(summary)
}

/// Serializes summary into json format.
pub fn serialize_summary<W: Write>(writer: BufWriter<W>, summary: &DocumentSummary) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, summary)
}
