//! Specifies logic to read problem and solutions from a hierarchical document.

#[cfg(test)]
#[path = "../../tests/unit/reader/reader_test.rs"]
mod reader_test;

use crate::*;
use serde_json::Value;
use std::io::{BufReader, Read};
use tracing::{debug, info, warn};
use vrp_core::models::common::Coordinate;
use vrp_core::models::problem::{DefaultServiceBuilderFactory, ServiceBuilderFactory};
use vrp_core::models::{FleetSize, Problem, ProblemBuilder, Solution};
use vrp_core::utils::Float;

mod fleet_reader;
use self::fleet_reader::read_vehicles_and_their_types;

mod job_reader;
use self::job_reader::{read_services, read_shipments};

mod route_reader;
use self::route_reader::{read_initial_routes, read_solutions};

/// A content of a document load.
pub struct DocumentContent {
    /// A problem builder with vehicles, initial routes and all jobs which are not frozen.
    pub problem: ProblemBuilder,
    /// Solutions, read only when enabled in config.
    pub solutions: Vec<Solution>,
    /// Registries of all declared entities and frozen job ids.
    pub context: ReadContext,
}

/// Reads problem documents. Sections are processed in the order: problem type, vehicle types and
/// vehicles, shipments, services, initial routes, solutions. Jobs which are not frozen by initial
/// routes are added to the problem at the end.
pub struct DocumentReader {
    config: ReaderConfig,
    service_factory: Box<dyn ServiceBuilderFactory>,
    schema_validator: Option<Box<dyn SchemaValidator>>,
}

impl DocumentReader {
    /// Creates a new reader with default service factory and without schema validator.
    pub fn new(config: ReaderConfig) -> Self {
        Self { config, service_factory: Box::new(DefaultServiceBuilderFactory), schema_validator: None }
    }

    /// Sets a factory which creates service builders from service type tags.
    pub fn with_service_factory(mut self, factory: impl ServiceBuilderFactory + 'static) -> Self {
        self.service_factory = Box::new(factory);
        self
    }

    /// Sets a schema validator.
    pub fn with_schema_validator(mut self, validator: impl SchemaValidator + 'static) -> Self {
        self.schema_validator = Some(Box::new(validator));
        self
    }

    /// Reads a json document.
    pub fn read(&self, document: &Value) -> ReadResult<DocumentContent> {
        let root = JsonNode::root(document)?;

        if self.config.schema_validation {
            self.validate(root.value())?;
        }

        self.read_node(&root)
    }

    /// Reads a document represented by any node implementation.
    pub fn read_node<N: DocumentNode>(&self, root: &N) -> ReadResult<DocumentContent> {
        info!("start reading problem document");

        let mut context = ReadContext::default();
        let mut problem = ProblemBuilder::default();

        read_problem_type(root, &mut problem);
        read_vehicles_and_their_types(root, &mut context, &mut problem)?;
        read_shipments(root, &mut context)?;
        read_services(root, &mut context, self.service_factory.as_ref())?;
        read_initial_routes(root, &mut context, &mut problem)?;

        let solutions = if self.config.read_solutions { read_solutions(root, &context)? } else { vec![] };

        context.unfrozen_jobs().for_each(|job| {
            problem.add_job(job);
        });

        info!(
            jobs = problem.jobs().len(),
            vehicles = problem.vehicles().len(),
            solutions = solutions.len(),
            "problem document is read"
        );

        Ok(DocumentContent { problem, solutions, context })
    }

    fn validate(&self, problem: &Value) -> ReadResult<()> {
        match &self.schema_validator {
            Some(validator) => {
                debug!(schema = validator.resource_name(), "validating document");
                validator.validate(problem).map_err(|reason| ReadError::SchemaViolation {
                    schema: validator.resource_name().to_string(),
                    reason,
                })
            }
            None => {
                warn!(schema = SCHEMA_RESOURCE_NAME, "cannot find schema validator, read document without validation");
                Ok(())
            }
        }
    }
}

impl Default for DocumentReader {
    fn default() -> Self {
        Self::new(ReaderConfig::default()).with_schema_validator(StructuralSchemaValidator)
    }
}

/// Reads problem from various sources.
pub trait DocumentProblem {
    /// Reads a problem, solutions are skipped.
    fn read_document(self) -> ReadResult<Problem>;

    /// Reads a problem together with previously computed solutions.
    fn read_document_with_solutions(self) -> ReadResult<(Problem, Vec<Solution>)>;
}

impl<R: Read> DocumentProblem for BufReader<R> {
    fn read_document(self) -> ReadResult<Problem> {
        let document = deserialize_document(self)?;
        read_with_config(&document, ReaderConfig::default()).map(|(problem, _)| problem)
    }

    fn read_document_with_solutions(self) -> ReadResult<(Problem, Vec<Solution>)> {
        let document = deserialize_document(self)?;
        read_with_config(&document, ReaderConfig::default().with_solutions(true))
    }
}

impl DocumentProblem for &str {
    fn read_document(self) -> ReadResult<Problem> {
        BufReader::new(self.as_bytes()).read_document()
    }

    fn read_document_with_solutions(self) -> ReadResult<(Problem, Vec<Solution>)> {
        BufReader::new(self.as_bytes()).read_document_with_solutions()
    }
}

impl DocumentProblem for String {
    fn read_document(self) -> ReadResult<Problem> {
        self.as_str().read_document()
    }

    fn read_document_with_solutions(self) -> ReadResult<(Problem, Vec<Solution>)> {
        self.as_str().read_document_with_solutions()
    }
}

/// Deserializes a raw json document.
pub fn deserialize_document<R: Read>(reader: BufReader<R>) -> ReadResult<Value> {
    Ok(serde_json::from_reader(reader)?)
}

fn read_with_config(document: &Value, config: ReaderConfig) -> ReadResult<(Problem, Vec<Solution>)> {
    let content = DocumentReader::new(config).with_schema_validator(StructuralSchemaValidator).read(document)?;

    Ok((content.problem.build(), content.solutions))
}

fn read_problem_type<N: DocumentNode>(root: &N, problem: &mut ProblemBuilder) {
    let fleet_size = FleetSize::parse(root.get_string("problemType.fleetSize").as_deref());
    debug!(%fleet_size, "read problem type");

    problem.set_fleet_size(fleet_size);
}

fn require_string<N: DocumentNode>(node: &N, section: &str, path: &str) -> ReadResult<String> {
    node.get_string(path).filter(|value| !value.is_empty()).ok_or_else(|| ReadError::missing(&join(section, path)))
}

fn require_f64<N: DocumentNode>(node: &N, section: &str, path: &str) -> ReadResult<Float> {
    node.get_f64(path)?.ok_or_else(|| ReadError::missing(&join(section, path)))
}

fn join(section: &str, path: &str) -> String {
    if path.starts_with('[') { format!("{section}{path}") } else { format!("{section}.{path}") }
}

/// Reads a coordinate under the prefix. Returns `None` unless both `x` and `y` attributes are present.
fn read_coord<N: DocumentNode>(node: &N, prefix: &str) -> ReadResult<Option<Coordinate>> {
    let x_path = format!("{prefix}coord[@x]");
    let y_path = format!("{prefix}coord[@y]");

    match (node.get_f64(&x_path)?, node.get_f64(&y_path)?) {
        (Some(x), Some(y)) => Ok(Some(Coordinate::new(x, y))),
        _ => Ok(None),
    }
}

/// A capacity given either as a scalar value or as a list of indexed dimensions.
enum CapacitySpec {
    Scalar(i32),
    Dimensions(Vec<(usize, i32)>),
}

fn read_capacity<N: DocumentNode>(
    node: &N,
    section: &str,
    scalar_path: &str,
    entity: &'static str,
    id: &str,
) -> ReadResult<CapacitySpec> {
    let scalar = node.get_i32(scalar_path)?;
    let has_dimensions = node.has("capacity-dimensions.dimension(0)");

    match (scalar, has_dimensions) {
        (Some(_), true) => Err(ReadError::AmbiguousSpecification {
            entity,
            id: id.to_string(),
            reason: format!("either use '{scalar_path}' or 'capacity-dimensions', not both"),
        }),
        (None, false) => Err(ReadError::MissingSpecification {
            entity,
            id: id.to_string(),
            reason: format!("capacity is not set, use '{scalar_path}' or 'capacity-dimensions'"),
        }),
        (Some(value), false) => Ok(CapacitySpec::Scalar(value)),
        (None, true) => {
            let section = format!("{section}.capacity-dimensions.dimension");
            node.nodes_at("capacity-dimensions.dimension")
                .iter()
                .map(|dimension| {
                    let index = dimension
                        .get_usize("[@index]")?
                        .ok_or_else(|| ReadError::missing(&join(&section, "[@index]")))?;
                    let value = dimension.get_i32("")?.ok_or_else(|| ReadError::missing(&section))?;
                    Ok((index, value))
                })
                .collect::<ReadResult<Vec<_>>>()
                .map(CapacitySpec::Dimensions)
        }
    }
}
