#[cfg(test)]
#[path = "../tests/unit/schema_test.rs"]
mod schema_test;

use serde_json::Value;

/// A name of grammar resource which describes document structure.
pub const SCHEMA_RESOURCE_NAME: &str = "vrp_document_schema";

const SECTIONS: &[(&str, Option<&str>)] = &[
    ("problemType", None),
    ("vehicleTypes", Some("type")),
    ("vehicles", Some("vehicle")),
    ("shipments", Some("shipment")),
    ("services", Some("service")),
    ("initialRoutes", Some("route")),
    ("solutions", Some("solution")),
];

/// Validates a raw document before it is mapped into the model.
pub trait SchemaValidator {
    /// Returns a name of grammar resource used by the validator.
    fn resource_name(&self) -> &str {
        SCHEMA_RESOURCE_NAME
    }

    /// Validates the problem object. Returns a violation description on failure.
    fn validate(&self, problem: &Value) -> Result<(), String>;
}

/// Checks document structure: only known sections are present, sections are objects and their
/// repeated entries are objects too.
#[derive(Clone, Debug, Default)]
pub struct StructuralSchemaValidator;

impl SchemaValidator for StructuralSchemaValidator {
    fn validate(&self, problem: &Value) -> Result<(), String> {
        let problem = problem.as_object().ok_or_else(|| "problem must be an object".to_string())?;

        problem.iter().try_for_each(|(name, section)| {
            let (_, entry) = SECTIONS
                .iter()
                .find(|(section, _)| *section == name.as_str())
                .ok_or_else(|| format!("unknown section '{name}'"))?;

            let section = section.as_object().ok_or_else(|| format!("section '{name}' must be an object"))?;

            let Some(entry) = entry else { return Ok(()) };

            let entries = match section.get(*entry) {
                Some(Value::Array(items)) => items.iter().collect(),
                Some(item) => vec![item],
                None => vec![],
            };

            if entries.iter().all(|entry| entry.is_object()) {
                Ok(())
            } else {
                Err(format!("entries of '{name}.{entry}' must be objects"))
            }
        })
    }
}
