//! Reader configuration.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use crate::ReadResult;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A document reader configuration.
#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReaderConfig {
    /// Specifies whether the raw document is validated before mapping. Default is true.
    #[serde(default = "default_schema_validation")]
    pub schema_validation: bool,
    /// Specifies whether previously computed solutions are read. Default is false.
    #[serde(default)]
    pub read_solutions: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { schema_validation: default_schema_validation(), read_solutions: false }
    }
}

impl ReaderConfig {
    /// Returns a copy of config with solution reading enabled or disabled.
    pub fn with_solutions(mut self, read_solutions: bool) -> Self {
        self.read_solutions = read_solutions;
        self
    }
}

fn default_schema_validation() -> bool {
    true
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> ReadResult<ReaderConfig> {
    Ok(serde_json::from_reader(reader)?)
}
