#[cfg(test)]
#[path = "../tests/unit/node_test.rs"]
mod node_test;

use crate::{ReadError, ReadResult};
use serde_json::Value;
use std::str::FromStr;
use vrp_core::utils::Float;

/// A key prefix which marks an attribute.
pub const ATTRIBUTE_PREFIX: &str = "@";

/// A key which holds an element text when the element also has attributes or children.
pub const TEXT_KEY: &str = "#text";

/// A root element name which may wrap the problem.
pub const ROOT_ELEMENT: &str = "problem";

/// Provides a read access to a hierarchical document node.
///
/// Paths use a hierarchical configuration grammar:
/// * `a.b` selects child element `b` of child element `a`
/// * `a(1)` selects the second of repeated elements `a`
/// * `a[@x]` selects attribute `x` of element `a`, `[@x]` selects attribute of the node itself
/// * an empty path selects the node's own text
pub trait DocumentNode: Sized {
    /// Returns a text at the path or `None` if it is absent. When path selects several nodes,
    /// the first one is used.
    fn get_string(&self, path: &str) -> Option<String>;

    /// Returns all nodes selected by the path in document order.
    fn nodes_at(&self, path: &str) -> Vec<Self>;

    /// Returns true if the path selects a text or at least one node.
    fn has(&self, path: &str) -> bool {
        self.get_string(path).is_some() || !self.nodes_at(path).is_empty()
    }

    /// Parses a float at the path, only finite decimal values are accepted.
    fn get_f64(&self, path: &str) -> ReadResult<Option<Float>> {
        self.get_string(path)
            .map(|literal| match literal.trim().parse::<Float>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(ReadError::MalformedNumericLiteral { path: path.to_string(), literal }),
            })
            .transpose()
    }

    /// Parses an integer at the path.
    fn get_i32(&self, path: &str) -> ReadResult<Option<i32>> {
        parse_at(self, path)
    }

    /// Parses a non-negative index at the path.
    fn get_usize(&self, path: &str) -> ReadResult<Option<usize>> {
        parse_at(self, path)
    }

    /// Parses a boolean at the path, `true` and `false` are accepted in any case.
    fn get_bool(&self, path: &str) -> ReadResult<Option<bool>> {
        self.get_string(path)
            .map(|literal| match literal.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(ReadError::MalformedNumericLiteral { path: path.to_string(), literal }),
            })
            .transpose()
    }
}

fn parse_at<N: DocumentNode, T: FromStr>(node: &N, path: &str) -> ReadResult<Option<T>> {
    node.get_string(path)
        .map(|literal| match literal.trim().parse::<T>() {
            Ok(value) => Ok(value),
            Err(_) => Err(ReadError::MalformedNumericLiteral { path: path.to_string(), literal }),
        })
        .transpose()
}

#[derive(Clone, Debug, PartialEq)]
enum Step<'a> {
    Child { name: &'a str, index: Option<usize> },
    Attribute(&'a str),
}

fn parse_path(path: &str) -> Vec<Step<'_>> {
    let (elements, attribute) = match path.find("[@") {
        Some(pos) => (&path[..pos], Some(path[pos + 2..].trim_end_matches(']'))),
        None => (path, None),
    };

    elements
        .split('.')
        .filter(|element| !element.is_empty())
        .map(|element| match element.strip_suffix(')').and_then(|element| element.split_once('(')) {
            Some((name, index)) => Step::Child { name, index: index.trim().parse().ok() },
            None => Step::Child { name: element, index: None },
        })
        .chain(attribute.map(Step::Attribute))
        .collect()
}

/// A [DocumentNode] over a json tree. Child elements are object keys, repeated elements are arrays,
/// attributes are keys with `@` prefix and own text of an element with attributes is kept under
/// `#text` key. Numbers and booleans are read as their text.
#[derive(Clone, Copy, Debug)]
pub struct JsonNode<'a>(&'a Value);

impl<'a> JsonNode<'a> {
    /// Creates a node for the given value.
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    /// Creates a problem node from a document which is either `{"problem": {...}}` or the problem
    /// object itself.
    pub fn root(document: &'a Value) -> ReadResult<Self> {
        let problem = match document {
            Value::Object(map) if map.len() == 1 && map.contains_key(ROOT_ELEMENT) => &map[ROOT_ELEMENT],
            other => other,
        };

        if problem.is_object() {
            Ok(Self(problem))
        } else {
            Err(ReadError::SchemaViolation {
                schema: ROOT_ELEMENT.to_string(),
                reason: "document root must be an object".to_string(),
            })
        }
    }

    /// Returns underlying value.
    pub fn value(&self) -> &'a Value {
        self.0
    }

    fn select(&self, path: &str) -> Vec<&'a Value> {
        parse_path(path).into_iter().fold(vec![self.0], |values, step| {
            values
                .into_iter()
                .flat_map(|value| match (&step, value) {
                    (Step::Child { name, index }, Value::Object(map)) => match (map.get(*name), index) {
                        (Some(Value::Array(items)), Some(index)) => items.get(*index).into_iter().collect(),
                        (Some(Value::Array(items)), None) => items.iter().collect(),
                        (Some(item), Some(0) | None) => vec![item],
                        _ => vec![],
                    },
                    (Step::Attribute(name), Value::Object(map)) => {
                        map.get(&format!("{ATTRIBUTE_PREFIX}{name}")).into_iter().collect()
                    }
                    _ => vec![],
                })
                .filter(|value| !value.is_null())
                .collect()
        })
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Object(map) => map.get(TEXT_KEY).and_then(as_text),
        Value::Array(items) => items.first().and_then(as_text),
        Value::Null => None,
    }
}

impl DocumentNode for JsonNode<'_> {
    fn get_string(&self, path: &str) -> Option<String> {
        self.select(path).into_iter().find_map(as_text)
    }

    fn nodes_at(&self, path: &str) -> Vec<Self> {
        self.select(path).into_iter().map(JsonNode).collect()
    }
}
