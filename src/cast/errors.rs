//! Cast failure data.
//!
//! Recoverable failures are plain data, returned and never thrown: one
//! field's failure is an `ErrorNode`, a whole-schema cast aggregates nodes
//! into an `ErrorReport` keyed by field name. Fatal misconfiguration is the
//! separate `ConfigError` and aborts the call instead of landing in a report.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::errors::ConfigError;
use crate::message::Rendered;

/// One concrete reason a caster rejected a raw value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastIssue {
    /// Expected type or condition
    pub expected: String,
    /// Actual type or value found
    pub actual: String,
}

impl CastIssue {
    pub fn new(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Issue for a required field absent from the raw input.
    pub fn missing() -> Self {
        Self::new("value to be present", "missing")
    }

    /// Issue for a raw value of the wrong shape.
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(expected, actual)
    }
}

impl fmt::Display for CastIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, got {}", self.expected, self.actual)
    }
}

/// Everything that can go wrong under one field name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorNode {
    /// The caster rejected the raw value
    Cast(Vec<CastIssue>),
    /// A validator failed after a successful cast
    Validation(Rendered),
    /// A nested schema cast failed; errors keyed by the nested field names
    Nested(ErrorReport),
    /// Per-index failures inside a list-of field
    Elements(BTreeMap<usize, ErrorNode>),
}

impl fmt::Display for ErrorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorNode::Cast(issues) => {
                for (i, issue) in issues.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", issue)?;
                }
                Ok(())
            }
            ErrorNode::Validation(rendered) => write!(f, "{}", rendered),
            ErrorNode::Nested(report) => write!(f, "{}", report),
            ErrorNode::Elements(elements) => {
                for (i, (index, node)) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "[{}]: {}", index, node)?;
                }
                Ok(())
            }
        }
    }
}

/// Aggregated per-field errors from one schema cast.
///
/// Every field's error is collected before the cast returns; entries are
/// ordered by field name so reports are deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ErrorReport {
    entries: BTreeMap<String, ErrorNode>,
}

impl ErrorReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a field's failure.
    pub fn insert(&mut self, field: impl Into<String>, node: ErrorNode) {
        self.entries.insert(field.into(), node);
    }

    /// Returns the failure recorded for a field, if any.
    pub fn get(&self, field: &str) -> Option<&ErrorNode> {
        self.entries.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates entries in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ErrorNode)> {
        self.entries.iter()
    }

    /// Flattens the report into `(path, message)` pairs, with nested fields
    /// as `parent.child` and list elements as `field[index]`.
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        for (field, node) in &self.entries {
            flatten_node(field, node, &mut out);
        }
        out
    }
}

fn flatten_node(path: &str, node: &ErrorNode, out: &mut Vec<(String, String)>) {
    match node {
        ErrorNode::Cast(issues) => {
            for issue in issues {
                out.push((path.to_string(), issue.to_string()));
            }
        }
        ErrorNode::Validation(rendered) => out.push((path.to_string(), rendered.to_string())),
        ErrorNode::Nested(report) => {
            for (field, child) in report.iter() {
                flatten_node(&format!("{}.{}", path, field), child, out);
            }
        }
        ErrorNode::Elements(elements) => {
            for (index, child) in elements {
                flatten_node(&format!("{}[{}]", path, index), child, out);
            }
        }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (path, message)) in self.flatten().iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", path, message)?;
        }
        Ok(())
    }
}

/// Outcome of casting one value: recoverable failure data, or fatal
/// misconfiguration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CastError {
    #[error("{0}")]
    Invalid(ErrorNode),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CastError {
    /// Borrows the failure data, if this is the recoverable side.
    pub fn node(&self) -> Option<&ErrorNode> {
        match self {
            CastError::Invalid(node) => Some(node),
            CastError::Config(_) => None,
        }
    }
}

/// Outcome of casting a whole schema.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaCastError {
    #[error("{0}")]
    Invalid(ErrorReport),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SchemaCastError {
    /// Borrows the aggregated report, if this is the recoverable side.
    pub fn report(&self) -> Option<&ErrorReport> {
        match self {
            SchemaCastError::Invalid(report) => Some(report),
            SchemaCastError::Config(_) => None,
        }
    }
}
