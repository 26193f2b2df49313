//! Casting engine: per-value dispatch and whole-schema orchestration.
//!
//! Semantics:
//! - dispatch by type-tag lookup; an unregistered tag is fatal
//! - nested schemas recurse through the same engine
//! - list-of coerces the raw value to a sequence and casts per element
//! - a cast failure for one field never aborts sibling fields
//! - a field's validator chain stops at its first unmet validator
//! - fatal configuration errors abort the whole call

use std::collections::BTreeMap;

use serde_json::Value as RawValue;
use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::errors::ConfigError;
use crate::message::MessageResolver;
use crate::schema::{Schema, TypeTag};
use crate::validate::ValidationError;
use crate::value::{Record, Value};

use super::casters::{json_type_name, CastOptions, CasterRegistry};
use super::errors::{CastError, CastIssue, ErrorNode, ErrorReport, SchemaCastError};

/// Field name under which a non-mapping raw input is reported.
const ROOT_PATH: &str = "$root";

/// One engine: a caster registry plus message configuration.
///
/// Engines hold no per-call state; one instance may serve concurrent casts.
#[derive(Debug, Clone, Default)]
pub struct CastEngine {
    registry: CasterRegistry,
    resolver: MessageResolver,
}

impl CastEngine {
    /// Engine with the built-in casters and default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with the built-in casters and the given configuration.
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            registry: CasterRegistry::with_defaults(),
            resolver: MessageResolver::new(config),
        }
    }

    /// Replaces the caster registry.
    pub fn with_registry(mut self, registry: CasterRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Casts one raw value to the declared type.
    pub fn cast(
        &self,
        raw: &RawValue,
        type_tag: &TypeTag,
        options: &CastOptions,
    ) -> Result<Value, CastError> {
        trace!(type_tag = type_tag.type_name(), "casting value");
        match type_tag {
            TypeTag::Primitive(tag) => {
                let caster = self
                    .registry
                    .get(*tag)
                    .ok_or_else(|| ConfigError::UnknownType(tag.name().to_string()))?;
                caster(raw, options).map_err(|issues| CastError::Invalid(ErrorNode::Cast(issues)))
            }
            TypeTag::Nested(schema) => match self.cast_schema(raw, schema) {
                Ok(record) => Ok(record.into_value()),
                Err(SchemaCastError::Invalid(report)) => {
                    Err(CastError::Invalid(ErrorNode::Nested(report)))
                }
                Err(SchemaCastError::Config(e)) => Err(CastError::Config(e)),
            },
            TypeTag::ListOf(element) => self.cast_list(raw, element, options),
        }
    }

    /// Casts a raw mapping against a schema, aggregating every field's
    /// errors before returning.
    pub fn cast_schema(
        &self,
        raw: &RawValue,
        schema: &Schema,
    ) -> Result<Record, SchemaCastError> {
        let input = match raw.as_object() {
            Some(obj) => obj,
            None => {
                let mut report = ErrorReport::new();
                report.insert(
                    ROOT_PATH,
                    ErrorNode::Cast(vec![CastIssue::type_mismatch(
                        "object",
                        json_type_name(raw),
                    )]),
                );
                return Err(SchemaCastError::Invalid(report));
            }
        };

        let mut report = ErrorReport::new();
        let mut values = BTreeMap::new();

        for spec in schema.fields() {
            let raw_field = match input.get(&spec.name) {
                Some(v) => v.clone(),
                None => match &spec.default {
                    Some(default) => default.clone(),
                    None if spec.required => {
                        debug!(field = %spec.name, "required field missing");
                        report.insert(&spec.name, ErrorNode::Cast(vec![CastIssue::missing()]));
                        continue;
                    }
                    None => RawValue::Null,
                },
            };

            match self.cast(&raw_field, &spec.type_tag, &spec.cast_options) {
                Err(CastError::Config(e)) => return Err(e.into()),
                Err(CastError::Invalid(node)) => {
                    debug!(field = %spec.name, "cast failed");
                    // Cast failure short-circuits this field's validators
                    report.insert(&spec.name, node);
                }
                Ok(value) => match self.run_validators(spec.validators.as_slice(), value)? {
                    Ok(value) => {
                        values.insert(spec.name.clone(), value);
                    }
                    Err(rendered) => {
                        debug!(field = %spec.name, "validation failed");
                        report.insert(&spec.name, rendered);
                    }
                },
            }
        }

        if report.is_empty() {
            Ok(Record::from(values))
        } else {
            Err(SchemaCastError::Invalid(report))
        }
    }

    fn cast_list(
        &self,
        raw: &RawValue,
        element: &TypeTag,
        options: &CastOptions,
    ) -> Result<Value, CastError> {
        // Coerce to a sequence: absent is empty, a scalar is one element
        let items: Vec<RawValue> = match raw {
            RawValue::Null => Vec::new(),
            RawValue::Array(items) => items.clone(),
            scalar => vec![scalar.clone()],
        };

        let mut cast_items = Vec::with_capacity(items.len());
        let mut failures = BTreeMap::new();

        for (index, item) in items.iter().enumerate() {
            match self.cast(item, element, options) {
                Ok(value) => cast_items.push(value),
                Err(CastError::Invalid(node)) => {
                    failures.insert(index, node);
                }
                Err(config) => return Err(config),
            }
        }

        if failures.is_empty() {
            Ok(Value::List(cast_items))
        } else {
            Err(CastError::Invalid(ErrorNode::Elements(failures)))
        }
    }

    /// Runs a field's validator chain, stopping at the first unmet one.
    ///
    /// The outer error is fatal misconfiguration; the inner result carries
    /// either the (possibly replaced) value or the failure node.
    fn run_validators(
        &self,
        validators: &[crate::validate::FieldValidator],
        mut value: Value,
    ) -> Result<Result<Value, ErrorNode>, ConfigError> {
        for validator in validators {
            match validator(&value, &self.resolver) {
                Ok(next) => value = next,
                Err(ValidationError::Unmet(rendered)) => {
                    return Ok(Err(ErrorNode::Validation(rendered)))
                }
                Err(ValidationError::Config(e)) => return Err(e),
            }
        }
        Ok(Ok(value))
    }
}

/// Casts one raw value with a default engine.
pub fn cast(raw: &RawValue, type_tag: &TypeTag) -> Result<Value, CastError> {
    CastEngine::new().cast(raw, type_tag, &CastOptions::new())
}

/// Casts a raw mapping against a schema with a default engine.
pub fn cast_schema(raw: &RawValue, schema: &Schema) -> Result<Record, SchemaCastError> {
    CastEngine::new().cast_schema(raw, schema)
}
