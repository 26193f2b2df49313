//! Schema type definitions.
//!
//! A schema is an ordered list of field specifications, built by an ordinary
//! constructor and reused across cast calls. Declared types:
//! - primitive tags: string, int, float, bool, datetime, uuid
//! - nested: another schema's field list
//! - list-of(T): homogeneous sequence of any declared type

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as RawValue;

use crate::cast::CastOptions;
use crate::errors::ConfigError;
use crate::validate::FieldValidator;

/// The closed set of primitive type tags, keyed into the caster registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveTag {
    String,
    Int,
    Float,
    Bool,
    DateTime,
    Uuid,
}

impl PrimitiveTag {
    /// Returns the tag name for error messages
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveTag::String => "string",
            PrimitiveTag::Int => "int",
            PrimitiveTag::Float => "float",
            PrimitiveTag::Bool => "bool",
            PrimitiveTag::DateTime => "datetime",
            PrimitiveTag::Uuid => "uuid",
        }
    }
}

impl fmt::Display for PrimitiveTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A field's declared type.
#[derive(Debug, Clone)]
pub enum TypeTag {
    /// Primitive type, dispatched through the caster registry
    Primitive(PrimitiveTag),
    /// Nested record with its own field list
    Nested(Schema),
    /// Homogeneous sequence with a single element type
    ListOf(Box<TypeTag>),
}

impl TypeTag {
    pub fn string() -> Self {
        TypeTag::Primitive(PrimitiveTag::String)
    }

    pub fn int() -> Self {
        TypeTag::Primitive(PrimitiveTag::Int)
    }

    pub fn float() -> Self {
        TypeTag::Primitive(PrimitiveTag::Float)
    }

    pub fn boolean() -> Self {
        TypeTag::Primitive(PrimitiveTag::Bool)
    }

    pub fn datetime() -> Self {
        TypeTag::Primitive(PrimitiveTag::DateTime)
    }

    pub fn uuid() -> Self {
        TypeTag::Primitive(PrimitiveTag::Uuid)
    }

    pub fn nested(schema: Schema) -> Self {
        TypeTag::Nested(schema)
    }

    pub fn list_of(element: TypeTag) -> Self {
        TypeTag::ListOf(Box::new(element))
    }

    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            TypeTag::Primitive(tag) => tag.name(),
            TypeTag::Nested(_) => "record",
            TypeTag::ListOf(_) => "list",
        }
    }
}

/// Declarative description of one named, typed field.
#[derive(Clone)]
pub struct FieldSpec {
    /// Field name looked up in the raw input
    pub name: String,
    /// Declared type
    pub type_tag: TypeTag,
    /// Whether the raw input must carry the field (or a default exists)
    pub required: bool,
    /// Raw default substituted when the field is absent; cast like any
    /// other raw value, so structural defaults work
    pub default: Option<RawValue>,
    /// Options forwarded to the caster
    pub cast_options: CastOptions,
    /// Ordered validator chain run after a successful cast
    pub validators: Vec<FieldValidator>,
}

impl FieldSpec {
    /// Creates a required field
    pub fn required(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            type_tag,
            required: true,
            default: None,
            cast_options: CastOptions::new(),
            validators: Vec::new(),
        }
    }

    /// Creates an optional field
    pub fn optional(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            required: false,
            ..Self::required(name, type_tag)
        }
    }

    /// Sets the raw default substituted when the field is absent.
    pub fn with_default(mut self, default: RawValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Forwards an option to the caster (e.g. a datetime format string).
    pub fn with_cast_option(mut self, key: impl Into<String>, value: RawValue) -> Self {
        self.cast_options.insert(key.into(), value);
        self
    }

    /// Appends a validator to the field's chain.
    pub fn with_validator(mut self, validator: FieldValidator) -> Self {
        self.validators.push(validator);
        self
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("type_tag", &self.type_tag)
            .field("required", &self.required)
            .field("default", &self.default)
            .field("cast_options", &self.cast_options)
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Field metadata computed once at schema construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMetadata {
    pub type_name: &'static str,
    pub required: bool,
    pub has_default: bool,
    pub validators: usize,
}

/// An ordered field list plus its metadata.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSpec>,
    metadata: BTreeMap<String, FieldMetadata>,
}

impl Schema {
    /// Builds a schema from an ordered field list.
    ///
    /// Construction fails loudly: a duplicate field name is a configuration
    /// error, never silently accepted.
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, ConfigError> {
        let mut metadata = BTreeMap::new();
        for spec in &fields {
            let entry = FieldMetadata {
                type_name: spec.type_tag.type_name(),
                required: spec.required,
                has_default: spec.default.is_some(),
                validators: spec.validators.len(),
            };
            if metadata.insert(spec.name.clone(), entry).is_some() {
                return Err(ConfigError::DuplicateField(spec.name.clone()));
            }
        }
        Ok(Self { fields, metadata })
    }

    /// Fields in declared order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up one field specification by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Field-metadata mapping, computed at construction time.
    pub fn metadata(&self) -> &BTreeMap<String, FieldMetadata> {
        &self.metadata
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> Schema {
        Schema::new(vec![
            FieldSpec::required("name", TypeTag::string()),
            FieldSpec::optional("age", TypeTag::int()),
        ])
        .unwrap()
    }

    #[test]
    fn test_schema_preserves_declared_order() {
        let schema = sample_schema();
        let names: Vec<_> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "age"]);
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = Schema::new(vec![
            FieldSpec::required("name", TypeTag::string()),
            FieldSpec::optional("name", TypeTag::int()),
        ]);
        assert_eq!(
            result.unwrap_err(),
            ConfigError::DuplicateField("name".into())
        );
    }

    #[test]
    fn test_metadata_computed_at_construction() {
        let schema = Schema::new(vec![
            FieldSpec::required("id", TypeTag::uuid()),
            FieldSpec::optional("score", TypeTag::float()).with_default(json!(0.0)),
        ])
        .unwrap();

        let id = &schema.metadata()["id"];
        assert_eq!(id.type_name, "uuid");
        assert!(id.required);
        assert!(!id.has_default);

        let score = &schema.metadata()["score"];
        assert_eq!(score.type_name, "float");
        assert!(!score.required);
        assert!(score.has_default);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(TypeTag::string().type_name(), "string");
        assert_eq!(TypeTag::datetime().type_name(), "datetime");
        assert_eq!(TypeTag::nested(sample_schema()).type_name(), "record");
        assert_eq!(TypeTag::list_of(TypeTag::int()).type_name(), "list");
    }

    #[test]
    fn test_field_lookup() {
        let schema = sample_schema();
        assert!(schema.field("age").is_some());
        assert!(schema.field("missing").is_none());
    }
}
