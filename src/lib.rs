//! shapecast - declarative casting and validation for untyped data
//!
//! Turns a schema description (named fields with declared types and options)
//! plus an untyped input (API payloads, form submissions, config blobs) into
//! a typed, validated record, or a structured report of everything wrong
//! with the input.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use shapecast::{cast_schema, length, FieldSpec, Schema, TypeTag, Value};
//!
//! let schema = Schema::new(vec![
//!     FieldSpec::required("name", TypeTag::string()).with_validator(length(1..=60)),
//!     FieldSpec::optional("age", TypeTag::int()),
//! ])?;
//!
//! let record = cast_schema(&json!({"name": "Alice", "age": "30"}), &schema)
//!     .expect("input matches the schema");
//! assert_eq!(record.get("age"), Some(&Value::Int(30)));
//! # Ok::<(), shapecast::ConfigError>(())
//! ```

pub mod cast;
pub mod config;
pub mod errors;
pub mod message;
pub mod schema;
pub mod validate;
pub mod value;

pub use cast::{
    cast, cast_schema, CastEngine, CastError, CastIssue, CastOptions, CasterRegistry, ErrorNode,
    ErrorReport, SchemaCastError,
};
pub use config::EngineConfig;
pub use errors::ConfigError;
pub use message::{
    resolve_message, Bindings, MessageOptions, MessageResolver, ParameterizedRenderer, Rendered,
    Renderer, RendererRef, TemplateRenderer,
};
pub use schema::{FieldMetadata, FieldSpec, PrimitiveTag, Schema, TypeTag};
pub use validate::{
    length, matches, presence, validate_format, validate_length, validate_presence, Bounds,
    FieldValidator, FormatOptions, LengthArgs, LengthOptions, SkipRules, Tokenizer,
    ValidationError,
};
pub use value::{Record, Value};
