//! Schema subsystem.
//!
//! Declarative field lists consumed by the casting engine. Schemas are
//! ordinary values built once through `Schema::new` and shared across calls;
//! construction validates the field list and precomputes field metadata.

mod types;

pub use types::{FieldMetadata, FieldSpec, PrimitiveTag, Schema, TypeTag};
