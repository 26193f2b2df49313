//! Presence validation.

use std::sync::Arc;

use crate::message::{Bindings, MessageOptions, MessageResolver};
use crate::value::Value;

use super::errors::ValidationError;
use super::FieldValidator;

const DEFAULT_MESSAGE: &str = "must be present";

/// Fails for nil and blank values.
pub fn validate_presence_with(
    value: &Value,
    options: &MessageOptions,
    resolver: &MessageResolver,
) -> Result<Value, ValidationError> {
    if !value.is_blank() {
        return Ok(value.clone());
    }

    let mut bindings = Bindings::new();
    bindings.insert("value".to_string(), value.clone());
    let rendered = resolver.resolve(options, DEFAULT_MESSAGE, &bindings);
    Err(ValidationError::Unmet(rendered))
}

/// Checks presence with default message configuration.
pub fn validate_presence(value: impl Into<Value>) -> Result<Value, ValidationError> {
    let value = value.into();
    validate_presence_with(&value, &MessageOptions::new(), &MessageResolver::default())
}

/// Builds a presence field validator.
pub fn presence() -> FieldValidator {
    presence_with(MessageOptions::new())
}

/// Builds a presence field validator with message overrides.
pub fn presence_with(options: MessageOptions) -> FieldValidator {
    Arc::new(move |value, resolver| validate_presence_with(value, &options, resolver))
}
