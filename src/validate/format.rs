//! Format validation against a regular expression.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::message::{Bindings, MessageOptions, MessageResolver, RendererRef};
use crate::value::Value;

use super::errors::ValidationError;
use super::skip::SkipRules;
use super::FieldValidator;

const DEFAULT_MESSAGE: &str = "does not match the expected format";

/// Options for a format check.
#[derive(Clone)]
pub struct FormatOptions {
    /// Pattern the string value must match
    pub pattern: Regex,
    /// Nil/blank skip rules
    pub skip: SkipRules,
    /// Message template override
    pub message: Option<String>,
    /// Call-site renderer override
    pub renderer: Option<RendererRef>,
}

impl FormatOptions {
    pub fn new(pattern: Regex) -> Self {
        Self {
            pattern,
            skip: SkipRules::none(),
            message: None,
            renderer: None,
        }
    }

    /// Skips the check for nil values.
    pub fn allow_nil(mut self) -> Self {
        self.skip.allow_nil = true;
        self
    }

    /// Skips the check for blank values.
    pub fn allow_blank(mut self) -> Self {
        self.skip.allow_blank = true;
        self
    }

    /// Overrides the failure message template.
    pub fn with_message(mut self, template: impl Into<String>) -> Self {
        self.message = Some(template.into());
        self
    }

    fn message_options(&self) -> MessageOptions {
        MessageOptions {
            message: self.message.clone(),
            renderer: self.renderer.clone(),
        }
    }
}

impl fmt::Debug for FormatOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatOptions")
            .field("pattern", &self.pattern.as_str())
            .field("skip", &self.skip)
            .field("message", &self.message)
            .field("renderer", &self.renderer.as_ref().map(|_| "<renderer>"))
            .finish()
    }
}

/// Checks a string value against the pattern. Non-string values fail with
/// the same default message.
pub fn validate_format_with(
    value: &Value,
    options: &FormatOptions,
    resolver: &MessageResolver,
) -> Result<Value, ValidationError> {
    if options.skip.should_skip(value) {
        return Ok(value.clone());
    }

    let matched = match value.as_str() {
        Some(s) => options.pattern.is_match(s),
        None => false,
    };
    if matched {
        return Ok(value.clone());
    }

    let mut bindings = Bindings::new();
    bindings.insert("value".to_string(), value.clone());
    bindings.insert(
        "pattern".to_string(),
        Value::Str(options.pattern.as_str().to_string()),
    );
    let rendered = resolver.resolve(&options.message_options(), DEFAULT_MESSAGE, &bindings);
    Err(ValidationError::Unmet(rendered))
}

/// Checks a value's format with default message configuration.
pub fn validate_format(
    value: impl Into<Value>,
    pattern: Regex,
) -> Result<Value, ValidationError> {
    let value = value.into();
    validate_format_with(&value, &FormatOptions::new(pattern), &MessageResolver::default())
}

/// Builds a format field validator for the pattern.
pub fn matches(pattern: Regex) -> FieldValidator {
    matches_with(FormatOptions::new(pattern))
}

/// Builds a format field validator with full options.
pub fn matches_with(options: FormatOptions) -> FieldValidator {
    Arc::new(move |value, resolver| validate_format_with(value, &options, resolver))
}
