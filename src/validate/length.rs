//! Length/bounds validation.
//!
//! The template every concrete validator follows: gate on skip rules,
//! tokenize, resolve effective bounds, check, and render a failure message
//! through the resolver.

use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::errors::ConfigError;
use crate::message::{Bindings, MessageOptions, MessageResolver, RendererRef};
use crate::value::Value;

use super::bounds::Bounds;
use super::errors::ValidationError;
use super::skip::SkipRules;
use super::tokenizer::{tokenize, Tokenizer};
use super::FieldValidator;

/// Keyword-style options for a length check.
#[derive(Clone, Default)]
pub struct LengthOptions {
    /// Exact size; wins over every other constraint
    pub is: Option<usize>,
    /// Inclusive lower bound
    pub min: Option<usize>,
    /// Inclusive upper bound
    pub max: Option<usize>,
    /// Inclusive range, consulted only when is/min/max are all absent
    pub within: Option<RangeInclusive<usize>>,
    /// Nil/blank skip rules
    pub skip: SkipRules,
    /// Tokenizer override; grapheme/identity decomposition by default
    pub tokenizer: Option<Tokenizer>,
    /// Message template override
    pub message: Option<String>,
    /// Call-site renderer override
    pub renderer: Option<RendererRef>,
}

impl LengthOptions {
    /// Requires exactly `n` units.
    pub fn exactly(n: usize) -> Self {
        Self {
            is: Some(n),
            ..Self::default()
        }
    }

    /// Requires at least `n` units.
    pub fn at_least(n: usize) -> Self {
        Self {
            min: Some(n),
            ..Self::default()
        }
    }

    /// Requires at most `n` units.
    pub fn at_most(n: usize) -> Self {
        Self {
            max: Some(n),
            ..Self::default()
        }
    }

    /// Requires a size inside the inclusive range.
    pub fn between(range: RangeInclusive<usize>) -> Self {
        Self {
            within: Some(range),
            ..Self::default()
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

    /// Overrides how the value decomposes into countable units.
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Overrides the failure message template.
    pub fn with_message(mut self, template: impl Into<String>) -> Self {
        self.message = Some(template.into());
        self
    }

    /// Overrides the renderer for this call site.
    pub fn with_renderer(mut self, renderer: RendererRef) -> Self {
        self.renderer = Some(renderer);
        self
    }

    fn message_options(&self) -> MessageOptions {
        MessageOptions {
            message: self.message.clone(),
            renderer: self.renderer.clone(),
        }
    }
}

impl fmt::Debug for LengthOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LengthOptions")
            .field("is", &self.is)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("within", &self.within)
            .field("skip", &self.skip)
            .field("tokenizer", &self.tokenizer.as_ref().map(|_| "<tokenizer>"))
            .field("message", &self.message)
            .field("renderer", &self.renderer.as_ref().map(|_| "<renderer>"))
            .finish()
    }
}

/// Accepted argument shapes for a length check.
///
/// A bare integer is shorthand for an exact size, an inclusive range for
/// bounded size; both normalize into the keyword form before processing.
#[derive(Debug, Clone)]
pub enum LengthArgs {
    Exact(usize),
    Within(RangeInclusive<usize>),
    Options(LengthOptions),
}

impl LengthArgs {
    /// Normalizes any accepted shape into keyword options.
    pub fn into_options(self) -> LengthOptions {
        match self {
            LengthArgs::Exact(n) => LengthOptions::exactly(n),
            LengthArgs::Within(range) => LengthOptions::between(range),
            LengthArgs::Options(options) => options,
        }
    }
}

impl From<usize> for LengthArgs {
    fn from(n: usize) -> Self {
        LengthArgs::Exact(n)
    }
}

impl From<i32> for LengthArgs {
    fn from(n: i32) -> Self {
        LengthArgs::Exact(usize::try_from(n).unwrap_or(0))
    }
}

impl From<RangeInclusive<usize>> for LengthArgs {
    fn from(range: RangeInclusive<usize>) -> Self {
        LengthArgs::Within(range)
    }
}

impl From<RangeInclusive<i32>> for LengthArgs {
    fn from(range: RangeInclusive<i32>) -> Self {
        let start = usize::try_from(*range.start()).unwrap_or(0);
        let end = usize::try_from(*range.end()).unwrap_or(0);
        LengthArgs::Within(start..=end)
    }
}

impl From<LengthOptions> for LengthArgs {
    fn from(options: LengthOptions) -> Self {
        LengthArgs::Options(options)
    }
}

/// Checks a value's length against the declared constraints, resolving any
/// failure message through the given resolver.
pub fn validate_length_with(
    value: &Value,
    args: impl Into<LengthArgs>,
    resolver: &MessageResolver,
) -> Result<Value, ValidationError> {
    let options = args.into().into_options();

    if options.skip.should_skip(value) {
        return Ok(value.clone());
    }

    let tokens = match &options.tokenizer {
        Some(tokenizer) => tokenizer(value),
        None => tokenize(value),
    };
    let size = tokens.len();
    let bounds = Bounds::resolve(&options);

    let (passed, default_message) = match (bounds.lower, bounds.upper) {
        (None, None) => return Err(ConfigError::MissingLengthBounds.into()),
        (Some(lower), Some(upper)) if lower == upper => (
            size == lower,
            format!("must have a length of {}", lower),
        ),
        (None, Some(upper)) => (
            size <= upper,
            format!("must have a length of no more than {}", upper),
        ),
        (Some(lower), None) => (
            size >= lower,
            format!("must have a length of at least {}", lower),
        ),
        (Some(lower), Some(upper)) => (
            lower <= size && size <= upper,
            format!("must have a length between {} and {}", lower, upper),
        ),
    };

    if passed {
        return Ok(value.clone());
    }

    let bindings = length_bindings(tokens, value, size, bounds);
    let rendered = resolver.resolve(&options.message_options(), &default_message, &bindings);
    Err(ValidationError::Unmet(rendered))
}

/// Checks a value's length with default message configuration.
pub fn validate_length(
    value: impl Into<Value>,
    args: impl Into<LengthArgs>,
) -> Result<Value, ValidationError> {
    let value = value.into();
    validate_length_with(&value, args, &MessageResolver::default())
}

/// Builds a field validator closing over the length constraints.
pub fn length(args: impl Into<LengthArgs>) -> FieldValidator {
    let options = args.into().into_options();
    Arc::new(move |value, resolver| {
        validate_length_with(value, options.clone(), resolver)
    })
}

fn length_bindings(tokens: Vec<Value>, value: &Value, size: usize, bounds: Bounds) -> Bindings {
    let bound_value = |side: Option<usize>| match side {
        Some(n) => Value::Int(n as i64),
        None => Value::Nil,
    };

    let mut bindings = Bindings::new();
    bindings.insert("tokens".to_string(), Value::List(tokens));
    bindings.insert("value".to_string(), value.clone());
    bindings.insert("size".to_string(), Value::Int(size as i64));
    bindings.insert("lower".to_string(), bound_value(bounds.lower));
    bindings.insert("upper".to_string(), bound_value(bounds.upper));
    // Aliases used by message templates written in min/max vocabulary
    bindings.insert("min".to_string(), bound_value(bounds.lower));
    bindings.insert("max".to_string(), bound_value(bounds.upper));
    bindings
}
