//! Validation subsystem.
//!
//! Concrete validators compose four shared primitives: the skip-rule gate,
//! the tokenizer, the bounds resolver, and the message resolver. Each
//! validator is also available as a `FieldValidator` closure so a schema can
//! attach an ordered chain to a field.

mod bounds;
mod errors;
mod format;
mod length;
mod presence;
mod skip;
mod tokenizer;

use std::sync::Arc;

use crate::message::MessageResolver;
use crate::value::Value;

pub use bounds::Bounds;
pub use errors::ValidationError;
pub use format::{matches, matches_with, validate_format, validate_format_with, FormatOptions};
pub use length::{length, validate_length, validate_length_with, LengthArgs, LengthOptions};
pub use presence::{presence, presence_with, validate_presence, validate_presence_with};
pub use skip::SkipRules;
pub use tokenizer::{default_tokenizer, tokenize, whitespace_tokenizer, Tokenizer};

/// A validator attached to a schema field.
///
/// Receives the already-cast value and the engine's message resolver, so the
/// configured renderer tier applies to every chain.
pub type FieldValidator =
    Arc<dyn Fn(&Value, &MessageResolver) -> Result<Value, ValidationError> + Send + Sync>;
