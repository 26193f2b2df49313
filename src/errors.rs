//! Fatal configuration errors.
//!
//! These indicate the pipeline was misconfigured by its caller (a programming
//! error), never bad input data. They abort the current cast call entirely
//! and are kept disjoint from the recoverable error reports.

use thiserror::Error;

/// Pipeline misconfiguration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Length validation requested without any exact/min/max/range option
    #[error("missing length validation range")]
    MissingLengthBounds,

    /// No caster registered for the type tag
    #[error("no caster registered for type '{0}'")]
    UnknownType(String),

    /// Schema declares the same field name twice
    #[error("duplicate field '{0}' in schema")]
    DuplicateField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::MissingLengthBounds.to_string(),
            "missing length validation range"
        );
        assert_eq!(
            ConfigError::UnknownType("datetime".into()).to_string(),
            "no caster registered for type 'datetime'"
        );
        assert_eq!(
            ConfigError::DuplicateField("name".into()).to_string(),
            "duplicate field 'name' in schema"
        );
    }
}
