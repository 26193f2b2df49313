//! Validator outcome types.

use thiserror::Error;

use crate::errors::ConfigError;
use crate::message::Rendered;

/// A validator failure.
///
/// `Unmet` is the recoverable outcome: the constraint did not hold and the
/// payload is the resolved message. `Config` is fatal: the validator itself
/// was misconfigured, and the whole cast call must abort.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0}")]
    Unmet(Rendered),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ValidationError {
    /// Returns true for a fatal misconfiguration.
    pub fn is_config(&self) -> bool {
        matches!(self, ValidationError::Config(_))
    }

    /// Borrows the resolved message, if this is a recoverable failure.
    pub fn rendered(&self) -> Option<&Rendered> {
        match self {
            ValidationError::Unmet(rendered) => Some(rendered),
            ValidationError::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmet_displays_message() {
        let err = ValidationError::Unmet(Rendered::Text("must be present".into()));
        assert_eq!(err.to_string(), "must be present");
        assert!(!err.is_config());
    }

    #[test]
    fn test_config_error_passes_through() {
        let err = ValidationError::from(ConfigError::MissingLengthBounds);
        assert!(err.is_config());
        assert!(err.rendered().is_none());
        assert_eq!(err.to_string(), "missing length validation range");
    }
}
