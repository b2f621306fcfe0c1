/*
 * error.rs
 * Copyright (c) 2025 The Veneer Authors
 */

//! Error types for decoration.

use thiserror::Error;
use veneer_markup::TemplateMode;

/// Errors that can occur while decorating a template.
///
/// Configuration errors describe mistakes in the templates themselves and
/// abort the render. Collaborator failures (template loading, expression
/// parsing and evaluation) pass through unchanged as
/// [`DecorateError::External`].
#[derive(Debug, Error)]
pub enum DecorateError {
    /// The content template's root element does not match the element
    /// carrying the decoration attribute.
    #[error("Root element mismatch for {attribute}: {details}")]
    RootMismatch { attribute: String, details: String },

    /// Decoration understands HTML and XML templates only.
    #[error(
        "Unsupported template mode {mode} for layout {name}: decoration requires an HTML or XML template"
    )]
    UnsupportedTemplateMode { mode: TemplateMode, name: String },

    /// Decoration parameters must be written as name=value pairs.
    #[error("Parameters for {attribute} must be named")]
    SyntheticParameters { attribute: String },

    /// Failure raised by a collaborator, passed through unchanged.
    #[error(transparent)]
    External(#[from] anyhow::Error),
}

impl DecorateError {
    /// True for template-author mistakes, false for propagated collaborator
    /// failures.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, DecorateError::External(_))
    }
}

/// Result type for decoration operations.
pub type DecorateResult<T> = Result<T, DecorateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_attribute() {
        let err = DecorateError::SyntheticParameters {
            attribute: "layout:decorate".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Parameters for layout:decorate must be named"
        );
    }

    #[test]
    fn test_unsupported_mode_display() {
        let err = DecorateError::UnsupportedTemplateMode {
            mode: TemplateMode::Text,
            name: "mail".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported template mode TEXT for layout mail: decoration requires an HTML or XML template"
        );
    }

    #[test]
    fn test_external_errors_are_not_configuration() {
        let err = DecorateError::from(anyhow::anyhow!("loader exploded"));
        assert!(!err.is_configuration());
        assert_eq!(err.to_string(), "loader exploded");

        let err = DecorateError::RootMismatch {
            attribute: "layout:decorate".to_string(),
            details: "x".to_string(),
        };
        assert!(err.is_configuration());
    }
}
