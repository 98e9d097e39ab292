//! Error types for the share text library.

use thiserror::Error;

use crate::models::ChoiceField;

/// Comprehensive error type for all share text operations.
#[derive(Error, Debug)]
pub enum ShareError {
    /// The template could not be found or failed to evaluate
    #[error("Failed to process template '{name}'")]
    Template {
        name: String,
        #[source]
        source: TemplateError,
    },
    /// An enumerated code has no known title
    #[error("No {field} choice with code {code}")]
    UnknownChoice { field: ChoiceField, code: i32 },
    /// Date/time formatting errors
    #[error("Date format error: {message}")]
    DateFormat {
        message: String,
        #[source]
        source: jiff::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Failures raised by a template engine while producing output.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// No template is registered under the requested name
    #[error("Template '{name}' not found")]
    NotFound { name: String },
    /// The context lacks a key the template reads
    #[error("Missing context key '{key}'")]
    MissingKey { key: String },
    /// A context value has the wrong shape for its use in the template
    #[error("Context key '{key}' is not a {expected}")]
    InvalidValue { key: String, expected: &'static str },
    /// Writing the output failed
    #[error("Failed to write template output")]
    Write(#[from] std::fmt::Error),
}

/// Builder for creating template errors with the template name attached.
pub struct TemplateErrorBuilder {
    name: String,
}

impl TemplateErrorBuilder {
    /// Create a new template error builder for a template name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: TemplateError) -> ShareError {
        ShareError::Template {
            name: self.name,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ShareError {
        ShareError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ShareError {
    /// Creates a builder for template errors.
    pub fn template(name: impl Into<String>) -> TemplateErrorBuilder {
        TemplateErrorBuilder::new(name)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Extension trait for mapping `jiff` failures into [`ShareError`].
pub trait DateResultExt<T> {
    /// Map date/time errors with a message.
    fn date_context(self, message: &str) -> Result<T>;
}

impl<T> DateResultExt<T> for std::result::Result<T, jiff::Error> {
    fn date_context(self, message: &str) -> Result<T> {
        self.map_err(|source| ShareError::DateFormat {
            message: message.to_string(),
            source,
        })
    }
}

/// Result type alias for share text operations
pub type Result<T> = std::result::Result<T, ShareError>;
