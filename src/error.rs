// ⚠️ Error Taxonomy
// Every setter is the only gate for its invariant, so every failure is one of these.

use thiserror::Error;

/// Errors raised by model accessors.
///
/// Errors are returned at the point of violation; the model is left
/// exactly as it was before the failed call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Input had the wrong shape (e.g. a birth year that is not an integer)
    #[error("{field} must be {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: String,
    },

    /// Input had the right shape but violates the field's invariant
    #[error("{message}")]
    OutOfRange { field: String, message: String },

    /// Full name did not split into exactly a first and last name
    #[error("Full name must be \"<first> <last>\" separated by a single space, got {0:?}")]
    MalformedName(String),

    /// Dynamic lookup of an attribute that was never set
    #[error("'{class}' object has no attribute '{attribute}'")]
    MissingAttribute { class: String, attribute: String },
}

impl ModelError {
    pub fn out_of_range(field: &str, message: impl Into<String>) -> Self {
        ModelError::OutOfRange {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Field the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            ModelError::TypeMismatch { field, .. } | ModelError::OutOfRange { field, .. } => {
                Some(field.as_str())
            }
            ModelError::MalformedName(_) => Some("full_name"),
            ModelError::MissingAttribute { attribute, .. } => Some(attribute.as_str()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
