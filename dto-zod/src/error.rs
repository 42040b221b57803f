//! Error types for type resolution.
//!
//! Resolution failures are always scoped to a single field. The synthesizer
//! recovers from them locally, so none of these variants abort a run.

use thiserror::Error;

/// Result type alias for resolution operations.
pub type ResolveResult<T> = Result<T, UnsupportedTypeError>;

/// A field's type shape cannot be mapped to a schema expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnsupportedTypeError {
    /// A collection whose element is itself a collection.
    #[error("recursive collection not supported: {element}")]
    RecursiveCollection { element: String },

    /// A generic signature the element name could not be extracted from.
    #[error("could not find simple type name in '{signature}': {reason}")]
    MalformedGenericSignature { signature: String, reason: String },

    /// A collection field without element type information.
    #[error("collection type '{declared}' has no element type")]
    MissingElementType { declared: String },

    /// A type name that cannot be used as a schema identifier.
    #[error("type name '{name}' is not a valid identifier")]
    InvalidTypeName { name: String },
}

impl UnsupportedTypeError {
    /// Create a recursive collection error.
    pub fn recursive(element: impl Into<String>) -> Self {
        Self::RecursiveCollection {
            element: element.into(),
        }
    }

    /// Create a malformed signature error.
    pub fn malformed(signature: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedGenericSignature {
            signature: signature.into(),
            reason: reason.into(),
        }
    }
}
