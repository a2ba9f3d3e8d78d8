//! Typed errors for the form engine

use thiserror::Error;

/// Errors raised by the form engine.
///
/// Every variant is a programmer error: the caller (or a form definition)
/// referenced a field that was never registered. These are contract
/// violations, not user-input problems, and should be treated as fatal by
/// the caller rather than retried. Failing validators are ordinary data
/// (`FormField::error`), never an `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// No field with this name is registered on the form
    #[error("no form field exists on the form named {0}")]
    UnknownField(String),
    /// A field declares the match-field rule but names no target
    #[error("form field {0} declares a match rule but has no match target")]
    MissingMatchTarget(String),
}

/// Result alias for fallible form operations
pub type Result<T> = std::result::Result<T, FormError>;
